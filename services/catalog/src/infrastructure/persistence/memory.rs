//! 内存商品仓储
//!
//! 供测试与无数据库的本地运行使用，可观测契约与 PostgreSQL 实现一致。

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;
use vend_errors::AppResult;
use vend_ports::CrudRepository;

use crate::domain::{NewProduct, Product, ProductId, ProductPatch};

pub struct InMemoryProductRepository {
    records: RwLock<BTreeMap<i64, Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(BTreeMap::new()),
            // 与数据库序列一致，从 1 开始
            next_id: AtomicI64::new(1),
        }
    }
}

impl Default for InMemoryProductRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CrudRepository for InMemoryProductRepository {
    type Entity = Product;
    type EntityId = ProductId;
    type NewEntity = NewProduct;
    type Patch = ProductPatch;

    async fn insert(&self, new: NewProduct) -> AppResult<Product> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let product = Product {
            id: ProductId(id),
            title: new.title,
            description: new.description,
            price: new.price,
        };
        self.records.write().await.insert(id, product.clone());
        Ok(product)
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        Ok(self.records.read().await.get(&id.0).cloned())
    }

    async fn update(&self, id: &ProductId, patch: ProductPatch) -> AppResult<Option<Product>> {
        let mut records = self.records.write().await;
        let Some(product) = records.get_mut(&id.0) else {
            return Ok(None);
        };

        if let Some(title) = patch.title {
            product.title = title;
        }
        if let Some(description) = patch.description {
            product.description = description;
        }
        if let Some(price) = patch.price {
            product.price = price;
        }

        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: &ProductId) -> AppResult<Option<Product>> {
        Ok(self.records.write().await.remove(&id.0))
    }
}
