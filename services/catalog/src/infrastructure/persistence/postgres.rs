//! PostgreSQL 商品仓储实现

use async_trait::async_trait;
use sqlx::PgPool;
use vend_errors::{AppError, AppResult};
use vend_ports::CrudRepository;

use crate::domain::{NewProduct, Product, ProductId, ProductPatch};

/// 商品行
#[derive(Debug, sqlx::FromRow)]
struct ProductRow {
    id: i64,
    title: String,
    description: String,
    price: f64,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId(row.id),
            title: row.title,
            description: row.description,
            price: row.price,
        }
    }
}

pub struct PostgresProductRepository {
    pool: PgPool,
}

impl PostgresProductRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CrudRepository for PostgresProductRepository {
    type Entity = Product;
    type EntityId = ProductId;
    type NewEntity = NewProduct;
    type Patch = ProductPatch;

    async fn insert(&self, new: NewProduct) -> AppResult<Product> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            INSERT INTO products (title, description, price)
            VALUES ($1, $2, $3)
            RETURNING id, title, description, price
            "#,
        )
        .bind(&new.title)
        .bind(&new.description)
        .bind(new.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to insert product: {}", e)))?;

        Ok(row.into())
    }

    async fn list(&self) -> AppResult<Vec<Product>> {
        let rows = sqlx::query_as::<_, ProductRow>(
            "SELECT id, title, description, price FROM products ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to list products: {}", e)))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: &ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            "SELECT id, title, description, price FROM products WHERE id = $1",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to find product: {}", e)))?;

        Ok(row.map(Into::into))
    }

    async fn update(&self, id: &ProductId, patch: ProductPatch) -> AppResult<Option<Product>> {
        // 缺省字段用 COALESCE 保持原值；不存在的行 fetch_optional 得 None
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            UPDATE products
            SET title = COALESCE($2, title),
                description = COALESCE($3, description),
                price = COALESCE($4, price)
            WHERE id = $1
            RETURNING id, title, description, price
            "#,
        )
        .bind(id.0)
        .bind(patch.title)
        .bind(patch.description)
        .bind(patch.price)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to update product: {}", e)))?;

        Ok(row.map(Into::into))
    }

    async fn delete(&self, id: &ProductId) -> AppResult<Option<Product>> {
        let row = sqlx::query_as::<_, ProductRow>(
            r#"
            DELETE FROM products
            WHERE id = $1
            RETURNING id, title, description, price
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to delete product: {}", e)))?;

        Ok(row.map(Into::into))
    }
}
