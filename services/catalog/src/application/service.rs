//! 资源服务
//!
//! 对仓储的直通封装：不做业务规则，只统一「记录不存在」的错误语义。

use std::fmt::Display;
use std::sync::Arc;

use tracing::{debug, info};
use vend_errors::{AppError, AppResult};
use vend_ports::CrudRepository;

use crate::domain::ProductRepository;

/// 通用资源服务
///
/// 对任意 `CrudRepository`（含 trait 对象）提供统一的资源操作面。
pub struct ResourceService<R: ?Sized> {
    repo: Arc<R>,
}

impl<R: ?Sized> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

impl<R> ResourceService<R>
where
    R: CrudRepository + ?Sized,
    R::EntityId: Display,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// 创建资源，返回含数据库分配主键的完整记录
    pub async fn create(&self, item: R::NewEntity) -> AppResult<R::Entity> {
        info!("creating record");
        self.repo.insert(item).await
    }

    /// 查询全部
    pub async fn get_all(&self) -> AppResult<Vec<R::Entity>> {
        debug!("listing records");
        self.repo.list().await
    }

    /// 按 ID 查询，不存在返回 `None`
    pub async fn get_by_id(&self, id: &R::EntityId) -> AppResult<Option<R::Entity>> {
        debug!(%id, "fetching record");
        self.repo.find_by_id(id).await
    }

    /// 按补丁更新；记录不存在映射为 `NotFound`
    pub async fn update(&self, id: &R::EntityId, patch: R::Patch) -> AppResult<R::Entity> {
        info!(%id, "updating record");
        self.repo
            .update(id, patch)
            .await?
            .ok_or_else(|| AppError::not_found(format!("record {} not found", id)))
    }

    /// 删除并返回被删记录；记录不存在映射为 `NotFound`
    pub async fn delete(&self, id: &R::EntityId) -> AppResult<R::Entity> {
        info!(%id, "deleting record");
        self.repo
            .delete(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("record {} not found", id)))
    }
}

/// 商品服务
pub type ProductService = ResourceService<dyn ProductRepository>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{NewProduct, ProductId, ProductPatch};
    use crate::infrastructure::persistence::InMemoryProductRepository;

    fn service() -> ProductService {
        ProductService::new(Arc::new(InMemoryProductRepository::new()))
    }

    fn new_product(title: &str) -> NewProduct {
        NewProduct {
            title: title.to_string(),
            description: "test description".to_string(),
            price: 2.0,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let service = service();

        let first = service.create(new_product("first")).await.unwrap();
        let second = service.create(new_product("second")).await.unwrap();

        assert_eq!(first.id, ProductId(1));
        assert_eq!(second.id, ProductId(2));
        assert_eq!(service.get_all().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_get_by_id_absent_is_none() {
        let service = service();
        let found = service.get_by_id(&ProductId(-1)).await.unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn test_update_applies_partial_patch() {
        let service = service();
        let created = service.create(new_product("original")).await.unwrap();

        let updated = service
            .update(
                &created.id,
                ProductPatch {
                    title: Some("New title".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.title, "New title");
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.price, created.price);
    }

    #[tokio::test]
    async fn test_update_with_empty_patch_keeps_record() {
        let service = service();
        let created = service.create(new_product("unchanged")).await.unwrap();

        let updated = service
            .update(&created.id, ProductPatch::default())
            .await
            .unwrap();

        assert_eq!(updated, created);
    }

    #[tokio::test]
    async fn test_update_absent_is_not_found() {
        let service = service();
        let result = service
            .update(&ProductId(-1), ProductPatch::default())
            .await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete_returns_removed_record() {
        let service = service();
        let created = service.create(new_product("doomed")).await.unwrap();

        let deleted = service.delete(&created.id).await.unwrap();
        assert_eq!(deleted, created);
        assert!(service.get_by_id(&created.id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_absent_is_not_found() {
        let service = service();
        let result = service.delete(&ProductId(-1)).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }
}
