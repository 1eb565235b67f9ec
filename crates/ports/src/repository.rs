//! Repository trait 定义

use async_trait::async_trait;
use vend_errors::AppResult;

use crate::Entity;

/// 通用 CRUD Repository trait
///
/// 关联类型把实体、主键、新建载荷与补丁载荷绑定在一起；
/// 每个资源用一个别名 trait 固定这些类型，即可作为 trait 对象使用。
#[async_trait]
pub trait CrudRepository: Send + Sync {
    type Entity: Entity<Id = Self::EntityId>;
    type EntityId;
    type NewEntity;
    type Patch;

    /// 插入新实体，返回含数据库分配主键的完整记录
    async fn insert(&self, new: Self::NewEntity) -> AppResult<Self::Entity>;

    /// 查询全部记录（无分页、无过滤，顺序不作保证）
    async fn list(&self) -> AppResult<Vec<Self::Entity>>;

    /// 根据 ID 查找
    async fn find_by_id(&self, id: &Self::EntityId) -> AppResult<Option<Self::Entity>>;

    /// 按补丁部分更新，`None` 表示记录不存在
    async fn update(
        &self,
        id: &Self::EntityId,
        patch: Self::Patch,
    ) -> AppResult<Option<Self::Entity>>;

    /// 删除并返回被删记录，`None` 表示记录不存在
    async fn delete(&self, id: &Self::EntityId) -> AppResult<Option<Self::Entity>>;
}
