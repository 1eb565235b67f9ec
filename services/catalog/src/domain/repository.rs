//! 商品仓储接口

use vend_ports::CrudRepository;

use super::product::{NewProduct, Product, ProductId, ProductPatch};

/// 商品仓储
///
/// 把通用 CRUD 契约的关联类型固定到商品资源上；
/// 任何满足约束的实现自动获得本 trait，可直接作为 trait 对象注入。
pub trait ProductRepository:
    CrudRepository<Entity = Product, EntityId = ProductId, NewEntity = NewProduct, Patch = ProductPatch>
{
}

impl<T> ProductRepository for T where
    T: CrudRepository<
            Entity = Product,
            EntityId = ProductId,
            NewEntity = NewProduct,
            Patch = ProductPatch,
        >
{
}
