//! 实体基础 trait

/// 实体 trait
///
/// 持久化实体统一通过 `Id` 关联类型暴露主键。
pub trait Entity {
    type Id;

    fn id(&self) -> &Self::Id;
}
