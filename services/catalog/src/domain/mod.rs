//! 领域层
//!
//! 商品实体与仓储接口

pub mod product;
pub mod repository;

pub use product::*;
pub use repository::*;
