//! ports - 抽象 trait 层
//!
//! 定义领域与基础设施之间的抽象接口

mod entity;
mod repository;

pub use entity::*;
pub use repository::*;
