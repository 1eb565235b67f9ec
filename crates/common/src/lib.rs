//! common - 通用类型定义

pub mod types;

pub use types::*;
