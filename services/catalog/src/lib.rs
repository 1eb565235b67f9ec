//! Service library

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;

/// 嵌入式数据库迁移
pub static MIGRATOR: sqlx::migrate::Migrator = sqlx::migrate!("./migrations");
