//! PostgreSQL 迁移管理模块
//!
//! 服务在启动时应用 `migrations/` 目录下的嵌入式迁移，
//! 迁移内容由 sqlx 的 migrator 负责校验与记录。

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;
use vend_errors::{AppError, AppResult};

/// 应用所有待处理的迁移
pub async fn run_migrations(pool: &PgPool, migrator: &Migrator) -> AppResult<()> {
    migrator
        .run(pool)
        .await
        .map_err(|e| AppError::database(format!("Failed to run migrations: {}", e)))?;

    info!(
        migrations = migrator.iter().count(),
        "database migrations applied"
    );
    Ok(())
}
