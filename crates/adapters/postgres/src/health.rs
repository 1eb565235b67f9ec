//! PostgreSQL 健康检查模块
//!
//! 提供连接池级别的健康检查

use sqlx::PgPool;
use tracing::debug;

use crate::check_connection;

/// 连接池状态快照
#[derive(Debug, Clone)]
pub struct PoolStatus {
    /// 连接池大小
    pub size: u32,
    /// 空闲连接数
    pub idle: u32,
    /// 活跃连接数
    pub active: u32,
}

/// 健康检查结果
#[derive(Debug, Clone)]
pub struct HealthCheckResult {
    pub healthy: bool,
    /// 探测延迟（毫秒）
    pub latency_ms: u64,
    pub error: Option<String>,
    pub pool_status: PoolStatus,
}

/// 获取连接池状态
pub fn pool_status(pool: &PgPool) -> PoolStatus {
    let size = pool.size();
    let idle = pool.num_idle() as u32;
    PoolStatus {
        size,
        idle,
        active: size.saturating_sub(idle),
    }
}

/// 执行一次健康探测
pub async fn check_health(pool: &PgPool) -> HealthCheckResult {
    let start = std::time::Instant::now();
    let probe = check_connection(pool).await;
    let latency_ms = start.elapsed().as_millis() as u64;

    let status = pool_status(pool);
    debug!(
        latency_ms,
        pool_size = status.size,
        pool_idle = status.idle,
        "database health probe"
    );

    match probe {
        Ok(()) => HealthCheckResult {
            healthy: true,
            latency_ms,
            error: None,
            pool_status: status,
        },
        Err(e) => HealthCheckResult {
            healthy: false,
            latency_ms,
            error: Some(e.to_string()),
            pool_status: status,
        },
    }
}
