//! 服务状态

use sqlx::PgPool;
use vend_auth_core::TokenService;

use crate::application::ProductService;

/// axum 全局状态
#[derive(Clone)]
pub struct AppState {
    pub products: ProductService,
    pub tokens: TokenService,
    /// 仅用于就绪探测；内存仓储运行时为 None
    pub pool: Option<PgPool>,
}
