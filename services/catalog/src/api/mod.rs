//! API 层
//!
//! 控制器、认证中间件与路由表

pub mod auth;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::{api_router, metrics_router};
pub use state::AppState;
