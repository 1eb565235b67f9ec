//! HTTP 服务器启动

use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::info;
use vend_errors::{AppError, AppResult};

use crate::shutdown_signal;

/// 启动 HTTP 服务并在收到关闭信号后优雅退出
pub async fn serve(app: Router, host: &str, port: u16) -> AppResult<()> {
    let addr: SocketAddr = format!("{}:{}", host, port)
        .parse()
        .map_err(|e| AppError::internal(format!("Invalid listen address: {}", e)))?;

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind {}: {}", addr, e)))?;

    info!(%addr, "HTTP server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))
}
