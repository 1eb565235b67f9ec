//! 路由表

use axum::routing::get;
use axum::{Router, middleware};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::auth::require_admin_for_mutations;
use super::handlers;
use super::state::AppState;

/// 构建服务路由
///
/// 商品路由统一挂载管理员门禁（读方法在中间件内放行），
/// 系统端点不经过门禁。
pub fn api_router(state: AppState) -> Router {
    let products = Router::new()
        .route(
            "/api/product",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/api/product/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_admin_for_mutations,
        ));

    let system = Router::new()
        .route("/health", get(handlers::health))
        .route("/ready", get(handlers::ready));

    products
        .merge(system)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// /metrics 路由（Prometheus 文本格式）
pub fn metrics_router(handle: PrometheusHandle) -> Router {
    Router::new().route("/metrics", get(move || std::future::ready(handle.render())))
}
