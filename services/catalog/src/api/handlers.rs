//! 商品 REST 处理器
//!
//! 控制器层：请求形状校验、调用服务、状态码映射。
//! 认证门禁在路由层以中间件挂载，见 `routes.rs`。

use axum::Json;
use axum::extract::{Path, State};
use metrics::counter;
use serde::{Deserialize, Serialize};
use tracing::info;
use vend_errors::{AppError, AppResult};
use vend_telemetry::HealthStatus;

use crate::domain::{NewProduct, Product, ProductId, ProductPatch};

use super::auth::AuthClaims;
use super::extract::ApiJson;
use super::state::AppState;

/// 创建商品请求
#[derive(Debug, Deserialize)]
pub struct CreateProductRequest {
    pub title: String,
    pub description: String,
    pub price: f64,
}

/// 更新商品请求（部分字段）
#[derive(Debug, Default, Deserialize)]
pub struct UpdateProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
}

/// POST /api/product
pub async fn create_product(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    ApiJson(request): ApiJson<CreateProductRequest>,
) -> AppResult<Json<Product>> {
    info!(subject = %claims.sub, title = %request.title, "creating product");

    let product = state
        .products
        .create(NewProduct {
            title: request.title,
            description: request.description,
            price: request.price,
        })
        .await?;

    counter!("catalog_products_created_total").increment(1);
    Ok(Json(product))
}

/// GET /api/product
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = state.products.get_all().await?;
    Ok(Json(products))
}

/// GET /api/product/{id}
///
/// 未知 ID（含负数）一律 404，不区分「非法」与「不存在」。
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> AppResult<Json<Product>> {
    let id = ProductId(id);
    let product = state
        .products
        .get_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("product {} not found", id)))?;
    Ok(Json(product))
}

/// PUT /api/product/{id}
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AuthClaims(claims): AuthClaims,
    ApiJson(request): ApiJson<UpdateProductRequest>,
) -> AppResult<Json<Product>> {
    let id = ProductId(id);
    info!(subject = %claims.sub, %id, "updating product");

    let product = state
        .products
        .update(
            &id,
            ProductPatch {
                title: request.title,
                description: request.description,
                price: request.price,
            },
        )
        .await?;

    counter!("catalog_products_updated_total").increment(1);
    Ok(Json(product))
}

/// DELETE /api/product/{id}
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    AuthClaims(claims): AuthClaims,
) -> AppResult<Json<Product>> {
    let id = ProductId(id);
    info!(subject = %claims.sub, %id, "deleting product");

    let product = state.products.delete(&id).await?;

    counter!("catalog_products_deleted_total").increment(1);
    Ok(Json(product))
}

/// 存活探测响应
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// GET /health
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "vend-catalog",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// GET /ready
///
/// 聚合各组件检查结果；内存仓储运行时没有外部依赖可探测。
pub async fn ready(State(state): State<AppState>) -> Json<HealthStatus> {
    let mut status = HealthStatus::new();

    match &state.pool {
        Some(pool) => {
            let result = vend_adapter_postgres::check_health(pool).await;
            status.add_check("database", result.healthy, result.error);
        }
        None => {
            status.add_check("database", true, Some("in-memory store".to_string()));
        }
    }

    Json(status)
}
