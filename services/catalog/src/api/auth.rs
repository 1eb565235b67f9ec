//! 认证与授权中间件

use axum::extract::{FromRequestParts, Request, State};
use axum::http::{Method, header};
use axum::middleware::Next;
use axum::response::Response;
use tracing::{debug, warn};
use vend_auth_core::{Claims, authorize};
use vend_common::Role;
use vend_errors::AppError;

use super::state::AppState;

/// 认证 Claims 提取器
///
/// 用于在处理器中获取已验证的 Claims，
/// 应该在 require_admin_for_mutations 之后使用。
pub struct AuthClaims(pub Claims);

impl<S> FromRequestParts<S> for AuthClaims
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .map(AuthClaims)
            .ok_or_else(|| AppError::unauthenticated("Missing claims in request extensions"))
    }
}

/// 变更请求的管理员门禁
///
/// 读方法直接放行；变更方法要求携带可验证的 Bearer 令牌且具备
/// admin 角色。认证失败（缺失或无法验证的凭证）返回 403，
/// 角色不足返回 401。门禁先于请求体校验执行。
pub async fn require_admin_for_mutations(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    if is_read_only(request.method()) {
        return Ok(next.run(request).await);
    }

    let token = bearer_token(&request).ok_or_else(|| {
        warn!("missing or malformed authorization header");
        AppError::unauthenticated("Missing bearer token")
    })?;

    let claims = state.tokens.validate_token(token).map_err(|e| {
        warn!(error = %e, "token validation failed");
        e
    })?;

    debug!(subject = %claims.sub, "token validated");
    authorize(&claims, Role::Admin)?;

    // 将 claims 注入到请求扩展中
    let mut request = request;
    request.extensions_mut().insert(claims);
    Ok(next.run(request).await)
}

fn is_read_only(method: &Method) -> bool {
    matches!(method.as_str(), "GET" | "HEAD" | "OPTIONS")
}

fn bearer_token(request: &Request) -> Option<&str> {
    request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
}
