//! 请求体提取器

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use vend_errors::AppError;

/// 严格 JSON 提取器
///
/// axum 的 `Json` 对形状不符的请求体返回 422/415，本 API 的契约要求
/// 任何请求体问题（字段类型错误、缺失、非法 JSON）一律 400，
/// 且必须发生在任何数据层调用之前。提取失败时处理器不会执行。
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match Json::<T>::from_request(req, state).await {
            Ok(Json(value)) => Ok(Self(value)),
            Err(rejection) => Err(AppError::validation(rejection.body_text())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Router;
    use axum::body::Body;
    use axum::http::{Request as HttpRequest, StatusCode, header};
    use axum::routing::post;
    use serde::Deserialize;
    use tower::ServiceExt;

    #[derive(Deserialize)]
    struct Payload {
        title: String,
        price: f64,
    }

    async fn echo(ApiJson(payload): ApiJson<Payload>) -> String {
        format!("{}:{}", payload.title, payload.price)
    }

    fn app() -> Router {
        Router::new().route("/", post(echo))
    }

    async fn send(body: &str) -> StatusCode {
        let request = HttpRequest::builder()
            .method("POST")
            .uri("/")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap();
        app().oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn test_valid_body_is_accepted() {
        assert_eq!(send(r#"{"title":"ok","price":2}"#).await, StatusCode::OK);
    }

    #[tokio::test]
    async fn test_wrong_field_type_is_bad_request() {
        assert_eq!(
            send(r#"{"title":123,"price":"abc"}"#).await,
            StatusCode::BAD_REQUEST
        );
    }

    #[tokio::test]
    async fn test_missing_field_is_bad_request() {
        assert_eq!(send(r#"{"title":"ok"}"#).await, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_json_is_bad_request() {
        assert_eq!(send("{not json").await, StatusCode::BAD_REQUEST);
    }
}
