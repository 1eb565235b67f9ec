//! vend-auth-core - 认证核心库
//!
//! JWT 验签与角色授权。令牌由外部身份服务签发，本库只负责
//! 验证与授权判定。

use chrono::{Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vend_common::{Role, UserId};
use vend_errors::{AppError, AppResult};

/// JWT Claims
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// Expiration time
    pub exp: i64,
    /// Issued at
    pub iat: i64,
    /// JWT ID
    pub jti: String,
    /// Issuer
    #[serde(default)]
    pub iss: String,
    /// Audience
    #[serde(default)]
    pub aud: String,
    /// Roles
    #[serde(default)]
    pub roles: Vec<String>,
}

impl Claims {
    pub fn new(
        user_id: &UserId,
        roles: Vec<String>,
        expires_in_secs: i64,
        issuer: &str,
        audience: &str,
    ) -> Self {
        let now = Utc::now();
        Self {
            sub: user_id.0.to_string(),
            exp: (now + Duration::seconds(expires_in_secs)).timestamp(),
            iat: now.timestamp(),
            jti: Uuid::now_v7().to_string(),
            iss: issuer.to_string(),
            aud: audience.to_string(),
            roles,
        }
    }

    pub fn user_id(&self) -> AppResult<UserId> {
        Uuid::parse_str(&self.sub)
            .map(UserId::from_uuid)
            .map_err(|_| AppError::unauthenticated("Invalid user ID in token"))
    }

    pub fn has_role(&self, role: &str) -> bool {
        self.roles.contains(&role.to_string())
    }
}

/// 授权判定
///
/// 纯函数：传入已验证的 Claims 与所需角色，返回判定结果。
/// 角色不足映射为 `Unauthorized`（401），与认证失败（403）区分开。
pub fn authorize(claims: &Claims, role: Role) -> AppResult<()> {
    if claims.has_role(role.as_str()) {
        Ok(())
    } else {
        Err(AppError::unauthorized(format!("Missing role: {}", role)))
    }
}

/// Token 服务
///
/// 持有验签配置；`generate_token` 仅供测试与运维工具铸造令牌，
/// 生产签发在身份服务侧。
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    expires_in: i64,
    issuer: String,
    audience: String,
}

impl TokenService {
    pub fn new(secret: &str, expires_in: i64, issuer: String, audience: String) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            expires_in,
            issuer,
            audience,
        }
    }

    /// 生成令牌
    pub fn generate_token(&self, user_id: &UserId, roles: Vec<String>) -> AppResult<String> {
        let claims = Claims::new(
            user_id,
            roles,
            self.expires_in,
            &self.issuer,
            &self.audience,
        );

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))
    }

    /// 验证令牌
    ///
    /// 校验签名、过期时间、签发方与受众。任何失败都视为未认证。
    pub fn validate_token(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[&self.issuer]);
        validation.set_audience(&[&self.audience]);
        validation.validate_exp = true;
        validation.validate_nbf = false;
        validation.leeway = 0; // 不允许时间偏差

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation)
            .map_err(|e| AppError::unauthenticated(format!("Invalid token: {}", e)))?;

        let claims = token_data.claims;

        // 额外验证：检查 JTI 存在
        if claims.jti.is_empty() {
            return Err(AppError::unauthenticated("Token ID (jti) missing"));
        }

        Ok(claims)
    }

    /// 获取令牌过期时间（秒）
    pub fn expires_in(&self) -> i64 {
        self.expires_in
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_service() -> TokenService {
        TokenService::new(
            "test-secret-key",
            3600,
            "vend-identity".to_string(),
            "vend-api".to_string(),
        )
    }

    #[test]
    fn test_token_roundtrip() {
        let service = token_service();
        let user_id = UserId::new();

        let token = service
            .generate_token(&user_id, vec!["admin".to_string()])
            .unwrap();
        let claims = service.validate_token(&token).unwrap();

        assert_eq!(claims.user_id().unwrap(), user_id);
        assert!(claims.has_role("admin"));
        assert!(!claims.has_role("user"));
        assert_eq!(claims.iss, "vend-identity");
        assert_eq!(claims.aud, "vend-api");
    }

    #[test]
    fn test_expired_token_rejected() {
        let service = TokenService::new(
            "test-secret-key",
            -60,
            "vend-identity".to_string(),
            "vend-api".to_string(),
        );
        let token = service
            .generate_token(&UserId::new(), vec!["admin".to_string()])
            .unwrap();

        let result = service.validate_token(&token);
        assert!(matches!(result, Err(AppError::Unauthenticated(_))));
    }

    #[test]
    fn test_wrong_secret_rejected() {
        let token = token_service()
            .generate_token(&UserId::new(), vec![])
            .unwrap();

        let other = TokenService::new(
            "another-secret",
            3600,
            "vend-identity".to_string(),
            "vend-api".to_string(),
        );
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_wrong_issuer_rejected() {
        let token = token_service()
            .generate_token(&UserId::new(), vec![])
            .unwrap();

        let other = TokenService::new(
            "test-secret-key",
            3600,
            "someone-else".to_string(),
            "vend-api".to_string(),
        );
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_wrong_audience_rejected() {
        let token = token_service()
            .generate_token(&UserId::new(), vec![])
            .unwrap();

        let other = TokenService::new(
            "test-secret-key",
            3600,
            "vend-identity".to_string(),
            "other-api".to_string(),
        );
        assert!(other.validate_token(&token).is_err());
    }

    #[test]
    fn test_authorize_role_present() {
        let claims = Claims::new(
            &UserId::new(),
            vec!["user".to_string(), "admin".to_string()],
            3600,
            "vend-identity",
            "vend-api",
        );
        assert!(authorize(&claims, Role::Admin).is_ok());
        assert!(authorize(&claims, Role::User).is_ok());
    }

    #[test]
    fn test_authorize_role_missing_is_unauthorized() {
        let claims = Claims::new(
            &UserId::new(),
            vec!["user".to_string()],
            3600,
            "vend-identity",
            "vend-api",
        );
        let result = authorize(&claims, Role::Admin);
        assert!(matches!(result, Err(AppError::Unauthorized(_))));
    }
}
