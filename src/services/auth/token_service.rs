//! JWT 세션 토큰 서비스 구현
//!
//! 짧은 수명의 HS256 토큰을 발급하고 검증합니다.
//! 서버는 토큰을 저장하지 않으므로 만료가 유일한 무효화 수단입니다.

use std::sync::Arc;

use chrono::Duration;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::core::clock::Clock;
use crate::domain::models::token::{IssuedToken, TokenClaims};
use crate::errors::errors::{AppError, AppResult};

pub struct TokenService {
    /// 서명 비밀키. 없으면 발급이 `SigningError`로 실패합니다.
    secret: Option<String>,
    clock: Arc<dyn Clock>,
}

impl TokenService {
    pub fn new(secret: Option<String>, clock: Arc<dyn Clock>) -> Self {
        Self { secret, clock }
    }

    fn secret(&self) -> AppResult<&str> {
        self.secret
            .as_deref()
            .ok_or_else(|| AppError::SigningError("signing key is not configured".to_string()))
    }

    /// 계정 ID와 만료 시각을 담은 서명 토큰을 생성합니다.
    ///
    /// `expires_at = issued_at + ttl`
    pub fn create_token(&self, account_id: i64, ttl: Duration) -> AppResult<IssuedToken> {
        let secret = self.secret()?;
        let issued_at = self.clock.now();
        let expires_at = issued_at + ttl;

        let claims = TokenClaims {
            sub: account_id.to_string(),
            account_id,
            iat: issued_at.timestamp(),
            exp: expires_at.timestamp(),
        };

        let token = encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .map_err(|e| AppError::SigningError(format!("JWT 토큰 생성 실패: {}", e)))?;

        Ok(IssuedToken {
            token,
            issued_at,
            expires_at,
        })
    }

    /// 서명이 맞고 `now < exp`일 때만 클레임을 반환합니다.
    ///
    /// 만료 판정은 주입된 시계로 하며 허용 오차(leeway)는 없습니다.
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let secret = self.secret()?;

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;

        let claims = decode::<TokenClaims>(token, &DecodingKey::from_secret(secret.as_bytes()), &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::InvalidToken(e.to_string()))?;

        if self.clock.now().timestamp() >= claims.exp {
            return Err(AppError::InvalidToken("token expired".to_string()));
        }

        Ok(claims)
    }

    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| AppError::InvalidToken("malformed authorization header".to_string()))
    }
}
