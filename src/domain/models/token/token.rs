//! JWT 세션 토큰 클레임과 발급 결과
//!
//! RFC 7519 표준 클레임 중 최소한의 정보만 담습니다.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// ## 클레임 구성
///
/// - `sub`: 토큰의 주체 (계정 ID 문자열)
/// - `account_id`: 계정 ID
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TokenClaims {
    pub sub: String,
    pub account_id: i64,
    pub iat: i64,
    pub exp: i64,
}

/// 발급된 세션 토큰
///
/// 서버는 토큰을 저장하지 않습니다. 만료가 유일한 무효화 수단입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    pub token: String,
    pub issued_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}
