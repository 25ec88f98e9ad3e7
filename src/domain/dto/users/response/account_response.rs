//! 계정 응답 DTO
//!
//! 응답에는 비밀번호 해시가 절대 포함되지 않습니다.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::users::Account;
use crate::domain::models::token::IssuedToken;

/// 공통 API 응답 래퍼
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

/// 외부에 노출되는 계정 정보
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            first_name: account.first_name,
            last_name: account.last_name,
            email: account.email,
            is_email_verified: account.is_email_verified,
            created_at: account.created_at,
            updated_at: account.updated_at,
        }
    }
}

/// 회원가입 결과
#[derive(Debug, Clone, Serialize)]
pub struct SignUpResponse {
    pub account_id: i64,
}

/// 로그인 결과 (계정 + 세션 토큰)
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub account: AccountResponse,
    pub access_token: String,
    pub token_type: String,
    pub expires_at: DateTime<Utc>,
    /// 남은 유효 시간 (초)
    pub expires_in: i64,
}

impl LoginResponse {
    pub fn new(account: Account, token: IssuedToken) -> Self {
        Self {
            account: AccountResponse::from(account),
            expires_in: (token.expires_at - token.issued_at).num_seconds(),
            access_token: token.token,
            token_type: "Bearer".to_string(),
            expires_at: token.expires_at,
        }
    }
}
