//! # Authentication Configuration Module
//!
//! 세션 토큰(JWT), 이메일 인증 코드, 인증 메일 발송 관련 설정을 관리하는 모듈입니다.
//!
//! ## 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_TTL_MINUTES="5"
//! ```
//!
//! ### 이메일 인증 설정
//! ```bash
//! export VERIFICATION_CODE_TTL_MINUTES="15"
//! export VERIFICATION_CODE_LENGTH="48"
//! export VERIFICATION_LINK_BASE_URL="https://blog.example.com/v1/api/verify-email"
//! ```
//!
//! ### 메일 API 설정
//! ```bash
//! export MAIL_API_URL="https://api.brevo.com/v3/smtp/email"
//! export MAIL_API_KEY="xkeysib-..."
//! export MAIL_SENDER_EMAIL="no-reply@blog.example.com"
//! export MAIL_SENDER_NAME="Blog"
//! ```

use std::env;

/// 인증 코드 최소 길이 (문자 수)
pub const MIN_VERIFICATION_CODE_LENGTH: usize = 32;

/// JWT 세션 토큰 설정
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 비밀키가 없으면 `None`을 반환합니다. 이 경우 로그인 경로만 `SigningError`로
    /// 실패하고 회원가입/이메일 인증은 계속 동작합니다.
    pub fn secret() -> Option<String> {
        env::var("JWT_SECRET")
            .ok()
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    }

    /// 세션 토큰 유효 시간 (분, 기본값 5)
    pub fn ttl_minutes() -> i64 {
        env::var("JWT_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(5)
    }
}

/// 이메일 인증 코드 설정
pub struct VerificationConfig;

impl VerificationConfig {
    /// 인증 코드 유효 시간 (분, 기본값 15)
    pub fn code_ttl_minutes() -> i64 {
        env::var("VERIFICATION_CODE_TTL_MINUTES")
            .ok()
            .and_then(|v| v.parse::<i64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(15)
    }

    /// 인증 코드 길이 (기본값 48, 최소 32)
    pub fn code_length() -> usize {
        env::var("VERIFICATION_CODE_LENGTH")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(48)
            .max(MIN_VERIFICATION_CODE_LENGTH)
    }

    /// 인증 메일에 들어갈 링크의 기본 URL
    pub fn link_base_url() -> String {
        env::var("VERIFICATION_LINK_BASE_URL")
            .unwrap_or_else(|_| "http://localhost:8080/v1/api/verify-email".to_string())
    }
}

/// 트랜잭셔널 메일 API 설정
pub struct MailConfig;

impl MailConfig {
    pub fn api_url() -> String {
        env::var("MAIL_API_URL").unwrap_or_else(|_| "https://api.brevo.com/v3/smtp/email".to_string())
    }

    pub fn api_key() -> Option<String> {
        non_empty_var("MAIL_API_KEY")
    }

    pub fn sender_email() -> Option<String> {
        non_empty_var("MAIL_SENDER_EMAIL")
    }

    pub fn sender_name() -> Option<String> {
        non_empty_var("MAIL_SENDER_NAME")
    }

    /// API 키와 발신 주소가 모두 설정되었는지 확인합니다.
    pub fn is_configured() -> bool {
        Self::api_key().is_some() && Self::sender_email().is_some()
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_ttl_default() {
        if env::var("JWT_TTL_MINUTES").is_err() {
            assert_eq!(JwtConfig::ttl_minutes(), 5);
        }
    }

    #[test]
    fn test_verification_defaults() {
        if env::var("VERIFICATION_CODE_TTL_MINUTES").is_err() {
            assert_eq!(VerificationConfig::code_ttl_minutes(), 15);
        }
        assert!(VerificationConfig::code_length() >= MIN_VERIFICATION_CODE_LENGTH);
    }

    #[test]
    fn test_unset_variable_is_none() {
        assert_eq!(non_empty_var("BLOG_IDENTITY_SURELY_UNSET_VARIABLE"), None);
    }
}
