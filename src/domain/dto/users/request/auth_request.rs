//! 인증 요청관련 DTO
//!
//! 로그인과 이메일 인증 요청 정보를 매핑합니다.
use serde::Deserialize;
use validator::Validate;

/// 로컬 로그인 요청 구조체
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,
}

/// 이메일 인증 쿼리 파라미터 (`?email=&secret_code=`)
#[derive(Debug, Deserialize, Validate)]
pub struct VerifyEmailQuery {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    /// 최소 길이는 `MIN_VERIFICATION_CODE_LENGTH`와 같습니다.
    #[validate(length(min = 32, message = "secret_code is malformed"))]
    pub secret_code: String,
}

/// 인증 메일 재발송 요청
#[derive(Debug, Deserialize, Validate)]
pub struct ResendVerificationRequest {
    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_VERIFICATION_CODE_LENGTH;

    #[test]
    fn test_verify_email_query_requires_long_code() {
        let query = VerifyEmailQuery {
            email: "a@x.com".to_string(),
            secret_code: "short".to_string(),
        };
        assert!(query.validate().is_err());

        let query = VerifyEmailQuery {
            email: "a@x.com".to_string(),
            secret_code: "x".repeat(MIN_VERIFICATION_CODE_LENGTH),
        };
        assert!(query.validate().is_ok());
    }

    #[test]
    fn test_login_request_validation() {
        let request = LoginRequest {
            email: "a@x.com".to_string(),
            password: "secret1".to_string(),
        };
        assert!(request.validate().is_ok());

        let request = LoginRequest {
            email: "a@x.com".to_string(),
            password: "".to_string(),
        };
        assert!(request.validate().is_err());
    }
}
