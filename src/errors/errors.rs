//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 신원(identity) 생명주기 엔진을 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 에러는 안정적인 기계 판독용 종류(`kind`)와 사람이 읽을 수 있는 메시지를 가집니다.
//! 인프라 계층의 내부 원인은 외부로 그대로 노출되지 않습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::errors::AppError;
//!
//! async fn login(email: &str) -> Result<Account, AppError> {
//!     let account = account_repo.find_by_email(email).await?
//!         .ok_or(AppError::AccountNotFound)?;
//!     Ok(account)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 저장소 고유의 에러 코드(드라이버별 unique 위반 등)는 이 열거형으로 변환된 뒤에만
/// 상위 계층으로 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 이미 사용 중인 이메일 (409 Conflict)
    #[error("Email already registered: {0}")]
    DuplicateEmail(String),

    /// 계정 없음 (404 Not Found)
    #[error("Account not found")]
    AccountNotFound,

    /// 비밀번호 불일치 (401 Unauthorized)
    #[error("Incorrect email or password")]
    InvalidCredentials,

    /// 일치하는 사용 가능한 인증 코드 없음 (404 Not Found)
    #[error("Verification code not found")]
    CodeNotFound,

    /// 만료된 인증 코드 (410 Gone)
    #[error("Verification code has expired")]
    CodeExpired,

    /// 비밀번호 해싱 실패 (500 Internal Server Error)
    #[error("Credential error: {0}")]
    CredentialError(String),

    /// 토큰 서명 실패 또는 서명 키 없음 (500 Internal Server Error)
    #[error("Signing error: {0}")]
    SigningError(String),

    /// 유효하지 않거나 만료된 토큰 (401 Unauthorized)
    #[error("Invalid token: {0}")]
    InvalidToken(String),

    /// 영속성 계층 실패, 디스패치 훅 실패 및 트랜잭션 롤백 원인 (500 Internal Server Error)
    #[error("Store error: {0}")]
    StoreError(String),

    /// 작업 큐 / 이메일 전송 실패 (500 Internal Server Error)
    #[error("Delivery error: {0}")]
    DeliveryError(String),
}

impl AppError {
    /// 안정적인 기계 판독용 에러 종류
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "validation_error",
            AppError::DuplicateEmail(_) => "duplicate_email",
            AppError::AccountNotFound => "account_not_found",
            AppError::InvalidCredentials => "invalid_credentials",
            AppError::CodeNotFound => "code_not_found",
            AppError::CodeExpired => "code_expired",
            AppError::CredentialError(_) => "credential_error",
            AppError::SigningError(_) => "signing_error",
            AppError::InvalidToken(_) => "invalid_token",
            AppError::StoreError(_) => "store_error",
            AppError::DeliveryError(_) => "delivery_error",
        }
    }

    /// 클라이언트에게 전달해도 안전한 메시지
    ///
    /// 인프라 계층 에러는 내부 원인을 숨기고 일반 메시지만 반환합니다.
    pub fn public_message(&self) -> String {
        match self {
            AppError::CredentialError(_)
            | AppError::SigningError(_)
            | AppError::StoreError(_)
            | AppError::DeliveryError(_) => "server error".to_string(),
            AppError::DuplicateEmail(_) => "Email is already registered".to_string(),
            AppError::InvalidToken(_) => "Invalid or expired token".to_string(),
            other => other.to_string(),
        }
    }

    /// HTTP 상태 코드 매핑
    pub fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DuplicateEmail(_) => StatusCode::CONFLICT,
            AppError::AccountNotFound | AppError::CodeNotFound => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials | AppError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AppError::CodeExpired => StatusCode::GONE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        AppError::status_code(self)
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("요청 처리 실패 [{}]: {}", self.kind(), self);
        }

        actix_web::HttpResponse::build(AppError::status_code(self))
            .json(serde_json::json!({
                "success": false,
                "error": self.kind(),
                "message": self.public_message(),
            }))
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::StoreError(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::ValidationError(e.to_string())
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::StoreError(format!("{}: {}", msg, e)))
    }
}
