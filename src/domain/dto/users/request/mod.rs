//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트 JSON/쿼리를 구조화된 타입으로 변환하고 `validator`로 검증합니다.
//! 검증은 핸들러에서 서비스 호출 전에 수행됩니다.

pub mod sign_up_request;
pub mod auth_request;

pub use sign_up_request::SignUpRequest;
pub use auth_request::{LoginRequest, ResendVerificationRequest, VerifyEmailQuery};
