//! 인증 서비스
//!
//! - [`password_service`] - bcrypt 해시/검증
//! - [`token_service`] - JWT 세션 토큰 발급/검증

pub mod password_service;
pub mod token_service;

pub use password_service::*;
pub use token_service::*;
