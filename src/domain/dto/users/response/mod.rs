//! # 사용자 관련 응답 DTO 모듈

pub mod account_response;

pub use account_response::{AccountResponse, ApiResponse, LoginResponse, SignUpResponse};
