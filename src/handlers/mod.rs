//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 서비스 호출로 옮기는 얇은 계층입니다.
//! 에러는 `AppError`의 `ResponseError` 구현이 상태 코드와 JSON 본문으로 변환합니다.
//!
//! ```text
//! Handlers (이 모듈)  ← Web Layer
//!   └─ IdentityService ← Service Layer
//!        └─ Repositories ← Repository Layer
//! ```
//!
//! - **`auth`**: 로그인, 현재 계정
//! - **`users`**: 회원가입, 이메일 인증, 인증 메일 재발송

pub mod users;
pub mod auth;
