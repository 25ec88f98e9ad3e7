//! # Service Layer
//!
//! - [`auth`] - 비밀번호 해시, 세션 토큰
//! - [`verification`] - 인증 코드 발급/소비
//! - [`users`] - 회원가입, 로그인, 이메일 인증 오케스트레이션
//!
//! 모든 서비스는 `main`에서 명시적으로 생성되어 `Arc`로 주입됩니다.

pub mod auth;
pub mod verification;
pub mod users;
