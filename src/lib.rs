//! 블로그 신원(identity) 서비스 백엔드
//!
//! 계정 생성 트랜잭션, 1회용 이메일 인증 코드, 짧은 수명의 JWT 세션 토큰을 다루는
//! 신원 생명주기 엔진과 그 위의 얇은 HTTP 계층입니다.
//!
//! # Features
//!
//! - **원자적 회원가입**: 계정 + 프로필 + 첫 인증 코드 + 메일 작업 등록이 한 트랜잭션
//! - **이메일 인증**: 15분 TTL, 조건부 UPDATE로 정확히 한 번만 소비
//! - **JWT 인증**: 5분짜리 HS256 Bearer 토큰, 서버 측 세션 없음
//! - **백그라운드 워커**: Redis 큐에서 인증 메일 작업을 꺼내 전송, 실패 시 재시도
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /v1/api/*
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 변환
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐      ┌──────────────────┐
//! │ IdentityService │ ───▶ │  DispatchHook    │ ← 코드 발급 + 작업 등록
//! └─────────────────┘      └──────────────────┘
//!          │                        │
//!          ▼                        ▼
//! ┌─────────────────┐      ┌──────────────────┐
//! │  Repositories   │      │ Redis queue      │ ──▶ TaskProcessor ──▶ EmailSender
//! └─────────────────┘      └──────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ SQLite (sqlx)   │
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! let account_id = identity.sign_up(request).await?;
//! let login = identity.login("a@x.com", "secret1").await?;
//! identity.verify_email("a@x.com", &secret_code).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod dispatch;
pub mod services;
pub mod queue;
pub mod worker;
pub mod mail;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;

#[cfg(test)]
pub mod test_support;
