//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리하며,
//! `main`에서 한 번 읽어 각 컴포넌트에 명시적으로 전달합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 데이터베이스, 작업 큐, 서버, 환경 관련 설정
//! - [`auth_config`] - JWT, 이메일 인증 코드, 메일 발송 관련 설정
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//!
//! # 저장소
//! export DATABASE_URL="sqlite://blog_identity.db?mode=rwc"
//! export REDIS_URL="redis://localhost:6379"
//!
//! # JWT 설정 (없으면 로그인만 실패)
//! export JWT_SECRET="your-super-secret-key"
//!
//! # 보안 설정
//! export ENVIRONMENT="production"  # development, test, staging, production
//! export BCRYPT_COST="12"          # 4-15 범위
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;
