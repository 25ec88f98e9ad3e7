//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 관계형 저장소의 테이블과 1:1로 대응되며 `sqlx::FromRow`로 매핑됩니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (users, profile, verify_email)
//! ├── models/       ← 토큰 클레임, 작업 페이로드 등 값 객체
//! └── dto/          ← 데이터 전송 객체
//! ```

pub mod users;
pub mod verification;
