//! # Repository Layer
//!
//! 관계형 저장소 접근을 담당합니다. 모든 다중 문장 작업은 하나의 트랜잭션 안에서
//! 실행되며 `Database`의 데드라인에 묶입니다.
//!
//! - [`users`] - 계정 + 프로필 원자적 생성, 조회
//! - [`verification`] - 인증 코드 기록과 1회 소비

pub mod users;
pub mod verification;
