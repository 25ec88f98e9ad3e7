//! # Domain Models Module
//!
//! 테이블에 저장되지 않는 값 객체들을 정의합니다.
//!
//! - [`token`] - JWT 클레임과 발급 결과
//! - [`tasks`] - 작업 큐로 전달되는 페이로드

pub mod token;
pub mod tasks;
