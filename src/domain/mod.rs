//! # Domain Layer
//!
//! - [`entities`] - 저장소 행과 1:1로 대응하는 엔티티
//! - [`dto`] - 요청/응답 데이터 전송 객체
//! - [`models`] - 세션 토큰, 작업 페이로드 같은 값 객체

pub mod entities;
pub mod dto;
pub mod models;
