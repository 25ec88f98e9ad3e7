//! 계정 흐름 오케스트레이션

pub mod identity_service;

pub use identity_service::IdentityService;
