//! 이메일 인증 코드 서비스

pub mod code_generator;
pub mod verification_service;

pub use code_generator::{CodeGenerator, RandomCodeGenerator};
pub use verification_service::VerificationService;
