//! 인증 코드 저장소

pub mod verification_repo;

pub use verification_repo::VerificationRepository;
