//! 계정/프로필 저장소

pub mod account_repo;

pub use account_repo::AccountRepository;
