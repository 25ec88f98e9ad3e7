//! 계정 및 프로필 엔티티

pub mod account;

pub use account::*;
