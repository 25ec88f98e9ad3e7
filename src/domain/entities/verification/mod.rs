//! 이메일 인증 코드 엔티티

pub mod verification_code;

pub use verification_code::*;
