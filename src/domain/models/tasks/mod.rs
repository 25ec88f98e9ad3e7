//! 비동기 작업 페이로드

pub mod verify_email_task;

pub use verify_email_task::*;
