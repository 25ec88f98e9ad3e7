//! # Mail Module
//!
//! 인증 메일 본문 생성과 전송을 담당합니다. 워커만 이 모듈을 사용합니다.

pub mod sender;
pub mod templates;

pub use sender::{EmailSender, HttpEmailSender, LogEmailSender};
pub use templates::{verification_email, verification_link};

/// 전송할 메일 한 통
#[derive(Debug, Clone, PartialEq)]
pub struct EmailMessage {
    pub to: String,
    pub to_name: Option<String>,
    pub subject: String,
    pub html: String,
    pub text: String,
}
