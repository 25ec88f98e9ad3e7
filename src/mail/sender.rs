//! 이메일 전송 구현
//!
//! - [`HttpEmailSender`] - 트랜잭션 메일 HTTP API (Brevo 호환 JSON 본문)
//! - [`LogEmailSender`] - 메일 API가 설정되지 않은 개발 환경용, 로그로만 남깁니다

use async_trait::async_trait;
use log::{info, warn};
use serde::Serialize;

use crate::errors::errors::{AppError, AppResult};
use crate::mail::EmailMessage;

#[async_trait]
pub trait EmailSender: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> AppResult<()>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EmailAddress {
    email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SendEmailBody {
    sender: EmailAddress,
    to: Vec<EmailAddress>,
    subject: String,
    html_content: String,
    text_content: String,
}

pub struct HttpEmailSender {
    client: reqwest::Client,
    api_url: String,
    api_key: String,
    sender_email: String,
    sender_name: Option<String>,
}

impl HttpEmailSender {
    pub fn new(api_url: String, api_key: String, sender_email: String, sender_name: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_url,
            api_key,
            sender_email,
            sender_name,
        }
    }

    fn body(&self, message: &EmailMessage) -> SendEmailBody {
        SendEmailBody {
            sender: EmailAddress {
                email: self.sender_email.clone(),
                name: self.sender_name.clone(),
            },
            to: vec![EmailAddress {
                email: message.to.clone(),
                name: message.to_name.clone(),
            }],
            subject: message.subject.clone(),
            html_content: message.html.clone(),
            text_content: message.text.clone(),
        }
    }
}

#[async_trait]
impl EmailSender for HttpEmailSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        let response = self
            .client
            .post(&self.api_url)
            .header("api-key", &self.api_key)
            .header("Accept", "application/json")
            .json(&self.body(message))
            .send()
            .await
            .map_err(|e| AppError::DeliveryError(format!("메일 API 요청 실패: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("메일 API 응답 오류 (status={}): {}", status, body);
            return Err(AppError::DeliveryError(format!("mail API returned {}", status)));
        }

        info!("📧 메일 전송 완료 - to: {}", message.to);
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LogEmailSender;

#[async_trait]
impl EmailSender for LogEmailSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        // 본문에는 인증 링크가 들어 있으므로 기록하지 않습니다.
        info!("📧 [log] 메일 전송 생략 - to: {}, subject: {}", message.to, message.subject);
        Ok(())
    }
}
