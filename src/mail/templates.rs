//! 인증 메일 본문
//!
//! HTML 본문에 들어가는 사용자 입력(이름)과 링크는 이스케이프됩니다.

use crate::domain::models::tasks::VerifyEmailTask;
use crate::mail::EmailMessage;

/// `{base}?email=...&secret_code=...` (쿼리 값은 URL 인코딩)
pub fn verification_link(base_url: &str, email: &str, secret_code: &str) -> String {
    format!(
        "{}?email={}&secret_code={}",
        base_url,
        urlencoding::encode(email),
        urlencoding::encode(secret_code)
    )
}

pub fn verification_email(task: &VerifyEmailTask, link_base_url: &str) -> EmailMessage {
    let link = verification_link(link_base_url, &task.email, &task.secret_code);

    EmailMessage {
        to: task.email.clone(),
        to_name: Some(task.first_name.clone()),
        subject: "Welcome! Please verify your email".to_string(),
        html: format!(
            "<p>Hello {},</p>\
             <p>Thank you for registering with us!</p>\
             <p>Please <a href=\"{}\">click here</a> to verify your email address.</p>\
             <p>This link expires at {}.</p>",
            html_escape::encode_text(&task.first_name),
            html_escape::encode_double_quoted_attribute(&link),
            task.expires_at.format("%Y-%m-%d %H:%M UTC")
        ),
        text: format!(
            "Hello {},\n\nThank you for registering with us!\nVerify your email address: {}\n",
            task.first_name, link
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    #[test]
    fn test_link_encodes_query_values() {
        let link = verification_link("http://localhost:8080/v1/api/verify-email", "a+b@x.com", "abc123");

        assert_eq!(
            link,
            "http://localhost:8080/v1/api/verify-email?email=a%2Bb%40x.com&secret_code=abc123"
        );
    }

    fn task(first_name: &str) -> VerifyEmailTask {
        VerifyEmailTask {
            task_id: Uuid::new_v4(),
            account_id: 1,
            email: "a@x.com".to_string(),
            first_name: first_name.to_string(),
            secret_code: "s".repeat(32),
            expires_at: Utc::now(),
            attempts: 0,
        }
    }

    #[test]
    fn test_email_addresses_recipient_and_contains_link() {
        let task = task("Ada");

        let message = verification_email(&task, "https://blog.example.com/verify");

        assert_eq!(message.to, "a@x.com");
        assert_eq!(message.to_name.as_deref(), Some("Ada"));
        assert!(message.html.contains("https://blog.example.com/verify?email=a%40x.com"));
        assert!(message.text.contains(&task.secret_code));
    }

    #[test]
    fn test_markup_in_first_name_is_escaped_in_html() {
        let task = task("<a href=\"https://evil.example\">Reset your bank password</a>");

        let message = verification_email(&task, "https://blog.example.com/verify");

        assert!(!message.html.contains("<a href=\"https://evil.example\">"));
        assert!(message.html.contains("&lt;a href=\"https://evil.example\"&gt;Reset your bank password&lt;/a&gt;"));
        assert_eq!(message.html.matches("<a ").count(), 1);
    }

    #[test]
    fn test_link_query_separator_is_escaped_in_href() {
        let message = verification_email(&task("Ada"), "https://blog.example.com/verify");

        assert!(message.html.contains("href=\"https://blog.example.com/verify?email=a%40x.com&amp;secret_code="));
    }
}
