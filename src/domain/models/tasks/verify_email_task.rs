//! 인증 메일 발송 작업 페이로드
//!
//! 디스패치 훅이 큐에 넣고, 워커가 꺼내 메일을 보냅니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::verification::VerificationCode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VerifyEmailTask {
    pub task_id: Uuid,
    pub account_id: i64,
    pub email: String,
    pub first_name: String,
    pub secret_code: String,
    pub expires_at: DateTime<Utc>,
    /// 전송 시도 횟수
    #[serde(default)]
    pub attempts: u32,
}

impl VerifyEmailTask {
    pub fn for_code(code: &VerificationCode, first_name: &str) -> Self {
        Self {
            task_id: Uuid::new_v4(),
            account_id: code.account_id,
            email: code.email.clone(),
            first_name: first_name.to_string(),
            secret_code: code.secret_code.clone(),
            expires_at: code.expired_at,
            attempts: 0,
        }
    }

    /// 재시도용 복사본 (시도 횟수 +1)
    pub fn retried(&self) -> Self {
        Self {
            attempts: self.attempts + 1,
            ..self.clone()
        }
    }
}
