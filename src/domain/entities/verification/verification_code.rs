//! 이메일 인증 코드 엔티티
//!
//! 계정과 이메일 주소에 묶인 1회용, 시간 제한 비밀 코드입니다.
//!
//! ```text
//! Active --(now >= expired_at)--> Dead   (레코드는 남지만 소비 불가)
//! Active --consume-------------> Used   (종료 상태)
//! ```

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 저장된 인증 코드
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct VerificationCode {
    pub id: i64,
    #[sqlx(rename = "user_id")]
    pub account_id: i64,
    pub email: String,
    #[serde(skip_serializing)]
    pub secret_code: String,
    pub is_used: bool,
    pub created_at: DateTime<Utc>,
    pub expired_at: DateTime<Utc>,
}

/// 인증 코드 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationCodeState {
    /// 소비 가능
    Active,
    /// 소비 완료 (종료)
    Used,
    /// 만료 (종료)
    Dead,
}

impl VerificationCode {
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.expired_at
    }

    /// `now` 시점의 상태. 사용 여부가 만료보다 우선합니다.
    pub fn state_at(&self, now: DateTime<Utc>) -> VerificationCodeState {
        if self.is_used {
            VerificationCodeState::Used
        } else if self.is_expired_at(now) {
            VerificationCodeState::Dead
        } else {
            VerificationCodeState::Active
        }
    }
}

/// 저장 전 인증 코드
#[derive(Debug, Clone)]
pub struct NewVerificationCode {
    pub account_id: i64,
    pub email: String,
    pub secret_code: String,
    pub created_at: DateTime<Utc>,
    pub expired_at: DateTime<Utc>,
}

impl NewVerificationCode {
    pub fn new(account_id: i64, email: String, secret_code: String, now: DateTime<Utc>, ttl: Duration) -> Self {
        Self {
            account_id,
            email,
            secret_code,
            created_at: now,
            expired_at: now + ttl,
        }
    }

    pub fn into_persisted(self, id: i64) -> VerificationCode {
        VerificationCode {
            id,
            account_id: self.account_id,
            email: self.email,
            secret_code: self.secret_code,
            is_used: false,
            created_at: self.created_at,
            expired_at: self.expired_at,
        }
    }
}
