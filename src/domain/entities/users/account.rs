//! Account Entity Implementation
//!
//! 계정(`users`)과 프로필(`profile`) 엔티티의 핵심 구현체입니다.
//! 두 행은 항상 한 트랜잭션 안에서 함께 생성됩니다.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// 계정 엔티티
///
/// 비밀번호는 단방향 해시로만 저장됩니다.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Account {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    /// 계정 이메일 (unique)
    pub email: String,
    /// bcrypt 해시
    #[sqlx(rename = "password")]
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// 이메일 인증 여부. 한 번 true가 되면 되돌아가지 않습니다.
    pub is_email_verified: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 프로필 엔티티
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct Profile {
    pub id: i64,
    #[sqlx(rename = "user_id")]
    pub account_id: i64,
    pub date_of_birth: Option<String>,
    pub about: Option<String>,
    pub photo: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    /// JSON 문자열
    pub settings: Option<String>,
    /// JSON 문자열
    pub socials: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 새 프로필 속성
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewProfile {
    pub date_of_birth: Option<String>,
    pub about: Option<String>,
    pub photo: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub settings: Option<String>,
    pub socials: Option<String>,
}

/// 생성 전 계정 (계정 + 프로필 쌍)
///
/// 디스패치 훅에는 이 값이 회원가입 페이로드로 전달됩니다.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAccount {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password_hash: String,
    pub profile: NewProfile,
    /// 계정과 프로필 행의 생성 시각
    pub created_at: DateTime<Utc>,
}
