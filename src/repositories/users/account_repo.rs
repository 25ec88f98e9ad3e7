//! 계정/프로필 리포지토리
//!
//! 계정 생성은 `users`와 `profile` 두 테이블에 걸친 하나의 트랜잭션입니다.
//! 디스패치 훅은 두 INSERT가 끝난 뒤, 커밋 전에 같은 트랜잭션 안에서 호출됩니다.

use std::sync::Arc;

use log::{error, info};
use sqlx::SqliteConnection;

use crate::db::Database;
use crate::dispatch::{DispatchContext, DispatchHook};
use crate::domain::entities::users::{Account, NewAccount, Profile};
use crate::errors::errors::{AppError, AppResult};

const ACCOUNT_COLUMNS: &str =
    "id, first_name, last_name, email, password, is_email_verified, created_at, updated_at";

const PROFILE_COLUMNS: &str =
    "id, user_id, date_of_birth, about, photo, city, country, settings, socials, created_at, updated_at";

pub struct AccountRepository {
    db: Arc<Database>,
}

impl AccountRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 계정과 프로필을 원자적으로 생성합니다.
    ///
    /// ## 반환값
    ///
    /// - `Ok(id)` - 두 행과 훅의 쓰기가 모두 커밋됨
    /// - `Err(DuplicateEmail)` - 이메일 유니크 제약 위반
    /// - `Err(StoreError)` - 그 밖의 저장소 실패, 훅 실패, 데드라인 초과
    ///
    /// 어떤 실패든 트랜잭션은 롤백되며 부분 쓰기는 남지 않습니다.
    pub async fn create_account(&self, account: &NewAccount, hook: &dyn DispatchHook) -> AppResult<i64> {
        self.db
            .bounded(async {
                let mut tx = self.db.begin().await?;

                let account_id = Self::insert_account(&mut *tx, account).await?;
                Self::insert_profile(&mut *tx, account_id, account).await?;

                hook.dispatch(DispatchContext {
                    account_id,
                    account,
                    conn: &mut *tx,
                })
                .await
                .map_err(|e| {
                    error!("❌ 디스패치 훅 실패, 계정 생성 롤백 - {}: {}", e.kind(), e);
                    AppError::StoreError(format!("dispatch hook failed: {}", e.kind()))
                })?;

                tx.commit().await?;

                info!("✅ 계정 생성 완료 - account_id: {}", account_id);
                Ok(account_id)
            })
            .await
    }

    async fn insert_account(conn: &mut SqliteConnection, account: &NewAccount) -> AppResult<i64> {
        let result = sqlx::query(
            "INSERT INTO users (first_name, last_name, email, password, is_email_verified, created_at, updated_at) \
             VALUES (?, ?, ?, ?, 0, ?, ?)",
        )
        .bind(&account.first_name)
        .bind(&account.last_name)
        .bind(&account.email)
        .bind(&account.password_hash)
        .bind(account.created_at)
        .bind(account.created_at)
        .execute(&mut *conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                AppError::DuplicateEmail(account.email.clone())
            }
            other => AppError::from(other),
        })?;

        Ok(result.last_insert_rowid())
    }

    async fn insert_profile(conn: &mut SqliteConnection, account_id: i64, account: &NewAccount) -> AppResult<()> {
        let profile = &account.profile;

        sqlx::query(
            "INSERT INTO profile (user_id, date_of_birth, about, photo, city, country, settings, socials, created_at, updated_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
        )
        .bind(account_id)
        .bind(&profile.date_of_birth)
        .bind(&profile.about)
        .bind(&profile.photo)
        .bind(&profile.city)
        .bind(&profile.country)
        .bind(&profile.settings)
        .bind(&profile.socials)
        .bind(account.created_at)
        .bind(account.created_at)
        .execute(&mut *conn)
        .await?;

        Ok(())
    }

    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<Account>> {
        self.db
            .bounded(async {
                let account = sqlx::query_as::<_, Account>(&format!(
                    "SELECT {} FROM users WHERE email = ?",
                    ACCOUNT_COLUMNS
                ))
                .bind(email)
                .fetch_optional(self.db.pool())
                .await?;

                Ok(account)
            })
            .await
    }

    pub async fn find_by_id(&self, id: i64) -> AppResult<Option<Account>> {
        self.db
            .bounded(async {
                let account = sqlx::query_as::<_, Account>(&format!(
                    "SELECT {} FROM users WHERE id = ?",
                    ACCOUNT_COLUMNS
                ))
                .bind(id)
                .fetch_optional(self.db.pool())
                .await?;

                Ok(account)
            })
            .await
    }

    pub async fn find_profile(&self, account_id: i64) -> AppResult<Option<Profile>> {
        self.db
            .bounded(async {
                let profile = sqlx::query_as::<_, Profile>(&format!(
                    "SELECT {} FROM profile WHERE user_id = ?",
                    PROFILE_COLUMNS
                ))
                .bind(account_id)
                .fetch_optional(self.db.pool())
                .await?;

                Ok(profile)
            })
            .await
    }
}
