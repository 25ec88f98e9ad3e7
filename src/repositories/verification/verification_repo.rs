//! 인증 코드 리포지토리
//!
//! 소비(consume)는 조건부 UPDATE와 영향 행 수 확인으로 한 번만 성공합니다.
//! 읽은 뒤 쓰는 방식으로는 동시 요청 두 개가 모두 성공할 수 있습니다.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use log::{info, warn};
use sqlx::SqliteConnection;

use crate::db::Database;
use crate::domain::entities::verification::{NewVerificationCode, VerificationCode};
use crate::errors::errors::{AppError, AppResult};

const CODE_COLUMNS: &str = "id, user_id, email, secret_code, is_used, created_at, expired_at";

pub struct VerificationRepository {
    db: Arc<Database>,
}

impl VerificationRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 주어진 커넥션(트랜잭션 포함)에 코드를 기록합니다.
    pub async fn insert(conn: &mut SqliteConnection, code: NewVerificationCode) -> AppResult<VerificationCode> {
        let result = sqlx::query(
            "INSERT INTO verify_email (user_id, email, secret_code, is_used, created_at, expired_at) \
             VALUES (?, ?, ?, 0, ?, ?)",
        )
        .bind(code.account_id)
        .bind(&code.email)
        .bind(&code.secret_code)
        .bind(code.created_at)
        .bind(code.expired_at)
        .execute(&mut *conn)
        .await?;

        Ok(code.into_persisted(result.last_insert_rowid()))
    }

    /// 풀에서 커넥션을 받아 코드를 기록합니다.
    pub async fn create(&self, code: NewVerificationCode) -> AppResult<VerificationCode> {
        self.db
            .bounded(async {
                let mut conn = self.db.pool().acquire().await?;
                Self::insert(&mut *conn, code).await
            })
            .await
    }

    /// 코드를 소비하고 계정의 이메일 인증 플래그를 켭니다.
    ///
    /// ## 처리 순서 (한 트랜잭션)
    ///
    /// 1. `(email, secret_code)`가 일치하고 아직 사용되지 않은 행 조회 → 없으면 `CodeNotFound`
    /// 2. `now >= expired_at`이면 `CodeExpired` (행은 건드리지 않음)
    /// 3. `UPDATE ... WHERE id = ? AND is_used = 0` → 영향 행이 1이 아니면 `CodeNotFound`
    /// 4. `users.is_email_verified = 1`
    /// 5. COMMIT
    pub async fn consume(&self, email: &str, secret_code: &str, now: DateTime<Utc>) -> AppResult<VerificationCode> {
        self.db
            .bounded(async {
                let mut tx = self.db.begin().await?;

                let code = sqlx::query_as::<_, VerificationCode>(&format!(
                    "SELECT {} FROM verify_email \
                     WHERE email = ? AND secret_code = ? AND is_used = 0 \
                     ORDER BY id DESC LIMIT 1",
                    CODE_COLUMNS
                ))
                .bind(email)
                .bind(secret_code)
                .fetch_optional(&mut *tx)
                .await?
                .ok_or(AppError::CodeNotFound)?;

                if code.is_expired_at(now) {
                    warn!("⏰ 만료된 인증 코드 - code_id: {}", code.id);
                    return Err(AppError::CodeExpired);
                }

                Self::claim(&mut *tx, code.id).await?;

                let verified = sqlx::query("UPDATE users SET is_email_verified = 1, updated_at = ? WHERE id = ?")
                    .bind(now)
                    .bind(code.account_id)
                    .execute(&mut *tx)
                    .await?
                    .rows_affected();

                if verified != 1 {
                    return Err(AppError::AccountNotFound);
                }

                tx.commit().await?;

                info!("✅ 이메일 인증 완료 - account_id: {}", code.account_id);
                Ok(VerificationCode { is_used: true, ..code })
            })
            .await
    }

    /// 아직 사용되지 않은 코드를 사용됨으로 표시합니다.
    ///
    /// 다른 요청이 먼저 표시했다면 영향 행이 0이고 `CodeNotFound`입니다.
    pub async fn claim(conn: &mut SqliteConnection, code_id: i64) -> AppResult<()> {
        let claimed = sqlx::query("UPDATE verify_email SET is_used = 1 WHERE id = ? AND is_used = 0")
            .bind(code_id)
            .execute(&mut *conn)
            .await?
            .rows_affected();

        if claimed != 1 {
            return Err(AppError::CodeNotFound);
        }
        Ok(())
    }

    /// 계정에 발급된 모든 코드 (사용/만료 포함, 발급 순)
    pub async fn find_by_account(&self, account_id: i64) -> AppResult<Vec<VerificationCode>> {
        self.db
            .bounded(async {
                let codes = sqlx::query_as::<_, VerificationCode>(&format!(
                    "SELECT {} FROM verify_email WHERE user_id = ? ORDER BY id",
                    CODE_COLUMNS
                ))
                .bind(account_id)
                .fetch_all(self.db.pool())
                .await?;

                Ok(codes)
            })
            .await
    }
}
