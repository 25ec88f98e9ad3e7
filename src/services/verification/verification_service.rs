//! 인증 코드 발급/소비 서비스
//!
//! 발급은 기존 미사용 코드를 대체하지 않습니다. 계정마다 여러 코드가 동시에 유효할 수 있고,
//! 소비는 제시된 `(email, secret_code)` 쌍과 정확히 일치하는 코드만 대상으로 합니다.

use std::sync::Arc;

use chrono::Duration;
use log::info;
use sqlx::SqliteConnection;

use crate::core::clock::Clock;
use crate::domain::entities::verification::{NewVerificationCode, VerificationCode};
use crate::errors::errors::AppResult;
use crate::repositories::verification::VerificationRepository;
use crate::services::verification::code_generator::CodeGenerator;

pub struct VerificationService {
    repo: Arc<VerificationRepository>,
    generator: Arc<dyn CodeGenerator>,
    clock: Arc<dyn Clock>,
    /// 코드 수명 (기본 15분)
    ttl: Duration,
}

impl VerificationService {
    pub fn new(
        repo: Arc<VerificationRepository>,
        generator: Arc<dyn CodeGenerator>,
        clock: Arc<dyn Clock>,
        ttl: Duration,
    ) -> Self {
        Self {
            repo,
            generator,
            clock,
            ttl,
        }
    }

    fn prepare(&self, account_id: i64, email: &str) -> NewVerificationCode {
        NewVerificationCode::new(
            account_id,
            email.to_string(),
            self.generator.generate(),
            self.clock.now(),
            self.ttl,
        )
    }

    /// 새 코드를 발급해 독립적으로 저장합니다.
    pub async fn issue(&self, account_id: i64, email: &str) -> AppResult<VerificationCode> {
        let code = self.repo.create(self.prepare(account_id, email)).await?;
        info!("🔑 인증 코드 발급 - account_id: {}, expires_at: {}", account_id, code.expired_at);
        Ok(code)
    }

    /// 진행 중인 트랜잭션의 커넥션에 새 코드를 기록합니다.
    ///
    /// 트랜잭션이 롤백되면 코드도 남지 않습니다.
    pub async fn issue_in(&self, conn: &mut SqliteConnection, account_id: i64, email: &str) -> AppResult<VerificationCode> {
        let code = VerificationRepository::insert(conn, self.prepare(account_id, email)).await?;
        info!("🔑 인증 코드 발급 - account_id: {}, expires_at: {}", account_id, code.expired_at);
        Ok(code)
    }

    /// 코드를 소비하고 계정을 인증 상태로 바꿉니다.
    ///
    /// - `CodeNotFound` - 일치하는 미사용 코드 없음 (이미 사용된 코드 포함)
    /// - `CodeExpired` - `now >= expired_at`, 아무것도 기록하지 않음
    pub async fn consume(&self, email: &str, secret_code: &str) -> AppResult<VerificationCode> {
        self.repo.consume(email, secret_code, self.clock.now()).await
    }
}
