//! 테스트 공용 더블과 빌더

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use tempfile::TempDir;

use crate::core::clock::ManualClock;
use crate::db::Database;
use crate::dispatch::{DispatchContext, DispatchHook};
use crate::domain::dto::users::request::SignUpRequest;
use crate::domain::entities::users::{NewAccount, NewProfile};
use crate::domain::models::tasks::VerifyEmailTask;
use crate::errors::errors::{AppError, AppResult};
use crate::mail::{EmailMessage, EmailSender};
use crate::repositories::users::AccountRepository;
use crate::repositories::verification::VerificationRepository;
use crate::services::auth::{PasswordService, TokenService};
use crate::services::users::IdentityService;
use crate::services::verification::{RandomCodeGenerator, VerificationService};
use crate::worker::TaskDistributor;

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub async fn in_memory_db() -> Arc<Database> {
    Arc::new(Database::in_memory().await.unwrap())
}

/// 임시 디렉터리의 파일 DB와 8개 커넥션 풀
///
/// 트랜잭션들이 실제로 서로 다른 커넥션에서 겹쳐 실행됩니다.
/// 반환된 `TempDir`이 drop되면 파일이 지워지므로 테스트 동안 붙잡아 두어야 합니다.
pub async fn file_backed_db() -> (TempDir, Arc<Database>) {
    let dir = tempfile::tempdir().unwrap();
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("identity.db").display());

    let db = Database::connect(&url, 8, std::time::Duration::from_secs(10)).await.unwrap();
    db.migrate().await.unwrap();

    (dir, Arc::new(db))
}

pub async fn count_rows(db: &Database, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {}", table))
        .fetch_one(db.pool())
        .await
        .unwrap()
}

pub fn new_account(email: &str) -> NewAccount {
    NewAccount {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password_hash: "$2b$04$placeholderplaceholderplaceholderplaceholder12".to_string(),
        profile: NewProfile {
            city: Some("Seoul".to_string()),
            ..NewProfile::default()
        },
        created_at: Utc::now(),
    }
}

pub fn sign_up_request(email: &str, password: &str) -> SignUpRequest {
    SignUpRequest {
        first_name: "Ada".to_string(),
        last_name: "Lovelace".to_string(),
        email: email.to_string(),
        password: password.to_string(),
        date_of_birth: Some("1990-03-12".to_string()),
        about: None,
        photo: None,
        city: Some("Seoul".to_string()),
        country: Some("KR".to_string()),
        settings: None,
        socials: None,
    }
}

/// 호출 내역을 기록하는 훅
#[derive(Default)]
pub struct RecordingHook {
    calls: Mutex<Vec<(i64, NewAccount)>>,
}

impl RecordingHook {
    pub fn calls(&self) -> Vec<(i64, NewAccount)> {
        lock(&self.calls).clone()
    }
}

#[async_trait]
impl DispatchHook for RecordingHook {
    async fn dispatch(&self, ctx: DispatchContext<'_>) -> AppResult<()> {
        lock(&self.calls).push((ctx.account_id, ctx.account.clone()));
        Ok(())
    }
}

/// 트랜잭션에 코드를 한 줄 쓴 뒤 실패하는 훅
pub struct FailingHook;

#[async_trait]
impl DispatchHook for FailingHook {
    async fn dispatch(&self, ctx: DispatchContext<'_>) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO verify_email (user_id, email, secret_code, is_used, created_at, expired_at) \
             VALUES (?, ?, 'never-committed', 0, ?, ?)",
        )
        .bind(ctx.account_id)
        .bind(&ctx.account.email)
        .bind(ctx.account.created_at)
        .bind(ctx.account.created_at)
        .execute(&mut *ctx.conn)
        .await?;

        Err(AppError::DeliveryError("queue unavailable".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingDistributor {
    tasks: Mutex<Vec<VerifyEmailTask>>,
}

impl RecordingDistributor {
    pub fn tasks(&self) -> Vec<VerifyEmailTask> {
        lock(&self.tasks).clone()
    }
}

#[async_trait]
impl TaskDistributor for RecordingDistributor {
    async fn distribute_send_verify_email(&self, task: &VerifyEmailTask) -> AppResult<()> {
        lock(&self.tasks).push(task.clone());
        Ok(())
    }
}

pub struct FailingDistributor;

#[async_trait]
impl TaskDistributor for FailingDistributor {
    async fn distribute_send_verify_email(&self, _task: &VerifyEmailTask) -> AppResult<()> {
        Err(AppError::DeliveryError("queue unavailable".to_string()))
    }
}

#[derive(Default)]
pub struct RecordingSender {
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingSender {
    pub fn sent(&self) -> Vec<EmailMessage> {
        lock(&self.sent).clone()
    }
}

#[async_trait]
impl EmailSender for RecordingSender {
    async fn send(&self, message: &EmailMessage) -> AppResult<()> {
        lock(&self.sent).push(message.clone());
        Ok(())
    }
}

pub struct FailingSender;

#[async_trait]
impl EmailSender for FailingSender {
    async fn send(&self, _message: &EmailMessage) -> AppResult<()> {
        Err(AppError::DeliveryError("mail API returned 503".to_string()))
    }
}

/// 인메모리 저장소와 수동 시계로 조립한 `IdentityService`
pub struct IdentityHarness {
    pub service: IdentityService,
    pub db: Arc<Database>,
    pub accounts: Arc<AccountRepository>,
    pub verification: Arc<VerificationService>,
    pub distributor: Arc<RecordingDistributor>,
    pub clock: ManualClock,
    task_distributor: Arc<dyn TaskDistributor>,
}

pub const TEST_SIGNING_SECRET: &str = "test-signing-secret";

impl IdentityHarness {
    /// 같은 저장소/시계를 공유하는 새 서비스
    pub fn rebuild(&self) -> IdentityService {
        self.rebuild_with_secret(Some(TEST_SIGNING_SECRET.to_string()))
    }

    pub fn rebuild_with_secret(&self, secret: Option<String>) -> IdentityService {
        build_service(
            self.accounts.clone(),
            self.verification.clone(),
            self.task_distributor.clone(),
            &self.clock,
            secret,
        )
    }
}

fn build_service(
    accounts: Arc<AccountRepository>,
    verification: Arc<VerificationService>,
    task_distributor: Arc<dyn TaskDistributor>,
    clock: &ManualClock,
    secret: Option<String>,
) -> IdentityService {
    IdentityService::new(
        accounts,
        PasswordService::new(4),
        Arc::new(TokenService::new(secret, Arc::new(clock.clone()))),
        verification,
        task_distributor,
        Arc::new(clock.clone()),
        Duration::minutes(5),
    )
}

pub async fn identity_harness() -> IdentityHarness {
    identity_harness_on(in_memory_db().await)
}

/// 주어진 데이터베이스 위에 조립한 하네스
pub fn identity_harness_on(db: Arc<Database>) -> IdentityHarness {
    let distributor = Arc::new(RecordingDistributor::default());
    build_harness(db, distributor.clone(), distributor)
}

pub async fn identity_harness_with(task_distributor: Arc<dyn TaskDistributor>) -> IdentityHarness {
    build_harness(
        in_memory_db().await,
        Arc::new(RecordingDistributor::default()),
        task_distributor,
    )
}

fn build_harness(
    db: Arc<Database>,
    distributor: Arc<RecordingDistributor>,
    task_distributor: Arc<dyn TaskDistributor>,
) -> IdentityHarness {
    let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 5, 1, 9, 0, 0).unwrap());
    let accounts = Arc::new(AccountRepository::new(db.clone()));
    let verification = Arc::new(VerificationService::new(
        Arc::new(VerificationRepository::new(db.clone())),
        Arc::new(RandomCodeGenerator::new(48)),
        Arc::new(clock.clone()),
        Duration::minutes(15),
    ));
    let service = build_service(
        accounts.clone(),
        verification.clone(),
        task_distributor.clone(),
        &clock,
        Some(TEST_SIGNING_SECRET.to_string()),
    );

    IdentityHarness {
        service,
        db,
        accounts,
        verification,
        distributor,
        clock,
        task_distributor,
    }
}
