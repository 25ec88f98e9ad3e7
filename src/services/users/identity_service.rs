//! 신원 생명주기 오케스트레이터
//!
//! 비밀번호 해시, 계정 생성 트랜잭션, 인증 코드, 세션 토큰을 묶어
//! 회원가입 / 로그인 / 이메일 인증 흐름을 제공합니다.
//!
//! ```text
//! SignUp       → hash → create_account(tx) ─ hook: issue code + enqueue ─ COMMIT
//! Login        → find_by_email → verify → create_token
//! VerifyEmail  → consume(email, code)
//! Resend       → issue → enqueue
//! ```
//!
//! 이 서비스는 HTTP 응답을 직접 만들지 않습니다. 결과와 `AppError`만 반환합니다.

use std::sync::Arc;

use chrono::Duration;
use log::{info, warn};

use crate::core::clock::Clock;
use crate::dispatch::{DispatchHook, VerificationDispatchHook};
use crate::domain::dto::users::request::SignUpRequest;
use crate::domain::dto::users::response::LoginResponse;
use crate::domain::entities::users::{Account, NewAccount, NewProfile};
use crate::domain::models::tasks::VerifyEmailTask;
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::users::AccountRepository;
use crate::services::auth::{PasswordService, TokenService};
use crate::services::verification::VerificationService;
use crate::utils::string_utils::{normalize_email, validate_required_string};
use crate::worker::TaskDistributor;

pub struct IdentityService {
    accounts: Arc<AccountRepository>,
    passwords: PasswordService,
    tokens: Arc<TokenService>,
    verification: Arc<VerificationService>,
    distributor: Arc<dyn TaskDistributor>,
    sign_up_hook: Arc<dyn DispatchHook>,
    clock: Arc<dyn Clock>,
    /// 세션 토큰 수명 (기본 5분)
    token_ttl: Duration,
}

impl IdentityService {
    /// 회원가입 훅은 인증 코드 발급 + 메일 작업 등록([`VerificationDispatchHook`])으로 구성됩니다.
    pub fn new(
        accounts: Arc<AccountRepository>,
        passwords: PasswordService,
        tokens: Arc<TokenService>,
        verification: Arc<VerificationService>,
        distributor: Arc<dyn TaskDistributor>,
        clock: Arc<dyn Clock>,
        token_ttl: Duration,
    ) -> Self {
        let sign_up_hook = Arc::new(VerificationDispatchHook::new(verification.clone(), distributor.clone()));

        Self {
            accounts,
            passwords,
            tokens,
            verification,
            distributor,
            sign_up_hook,
            clock,
            token_ttl,
        }
    }

    /// 회원가입 훅을 교체합니다.
    pub fn with_sign_up_hook(mut self, hook: Arc<dyn DispatchHook>) -> Self {
        self.sign_up_hook = hook;
        self
    }

    /// 새 계정을 만들고 ID를 반환합니다.
    ///
    /// 계정, 프로필, 첫 인증 코드, 메일 작업 등록은 전부 성공하거나 전부 없던 일이 됩니다.
    pub async fn sign_up(&self, request: SignUpRequest) -> AppResult<i64> {
        let first_name = validate_required_string(&request.first_name, "first_name")?;
        let last_name = validate_required_string(&request.last_name, "last_name")?;
        let email = normalize_email(&request.email);

        let password_hash = self.passwords.hash(&request.password).await?;

        let account = NewAccount {
            first_name,
            last_name,
            email,
            password_hash,
            profile: NewProfile {
                date_of_birth: request.date_of_birth,
                about: request.about,
                photo: request.photo,
                city: request.city,
                country: request.country,
                settings: request.settings,
                socials: request.socials,
            },
            created_at: self.clock.now(),
        };

        let account_id = self
            .accounts
            .create_account(&account, self.sign_up_hook.as_ref())
            .await
            .inspect_err(|e| {
                if let AppError::DuplicateEmail(_) = e {
                    warn!("이미 등록된 이메일로 회원가입 시도");
                }
            })?;

        info!("👤 회원가입 완료 - account_id: {}", account_id);
        Ok(account_id)
    }

    /// 이메일/비밀번호를 확인하고 세션 토큰을 발급합니다.
    ///
    /// 반환되는 계정 정보에는 비밀번호 해시가 포함되지 않습니다.
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let email = normalize_email(email);

        let account = self
            .accounts
            .find_by_email(&email)
            .await?
            .ok_or(AppError::AccountNotFound)?;

        if !self.passwords.verify(password, &account.password_hash).await {
            warn!("🚫 로그인 실패 (비밀번호 불일치) - account_id: {}", account.id);
            return Err(AppError::InvalidCredentials);
        }

        let token = self.tokens.create_token(account.id, self.token_ttl)?;

        info!("🔓 로그인 성공 - account_id: {}, expires_at: {}", account.id, token.expires_at);
        Ok(LoginResponse::new(account, token))
    }

    /// 인증 코드를 소비해 이메일을 인증합니다.
    pub async fn verify_email(&self, email: &str, secret_code: &str) -> AppResult<()> {
        let code = self
            .verification
            .consume(&normalize_email(email), secret_code)
            .await?;

        info!("📬 이메일 인증 처리 - account_id: {}", code.account_id);
        Ok(())
    }

    /// 새 인증 코드를 발급하고 메일 작업을 등록합니다.
    ///
    /// 기존 코드는 그대로 유효합니다. 작업 등록이 실패해도 발급된 코드는 남습니다.
    pub async fn resend_verification(&self, email: &str) -> AppResult<()> {
        let account = self
            .accounts
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(AppError::AccountNotFound)?;

        if account.is_email_verified {
            return Err(AppError::ValidationError("email is already verified".to_string()));
        }

        let code = self.verification.issue(account.id, &account.email).await?;
        let task = VerifyEmailTask::for_code(&code, &account.first_name);
        self.distributor.distribute_send_verify_email(&task).await?;

        info!("📨 인증 메일 재발송 등록 - account_id: {}, task_id: {}", account.id, task.task_id);
        Ok(())
    }

    /// 세션 토큰을 검증하고 해당 계정을 조회합니다.
    pub async fn authenticate(&self, token: &str) -> AppResult<Account> {
        let claims = self.tokens.verify_token(token)?;

        self.accounts
            .find_by_id(claims.account_id)
            .await?
            .ok_or(AppError::AccountNotFound)
    }

    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::test_support::{
        FailingDistributor, RecordingHook, count_rows, file_backed_db, identity_harness, identity_harness_on,
        identity_harness_with, sign_up_request,
    };

    #[actix_web::test]
    async fn test_sign_up_creates_account_code_and_task() {
        let harness = identity_harness().await;

        let account_id = harness.service.sign_up(sign_up_request(" A@X.com ", "secret1")).await.unwrap();

        let account = harness.accounts.find_by_id(account_id).await.unwrap().unwrap();
        assert_eq!(account.email, "a@x.com");
        assert_ne!(account.password_hash, "secret1");
        assert!(harness.accounts.find_profile(account_id).await.unwrap().is_some());

        let tasks = harness.distributor.tasks();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].account_id, account_id);
        assert_eq!(tasks[0].email, "a@x.com");
        assert!(tasks[0].secret_code.len() >= 32);
        assert_eq!(count_rows(&harness.db, "verify_email").await, 1);
    }

    #[actix_web::test]
    async fn test_sign_up_passes_payload_to_hook_exactly_once() {
        let harness = identity_harness().await;
        let hook = Arc::new(RecordingHook::default());
        let service = harness.rebuild().with_sign_up_hook(hook.clone());

        let account_id = service.sign_up(sign_up_request("a@x.com", "secret1")).await.unwrap();

        let calls = hook.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0, account_id);
        assert_eq!(calls[0].1.email, "a@x.com");
        assert_eq!(calls[0].1.profile.city, Some("Seoul".to_string()));
    }

    #[actix_web::test]
    async fn test_duplicate_sign_up_is_rejected_without_side_effects() {
        let harness = identity_harness().await;
        harness.service.sign_up(sign_up_request("a@x.com", "secret1")).await.unwrap();

        let result = harness.service.sign_up(sign_up_request("a@x.com", "other12")).await;

        assert!(matches!(result, Err(AppError::DuplicateEmail(_))));
        assert_eq!(count_rows(&harness.db, "users").await, 1);
        assert_eq!(count_rows(&harness.db, "verify_email").await, 1);
        assert_eq!(harness.distributor.tasks().len(), 1);
    }

    #[actix_web::test]
    async fn test_concurrent_sign_ups_with_same_email_have_one_winner() {
        let (_dir, db) = file_backed_db().await;
        let harness = identity_harness_on(db);
        let service = Arc::new(harness.rebuild());

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let service = service.clone();
                actix_web::rt::spawn(async move { service.sign_up(sign_up_request("a@x.com", "secret1")).await })
            })
            .collect();

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }

        assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
        assert!(results
            .iter()
            .filter_map(|r| r.as_ref().err())
            .all(|e| matches!(e, AppError::DuplicateEmail(_) | AppError::StoreError(_))));
        assert_eq!(count_rows(&harness.db, "users").await, 1);
        assert_eq!(count_rows(&harness.db, "profile").await, 1);
        assert_eq!(count_rows(&harness.db, "verify_email").await, 1);
        assert_eq!(harness.distributor.tasks().len(), 1);
    }

    #[actix_web::test]
    async fn test_enqueue_failure_aborts_sign_up() {
        let harness = identity_harness_with(Arc::new(FailingDistributor)).await;

        let result = harness.service.sign_up(sign_up_request("a@x.com", "secret1")).await;

        assert!(matches!(result, Err(AppError::StoreError(_))));
        assert_eq!(count_rows(&harness.db, "users").await, 0);
        assert_eq!(count_rows(&harness.db, "profile").await, 0);
        assert_eq!(count_rows(&harness.db, "verify_email").await, 0);
    }

    #[actix_web::test]
    async fn test_login_issues_five_minute_token_for_account() {
        let harness = identity_harness().await;
        let account_id = harness.service.sign_up(sign_up_request("a@x.com", "secret1")).await.unwrap();

        let response = harness.service.login("a@x.com", "secret1").await.unwrap();
        let claims = harness.service.tokens().verify_token(&response.access_token).unwrap();

        assert_eq!(claims.account_id, account_id);
        assert_eq!(claims.exp - claims.iat, 300);
        assert_eq!(response.account.id, account_id);
        assert_eq!(response.expires_in, 300);
    }

    #[actix_web::test]
    async fn test_login_rejects_wrong_password_and_unknown_email() {
        let harness = identity_harness().await;
        harness.service.sign_up(sign_up_request("a@x.com", "secret1")).await.unwrap();

        assert!(matches!(
            harness.service.login("a@x.com", "secret2").await,
            Err(AppError::InvalidCredentials)
        ));
        assert!(matches!(
            harness.service.login("b@x.com", "secret1").await,
            Err(AppError::AccountNotFound)
        ));
    }

    #[actix_web::test]
    async fn test_expired_code_then_resend_then_verify() {
        let harness = identity_harness().await;
        let account_id = harness.service.sign_up(sign_up_request("a@x.com", "secret1")).await.unwrap();
        let first = harness.distributor.tasks()[0].secret_code.clone();

        harness.clock.advance(Duration::minutes(15) + Duration::seconds(1));
        assert!(matches!(
            harness.service.verify_email("a@x.com", &first).await,
            Err(AppError::CodeExpired)
        ));
        assert!(!harness.accounts.find_by_id(account_id).await.unwrap().unwrap().is_email_verified);

        harness.service.resend_verification("a@x.com").await.unwrap();
        let second = harness.distributor.tasks()[1].secret_code.clone();
        assert_ne!(first, second);

        harness.service.verify_email("a@x.com", &second).await.unwrap();
        assert!(harness.accounts.find_by_id(account_id).await.unwrap().unwrap().is_email_verified);

        assert!(matches!(
            harness.service.verify_email("a@x.com", &second).await,
            Err(AppError::CodeNotFound)
        ));
        assert!(matches!(
            harness.service.resend_verification("a@x.com").await,
            Err(AppError::ValidationError(_))
        ));
    }

    #[actix_web::test]
    async fn test_code_is_valid_until_just_before_expiry() {
        let harness = identity_harness().await;
        let account_id = harness.service.sign_up(sign_up_request("a@x.com", "secret1")).await.unwrap();
        let code = harness.distributor.tasks()[0].secret_code.clone();

        harness.clock.advance(Duration::minutes(14) + Duration::seconds(59));
        harness.service.verify_email("a@x.com", &code).await.unwrap();

        assert!(harness.accounts.find_by_id(account_id).await.unwrap().unwrap().is_email_verified);
    }

    #[actix_web::test]
    async fn test_resend_for_unknown_email() {
        let harness = identity_harness().await;

        assert!(matches!(
            harness.service.resend_verification("ghost@x.com").await,
            Err(AppError::AccountNotFound)
        ));
    }

    #[actix_web::test]
    async fn test_authenticate_until_token_expires() {
        let harness = identity_harness().await;
        let account_id = harness.service.sign_up(sign_up_request("a@x.com", "secret1")).await.unwrap();
        let login = harness.service.login("a@x.com", "secret1").await.unwrap();

        let account = harness.service.authenticate(&login.access_token).await.unwrap();
        assert_eq!(account.id, account_id);

        harness.clock.advance(Duration::minutes(5));
        assert!(matches!(
            harness.service.authenticate(&login.access_token).await,
            Err(AppError::InvalidToken(_))
        ));
    }

    #[actix_web::test]
    async fn test_missing_signing_key_only_breaks_login() {
        let harness = identity_harness().await;
        let service = harness.rebuild_with_secret(None);

        service.sign_up(sign_up_request("a@x.com", "secret1")).await.unwrap();

        assert!(matches!(
            service.login("a@x.com", "secret1").await,
            Err(AppError::SigningError(_))
        ));
    }
}
