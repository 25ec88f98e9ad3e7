//! 회원가입 디스패치 훅: 인증 코드 발급 + 발송 작업 등록

use std::sync::Arc;

use async_trait::async_trait;
use log::info;

use crate::dispatch::hook::{DispatchContext, DispatchHook};
use crate::domain::models::tasks::VerifyEmailTask;
use crate::errors::errors::AppResult;
use crate::services::verification::VerificationService;
use crate::worker::TaskDistributor;

/// 생성 트랜잭션 안에서 인증 코드를 발급하고 메일 발송 작업을 큐에 넣습니다.
///
/// 코드는 트랜잭션 커넥션에 기록되므로 계정이 커밋될 때만 존재합니다.
/// 큐 등록이 실패하면 계정과 코드가 함께 롤백됩니다.
pub struct VerificationDispatchHook {
    verification: Arc<VerificationService>,
    distributor: Arc<dyn TaskDistributor>,
}

impl VerificationDispatchHook {
    pub fn new(verification: Arc<VerificationService>, distributor: Arc<dyn TaskDistributor>) -> Self {
        Self {
            verification,
            distributor,
        }
    }
}

#[async_trait]
impl DispatchHook for VerificationDispatchHook {
    async fn dispatch(&self, ctx: DispatchContext<'_>) -> AppResult<()> {
        let code = self
            .verification
            .issue_in(ctx.conn, ctx.account_id, &ctx.account.email)
            .await?;

        let task = VerifyEmailTask::for_code(&code, &ctx.account.first_name);
        self.distributor.distribute_send_verify_email(&task).await?;

        info!("📨 인증 메일 작업 등록 - account_id: {}, task_id: {}", ctx.account_id, task.task_id);
        Ok(())
    }
}
