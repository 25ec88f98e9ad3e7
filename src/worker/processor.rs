//! 작업 처리기
//!
//! 큐에서 인증 메일 작업을 꺼내 전송합니다. 전송이 실패하면 시도 횟수에 따라
//! 지수적으로 늘어나는 시간만큼 기다린 뒤 다시 큐에 넣고, 최대 재시도 횟수를 넘기면 버립니다.

use std::sync::Arc;
use std::time::Duration;

use log::{error, info, warn};

use crate::domain::models::tasks::VerifyEmailTask;
use crate::mail::{EmailSender, verification_email};
use crate::queue::RedisClient;
use crate::worker::TaskDistributor;

/// 재시도 지연 상한
const MAX_RETRY_DELAY: Duration = Duration::from_secs(300);

/// 작업 한 건의 처리 결과
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessOutcome {
    Delivered,
    Retried,
    Dropped,
}

pub struct TaskProcessor {
    sender: Arc<dyn EmailSender>,
    distributor: Arc<dyn TaskDistributor>,
    link_base_url: String,
    max_retries: u32,
    retry_backoff: Duration,
}

impl TaskProcessor {
    pub fn new(
        sender: Arc<dyn EmailSender>,
        distributor: Arc<dyn TaskDistributor>,
        link_base_url: String,
        max_retries: u32,
        retry_backoff: Duration,
    ) -> Self {
        Self {
            sender,
            distributor,
            link_base_url,
            max_retries,
            retry_backoff,
        }
    }

    /// `attempts`번 실패한 작업을 다시 넣기 전 대기 시간: `backoff * 2^attempts`
    pub fn retry_delay(&self, attempts: u32) -> Duration {
        self.retry_backoff
            .saturating_mul(1u32 << attempts.min(16))
            .min(MAX_RETRY_DELAY)
    }

    /// 큐를 계속 비웁니다. 반환하지 않습니다.
    pub async fn run(self: Arc<Self>, redis: Arc<RedisClient>, queue: String, poll_timeout_secs: u64) {
        match redis.len(&queue).await {
            Ok(pending) => info!("👷 작업 처리기 시작 - queue: {}, 대기 작업: {}", queue, pending),
            Err(e) => warn!("👷 작업 처리기 시작 - queue: {}, 대기 작업 조회 실패: {}", queue, e),
        }

        loop {
            match redis.pop_json::<VerifyEmailTask>(&queue, poll_timeout_secs).await {
                Ok(Some(task)) => {
                    self.process(task).await;
                }
                Ok(None) => {}
                Err(e) => {
                    error!("작업 큐 조회 실패: {}", e);
                    actix_web::rt::time::sleep(Duration::from_secs(1)).await;
                }
            }
        }
    }

    pub async fn process(&self, task: VerifyEmailTask) -> ProcessOutcome {
        let message = verification_email(&task, &self.link_base_url);

        match self.sender.send(&message).await {
            Ok(()) => {
                info!("✅ 인증 메일 처리 완료 - task_id: {}, account_id: {}", task.task_id, task.account_id);
                ProcessOutcome::Delivered
            }
            Err(e) if task.attempts < self.max_retries => {
                let delay = self.retry_delay(task.attempts);
                warn!(
                    "인증 메일 전송 실패, {:?} 후 재시도 ({}/{}) - task_id: {}: {}",
                    delay,
                    task.attempts + 1,
                    self.max_retries,
                    task.task_id,
                    e
                );
                actix_web::rt::time::sleep(delay).await;

                match self.distributor.distribute_send_verify_email(&task.retried()).await {
                    Ok(()) => ProcessOutcome::Retried,
                    Err(e) => {
                        error!("재시도 등록 실패 - task_id: {}: {}", task.task_id, e);
                        ProcessOutcome::Dropped
                    }
                }
            }
            Err(e) => {
                error!("❌ 인증 메일 작업 폐기 - task_id: {}, attempts: {}: {}", task.task_id, task.attempts, e);
                ProcessOutcome::Dropped
            }
        }
    }
}
