//! 작업 분배기
//!
//! 디스패치 훅과 재발송 흐름이 메일 작업을 큐에 넣을 때 사용하는 전송 계약입니다.

use std::sync::Arc;

use async_trait::async_trait;
use log::error;

use crate::domain::models::tasks::VerifyEmailTask;
use crate::errors::errors::{AppError, AppResult};
use crate::queue::RedisClient;

#[async_trait]
pub trait TaskDistributor: Send + Sync {
    /// 인증 메일 작업을 등록합니다. 실패 시 `DeliveryError`.
    async fn distribute_send_verify_email(&self, task: &VerifyEmailTask) -> AppResult<()>;
}

/// Redis 리스트에 작업을 넣는 분배기
pub struct RedisTaskDistributor {
    redis: Arc<RedisClient>,
    queue: String,
}

impl RedisTaskDistributor {
    pub fn new(redis: Arc<RedisClient>, queue: impl Into<String>) -> Self {
        Self {
            redis,
            queue: queue.into(),
        }
    }
}

#[async_trait]
impl TaskDistributor for RedisTaskDistributor {
    async fn distribute_send_verify_email(&self, task: &VerifyEmailTask) -> AppResult<()> {
        self.redis.push_json(&self.queue, task).await.map_err(|e| {
            error!("작업 등록 실패 - queue: {}, task_id: {}: {}", self.queue, task.task_id, e);
            AppError::DeliveryError(format!("failed to enqueue task: {}", e))
        })
    }
}
