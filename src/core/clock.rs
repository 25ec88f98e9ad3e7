//! 시간 소스 추상화
//!
//! 인증 코드 만료, 토큰 만료 등 시간에 의존하는 모든 판단은 [`Clock`]을 통해
//! 현재 시각을 얻습니다. 운영 환경에서는 [`SystemClock`]을, 테스트에서는
//! [`ManualClock`]으로 TTL 경계를 정확히 재현합니다.

use std::sync::{Arc, Mutex};

use chrono::{DateTime, Duration, Utc};

/// 현재 시각 제공자
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// 시스템 시계
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// 수동으로 조작하는 시계
///
/// 복제본끼리 같은 시각을 공유하므로, 서비스에 주입한 뒤 테스트에서 `advance`로
/// 시간을 흘려보낼 수 있습니다.
#[derive(Debug, Clone)]
pub struct ManualClock {
    current: Arc<Mutex<DateTime<Utc>>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            current: Arc::new(Mutex::new(start)),
        }
    }

    /// 현재 시각을 `by`만큼 앞으로 이동합니다.
    pub fn advance(&self, by: Duration) {
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current += by;
    }

    pub fn set(&self, at: DateTime<Utc>) {
        let mut current = self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        *current = at;
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.current.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
