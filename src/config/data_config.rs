//! 데이터 및 서버 설정 관리 모듈
//!
//! 데이터베이스, 작업 큐, 서버, 환경 및 비밀번호 해싱 관련 설정을 관리합니다.

use std::env;
use std::time::Duration;

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경 - 빠른 개발을 위한 설정
    Development,
    /// 테스트 환경 - 자동화된 테스트용 설정
    Test,
    /// 스테이징 환경 - 프로덕션 유사 환경
    Staging,
    /// 프로덕션 환경 - 최고 수준의 보안 및 성능
    Production,
}

impl Environment {
    /// 현재 실행 환경을 감지합니다.
    ///
    /// `ENVIRONMENT` 환경 변수를 확인하며,
    /// 설정되지 않은 경우 `Production`을 기본값으로 사용합니다.
    pub fn current() -> Self {
        Self::from_name(&env::var("ENVIRONMENT").unwrap_or_else(|_| "production".to_string()))
    }

    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 알 수 없는 값인 경우 `Production`을 반환합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 패스워드 해싱 설정
pub struct PasswordConfig;

impl PasswordConfig {
    /// 현재 환경에 맞는 bcrypt cost를 반환합니다.
    ///
    /// `BCRYPT_COST`가 4-15 범위의 값이면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn bcrypt_cost() -> u32 {
        env::var("BCRYPT_COST")
            .ok()
            .and_then(|cost| cost.parse::<u32>().ok())
            .filter(|cost| (4..=15).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(&Environment::current()))
    }

    /// 특정 환경에 대한 bcrypt cost를 반환합니다.
    ///
    /// # Environment Defaults
    ///
    /// - Development/Test: 4 (빠른 처리)
    /// - Staging: 10 (중간 보안)
    /// - Production: 12 (고보안)
    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 서버 바인딩 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버가 바인딩할 포트 (`PORT`, 기본값 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .unwrap_or(8080)
    }

    /// 서버가 바인딩할 호스트 주소 (`HOST`, 기본값 "0.0.0.0")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string())
    }
}

/// 관계형 저장소 설정
///
/// # Environment Variables
///
/// ```bash
/// export DATABASE_URL="sqlite://blog_identity.db?mode=rwc"
/// export DATABASE_MAX_CONNECTIONS="5"
/// export DATABASE_QUERY_TIMEOUT_SECS="5"
/// ```
pub struct DatabaseConfig;

impl DatabaseConfig {
    pub fn url() -> String {
        env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://blog_identity.db?mode=rwc".to_string())
    }

    pub fn max_connections() -> u32 {
        env::var("DATABASE_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(5)
    }

    /// 트랜잭션 단위 작업에 적용되는 데드라인
    pub fn query_timeout() -> Duration {
        let secs = env::var("DATABASE_QUERY_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(5);
        Duration::from_secs(secs)
    }
}

/// 이메일 발송 작업 큐(Redis) 설정
pub struct QueueConfig;

impl QueueConfig {
    pub fn redis_url() -> String {
        env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string())
    }

    /// 인증 메일 작업이 쌓이는 Redis 리스트 키
    pub fn verify_email_queue() -> String {
        env::var("VERIFY_EMAIL_QUEUE").unwrap_or_else(|_| "queue:send_verify_email".to_string())
    }

    /// BRPOP 대기 시간 (초)
    pub fn poll_timeout_secs() -> u64 {
        env::var("QUEUE_POLL_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .filter(|n| *n > 0)
            .unwrap_or(5)
    }

    /// 전송 실패 시 재시도 횟수
    pub fn max_retries() -> u32 {
        env::var("QUEUE_MAX_RETRIES")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(3)
    }

    /// 재시도 지연의 기준값. 시도마다 두 배씩 늘어납니다.
    pub fn retry_backoff() -> Duration {
        let millis = env::var("QUEUE_RETRY_BACKOFF_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(2_000);

        Duration::from_millis(millis)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_name("development"), Environment::Development);
        assert_eq!(Environment::from_name("dev"), Environment::Development);
        assert_eq!(Environment::from_name("test"), Environment::Test);
        assert_eq!(Environment::from_name("production"), Environment::Production);
        assert_eq!(Environment::from_name("unknown"), Environment::Production);
    }

    #[test]
    fn test_bcrypt_cost_for_each_environment() {
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Development), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Test), 4);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Staging), 10);
        assert_eq!(PasswordConfig::bcrypt_cost_for_env(&Environment::Production), 12);
    }

    #[test]
    fn test_server_config_defaults() {
        if env::var("PORT").is_err() {
            assert_eq!(ServerConfig::port(), 8080);
        }

        if env::var("HOST").is_err() {
            assert_eq!(ServerConfig::host(), "0.0.0.0");
        }
    }

    #[test]
    fn test_database_and_queue_defaults() {
        if env::var("DATABASE_QUERY_TIMEOUT_SECS").is_err() {
            assert_eq!(DatabaseConfig::query_timeout(), Duration::from_secs(5));
        }

        if env::var("VERIFY_EMAIL_QUEUE").is_err() {
            assert_eq!(QueueConfig::verify_email_queue(), "queue:send_verify_email");
        }

        if env::var("QUEUE_RETRY_BACKOFF_MS").is_err() {
            assert_eq!(QueueConfig::retry_backoff(), Duration::from_secs(2));
        }
    }
}
