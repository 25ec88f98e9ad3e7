//! Database Connection Management Module
//!
//! 관계형 저장소(SQLite, `sqlx`) 연결 관리를 담당하는 모듈입니다.
//! 커넥션 풀, 스키마 적용, 트랜잭션 시작, 작업 데드라인을 제공합니다.
//!
//! # 환경 변수 설정
//!
//! ```bash
//! export DATABASE_URL="sqlite://blog_identity.db?mode=rwc"
//! export DATABASE_MAX_CONNECTIONS="5"
//! export DATABASE_QUERY_TIMEOUT_SECS="5"
//! ```
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Arc::new(Database::new().await?);
//! database.migrate().await?;
//! ```
//!
//! # 취소와 롤백
//!
//! 트랜잭션을 연 작업의 Future가 중간에 drop되면(데드라인 초과, 호출자 취소)
//! `sqlx::Transaction`도 함께 drop되어 롤백됩니다. 부분 쓰기는 관찰되지 않습니다.

use std::future::Future;
use std::time::Duration;

use log::info;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use sqlx::{Sqlite, Transaction};

use crate::config::DatabaseConfig;
use crate::errors::errors::{AppError, AppResult};

const SCHEMA: &str = include_str!("schema.sql");

/// 관계형 저장소 핸들
///
/// 커넥션 풀과 작업 데드라인을 함께 보관합니다.
/// 리포지토리는 `Arc<Database>`로 이 핸들을 공유합니다.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    query_timeout: Duration,
}

impl Database {
    /// 환경 변수 설정으로 새 연결 풀을 생성합니다.
    ///
    /// ## 환경 변수
    /// - `DATABASE_URL`: 연결 URL (기본값: "sqlite://blog_identity.db?mode=rwc")
    /// - `DATABASE_MAX_CONNECTIONS`: 최대 커넥션 수 (기본값: 5)
    /// - `DATABASE_QUERY_TIMEOUT_SECS`: 작업 데드라인 (기본값: 5초)
    pub async fn new() -> Result<Self, sqlx::Error> {
        let url = DatabaseConfig::url();
        let database = Self::connect(
            &url,
            DatabaseConfig::max_connections(),
            DatabaseConfig::query_timeout(),
        )
        .await?;

        info!("✅ 데이터베이스 연결 성공: {}", url);
        Ok(database)
    }

    pub async fn connect(url: &str, max_connections: u32, query_timeout: Duration) -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(url)
            .await?;

        Ok(Self { pool, query_timeout })
    }

    /// 단일 커넥션 인메모리 데이터베이스를 생성하고 스키마를 적용합니다.
    ///
    /// 커넥션이 닫히면 데이터가 사라지므로 유휴 만료를 끕니다.
    pub async fn in_memory() -> Result<Self, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let database = Self {
            pool,
            query_timeout: Duration::from_secs(5),
        };
        database.migrate().await?;
        Ok(database)
    }

    /// 내장 스키마를 적용합니다. 여러 번 실행해도 안전합니다.
    pub async fn migrate(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA.split(';').map(str::trim).filter(|s| !s.is_empty()) {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn query_timeout(&self) -> Duration {
        self.query_timeout
    }

    /// 새 트랜잭션을 시작합니다.
    pub async fn begin(&self) -> AppResult<Transaction<'static, Sqlite>> {
        Ok(self.pool.begin().await?)
    }

    /// 헬스 체크용 연결 확인
    pub async fn ping(&self) -> AppResult<()> {
        self.bounded(async {
            sqlx::query("SELECT 1").execute(&self.pool).await?;
            Ok(())
        })
        .await
    }

    /// 핸들의 기본 데드라인 안에서 작업을 실행합니다.
    pub async fn bounded<T, F>(&self, operation: F) -> AppResult<T>
    where
        F: Future<Output = AppResult<T>>,
    {
        bounded_by(self.query_timeout, operation).await
    }
}

/// 주어진 데드라인 안에서 작업을 실행합니다.
///
/// 데드라인을 넘기면 작업 Future를 drop하고 `StoreError`를 반환합니다.
pub async fn bounded_by<T, F>(limit: Duration, operation: F) -> AppResult<T>
where
    F: Future<Output = AppResult<T>>,
{
    match actix_web::rt::time::timeout(limit, operation).await {
        Ok(result) => result,
        Err(_) => Err(AppError::StoreError(format!(
            "operation exceeded its {}ms deadline",
            limit.as_millis()
        ))),
    }
}
