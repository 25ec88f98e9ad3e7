//! 블로그 신원 서비스 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버와 인증 메일 워커를 구동합니다.
//! 모든 컴포넌트는 여기서 한 번 생성되어 `Arc` / `web::Data`로 주입됩니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{App, HttpServer, middleware, web};
use chrono::Duration;
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info, warn};

use blog_identity_service::config::{
    DatabaseConfig, Environment, JwtConfig, MailConfig, PasswordConfig, QueueConfig, ServerConfig,
    VerificationConfig,
};
use blog_identity_service::core::clock::{Clock, SystemClock};
use blog_identity_service::db::Database;
use blog_identity_service::errors::errors::{AppResult, ErrorContext};
use blog_identity_service::mail::{EmailSender, HttpEmailSender, LogEmailSender};
use blog_identity_service::queue::RedisClient;
use blog_identity_service::repositories::users::AccountRepository;
use blog_identity_service::repositories::verification::VerificationRepository;
use blog_identity_service::routes::configure_all_routes;
use blog_identity_service::services::auth::{PasswordService, TokenService};
use blog_identity_service::services::users::IdentityService;
use blog_identity_service::services::verification::{RandomCodeGenerator, VerificationService};
use blog_identity_service::worker::{RedisTaskDistributor, TaskDistributor, TaskProcessor};

/// Rate Limiting 설정 구조체
#[derive(Debug)]
struct RateLimitConfig {
    per_second: u64,
    burst_size: u32,
}

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 블로그 신원 서비스 시작중... ({:?})", Environment::current());

    // 데이터 스토어 초기화
    let (database, redis_client) = initialize_data_stores().await.map_err(io::Error::other)?;

    let distributor: Arc<dyn TaskDistributor> = Arc::new(RedisTaskDistributor::new(
        redis_client.clone(),
        QueueConfig::verify_email_queue(),
    ));

    // 서비스 조립
    let identity = build_identity_service(database.clone(), distributor.clone());
    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    // 인증 메일 워커 시작
    start_worker(redis_client, distributor);

    // HTTP 서버 시작
    start_http_server(web::Data::new(identity), web::Data::from(database)).await
}

/// 저장소와 서비스를 조립합니다
///
/// `JWT_SECRET`이 없어도 서비스는 시작됩니다. 이 경우 로그인만 `SigningError`로 실패합니다.
fn build_identity_service(database: Arc<Database>, distributor: Arc<dyn TaskDistributor>) -> IdentityService {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let verification = Arc::new(VerificationService::new(
        Arc::new(VerificationRepository::new(database.clone())),
        Arc::new(RandomCodeGenerator::new(VerificationConfig::code_length())),
        clock.clone(),
        Duration::minutes(VerificationConfig::code_ttl_minutes()),
    ));

    let secret = JwtConfig::secret();
    if secret.is_none() {
        warn!("⚠️ JWT_SECRET이 설정되지 않았습니다. 로그인이 비활성화됩니다");
    }

    IdentityService::new(
        Arc::new(AccountRepository::new(database)),
        PasswordService::new(PasswordConfig::bcrypt_cost()),
        Arc::new(TokenService::new(secret, clock.clone())),
        verification,
        distributor,
        clock,
        Duration::minutes(JwtConfig::ttl_minutes()),
    )
}

/// 인증 메일 작업 처리기를 백그라운드로 실행합니다
///
/// 메일 API가 설정되지 않으면 메일을 로그로만 남깁니다.
fn start_worker(redis_client: Arc<RedisClient>, distributor: Arc<dyn TaskDistributor>) {
    let sender: Arc<dyn EmailSender> = match (MailConfig::api_key(), MailConfig::sender_email()) {
        (Some(api_key), Some(sender_email)) => {
            info!("📧 메일 API 사용: {}", MailConfig::api_url());
            Arc::new(HttpEmailSender::new(
                MailConfig::api_url(),
                api_key,
                sender_email,
                MailConfig::sender_name(),
            ))
        }
        _ => {
            warn!("📧 MAIL_API_KEY / MAIL_SENDER_EMAIL 미설정, 메일은 로그로만 기록됩니다");
            Arc::new(LogEmailSender)
        }
    };

    let processor = Arc::new(TaskProcessor::new(
        sender,
        distributor,
        VerificationConfig::link_base_url(),
        QueueConfig::max_retries(),
        QueueConfig::retry_backoff(),
    ));

    actix_web::rt::spawn(processor.run(
        redis_client,
        QueueConfig::verify_email_queue(),
        QueueConfig::poll_timeout_secs(),
    ));
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, 잘못된 Rate Limiting 설정
async fn start_http_server(identity: web::Data<IdentityService>, database: web::Data<Database>) -> io::Result<()> {
    let bind_address = format!("{}:{}", ServerConfig::host(), ServerConfig::port());

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/v1/api/health", bind_address);

    // Rate Limiting 설정
    let rate_limit_config = load_rate_limit_config();
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(rate_limit_config.per_second)
        .burst_size(rate_limit_config.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 유효하지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        rate_limit_config.per_second,
        rate_limit_config.burst_size
    );

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(identity.clone())
            .app_data(database.clone())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .workers(4)
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    // 로거 초기화 전이므로 결과는 표준 에러로만 남깁니다.
    let result = match profile.as_str() {
        "prod" => dotenv::from_filename(".env.prod").map(|_| ()),
        "dev" => dotenv::from_filename(".env.dev").map(|_| ()),
        _ => dotenv().map(|_| ()),
    };

    if let Err(e) = result {
        eprintln!("환경 파일 로드 실패 (PROFILE={}): {}", profile, e);
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info,sqlx=warn")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info,sqlx=warn"));
}

/// 데이터베이스와 Redis 연결을 초기화합니다
///
/// 스키마를 적용하고 Arc로 래핑된 핸들을 반환합니다.
async fn initialize_data_stores() -> AppResult<(Arc<Database>, Arc<RedisClient>)> {
    info!("📡 데이터베이스 연결 중...");

    let database = Database::new().await.context("데이터베이스 연결 실패")?;
    database.migrate().await.context("스키마 적용 실패")?;
    info!("✅ 스키마 적용 완료: {}", DatabaseConfig::url());

    let redis_client = RedisClient::new(&QueueConfig::redis_url())
        .await
        .context("Redis 연결 실패")?;

    Ok((Arc::new(database), Arc::new(redis_client)))
}

/// CORS 설정을 구성합니다
///
/// # Allowed Origins
///
/// * `http://localhost:3000` - 프론트엔드 개발 서버
/// * `http://localhost:8080` - 자체 서버
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::AUTHORIZATION, header::ACCEPT, header::CONTENT_TYPE])
        .supports_credentials()
        .max_age(3600)
}

/// 환경변수에서 Rate Limiting 설정을 로드합니다
///
/// * `RATE_LIMIT_PER_SECOND` - 초당 허용 요청 수 (기본값: 100)
/// * `RATE_LIMIT_BURST_SIZE` - 버스트 허용량 (기본값: 200)
fn load_rate_limit_config() -> RateLimitConfig {
    let per_second = std::env::var("RATE_LIMIT_PER_SECOND")
        .unwrap_or_else(|_| "100".to_string())
        .parse::<u64>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_PER_SECOND 파싱 실패: {}. 기본값 100 사용", e);
            100
        });

    let burst_size = std::env::var("RATE_LIMIT_BURST_SIZE")
        .unwrap_or_else(|_| "200".to_string())
        .parse::<u32>()
        .unwrap_or_else(|e| {
            error!("RATE_LIMIT_BURST_SIZE 파싱 실패: {}. 기본값 200 사용", e);
            200
        });

    let config = RateLimitConfig {
        per_second,
        burst_size,
    };

    info!("Rate Limiting 설정 로드됨: {:?}", config);
    config
}
