//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트는 `/v1/api` 아래에 있습니다.
//!
//! ```text
//! POST /v1/api/signup
//! POST /v1/api/login
//! GET  /v1/api/verify-email?email=&secret_code=
//! POST /v1/api/verify-email/resend
//! GET  /v1/api/me              (Authorization: Bearer <token>)
//! GET  /v1/api/health
//! ```
//!
//! 핸들러는 `web::Data<IdentityService>`와 `web::Data<Database>`를 사용하므로
//! 앱 생성 시 둘 다 등록해야 합니다.
//!
//! ```rust,ignore
//! App::new()
//!     .app_data(identity.clone())
//!     .app_data(database.clone())
//!     .configure(configure_all_routes)
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::db::Database;
use crate::errors::errors::AppError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 본문과 쿼리 파싱 실패도 `validation_error` 형식으로 응답하도록 설정합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/v1/api")
            .app_data(
                web::JsonConfig::default()
                    .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
            )
            .app_data(
                web::QueryConfig::default()
                    .error_handler(|err, _req| AppError::ValidationError(err.to_string()).into()),
            )
            .service(health_check)
            .service(handlers::users::sign_up)
            .service(handlers::users::verify_email)
            .service(handlers::users::resend_verification)
            .service(handlers::auth::login)
            .service(handlers::auth::me),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 데이터베이스에 `SELECT 1`을 보내 응답하면 `healthy`, 아니면 503을 반환합니다.
///
/// ```bash
/// curl http://localhost:8080/v1/api/health
/// ```
#[get("/health")]
async fn health_check(database: web::Data<Database>) -> HttpResponse {
    let database_status = match database.ping().await {
        Ok(()) => "up",
        Err(e) => {
            log::warn!("헬스체크 실패: {}", e);
            "down"
        }
    };

    let body = json!({
        "status": if database_status == "up" { "healthy" } else { "unhealthy" },
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database": database_status,
    });

    if database_status == "up" {
        HttpResponse::Ok().json(body)
    } else {
        HttpResponse::ServiceUnavailable().json(body)
    }
}
