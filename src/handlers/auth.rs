//! Authentication HTTP Handlers
//!
//! 로그인과 현재 계정 조회 엔드포인트입니다.
//!
//! - `POST /v1/api/login` - 이메일/비밀번호 로그인, 5분짜리 Bearer 토큰 발급
//! - `GET /v1/api/me` - Bearer 토큰으로 계정 조회
use actix_web::{HttpRequest, HttpResponse, get, post, web};
use validator::Validate;

use crate::domain::dto::users::request::LoginRequest;
use crate::domain::dto::users::response::{AccountResponse, ApiResponse};
use crate::errors::errors::AppError;
use crate::services::users::IdentityService;

/// 로컬 로그인 핸들러
///
/// # Endpoint
/// `POST /v1/api/login`
#[post("/login")]
pub async fn login(
    service: web::Data<IdentityService>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let response = service.login(&payload.email, &payload.password).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("Login successful", response)))
}

/// 현재 인증된 계정 정보 조회
///
/// # Endpoint
/// `GET /v1/api/me`
#[get("/me")]
pub async fn me(
    service: web::Data<IdentityService>,
    req: HttpRequest,
) -> Result<HttpResponse, AppError> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::InvalidToken("missing authorization header".to_string()))?;

    let token = service.tokens().extract_bearer_token(auth_header)?;
    let account = service.authenticate(token).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::ok("OK", AccountResponse::from(account))))
}
