//! # Account HTTP Handlers
//!
//! 회원가입과 이메일 인증 엔드포인트입니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/v1/api/signup` | 계정 생성 + 인증 메일 예약 | 201 Created |
//! | `GET` | `/v1/api/verify-email?email=&secret_code=` | 인증 코드 소비 | 200 OK |
//! | `POST` | `/v1/api/verify-email/resend` | 새 인증 코드 발급 | 202 Accepted |
//!
//! 입력 검증은 서비스 호출 전에 `validator`로 수행합니다.

use actix_web::{HttpResponse, get, post, web};
use serde_json::json;
use validator::Validate;

use crate::domain::dto::users::request::{ResendVerificationRequest, SignUpRequest, VerifyEmailQuery};
use crate::domain::dto::users::response::{ApiResponse, SignUpResponse};
use crate::errors::errors::AppError;
use crate::services::users::IdentityService;

/// 회원가입
///
/// ```bash
/// curl -X POST http://localhost:8080/v1/api/signup \
///   -H "Content-Type: application/json" \
///   -d '{"first_name":"Ada","last_name":"Lovelace","email":"a@x.com","password":"secret1"}'
/// ```
#[post("/signup")]
pub async fn sign_up(
    service: web::Data<IdentityService>,
    payload: web::Json<SignUpRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let account_id = service.sign_up(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::ok(
        "Registration successful. Please check your email to verify your account.",
        SignUpResponse { account_id },
    )))
}

#[get("/verify-email")]
pub async fn verify_email(
    service: web::Data<IdentityService>,
    query: web::Query<VerifyEmailQuery>,
) -> Result<HttpResponse, AppError> {
    query.validate()?;

    service.verify_email(&query.email, &query.secret_code).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Email verified successfully"
    })))
}

#[post("/verify-email/resend")]
pub async fn resend_verification(
    service: web::Data<IdentityService>,
    payload: web::Json<ResendVerificationRequest>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    service.resend_verification(&payload.email).await?;

    Ok(HttpResponse::Accepted().json(json!({
        "success": true,
        "message": "A new verification email is on its way"
    })))
}
