//! 회원가입 요청 DTO
//!
//! 계정 필드와 프로필 필드를 한 번에 받습니다.
//! 선택 필드의 빈 문자열은 역직렬화 단계에서 `None`으로 정리됩니다.

use chrono::NaiveDate;
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::utils::string_utils::deserialize_optional_string;

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignUpRequest {
    #[validate(length(min = 1, max = 100, message = "first_name is required"))]
    pub first_name: String,

    #[validate(length(min = 1, max = 100, message = "last_name is required"))]
    pub last_name: String,

    #[validate(email(message = "email must be a valid email address"))]
    pub email: String,

    /// 평문 비밀번호. bcrypt 입력 한계(72 bytes)는 서비스 계층에서 검사합니다.
    #[validate(length(min = 6, message = "password must be at least 6 characters"))]
    pub password: String,

    /// `YYYY-MM-DD`
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_date_of_birth"))]
    pub date_of_birth: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(length(max = 1000, message = "about must be at most 1000 characters"))]
    pub about: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(url(message = "photo must be a valid URL"))]
    pub photo: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub city: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub country: Option<String>,

    /// JSON 문서 문자열
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_json_document"))]
    pub settings: Option<String>,

    /// JSON 문서 문자열
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    #[validate(custom(function = "validate_json_document"))]
    pub socials: Option<String>,
}

fn validate_date_of_birth(value: &str) -> Result<(), ValidationError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| {
            ValidationError::new("invalid_date")
                .with_message("date_of_birth must be formatted as YYYY-MM-DD".into())
        })
}

fn validate_json_document(value: &str) -> Result<(), ValidationError> {
    serde_json::from_str::<serde_json::Value>(value)
        .map(|_| ())
        .map_err(|_| ValidationError::new("invalid_json").with_message("value must be valid JSON".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> SignUpRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_minimal_request_is_valid() {
        let request = parse(
            r#"{"first_name":"Ada","last_name":"Lovelace","email":"a@x.com","password":"secret1"}"#,
        );

        assert!(request.validate().is_ok());
        assert_eq!(request.city, None);
    }

    #[test]
    fn test_blank_optional_fields_become_none() {
        let request = parse(
            r#"{"first_name":"Ada","last_name":"Lovelace","email":"a@x.com","password":"secret1",
                "photo":"  ","date_of_birth":"","settings":" "}"#,
        );

        assert!(request.validate().is_ok());
        assert_eq!(request.photo, None);
        assert_eq!(request.date_of_birth, None);
        assert_eq!(request.settings, None);
    }

    #[test]
    fn test_rejects_short_password_and_bad_email() {
        let request = parse(r#"{"first_name":"Ada","last_name":"L","email":"nope","password":"12345"}"#);

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("email"));
        assert!(fields.contains_key("password"));
    }

    #[test]
    fn test_rejects_malformed_profile_fields() {
        let request = parse(
            r#"{"first_name":"Ada","last_name":"L","email":"a@x.com","password":"secret1",
                "date_of_birth":"03/12/1990","photo":"not a url","socials":"{broken"}"#,
        );

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("date_of_birth"));
        assert!(fields.contains_key("photo"));
        assert!(fields.contains_key("socials"));
    }

    #[test]
    fn test_accepts_well_formed_profile_fields() {
        let request = parse(
            r#"{"first_name":"Ada","last_name":"L","email":"a@x.com","password":"secret1",
                "date_of_birth":"1990-03-12","photo":"https://cdn.example.com/a.png",
                "settings":"{\"theme\":\"dark\"}","socials":"[]"}"#,
        );

        assert!(request.validate().is_ok());
    }
}
