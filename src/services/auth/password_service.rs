//! 비밀번호 해싱 서비스 (bcrypt)
//!
//! 호출마다 새 salt가 해시에 포함되므로 같은 평문도 매번 다른 해시가 됩니다.
//! bcrypt 연산은 `web::block`으로 블로킹 스레드 풀에서 실행되어 워커 스레드를 막지 않습니다.

use actix_web::web;
use log::debug;

use crate::errors::errors::{AppError, AppResult};

/// bcrypt 입력 한계 (bytes)
pub const MAX_PASSWORD_BYTES: usize = 72;

#[derive(Debug, Clone, Copy)]
pub struct PasswordService {
    cost: u32,
}

impl PasswordService {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 평문을 해시합니다.
    ///
    /// 72 bytes를 넘는 입력은 잘리지 않고 `CredentialError`로 거부됩니다.
    pub async fn hash(&self, plaintext: &str) -> AppResult<String> {
        if plaintext.len() > MAX_PASSWORD_BYTES {
            return Err(AppError::CredentialError(format!(
                "password exceeds {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }

        let start = std::time::Instant::now();
        let plaintext = plaintext.to_owned();
        let cost = self.cost;
        let hashed = web::block(move || bcrypt::hash(plaintext, cost))
            .await
            .map_err(|e| AppError::CredentialError(format!("해싱 작업 실행 실패: {}", e)))?
            .map_err(|e| AppError::CredentialError(format!("비밀번호 해싱 실패: {}", e)))?;
        debug!("Password hashing took: {:?}", start.elapsed());

        Ok(hashed)
    }

    /// 평문과 해시를 비교합니다. 해시 형식이 잘못되어도 실패 대신 false를 반환합니다.
    pub async fn verify(&self, plaintext: &str, hash: &str) -> bool {
        let plaintext = plaintext.to_owned();
        let hash = hash.to_owned();

        matches!(web::block(move || bcrypt::verify(plaintext, &hash)).await, Ok(Ok(true)))
    }
}
