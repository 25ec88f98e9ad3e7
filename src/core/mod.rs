//! # Core Module
//!
//! 서비스 전반에서 공유하는 기반 추상화를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`clock`] - 시간 소스
//! - **Clock**: 현재 시각을 제공하는 trait
//! - **SystemClock**: 운영 환경용 시스템 시계
//! - **ManualClock**: TTL 경계 테스트용 수동 시계
//!
//! ## 의존성 관리
//!
//! 모든 컴포넌트는 `main`에서 명시적으로 생성되어 `Arc` 핸들로 주입됩니다.
//! 프로세스 전역 싱글톤은 사용하지 않습니다.
//!
//! ```rust,ignore
//! let clock: Arc<dyn Clock> = Arc::new(SystemClock);
//! let tokens = Arc::new(TokenService::new(JwtConfig::secret(), clock.clone()));
//! ```

pub mod clock;

pub use clock::*;
