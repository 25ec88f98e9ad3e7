//! # Dispatch Hook Module
//!
//! 계정 생성 트랜잭션과 외부 부수 효과(인증 메일)를 묶는 계층입니다.
//!
//! ```text
//! BEGIN
//!   INSERT users
//!   INSERT profile
//!   hook.dispatch()   ← 코드 발급 + 작업 등록, 실패 시 ROLLBACK
//! COMMIT
//! ```

pub mod hook;
pub mod verification_hook;

pub use hook::{DispatchContext, DispatchHook, NoopDispatchHook};
pub use verification_hook::VerificationDispatchHook;
