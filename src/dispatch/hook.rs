//! 디스패치 훅 계약
//!
//! 계정 생성 트랜잭션의 마지막 쓰기 이후, 커밋 결정 이전에 정확히 한 번 호출됩니다.
//! 훅이 실패하면 트랜잭션 전체가 롤백됩니다.

use async_trait::async_trait;
use sqlx::SqliteConnection;

use crate::domain::entities::users::NewAccount;
use crate::errors::errors::AppResult;

/// 훅 호출 시 전달되는 문맥
///
/// `conn`은 아직 커밋되지 않은 생성 트랜잭션의 커넥션입니다.
/// 여기에 쓴 내용은 계정과 함께 커밋되거나 함께 롤백됩니다.
pub struct DispatchContext<'a> {
    pub account_id: i64,
    /// 회원가입 페이로드
    pub account: &'a NewAccount,
    pub conn: &'a mut SqliteConnection,
}

/// "이 계정 데이터가 준비되었으니 외부에 알린다"는 부수 효과
///
/// 게이트웨이가 소유하지 않고 호출자가 생성 작업에 주입합니다.
/// 호출은 동기적이며 트랜잭션 데드라인을 공유합니다.
#[async_trait]
pub trait DispatchHook: Send + Sync {
    async fn dispatch(&self, ctx: DispatchContext<'_>) -> AppResult<()>;
}

/// 아무 일도 하지 않는 훅
///
/// 외부 알림이 필요 없는 계정 생성에 사용합니다.
pub struct NoopDispatchHook;

#[async_trait]
impl DispatchHook for NoopDispatchHook {
    async fn dispatch(&self, _ctx: DispatchContext<'_>) -> AppResult<()> {
        Ok(())
    }
}
