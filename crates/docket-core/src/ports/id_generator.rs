//! IdGenerator port - ID 生成の抽象化
//!
//! ID の払い出しを trait にしておくと、テストで決定的な生成器に
//! 差し替えられます。

use ulid::Ulid;

use crate::domain::TaskId;
use crate::ports::Clock;

/// IdGenerator は新しい TaskId を払い出す
///
/// # 不変条件
/// - 払い出した ID は一意（削除後も再利用しない）
///
/// # Thread Safety
/// - `Send + Sync` を要求（複数リクエストから使える）
pub trait IdGenerator: Send + Sync {
    /// Task ID を生成
    fn generate_task_id(&self) -> TaskId;
}

/// UlidGenerator は ULID ベースの ID 生成器
///
/// Clock から得た時刻 + ランダム成分で ULID を組み立てます。
/// FixedClock と組み合わせると timestamp 部分が決定的になります。
pub struct UlidGenerator<C> {
    clock: C,
}

impl<C: Clock> UlidGenerator<C> {
    /// 新しい UlidGenerator を作成
    pub fn new(clock: C) -> Self {
        Self { clock }
    }
}

impl<C: Clock> IdGenerator for UlidGenerator<C> {
    fn generate_task_id(&self) -> TaskId {
        let timestamp_ms = self.clock.now().timestamp_millis() as u64;
        let ulid = Ulid::from_parts(timestamp_ms, rand::random());
        TaskId::from(ulid)
    }
}
