//! TaskStore port - 永続化コラボレータの契約
//!
//! # 設計原則
//! - ストアは不透明: ここでは契約（put/get/list/delete）だけを定義する
//! - 同一ハンドル内の read-your-writes を仮定する。それ以上の
//!   セッション間順序やトランザクションは仮定しない
//! - `list` は順序を保証しない（並びはクエリ解決側の責務）
//! - 呼び出しのタイムアウトは呼び出し側（TaskService）が掛ける

use async_trait::async_trait;

use crate::domain::{StoreError, Task, TaskId};

/// TaskStore は Task レコードの正本（source of truth）
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Insert or replace a task (upsert keyed by id).
    async fn put(&self, task: Task) -> Result<(), StoreError>;

    /// Fetch a task by id. `None` = absent（エラーではない）。
    async fn get(&self, id: TaskId) -> Result<Option<Task>, StoreError>;

    /// All tasks, in no particular order.
    async fn list(&self) -> Result<Vec<Task>, StoreError>;

    /// Remove a task. Returns whether it existed.
    async fn delete(&self, id: TaskId) -> Result<bool, StoreError>;
}
