//! TaskService - 検証・ID/時刻の払い出し・遷移チェック・ストア呼び出しの編成
//!
//! # 設計原則
//! - サービス自体は呼び出し間で状態を持たない（正本はストア側）
//! - 失敗は同期的に呼び出し元へ返す。内部リトライはしない
//!   （リトライやバックオフは外側のトランスポート層の責務）
//! - ストア呼び出しにはタイムアウトを掛け、超過は `StoreUnavailable` として
//!   浮上させる（沈黙した成功にはしない）
//! - update/delete は all-or-nothing: 検証に失敗した呼び出しはストア上の
//!   レコードを一切変更しない

use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::{DocketError, ListQuery, StoreError, Task, TaskDraft, TaskId, TaskPatch};
use crate::ports::{Clock, IdGenerator, TaskStore};

/// Default timeout for a single store call.
pub const DEFAULT_STORE_TIMEOUT: Duration = Duration::from_secs(5);

/// TaskService は task リソースの CRUD を編成する
///
/// 構築は [`ServiceBuilder`](crate::app::ServiceBuilder) から。
pub struct TaskService {
    store: Arc<dyn TaskStore>,
    ids: Arc<dyn IdGenerator>,
    clock: Arc<dyn Clock>,
    store_timeout: Duration,

    /// update/delete は read-modify-write なので、1 つのガードで
    /// このハンドル経由の変更操作を直列化する。
    write_guard: Mutex<()>,
}

impl TaskService {
    pub(crate) fn new(
        store: Arc<dyn TaskStore>,
        ids: Arc<dyn IdGenerator>,
        clock: Arc<dyn Clock>,
        store_timeout: Duration,
    ) -> Self {
        Self {
            store,
            ids,
            clock,
            store_timeout,
            write_guard: Mutex::new(()),
        }
    }

    /// Create a task: validate -> assign id/timestamps -> persist.
    ///
    /// 作成直後のレコードは `created_at == updated_at`。
    pub async fn create(&self, draft: &TaskDraft) -> Result<Task, DocketError> {
        let valid = draft.validate()?;
        let id = self.ids.generate_task_id();
        let now = self.clock.now();
        let task = Task::new(id, valid, now);

        self.store_call(self.store.put(task.clone())).await?;
        debug!(%id, title = %task.title, "task created");
        Ok(task)
    }

    /// Fetch one task by id.
    pub async fn get(&self, id: TaskId) -> Result<Task, DocketError> {
        self.store_call(self.store.get(id))
            .await?
            .ok_or(DocketError::NotFound(id))
    }

    /// List tasks narrowed by `query`.
    ///
    /// デフォルトの並びは作成順（同時刻は id 順）。書き込みが無ければ
    /// 繰り返し呼んでも同じ列が返る。
    pub async fn list(&self, query: &ListQuery) -> Result<Vec<Task>, DocketError> {
        let tasks = self.store_call(self.store.list()).await?;
        Ok(query.apply(tasks))
    }

    /// Update a task: fetch -> validate -> check transition -> apply -> persist.
    ///
    /// 対象が存在しなければ `NotFound`（検証より先）。検証に失敗した場合、
    /// ストア上のタスクは変更されない。status の同値遷移は no-op だが
    /// `updated_at` は更新される。
    pub async fn update(&self, id: TaskId, patch: &TaskPatch) -> Result<Task, DocketError> {
        let _guard = self.write_guard.lock().await;

        let mut task = self
            .store_call(self.store.get(id))
            .await?
            .ok_or(DocketError::NotFound(id))?;
        let changes = patch.validate()?;

        if let Some(next) = changes.status
            && !task.status.can_transition(next)
        {
            return Err(DocketError::InvalidField {
                field: "status",
                reason: format!("transition {} -> {next} is not allowed", task.status),
            });
        }

        task.apply(changes, self.clock.now());
        self.store_call(self.store.put(task.clone())).await?;
        debug!(%id, status = %task.status, "task updated");
        Ok(task)
    }

    /// Delete a task.
    ///
    /// 削除は一度きりのイベント: 同じ id への 2 回目の delete は `NotFound`。
    pub async fn delete(&self, id: TaskId) -> Result<(), DocketError> {
        let _guard = self.write_guard.lock().await;

        let existed = self.store_call(self.store.delete(id)).await?;
        if !existed {
            return Err(DocketError::NotFound(id));
        }
        debug!(%id, "task deleted");
        Ok(())
    }

    /// Bound a store call with the configured timeout.
    async fn store_call<T>(
        &self,
        call: impl Future<Output = Result<T, StoreError>>,
    ) -> Result<T, DocketError> {
        match tokio::time::timeout(self.store_timeout, call).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(err)) => {
                warn!(error = %err, "store call failed");
                Err(err.into())
            }
            Err(_) => {
                let timeout_ms = self.store_timeout.as_millis() as u64;
                warn!(timeout_ms, "store call timed out");
                Err(StoreError::Timeout { timeout_ms }.into())
            }
        }
    }
}
