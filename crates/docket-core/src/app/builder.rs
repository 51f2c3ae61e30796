//! ServiceBuilder - サービスの構築とワイヤリング
//!
//! # Fail-fast 設計
//! - ストアは必須（明示的な依存注入）。未指定なら build() がエラーを返す
//! - Clock / IdGenerator は省略時にシステム実装を使う

use std::sync::Arc;
use std::time::Duration;

use crate::app::service::{DEFAULT_STORE_TIMEOUT, TaskService};
use crate::ports::{Clock, IdGenerator, SystemClock, TaskStore, UlidGenerator};

/// BuildError はサービス構築時のエラー
#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("no task store was provided. Call `store(...)` with a TaskStore implementation.")]
    MissingStore,
}

/// ServiceBuilder は TaskService を組み立てる
///
/// # 使用例
/// ```ignore
/// let service = ServiceBuilder::new()
///     .store(Arc::new(InMemoryTaskStore::new()))
///     .build()?;
/// ```
pub struct ServiceBuilder {
    store: Option<Arc<dyn TaskStore>>,
    ids: Option<Arc<dyn IdGenerator>>,
    clock: Option<Arc<dyn Clock>>,
    store_timeout: Duration,
}

impl ServiceBuilder {
    /// 新しい ServiceBuilder を作成
    pub fn new() -> Self {
        Self {
            store: None,
            ids: None,
            clock: None,
            store_timeout: DEFAULT_STORE_TIMEOUT,
        }
    }

    /// 必須: 永続化ストアを注入する
    pub fn store(mut self, store: Arc<dyn TaskStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// ID 生成器を差し替える（省略時は ULID + システム時計）
    pub fn id_generator(mut self, ids: Arc<dyn IdGenerator>) -> Self {
        self.ids = Some(ids);
        self
    }

    /// 時計を差し替える（省略時はシステム時計）
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// ストア呼び出し 1 回あたりのタイムアウト（デフォルト 5 秒）
    pub fn store_timeout(mut self, timeout: Duration) -> Self {
        self.store_timeout = timeout;
        self
    }

    /// Build the service.
    ///
    /// # 検証
    /// - ストア未指定なら `BuildError::MissingStore`
    pub fn build(self) -> Result<TaskService, BuildError> {
        let store = self.store.ok_or(BuildError::MissingStore)?;
        let ids = self
            .ids
            .unwrap_or_else(|| Arc::new(UlidGenerator::new(SystemClock)));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Ok(TaskService::new(store, ids, clock, self.store_timeout))
    }
}

impl Default for ServiceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
