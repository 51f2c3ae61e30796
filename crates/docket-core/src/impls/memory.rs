//! In-memory task store implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::domain::{StoreError, Task, TaskId};
use crate::ports::TaskStore;

/// In-memory store state.
struct InMemoryState {
    /// All task records (single source of truth).
    tasks: HashMap<TaskId, Task>,
}

/// In-memory task store (development / tests).
///
/// Design:
/// - 状態全体を 1 つの Mutex で包む。各操作はロック内で完結するので
///   呼び出し単位では原子的（同一ハンドルの read-your-writes もここから従う）
/// - `Clone` はハンドルの共有（同じ状態を指す）
#[derive(Clone)]
pub struct InMemoryTaskStore {
    state: Arc<Mutex<InMemoryState>>,
}

impl InMemoryTaskStore {
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(InMemoryState {
                tasks: HashMap::new(),
            })),
        }
    }

    /// Number of stored tasks (tests / observability).
    pub async fn len(&self) -> usize {
        self.state.lock().await.tasks.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

impl Default for InMemoryTaskStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn put(&self, task: Task) -> Result<(), StoreError> {
        self.state.lock().await.tasks.insert(task.id, task);
        Ok(())
    }

    async fn get(&self, id: TaskId) -> Result<Option<Task>, StoreError> {
        Ok(self.state.lock().await.tasks.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Task>, StoreError> {
        Ok(self.state.lock().await.tasks.values().cloned().collect())
    }

    async fn delete(&self, id: TaskId) -> Result<bool, StoreError> {
        Ok(self.state.lock().await.tasks.remove(&id).is_some())
    }
}
