//! Task record: the single managed resource.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use super::ids::TaskId;
use super::spec::{TaskChanges, ValidDraft};
use super::status::TaskStatus;

/// A task record.
///
/// Design:
/// - 構築は `Task::new`（検証済み draft のみ受け取るので、空 title は
///   この層では表現できない）、変更は `Task::apply` 経由。
/// - `created_at <= updated_at` を常に保つ。
/// - Serialize すると status は snake_case 文字列、時刻は RFC 3339
///   （固定・ソート可能な表現）になる。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,

    /// Set once at creation, immutable thereafter.
    pub created_at: DateTime<Utc>,

    /// Refreshed on every accepted mutation.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Create a new task from a validated draft.
    ///
    /// 作成直後は `created_at == updated_at`。
    pub fn new(id: TaskId, draft: ValidDraft, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            status: draft.status,
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a validated patch and refresh `updated_at`.
    ///
    /// 存在するフィールドだけを上書きする（sparse update）。
    pub fn apply(&mut self, changes: TaskChanges, now: DateTime<Utc>) {
        if let Some(title) = changes.title {
            self.title = title;
        }
        if let Some(description) = changes.description {
            self.description = description;
        }
        if let Some(status) = changes.status {
            self.status = status;
        }
        self.touch(now);
    }

    /// Refresh `updated_at`.
    ///
    /// 固定クロックや精度の粗いクロックでは `now` が前回と同時刻になり得る。
    /// 受理された変更のたびに `updated_at` が厳密に増えるよう、最低でも
    /// 1ns は前回より進める。
    pub fn touch(&mut self, now: DateTime<Utc>) {
        let floor = self.updated_at + Duration::nanoseconds(1);
        self.updated_at = now.max(floor);
    }
}
