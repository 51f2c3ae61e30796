//! Domain model for the task resource.
//!
//! # モジュール構成
//! - **ids**: TaskId（ULID ベース）
//! - **status**: 状態と遷移ポリシー
//! - **task**: Task レコード本体
//! - **spec**: 入力ペイロード（draft / patch）と検証
//! - **query**: フィルタ・検索・整列・ページング
//! - **errors**: エラー分類

pub mod errors;
pub mod ids;
pub mod query;
pub mod spec;
pub mod status;
pub mod task;

pub use self::errors::{DocketError, StoreError};
pub use self::ids::TaskId;
pub use self::query::{ListQuery, Page, SortKey, SortOrder, TaskFilter};
pub use self::spec::{TaskChanges, TaskDraft, TaskPatch, ValidDraft, DESCRIPTION_MAX, TITLE_MAX};
pub use self::status::TaskStatus;
pub use self::task::Task;
