//! Errors - エラー分類
//!
//! すべての失敗は型付きで呼び出し元に返る。部分適用された変更や、握り潰さ
//! れるエラーは存在しない。リトライはここでは行わない（外側のトランス
//! ポート層の責務）。

use thiserror::Error;

use super::ids::TaskId;

/// ストアレベルの失敗（永続化コラボレータの障害・タイムアウト）
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("store call timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },
}

/// DocketError は task リソース操作の失敗を表す
#[derive(Debug, Error)]
pub enum DocketError {
    /// Malformed or missing required input.
    #[error("invalid field `{field}`: {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Update payload with no recognized field.
    #[error("update payload contains no recognized field")]
    EmptyPatch,

    /// Referenced id does not exist.
    #[error("task not found: {0}")]
    NotFound(TaskId),

    /// Persistence collaborator failed or timed out.
    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),
}

impl DocketError {
    /// Shorthand for `InvalidField`.
    pub fn invalid_field(field: &'static str, reason: impl Into<String>) -> Self {
        DocketError::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
