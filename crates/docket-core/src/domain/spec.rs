//! Input payloads for the task resource (create / update).
//!
//! These are intentionally loose at the edge: every field is optional and
//! `status` arrives as a plain string, so an out-of-range value becomes a
//! typed `InvalidField` failure instead of a deserialization error. Unknown
//! JSON fields are ignored (clients stay forward-compatible).
//!
//! 検証は純粋（副作用なし）。成功時は正規化済みペイロード
//! （[`ValidDraft`] / [`TaskChanges`]）を返す。

use serde::{Deserialize, Serialize};

use super::errors::DocketError;
use super::status::TaskStatus;

/// Maximum title length in characters.
pub const TITLE_MAX: usize = 255;

/// Maximum description length in characters.
pub const DESCRIPTION_MAX: usize = 1000;

/// Create payload (wire shape).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskDraft {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

/// Validated + normalized create payload.
#[derive(Debug, Clone)]
pub struct ValidDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
}

impl TaskDraft {
    /// Convenience constructor for simple "title only" use cases.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            description: None,
            status: None,
        }
    }

    /// Validate and normalize.
    ///
    /// - `title`: 必須。前後の空白を除去し、空なら `InvalidField`
    /// - `description`: 省略時は空文字列
    /// - `status`: 省略時は `pending`、指定時は 3 値のいずれか
    pub fn validate(&self) -> Result<ValidDraft, DocketError> {
        let title = match &self.title {
            Some(raw) => validate_title(raw)?,
            None => return Err(DocketError::invalid_field("title", "required")),
        };
        let description = match &self.description {
            Some(raw) => validate_description(raw)?,
            None => String::new(),
        };
        let status = match &self.status {
            Some(raw) => parse_status(raw)?,
            None => TaskStatus::Pending,
        };
        Ok(ValidDraft {
            title,
            description,
            status,
        })
    }
}

/// Update payload (wire shape). Sparse: an absent field keeps the current
/// value.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub status: Option<String>,
}

/// Validated update payload (field name -> optional new value).
#[derive(Debug, Clone)]
pub struct TaskChanges {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
}

impl TaskPatch {
    /// Validate.
    ///
    /// 認識するフィールド（title / description / status）が 1 つも無ければ
    /// `EmptyPatch`。存在するフィールドには create と同じ規則を適用する。
    pub fn validate(&self) -> Result<TaskChanges, DocketError> {
        if self.title.is_none() && self.description.is_none() && self.status.is_none() {
            return Err(DocketError::EmptyPatch);
        }
        Ok(TaskChanges {
            title: self.title.as_deref().map(validate_title).transpose()?,
            description: self
                .description
                .as_deref()
                .map(validate_description)
                .transpose()?,
            status: self.status.as_deref().map(parse_status).transpose()?,
        })
    }
}

fn validate_title(raw: &str) -> Result<String, DocketError> {
    let title = raw.trim();
    if title.is_empty() {
        return Err(DocketError::invalid_field("title", "must not be empty"));
    }
    if title.chars().count() > TITLE_MAX {
        return Err(DocketError::invalid_field(
            "title",
            format!("must be at most {TITLE_MAX} characters"),
        ));
    }
    Ok(title.to_string())
}

fn validate_description(raw: &str) -> Result<String, DocketError> {
    if raw.chars().count() > DESCRIPTION_MAX {
        return Err(DocketError::invalid_field(
            "description",
            format!("must be at most {DESCRIPTION_MAX} characters"),
        ));
    }
    Ok(raw.to_string())
}

fn parse_status(raw: &str) -> Result<TaskStatus, DocketError> {
    raw.parse()
        .map_err(|reason: String| DocketError::InvalidField {
            field: "status",
            reason,
        })
}
