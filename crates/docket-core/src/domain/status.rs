//! Task status state machine.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a task.
///
/// 状態遷移（現行ポリシー）:
/// - pending -> in_progress / completed
/// - in_progress -> completed / pending
/// - completed -> pending / in_progress（再オープン可）
/// - 同じ値への遷移は no-op（ただし `updated_at` は更新される）
///
/// Design note: Using an enum ensures exhaustive matching and prevents
/// invalid states. Only unknown *values* are rejected; every transition
/// between the three states is currently legal.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Created, not started yet (the initial state).
    #[default]
    Pending,

    /// Being worked on.
    InProgress,

    /// Finished. Not terminal: a completed task may be reopened.
    Completed,
}

impl TaskStatus {
    /// 取りうる値すべて（ライフサイクル順）
    pub const ALL: [TaskStatus; 3] = [
        TaskStatus::Pending,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ];

    /// Wire representation (snake_case, serde と同じ)
    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }

    /// `self` から `to` への遷移が許可されているかを返す。
    ///
    /// 現行ポリシーは any -> any を許可（completed の再オープンを含む）。
    /// ワークフローを厳しくする場合はこの表だけを書き換える。
    pub fn can_transition(self, _to: TaskStatus) -> bool {
        true
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(TaskStatus::Pending),
            "in_progress" => Ok(TaskStatus::InProgress),
            "completed" => Ok(TaskStatus::Completed),
            other => Err(format!(
                "unknown status {other:?} (expected one of: pending, in_progress, completed)"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::pending("pending", TaskStatus::Pending)]
    #[case::in_progress("in_progress", TaskStatus::InProgress)]
    #[case::completed("completed", TaskStatus::Completed)]
    fn parses_known_values(#[case] raw: &str, #[case] expected: TaskStatus) {
        assert_eq!(raw.parse::<TaskStatus>().unwrap(), expected);
    }

    #[rstest]
    #[case::unknown("archived")]
    #[case::wrong_case("Pending")]
    #[case::empty("")]
    fn rejects_unknown_values(#[case] raw: &str) {
        assert!(raw.parse::<TaskStatus>().is_err());
    }

    #[test]
    fn default_is_pending() {
        assert_eq!(TaskStatus::default(), TaskStatus::Pending);
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&TaskStatus::InProgress).unwrap(),
            "\"in_progress\""
        );
        let back: TaskStatus = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(back, TaskStatus::Completed);
    }

    #[test]
    fn every_transition_is_currently_allowed() {
        // 再オープン（completed -> pending/in_progress）も含めて全ペア許可
        for from in TaskStatus::ALL {
            for to in TaskStatus::ALL {
                assert!(from.can_transition(to), "{from} -> {to} should be allowed");
            }
        }
    }
}
