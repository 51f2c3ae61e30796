//! Query resolver: narrows and orders list results.
//!
//! # 設計原則
//! - フィルタは「キーごとの完全一致、キー同士は AND」
//! - 未知のフィルタキーは無視する（クライアントの前方互換性）
//! - 並びは常に決定的: 同値は id 順でタイブレークする

use serde::{Deserialize, Serialize};

use super::errors::DocketError;
use super::status::TaskStatus;
use super::task::Task;

/// Equality constraints for list operations.
///
/// 認識するキーは `status` と `owner` のみ。`owner` は予約キー:
/// エンティティに owner フィールドがまだ存在しないため、指定された場合は
/// どのタスクにも一致しない。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    pub owner: Option<String>,
}

impl TaskFilter {
    /// Build a filter from loose key/value pairs (e.g. query-string params).
    ///
    /// Unrecognized keys are ignored; a bad `status` value is `InvalidField`.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, DocketError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut filter = Self::default();
        for (key, value) in pairs {
            match key {
                "status" => {
                    filter.status =
                        Some(value.parse().map_err(|reason: String| {
                            DocketError::InvalidField {
                                field: "status",
                                reason,
                            }
                        })?);
                }
                "owner" => filter.owner = Some(value.to_string()),
                _ => {}
            }
        }
        Ok(filter)
    }

    /// Exact-value match; keys combine with AND. No constraint matches
    /// everything.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(status) = self.status
            && task.status != status
        {
            return false;
        }
        // owner は予約キー: エンティティ側に値が無いので何にも一致しない
        if self.owner.is_some() {
            return false;
        }
        true
    }
}

/// Sort key for list results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    CreatedAt,
    UpdatedAt,
    Title,
    Status,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    Asc,
    Desc,
}

/// 1-based pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    pub number: u32,
    pub limit: u32,
}

impl Page {
    /// `number` / `limit` はどちらも 1 以上に正規化される。
    pub fn new(number: u32, limit: u32) -> Self {
        Self {
            number: number.max(1),
            limit: limit.max(1),
        }
    }

    fn offset(self) -> usize {
        self.number.saturating_sub(1) as usize * self.limit as usize
    }
}

/// Full list query: filter + search + sort + page.
///
/// `ListQuery::default()` は「全件、作成順」。
#[derive(Debug, Clone, Default)]
pub struct ListQuery {
    pub filter: TaskFilter,

    /// Case-insensitive substring match over title OR description.
    pub search: Option<String>,

    /// `None` = 作成順（同時刻は id 順）。この並びは契約であり、書き込みが
    /// 無ければ繰り返し呼んでも同じ列が返る。
    pub sort: Option<(SortKey, SortOrder)>,

    /// `None` = 全件。
    pub page: Option<Page>,
}

impl ListQuery {
    /// Everything, in creation order.
    pub fn all() -> Self {
        Self::default()
    }

    /// Shorthand for "all tasks with this status".
    pub fn with_status(status: TaskStatus) -> Self {
        Self {
            filter: TaskFilter {
                status: Some(status),
                owner: None,
            },
            ..Self::default()
        }
    }

    /// Resolve the query against an unordered snapshot of tasks.
    pub fn apply(&self, mut tasks: Vec<Task>) -> Vec<Task> {
        tasks.retain(|task| self.filter.matches(task) && self.matches_search(task));

        let (key, order) = self.sort.unwrap_or((SortKey::CreatedAt, SortOrder::Asc));
        tasks.sort_by(|a, b| {
            let ordering = match key {
                SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
                SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                SortKey::Title => a.title.cmp(&b.title),
                SortKey::Status => a.status.cmp(&b.status),
            };
            let ordering = match order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            };
            // 同値は id 順で安定化
            ordering.then_with(|| a.id.cmp(&b.id))
        });

        match self.page {
            Some(page) => tasks
                .into_iter()
                .skip(page.offset())
                .take(page.limit as usize)
                .collect(),
            None => tasks,
        }
    }

    fn matches_search(&self, task: &Task) -> bool {
        let Some(needle) = &self.search else {
            return true;
        };
        let needle = needle.to_lowercase();
        task.title.to_lowercase().contains(&needle)
            || task.description.to_lowercase().contains(&needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ids::TaskId;
    use chrono::{TimeZone, Utc};
    use ulid::Ulid;

    fn task_at(title: &str, status: TaskStatus, minute: u32) -> Task {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 12, minute, 0).unwrap();
        Task {
            id: TaskId::from_ulid(Ulid::new()),
            title: title.to_string(),
            description: String::new(),
            status,
            created_at: at,
            updated_at: at,
        }
    }

    fn titles(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.title.as_str()).collect()
    }

    #[test]
    fn no_filter_returns_everything_in_creation_order() {
        let tasks = vec![
            task_at("third", TaskStatus::Pending, 3),
            task_at("first", TaskStatus::Pending, 1),
            task_at("second", TaskStatus::Completed, 2),
        ];

        let result = ListQuery::all().apply(tasks);
        assert_eq!(titles(&result), vec!["first", "second", "third"]);
    }

    #[test]
    fn status_filter_matches_exactly() {
        // 1 pending + 1 completed のストアで completed だけが返る
        let tasks = vec![
            task_at("open", TaskStatus::Pending, 1),
            task_at("done", TaskStatus::Completed, 2),
        ];

        let result = ListQuery::with_status(TaskStatus::Completed).apply(tasks);
        assert_eq!(titles(&result), vec!["done"]);
    }

    #[test]
    fn empty_result_is_valid() {
        let tasks = vec![task_at("open", TaskStatus::Pending, 1)];
        let result = ListQuery::with_status(TaskStatus::Completed).apply(tasks);
        assert!(result.is_empty());
    }

    #[test]
    fn owner_filter_is_reserved_and_matches_nothing() {
        let tasks = vec![task_at("a", TaskStatus::Pending, 1)];
        let query = ListQuery {
            filter: TaskFilter {
                status: None,
                owner: Some("alice".to_string()),
            },
            ..ListQuery::default()
        };
        assert!(query.apply(tasks).is_empty());
    }

    #[test]
    fn from_pairs_ignores_unknown_keys() {
        let filter =
            TaskFilter::from_pairs([("status", "completed"), ("color", "red")]).unwrap();
        assert_eq!(filter.status, Some(TaskStatus::Completed));
        assert_eq!(filter.owner, None);
    }

    #[test]
    fn from_pairs_rejects_bad_status_value() {
        let err = TaskFilter::from_pairs([("status", "archived")]).unwrap_err();
        assert!(matches!(err, DocketError::InvalidField { field: "status", .. }));
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_description() {
        let mut with_description = task_at("chores", TaskStatus::Pending, 2);
        with_description.description = "Buy GROCERIES at the market".to_string();

        let tasks = vec![
            task_at("Buy groceries", TaskStatus::Pending, 1),
            with_description,
            task_at("unrelated", TaskStatus::Pending, 3),
        ];

        let query = ListQuery {
            search: Some("groceries".to_string()),
            ..ListQuery::default()
        };
        assert_eq!(titles(&query.apply(tasks)), vec!["Buy groceries", "chores"]);
    }

    #[test]
    fn equal_timestamps_are_tie_broken_by_id() {
        let a = task_at("a", TaskStatus::Pending, 1);
        let b = task_at("b", TaskStatus::Pending, 1);
        let expected_first = if a.id < b.id { "a" } else { "b" };

        let once = ListQuery::all().apply(vec![a.clone(), b.clone()]);
        let twice = ListQuery::all().apply(vec![b, a]);

        assert_eq!(once, twice);
        assert_eq!(once[0].title, expected_first);
    }

    #[test]
    fn sort_by_title_desc() {
        let tasks = vec![
            task_at("banana", TaskStatus::Pending, 1),
            task_at("cherry", TaskStatus::Pending, 2),
            task_at("apple", TaskStatus::Pending, 3),
        ];

        let query = ListQuery {
            sort: Some((SortKey::Title, SortOrder::Desc)),
            ..ListQuery::default()
        };
        assert_eq!(titles(&query.apply(tasks)), vec!["cherry", "banana", "apple"]);
    }

    #[test]
    fn pagination_windows_after_sort() {
        let tasks: Vec<Task> = (1..=5)
            .map(|i| task_at(&format!("t{i}"), TaskStatus::Pending, i))
            .collect();

        let page2 = ListQuery {
            page: Some(Page::new(2, 2)),
            ..ListQuery::default()
        };
        assert_eq!(titles(&page2.apply(tasks.clone())), vec!["t3", "t4"]);

        // 範囲外のページは空（エラーではない）
        let beyond = ListQuery {
            page: Some(Page::new(4, 2)),
            ..ListQuery::default()
        };
        assert!(beyond.apply(tasks).is_empty());
    }

    #[test]
    fn page_normalizes_zero_to_one() {
        let page = Page::new(0, 0);
        assert_eq!(page.number, 1);
        assert_eq!(page.limit, 1);
    }
}
