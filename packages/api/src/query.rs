//! # Dashboard task query — filter, search, sort
//!
//! The dashboard fetches the caller's task list once and then refines it
//! entirely client-side, with no further network round-trips. [`TaskQuery`]
//! captures the state of the three dashboard controls and [`TaskQuery::apply`]
//! runs them in order:
//!
//! 1. status filter (all / ongoing / completed),
//! 2. case-insensitive substring search over title and description,
//! 3. stable sort by creation time, deadline, or priority.
//!
//! Missing deadline or priority values sort lowest, so in ascending order
//! tasks without the field come first and in descending order they come last.

use serde::{Deserialize, Serialize};

use crate::models::TaskInfo;

/// Completion-status filter applied before search and sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StatusFilter {
    #[default]
    All,
    Ongoing,
    Completed,
}

impl StatusFilter {
    /// Value attribute used by the dashboard `<select>`.
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Ongoing => "ongoing",
            StatusFilter::Completed => "completed",
        }
    }

    /// Inverse of [`StatusFilter::as_str`]; unknown values mean no filter.
    pub fn parse(value: &str) -> Self {
        match value {
            "ongoing" => StatusFilter::Ongoing,
            "completed" => StatusFilter::Completed,
            _ => StatusFilter::All,
        }
    }

    fn matches(&self, task: &TaskInfo) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Ongoing => !task.completed,
            StatusFilter::Completed => task.completed,
        }
    }
}

/// Field the task list is ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Created,
    Deadline,
    Priority,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Created => "created",
            SortKey::Deadline => "deadline",
            SortKey::Priority => "priority",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "deadline" => SortKey::Deadline,
            "priority" => SortKey::Priority,
            _ => SortKey::Created,
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    Ascending,
    Descending,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Ascending => "asc",
            SortOrder::Descending => "desc",
        }
    }

    pub fn parse(value: &str) -> Self {
        match value {
            "desc" => SortOrder::Descending,
            _ => SortOrder::Ascending,
        }
    }

    /// Flip the direction (the dashboard's order toggle).
    pub fn toggled(&self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// The combined state of the dashboard's filter, search, and sort controls.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskQuery {
    pub status: StatusFilter,
    pub search: String,
    pub sort_key: SortKey,
    pub order: SortOrder,
}

impl TaskQuery {
    /// Apply the query to an already-fetched task list.
    ///
    /// The sort is stable: tasks that compare equal keep their fetched order.
    pub fn apply(&self, tasks: &[TaskInfo]) -> Vec<TaskInfo> {
        let needle = self.search.trim().to_lowercase();
        let mut out: Vec<TaskInfo> = tasks
            .iter()
            .filter(|t| self.status.matches(t))
            .filter(|t| {
                needle.is_empty()
                    || t.title.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();

        out.sort_by(|a, b| {
            // Option's ordering puts None first, which is exactly "missing
            // sorts lowest".
            let ord = match self.sort_key {
                SortKey::Created => a.created_at.cmp(&b.created_at),
                SortKey::Deadline => a.deadline.cmp(&b.deadline),
                SortKey::Priority => a.priority.cmp(&b.priority),
            };
            match self.order {
                SortOrder::Ascending => ord,
                SortOrder::Descending => ord.reverse(),
            }
        });

        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(id: &str, title: &str, completed: bool) -> TaskInfo {
        TaskInfo {
            id: id.to_string(),
            title: title.to_string(),
            description: String::new(),
            completed,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            deadline: None,
            priority: None,
        }
    }

    fn ids(tasks: &[TaskInfo]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn status_filter_selects_completed_only() {
        let tasks = vec![task("a", "ongoing one", false), task("b", "done one", true)];
        let query = TaskQuery {
            status: StatusFilter::Completed,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&tasks)), vec!["b"]);
    }

    #[test]
    fn search_is_case_insensitive_on_title() {
        let tasks = vec![task("a", "Buy milk", false), task("b", "Read book", false)];
        let query = TaskQuery {
            search: "buy".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&tasks)), vec!["a"]);
    }

    #[test]
    fn search_matches_description_too() {
        let mut t = task("a", "Errand", false);
        t.description = "Buy MILK at the shop".to_string();
        let tasks = vec![t, task("b", "Read book", false)];
        let query = TaskQuery {
            search: "milk".to_string(),
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&tasks)), vec!["a"]);
    }

    #[test]
    fn priority_sort_ascending_and_descending() {
        let mut tasks = vec![task("a", "t", false), task("b", "t", false), task("c", "t", false)];
        tasks[0].priority = Some(3);
        tasks[1].priority = Some(1);
        tasks[2].priority = Some(2);

        let mut query = TaskQuery {
            sort_key: SortKey::Priority,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&tasks)), vec!["b", "c", "a"]);

        query.order = SortOrder::Descending;
        assert_eq!(ids(&query.apply(&tasks)), vec!["a", "c", "b"]);
    }

    #[test]
    fn missing_priority_sorts_lowest() {
        let mut tasks = vec![task("a", "t", false), task("b", "t", false)];
        tasks[0].priority = Some(1);
        let query = TaskQuery {
            sort_key: SortKey::Priority,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&tasks)), vec!["b", "a"]);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let tasks = vec![task("a", "t", false), task("b", "t", false), task("c", "t", false)];
        // All three share the same creation time, so the fetched order holds.
        let query = TaskQuery::default();
        assert_eq!(ids(&query.apply(&tasks)), vec!["a", "b", "c"]);
    }

    #[test]
    fn deadline_sort_orders_by_date() {
        let mut tasks = vec![task("a", "t", false), task("b", "t", false)];
        tasks[0].deadline = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        tasks[1].deadline = Some(Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap());
        let query = TaskQuery {
            sort_key: SortKey::Deadline,
            ..Default::default()
        };
        assert_eq!(ids(&query.apply(&tasks)), vec!["b", "a"]);
    }

    #[test]
    fn filter_search_and_sort_compose() {
        let mut tasks = vec![
            task("a", "Buy milk", false),
            task("b", "Buy bread", false),
            task("c", "Buy cheese", true),
        ];
        tasks[0].priority = Some(2);
        tasks[1].priority = Some(1);

        let query = TaskQuery {
            status: StatusFilter::Ongoing,
            search: "buy".to_string(),
            sort_key: SortKey::Priority,
            order: SortOrder::Ascending,
        };
        assert_eq!(ids(&query.apply(&tasks)), vec!["b", "a"]);
    }

    #[test]
    fn control_values_round_trip() {
        for status in [StatusFilter::All, StatusFilter::Ongoing, StatusFilter::Completed] {
            assert_eq!(StatusFilter::parse(status.as_str()), status);
        }
        for key in [SortKey::Created, SortKey::Deadline, SortKey::Priority] {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
        assert_eq!(SortOrder::Ascending.toggled(), SortOrder::Descending);
    }
}
