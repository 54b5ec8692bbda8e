//! Read-only filtering over the task collection.
//!
//! [`TaskFilter`] is a conjunctive predicate over independent dimensions:
//! priority set, category set, completion tri-state, due-date bucket, and
//! assignee set. An empty or unset dimension imposes no constraint. The
//! filter never mutates the collection; `today` is an explicit argument so
//! the predicate stays deterministic.

use chrono::NaiveDate;

use crate::task::{Priority, Task};

/// Due-date bucket a filter can constrain to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueBucket {
    /// Due exactly today.
    Today,
    /// Due between today and seven days from today, inclusive.
    Week,
}

impl std::fmt::Display for DueBucket {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Today => write!(f, "today"),
            Self::Week => write!(f, "this week"),
        }
    }
}

/// Filter state over the task collection.
///
/// Not persisted; lives only as long as the filter panel. All dimensions
/// combine conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Priorities to include; empty means all.
    pub priorities: Vec<Priority>,
    /// Categories to include; empty means all.
    pub categories: Vec<String>,
    /// Completion constraint; `None` means both.
    pub completed: Option<bool>,
    /// Due-date bucket; `None` means all due dates (and none).
    pub due: Option<DueBucket>,
    /// Assignees to include (any overlap matches); empty means all.
    pub assignees: Vec<String>,
}

impl TaskFilter {
    /// Returns true if no dimension is constrained.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.priorities.is_empty()
            && self.categories.is_empty()
            && self.completed.is_none()
            && self.due.is_none()
            && self.assignees.is_empty()
    }

    /// Resets every dimension to unconstrained.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Tests a single task against the conjunction of all active dimensions.
    #[must_use]
    pub fn matches(&self, task: &Task, today: NaiveDate) -> bool {
        if let Some(completed) = self.completed
            && task.completed != completed
        {
            return false;
        }
        if !self.priorities.is_empty() && !self.priorities.contains(&task.priority) {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&task.category) {
            return false;
        }
        if !self.assignees.is_empty()
            && !task.assignees.iter().any(|a| self.assignees.contains(a))
        {
            return false;
        }
        if let Some(bucket) = self.due {
            let Some(due) = task.due_date else {
                return false;
            };
            match bucket {
                DueBucket::Today => {
                    if due != today {
                        return false;
                    }
                }
                DueBucket::Week => {
                    let week_end = today
                        .checked_add_days(chrono::Days::new(7))
                        .unwrap_or(NaiveDate::MAX);
                    if due < today || due > week_end {
                        return false;
                    }
                }
            }
        }
        true
    }

    /// Applies the filter to a task slice, preserving order.
    #[must_use]
    pub fn apply<'a>(&self, tasks: &'a [Task], today: NaiveDate) -> Vec<&'a Task> {
        tasks.iter().filter(|t| self.matches(t, today)).collect()
    }
}
