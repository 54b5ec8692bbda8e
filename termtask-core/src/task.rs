//! Task data model for `TermTask`.
//!
//! Defines the [`Task`] record with its scheduling and categorization
//! metadata, the [`Recurrence`] descriptor and its invariant, and the
//! [`TaskDraft`] snapshot of pending entry-form fields a task is created
//! from. These types are exactly the shape persisted in the snapshot file.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum allowed task text length in characters.
pub const MAX_TASK_TEXT_LENGTH: usize = 512;

/// Unique identifier for a task, based on UUID v7 for time-ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(Uuid);

impl TaskId {
    /// Creates a new time-ordered task identifier (UUID v7).
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::now_v7())
    }

    /// Creates a `TaskId` from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID value.
    #[must_use]
    pub const fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Task priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority (default for new tasks).
    Medium,
    /// High priority.
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

/// How often a recurring task repeats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Repeats every day.
    Daily,
    /// Repeats every 7 days.
    Weekly,
    /// Repeats every calendar month, clamping the day-of-month.
    Monthly,
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Weekly => write!(f, "weekly"),
            Self::Monthly => write!(f, "monthly"),
        }
    }
}

/// Violation of the recurrence descriptor invariant.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RecurrenceError {
    /// A disabled descriptor must not carry a frequency or next-due date.
    #[error("disabled recurrence must not carry frequency or next-due")]
    DisabledWithFields,
    /// An enabled descriptor must carry a frequency.
    #[error("enabled recurrence requires a frequency")]
    EnabledWithoutFrequency,
}

/// Recurrence descriptor for a task.
///
/// Invariant: `frequency` and `next_due` are `None` whenever `enabled` is
/// false, and `frequency` is `Some` whenever `enabled` is true. Enforced
/// by [`Recurrence::validate`] at the store boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recurrence {
    /// Whether this task repeats.
    pub enabled: bool,
    /// Repeat frequency; `Some` iff `enabled`.
    pub frequency: Option<Frequency>,
    /// Next scheduled occurrence; absent until a due date is known.
    pub next_due: Option<NaiveDate>,
}

impl Recurrence {
    /// A non-recurring descriptor.
    #[must_use]
    pub const fn none() -> Self {
        Self {
            enabled: false,
            frequency: None,
            next_due: None,
        }
    }

    /// An enabled descriptor with the given frequency and next occurrence.
    #[must_use]
    pub const fn every(frequency: Frequency, next_due: Option<NaiveDate>) -> Self {
        Self {
            enabled: true,
            frequency: Some(frequency),
            next_due,
        }
    }

    /// Checks the enabled/frequency/next-due invariant.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceError::DisabledWithFields`] if the descriptor is
    /// disabled but carries a frequency or next-due date, or
    /// [`RecurrenceError::EnabledWithoutFrequency`] if it is enabled
    /// without a frequency.
    pub const fn validate(&self) -> Result<(), RecurrenceError> {
        if self.enabled {
            if self.frequency.is_none() {
                return Err(RecurrenceError::EnabledWithoutFrequency);
            }
        } else if self.frequency.is_some() || self.next_due.is_some() {
            return Err(RecurrenceError::DisabledWithFields);
        }
        Ok(())
    }
}

impl Default for Recurrence {
    fn default() -> Self {
        Self::none()
    }
}

/// A single to-do item with scheduling and categorization metadata.
///
/// Tasks are mutated in place for completion toggling, text edits, and
/// recurrence rollover, and removed on explicit delete. There is no
/// soft-delete and no history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique task identifier (UUID v7, time-ordered).
    pub id: TaskId,
    /// Task text (non-empty after trimming, at most [`MAX_TASK_TEXT_LENGTH`] chars).
    pub text: String,
    /// Whether the task is done.
    pub completed: bool,
    /// Priority level.
    pub priority: Priority,
    /// Optional due date (calendar date, no time component).
    pub due_date: Option<NaiveDate>,
    /// Category name, drawn from the configured preset list.
    pub category: String,
    /// Assignee names; may be empty.
    pub assignees: Vec<String>,
    /// When this task was created (milliseconds since epoch).
    pub created_at: u64,
    /// Recurrence descriptor.
    pub recurrence: Recurrence,
}

/// Snapshot of the pending entry-form fields a new task is created from.
///
/// The text input is kept separately by the app; everything else lives
/// here so quick-entry mode can submit with the draft unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    /// Selected priority.
    pub priority: Priority,
    /// Selected due date, if any.
    pub due_date: Option<NaiveDate>,
    /// Selected category.
    pub category: String,
    /// Selected assignees.
    pub assignees: Vec<String>,
    /// Whether the recurrence toggle is on.
    pub recurring: bool,
    /// Selected frequency; only meaningful while `recurring` is true.
    pub frequency: Frequency,
}

impl TaskDraft {
    /// A draft seeded with the given category and assignee defaults.
    #[must_use]
    pub const fn new(category: String, assignees: Vec<String>) -> Self {
        Self {
            priority: Priority::Medium,
            due_date: None,
            category,
            assignees,
            recurring: false,
            frequency: Frequency::Daily,
        }
    }

    /// Builds the recurrence descriptor this draft describes.
    ///
    /// When recurring, the first occurrence is the draft's due date.
    #[must_use]
    pub const fn recurrence(&self) -> Recurrence {
        if self.recurring {
            Recurrence::every(self.frequency, self.due_date)
        } else {
            Recurrence::none()
        }
    }
}

impl Default for TaskDraft {
    fn default() -> Self {
        Self::new("Personal".to_owned(), vec!["Me".to_owned()])
    }
}
