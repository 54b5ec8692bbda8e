//! Task collection store with snapshot write-through.
//!
//! [`TaskStore`] owns the ordered task collection and funnels every
//! mutation through a named operation (add, remove, toggle, edit,
//! rollover), preserving the single-writer invariant. Each mutation
//! persists the full collection to the snapshot file; a failed write is
//! logged and the in-memory change stands ("write succeeds or the change
//! is lost").

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::NaiveDate;

use termtask_core::recur::roll_forward;
use termtask_core::snapshot;
use termtask_core::task::{
    MAX_TASK_TEXT_LENGTH, Recurrence, RecurrenceError, Task, TaskDraft, TaskId,
};

/// Errors that can occur during store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Task text cannot be empty or whitespace-only.
    #[error("task text cannot be empty")]
    TextEmpty,
    /// Task text exceeds the maximum length.
    #[error("task text too long (max 512 characters)")]
    TextTooLong,
    /// Task with the given ID was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),
    /// The recurrence descriptor violates its invariant.
    #[error("invalid recurrence: {0}")]
    InvalidRecurrence(#[from] RecurrenceError),
}

/// Ordered task collection with full-snapshot persistence.
///
/// Insertion order is preserved; the snapshot file mirrors the in-memory
/// sequence exactly, so a reload reproduces the collection field for
/// field.
pub struct TaskStore {
    tasks: Vec<Task>,
    path: Option<PathBuf>,
}

impl TaskStore {
    /// Creates an empty store with no backing file (used by tests and
    /// offline tooling).
    #[must_use]
    pub const fn in_memory() -> Self {
        Self {
            tasks: Vec::new(),
            path: None,
        }
    }

    /// Opens a store backed by the snapshot file at `path`.
    ///
    /// A missing or corrupt snapshot is treated as "no saved tasks": the
    /// store starts empty and the condition is logged, never surfaced.
    #[must_use]
    pub fn open(path: &Path) -> Self {
        let tasks = match std::fs::read_to_string(path) {
            Ok(blob) => match snapshot::decode(&blob) {
                Ok(tasks) => tasks,
                Err(e) => {
                    tracing::warn!(path = %path.display(), error = %e, "corrupt snapshot, starting empty");
                    Vec::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "unreadable snapshot, starting empty");
                Vec::new()
            }
        };
        Self {
            tasks,
            path: Some(path.to_path_buf()),
        }
    }

    /// Returns the current timestamp in milliseconds since epoch.
    fn now_ms() -> u64 {
        u64::try_from(
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .unwrap_or_default()
                .as_millis(),
        )
        .unwrap_or(u64::MAX)
    }

    /// Returns the tasks in insertion order.
    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Returns the number of tasks.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Returns true if the store holds no tasks.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Looks up a task by id.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Appends a new task built from `text` and the draft's field snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TextEmpty`] if the trimmed text is empty,
    /// [`StoreError::TextTooLong`] if it exceeds
    /// [`MAX_TASK_TEXT_LENGTH`] characters, or
    /// [`StoreError::InvalidRecurrence`] if the draft describes an
    /// invalid recurrence descriptor.
    pub fn add(&mut self, text: &str, draft: &TaskDraft) -> Result<&Task, StoreError> {
        let text = Self::validate_text(text)?;
        let recurrence = draft.recurrence();
        recurrence.validate()?;

        let task = Task {
            id: TaskId::new(),
            text,
            completed: false,
            priority: draft.priority,
            due_date: draft.due_date,
            category: draft.category.clone(),
            assignees: draft.assignees.clone(),
            created_at: Self::now_ms(),
            recurrence,
        };
        self.tasks.push(task);
        self.persist();
        // Just pushed, so the collection is non-empty.
        Ok(self.tasks.last().unwrap_or_else(|| unreachable!()))
    }

    /// Removes the identified task and returns it.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] if no task has this id.
    pub fn remove(&mut self, id: TaskId) -> Result<Task, StoreError> {
        let idx = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))?;
        let removed = self.tasks.remove(idx);
        self.persist();
        Ok(removed)
    }

    /// Flips the completed flag of the identified task, returning the new
    /// state.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] if no task has this id.
    pub fn toggle_completed(&mut self, id: TaskId) -> Result<bool, StoreError> {
        let task = self.get_mut(id)?;
        task.completed = !task.completed;
        let completed = task.completed;
        self.persist();
        Ok(completed)
    }

    /// Replaces the text of the identified task.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::TaskNotFound`] if no task has this id, or a
    /// validation error for empty or over-long text.
    pub fn update_text(&mut self, id: TaskId, text: &str) -> Result<(), StoreError> {
        let text = Self::validate_text(text)?;
        let task = self.get_mut(id)?;
        task.text = text;
        self.persist();
        Ok(())
    }

    /// Rolls over every recurring task whose next-due date has passed.
    ///
    /// For each such task the next-due date advances by whole units of
    /// its frequency until it reaches `today`, and the completed flag
    /// resets to false. Returns the number of tasks rolled.
    pub fn roll_recurring(&mut self, today: NaiveDate) -> usize {
        let mut rolled = 0;
        for task in &mut self.tasks {
            let Recurrence {
                enabled: true,
                frequency: Some(frequency),
                next_due: Some(next_due),
            } = task.recurrence
            else {
                continue;
            };
            if next_due >= today {
                continue;
            }
            task.recurrence.next_due = Some(roll_forward(next_due, frequency, today));
            task.completed = false;
            rolled += 1;
            tracing::debug!(id = %task.id, next_due = %next_due, "rolled recurring task");
        }
        if rolled > 0 {
            self.persist();
        }
        rolled
    }

    /// Trims and validates task text.
    fn validate_text(text: &str) -> Result<String, StoreError> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(StoreError::TextEmpty);
        }
        if trimmed.chars().count() > MAX_TASK_TEXT_LENGTH {
            return Err(StoreError::TextTooLong);
        }
        Ok(trimmed.to_owned())
    }

    /// Returns a mutable reference to a task, or an error if not found.
    fn get_mut(&mut self, id: TaskId) -> Result<&mut Task, StoreError> {
        self.tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(StoreError::TaskNotFound(id))
    }

    /// Writes the full collection to the snapshot file, if one is
    /// configured. Failures are logged and otherwise ignored; the
    /// in-memory state is authoritative until the next successful write.
    fn persist(&self) {
        let Some(path) = &self.path else {
            return;
        };
        let blob = match snapshot::encode(&self.tasks) {
            Ok(blob) => blob,
            Err(e) => {
                tracing::warn!(error = %e, "snapshot encode failed, change not persisted");
                return;
            }
        };
        if let Some(parent) = path.parent()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            tracing::warn!(path = %path.display(), error = %e, "snapshot dir create failed");
            return;
        }
        if let Err(e) = std::fs::write(path, blob) {
            tracing::warn!(path = %path.display(), error = %e, "snapshot write failed, change not persisted");
        }
    }
}
