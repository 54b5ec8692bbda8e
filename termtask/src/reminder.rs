//! Due-date reminder sweep and notification permission state.
//!
//! The sweep scans incomplete tasks with a due date and emits a
//! [`DueReminder`] for each one due within the window (exclusive of
//! past-due). Reminders are not deduplicated across sweeps: a task due in
//! 20 hours re-notifies every sweep until it leaves the window or is
//! completed.
//!
//! Permission is a persisted tri-state. The app asks once at startup when
//! it is still [`Permission::Unprompted`]; a denial silently suppresses
//! the sweep.

use std::path::{Path, PathBuf};

use chrono::{NaiveDate, NaiveDateTime};

use termtask_core::task::{Task, TaskId};

/// Fixed notification title.
pub const REMINDER_TITLE: &str = "Task due soon";

/// Default look-ahead window in hours.
pub const DEFAULT_WINDOW_HOURS: i64 = 24;

/// A single reminder produced by the sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueReminder {
    /// The task this reminder is for.
    pub task_id: TaskId,
    /// The task text at sweep time.
    pub text: String,
    /// Hours until the due instant, rounded to the nearest hour.
    pub hours_until_due: i64,
}

impl DueReminder {
    /// Notification body interpolating task text and rounded hours.
    #[must_use]
    pub fn body(&self) -> String {
        format!("\"{}\" is due in {} hours", self.text, self.hours_until_due)
    }
}

/// Converts a due date to its due instant: local midnight of that day.
fn due_instant(due: NaiveDate) -> Option<NaiveDateTime> {
    due.and_hms_opt(0, 0, 0)
}

/// Scans the collection for incomplete tasks due within `window_hours`.
///
/// Past-due tasks are excluded (the window is `0 < until_due <=
/// window_hours`). Returns reminders in collection order.
#[must_use]
pub fn scan(tasks: &[Task], now: NaiveDateTime, window_hours: i64) -> Vec<DueReminder> {
    tasks
        .iter()
        .filter(|t| !t.completed)
        .filter_map(|t| {
            let due = due_instant(t.due_date?)?;
            let minutes = due.signed_duration_since(now).num_minutes();
            if minutes <= 0 || minutes > window_hours * 60 {
                return None;
            }
            Some(DueReminder {
                task_id: t.id,
                text: t.text.clone(),
                // Round to the nearest hour for display.
                hours_until_due: (minutes + 30) / 60,
            })
        })
        .collect()
}

/// User decision about reminder notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Never asked; the app prompts once at startup.
    Unprompted,
    /// Reminders enabled.
    Granted,
    /// Reminders suppressed; no retry, no error.
    Denied,
}

impl Permission {
    /// Returns true if the reminder sweep may emit notifications.
    #[must_use]
    pub const fn allows_reminders(&self) -> bool {
        matches!(self, Self::Granted)
    }
}

/// Persisted notification permission decision.
///
/// Stored as a one-line file next to the task snapshot, so the question
/// is asked at most once across sessions.
pub struct PermissionStore {
    path: PathBuf,
}

impl PermissionStore {
    /// Creates a store backed by the file at `path`.
    #[must_use]
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Loads the persisted decision; absent or unrecognized content means
    /// the user has not decided yet.
    #[must_use]
    pub fn load(&self) -> Permission {
        match std::fs::read_to_string(&self.path) {
            Ok(contents) => match contents.trim() {
                "granted" => Permission::Granted,
                "denied" => Permission::Denied,
                other => {
                    if !other.is_empty() {
                        tracing::warn!(path = %self.path.display(), "unrecognized permission value");
                    }
                    Permission::Unprompted
                }
            },
            Err(_) => Permission::Unprompted,
        }
    }

    /// Persists a decision. Only `Granted` and `Denied` are stored;
    /// saving `Unprompted` removes the file so the app asks again.
    pub fn save(&self, permission: Permission) {
        let result = match permission {
            Permission::Granted => std::fs::write(&self.path, "granted\n"),
            Permission::Denied => std::fs::write(&self.path, "denied\n"),
            Permission::Unprompted => match std::fs::remove_file(&self.path) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e),
                _ => Ok(()),
            },
        };
        if let Err(e) = result {
            tracing::warn!(path = %self.path.display(), error = %e, "permission save failed");
        }
    }
}
