//! Application state and event handling.
//!
//! [`App`] owns the task store and funnels every user action and sweep
//! tick through named handlers, so the single event loop is the only
//! writer. Dates and times are passed in by the caller to keep the
//! handlers deterministic under test.

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use termtask_core::filter::{DueBucket, TaskFilter};
use termtask_core::task::{Frequency, Priority, Task, TaskDraft, TaskId};

use crate::config::AppConfig;
use crate::reminder::{self, Permission, PermissionStore, REMINDER_TITLE};
use crate::store::{StoreError, TaskStore};
use crate::sweep::SweepTimer;

/// Maximum number of notice lines retained for display.
const MAX_NOTICES: usize = 100;

/// Which panel is currently focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelFocus {
    /// Task list is focused (default).
    List,
    /// New-task entry form is focused.
    Entry,
    /// Filter panel is focused (only while visible).
    Filters,
}

/// Which entry-form field is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryField {
    /// Task text input.
    Text,
    /// Priority selector.
    Priority,
    /// Due date input.
    DueDate,
    /// Category selector.
    Category,
    /// Assignee multi-select.
    Assignees,
    /// Recurrence toggle.
    Recurring,
    /// Frequency selector (reachable while recurring).
    Frequency,
}

/// In-progress inline edit of a task's text.
#[derive(Debug, Clone)]
pub struct EditState {
    /// Task being edited.
    pub id: TaskId,
    /// Edit buffer.
    pub buffer: String,
    /// Cursor position in the buffer (byte index).
    pub cursor: usize,
}

/// A row in the filter panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterRow {
    /// Toggle a priority in the priority set.
    Priority(Priority),
    /// Toggle a category in the category set.
    Category(String),
    /// Toggle an assignee in the assignee set.
    Assignee(String),
    /// Cycle the due bucket (all → today → week).
    DueBucket,
    /// Cycle the completion tri-state (all → open → done).
    Completion,
}

/// Main application state.
pub struct App {
    store: TaskStore,
    /// Current new-task text input.
    pub input: String,
    /// Cursor position in the text input (byte index).
    pub cursor_position: usize,
    /// Which panel is focused.
    pub focus: PanelFocus,
    /// Active entry-form field.
    pub entry_field: EntryField,
    /// Pending form-field snapshot for the next task.
    pub draft: TaskDraft,
    /// Due-date input buffer, parsed on submission.
    pub due_input: String,
    /// Quick-entry mode: only the text field is shown; the draft is
    /// reused unchanged between submissions.
    pub quick_entry: bool,
    /// Whether the filter panel is visible.
    pub show_filters: bool,
    /// Current filter state.
    pub filter: TaskFilter,
    /// Cursor in the filter panel rows.
    pub filter_cursor: usize,
    /// Cursor in the assignee preset list (entry form).
    pub assignee_cursor: usize,
    /// Selected index into the visible (filtered) task list.
    pub selected: usize,
    /// In-progress inline edit, if any.
    pub editing: Option<EditState>,
    /// Notices shown in the notice area (newest last).
    pub notices: Vec<String>,
    /// Reminder notification permission.
    pub permission: Permission,
    /// Whether the startup permission question is on screen.
    pub prompting_permission: bool,
    /// Whether the app should quit.
    pub should_quit: bool,

    permission_store: Option<PermissionStore>,
    reminder_timer: SweepTimer,
    rollover_timer: SweepTimer,
    reminder_window_hours: i64,
    categories: Vec<String>,
    assignees: Vec<String>,
    date_format: String,
}

impl App {
    /// Creates the application state around an opened store.
    #[must_use]
    pub fn new(store: TaskStore, config: &AppConfig) -> Self {
        let draft = TaskDraft::new(
            config.categories.first().cloned().unwrap_or_default(),
            config.assignees.first().cloned().into_iter().collect(),
        );
        Self {
            store,
            input: String::new(),
            cursor_position: 0,
            focus: PanelFocus::List,
            entry_field: EntryField::Text,
            draft,
            due_input: String::new(),
            quick_entry: false,
            show_filters: false,
            filter: TaskFilter::default(),
            filter_cursor: 0,
            assignee_cursor: 0,
            selected: 0,
            editing: None,
            notices: Vec::new(),
            permission: Permission::Unprompted,
            prompting_permission: false,
            should_quit: false,
            permission_store: None,
            reminder_timer: SweepTimer::new(config.sweep_interval),
            rollover_timer: SweepTimer::new(config.sweep_interval),
            reminder_window_hours: config.reminder_window_hours,
            categories: config.categories.clone(),
            assignees: config.assignees.clone(),
            date_format: config.date_format.clone(),
        }
    }

    /// Wires up the persisted permission decision; an undecided state
    /// raises the one-time startup question.
    #[must_use]
    pub fn with_permission(mut self, store: PermissionStore) -> Self {
        self.permission = store.load();
        self.prompting_permission = self.permission == Permission::Unprompted;
        self.permission_store = Some(store);
        self
    }

    /// Read access to the task store.
    #[must_use]
    pub const fn store(&self) -> &TaskStore {
        &self.store
    }

    /// Category presets for the entry form and filter panel.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Assignee presets for the entry form and filter panel.
    #[must_use]
    pub fn assignees(&self) -> &[String] {
        &self.assignees
    }

    /// Tasks matching the current filter, in insertion order.
    #[must_use]
    pub fn visible_tasks(&self, today: NaiveDate) -> Vec<&Task> {
        self.filter.apply(self.store.tasks(), today)
    }

    /// Appends a notice line, trimming the backlog.
    pub fn push_notice(&mut self, notice: String) {
        self.notices.push(notice);
        if self.notices.len() > MAX_NOTICES {
            self.notices.remove(0);
        }
    }

    // -----------------------------------------------------------------
    // Sweep lifecycle
    // -----------------------------------------------------------------

    /// Starts both periodic sweeps; each runs once immediately.
    pub const fn start_sweeps(&mut self) {
        self.reminder_timer.start();
        self.rollover_timer.start();
    }

    /// Stops both periodic sweeps (called on teardown).
    pub const fn stop_sweeps(&mut self) {
        self.reminder_timer.stop();
        self.rollover_timer.stop();
    }

    /// Runs any sweep whose interval has elapsed.
    ///
    /// Rollover runs before the reminder check so a freshly advanced
    /// occurrence can already remind within the same tick.
    pub fn tick_sweeps(&mut self, now: NaiveDateTime) {
        if self.rollover_timer.is_due() {
            let rolled = self.store.roll_recurring(now.date());
            if rolled > 0 {
                tracing::info!(rolled, "recurrence rollover");
            }
            self.rollover_timer.mark_run();
        }
        if self.reminder_timer.is_due() {
            if self.permission.allows_reminders() {
                for r in reminder::scan(self.store.tasks(), now, self.reminder_window_hours) {
                    tracing::info!(task = %r.task_id, hours = r.hours_until_due, "due reminder");
                    self.push_notice(format!("{REMINDER_TITLE}: {}", r.body()));
                }
            }
            self.reminder_timer.mark_run();
        }
    }

    // -----------------------------------------------------------------
    // Key handling
    // -----------------------------------------------------------------

    /// Handle a key event.
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        // The startup permission question swallows all input.
        if self.prompting_permission {
            self.handle_permission_key(key);
            return;
        }

        // An in-progress inline edit captures the keyboard.
        if self.editing.is_some() {
            self.handle_edit_key(key);
            return;
        }

        // Global shortcuts
        match (key.code, key.modifiers) {
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
                self.should_quit = true;
                return;
            }
            (KeyCode::Esc, _) => {
                if self.show_filters && self.focus == PanelFocus::Filters {
                    self.show_filters = false;
                    self.focus = PanelFocus::List;
                } else {
                    self.should_quit = true;
                }
                return;
            }
            (KeyCode::Tab, KeyModifiers::SHIFT) => {
                self.cycle_focus_backward();
                return;
            }
            (KeyCode::Tab | KeyCode::BackTab, _) => {
                self.cycle_focus_forward();
                return;
            }
            _ => {}
        }

        // Focus-specific shortcuts
        match self.focus {
            PanelFocus::List => self.handle_list_key(key),
            PanelFocus::Entry => self.handle_entry_key(key),
            PanelFocus::Filters => self.handle_filter_key(key),
        }
    }

    /// Answer the startup reminder-permission question.
    fn handle_permission_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('y' | 'Y') => self.decide_permission(Permission::Granted),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => self.decide_permission(Permission::Denied),
            _ => {}
        }
    }

    /// Records and persists the permission decision.
    fn decide_permission(&mut self, permission: Permission) {
        self.permission = permission;
        self.prompting_permission = false;
        if let Some(store) = &self.permission_store {
            store.save(permission);
        }
        if permission.allows_reminders() {
            self.push_notice("Due-date reminders enabled".to_owned());
        }
    }

    /// Handle key event when the task list is focused.
    fn handle_list_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => self.select_prev(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next(),
            KeyCode::Char(' ') => self.toggle_selected(),
            KeyCode::Char('e') | KeyCode::Enter => self.start_edit(),
            KeyCode::Char('d') => self.delete_selected(),
            KeyCode::Char('n') => {
                self.focus = PanelFocus::Entry;
                self.entry_field = EntryField::Text;
            }
            KeyCode::Char('f') => self.toggle_filter_panel(),
            KeyCode::Char('m') => self.toggle_quick_entry(),
            _ => {}
        }
    }

    /// Handle key event while an inline edit is active.
    fn handle_edit_key(&mut self, key: KeyEvent) {
        let Some(edit) = &mut self.editing else {
            return;
        };
        match key.code {
            KeyCode::Enter => self.save_edit(),
            KeyCode::Esc => self.cancel_edit(),
            KeyCode::Char(c) => {
                edit.buffer.insert(edit.cursor, c);
                edit.cursor += c.len_utf8();
            }
            KeyCode::Backspace => {
                if edit.cursor > 0 {
                    let prev = floor_char_boundary(&edit.buffer, edit.cursor - 1);
                    edit.buffer.remove(prev);
                    edit.cursor = prev;
                }
            }
            KeyCode::Left => {
                if edit.cursor > 0 {
                    edit.cursor = floor_char_boundary(&edit.buffer, edit.cursor - 1);
                }
            }
            KeyCode::Right => {
                if edit.cursor < edit.buffer.len() {
                    edit.cursor = ceil_char_boundary(&edit.buffer, edit.cursor + 1);
                }
            }
            KeyCode::Home => edit.cursor = 0,
            KeyCode::End => edit.cursor = edit.buffer.len(),
            _ => {}
        }
    }

    /// Handle key event when the entry form is focused.
    fn handle_entry_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit_task(),
            KeyCode::Up => self.prev_entry_field(),
            KeyCode::Down => self.next_entry_field(),
            _ => match self.entry_field {
                EntryField::Text => self.handle_text_input_key(key),
                EntryField::Priority => match key.code {
                    KeyCode::Left => self.draft.priority = prev_priority(self.draft.priority),
                    KeyCode::Right | KeyCode::Char(' ') => {
                        self.draft.priority = next_priority(self.draft.priority);
                    }
                    _ => {}
                },
                EntryField::DueDate => match key.code {
                    KeyCode::Char(c) => self.due_input.push(c),
                    KeyCode::Backspace => {
                        self.due_input.pop();
                    }
                    _ => {}
                },
                EntryField::Category => match key.code {
                    KeyCode::Left => self.cycle_category(false),
                    KeyCode::Right | KeyCode::Char(' ') => self.cycle_category(true),
                    _ => {}
                },
                EntryField::Assignees => match key.code {
                    KeyCode::Left => {
                        self.assignee_cursor = self.assignee_cursor.saturating_sub(1);
                    }
                    KeyCode::Right => {
                        if self.assignee_cursor + 1 < self.assignees.len() {
                            self.assignee_cursor += 1;
                        }
                    }
                    KeyCode::Char(' ') => self.toggle_draft_assignee(),
                    _ => {}
                },
                EntryField::Recurring => {
                    if key.code == KeyCode::Char(' ') {
                        self.draft.recurring = !self.draft.recurring;
                    }
                }
                EntryField::Frequency => match key.code {
                    KeyCode::Left => self.draft.frequency = prev_frequency(self.draft.frequency),
                    KeyCode::Right | KeyCode::Char(' ') => {
                        self.draft.frequency = next_frequency(self.draft.frequency);
                    }
                    _ => {}
                },
            },
        }
    }

    /// Character-level editing of the new-task text input.
    fn handle_text_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => {
                self.input.insert(self.cursor_position, c);
                self.cursor_position += c.len_utf8();
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    let prev = floor_char_boundary(&self.input, self.cursor_position - 1);
                    self.input.remove(prev);
                    self.cursor_position = prev;
                }
            }
            KeyCode::Left => {
                if self.cursor_position > 0 {
                    self.cursor_position = floor_char_boundary(&self.input, self.cursor_position - 1);
                }
            }
            KeyCode::Right => {
                if self.cursor_position < self.input.len() {
                    self.cursor_position = ceil_char_boundary(&self.input, self.cursor_position + 1);
                }
            }
            KeyCode::Home => self.cursor_position = 0,
            KeyCode::End => self.cursor_position = self.input.len(),
            _ => {}
        }
    }

    /// Handle key event when the filter panel is focused.
    fn handle_filter_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.filter_cursor = self.filter_cursor.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.filter_cursor + 1 < self.filter_rows().len() {
                    self.filter_cursor += 1;
                }
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle_filter_row(),
            KeyCode::Char('c') => self.filter.clear(),
            _ => {}
        }
    }

    // -----------------------------------------------------------------
    // Focus and navigation
    // -----------------------------------------------------------------

    /// Cycle focus forward: List -> Entry -> Filters (if open) -> List.
    const fn cycle_focus_forward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::List => PanelFocus::Entry,
            PanelFocus::Entry => {
                if self.show_filters {
                    PanelFocus::Filters
                } else {
                    PanelFocus::List
                }
            }
            PanelFocus::Filters => PanelFocus::List,
        };
    }

    /// Cycle focus backward.
    const fn cycle_focus_backward(&mut self) {
        self.focus = match self.focus {
            PanelFocus::List => {
                if self.show_filters {
                    PanelFocus::Filters
                } else {
                    PanelFocus::Entry
                }
            }
            PanelFocus::Entry => PanelFocus::List,
            PanelFocus::Filters => PanelFocus::Entry,
        };
    }

    /// Entry fields in tab order for the current mode. Quick entry shows
    /// only the text field; frequency appears only while recurring.
    fn entry_fields(&self) -> Vec<EntryField> {
        if self.quick_entry {
            return vec![EntryField::Text];
        }
        let mut fields = vec![
            EntryField::Text,
            EntryField::Priority,
            EntryField::DueDate,
            EntryField::Category,
            EntryField::Assignees,
            EntryField::Recurring,
        ];
        if self.draft.recurring {
            fields.push(EntryField::Frequency);
        }
        fields
    }

    /// Move to the next entry-form field.
    fn next_entry_field(&mut self) {
        let fields = self.entry_fields();
        let idx = fields.iter().position(|f| *f == self.entry_field).unwrap_or(0);
        self.entry_field = fields[(idx + 1) % fields.len()];
    }

    /// Move to the previous entry-form field.
    fn prev_entry_field(&mut self) {
        let fields = self.entry_fields();
        let idx = fields.iter().position(|f| *f == self.entry_field).unwrap_or(0);
        self.entry_field = fields[(idx + fields.len() - 1) % fields.len()];
    }

    /// Select the previous task.
    const fn select_prev(&mut self) {
        if self.selected > 0 {
            self.selected -= 1;
        }
    }

    /// Select the next task (clamped on use).
    const fn select_next(&mut self) {
        self.selected += 1;
    }

    /// Clamps the selection to the visible list length.
    fn clamp_selection(&mut self, visible_len: usize) {
        if self.selected >= visible_len {
            self.selected = visible_len.saturating_sub(1);
        }
    }

    /// Id of the currently selected visible task.
    fn selected_task_id(&mut self) -> Option<TaskId> {
        let today = today_for_selection();
        let ids: Vec<TaskId> = self
            .visible_tasks(today)
            .into_iter()
            .map(|t| t.id)
            .collect();
        self.clamp_selection(ids.len());
        ids.get(self.selected).copied()
    }

    // -----------------------------------------------------------------
    // Task operations
    // -----------------------------------------------------------------

    /// Submit the current text input and draft as a new task.
    ///
    /// Blank or whitespace-only text is a silent no-op. In full mode the
    /// draft resets to defaults after submission; quick mode keeps it
    /// unchanged for the next entry.
    pub fn submit_task(&mut self) {
        self.draft.due_date =
            NaiveDate::parse_from_str(self.due_input.trim(), &self.date_format).ok();

        match self.store.add(&self.input, &self.draft) {
            Ok(task) => {
                tracing::debug!(id = %task.id, "task added");
                self.input.clear();
                self.cursor_position = 0;
                if !self.quick_entry {
                    self.reset_draft();
                }
            }
            Err(StoreError::TextEmpty) => {
                // Blank submission is a silent no-op.
            }
            Err(e) => self.push_notice(format!("Could not add task: {e}")),
        }
    }

    /// Reset the draft and due-date input to configured defaults.
    fn reset_draft(&mut self) {
        self.draft = TaskDraft::new(
            self.categories.first().cloned().unwrap_or_default(),
            self.assignees.first().cloned().into_iter().collect(),
        );
        self.due_input.clear();
        self.assignee_cursor = 0;
    }

    /// Toggle completion of the selected task.
    fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task_id()
            && let Err(e) = self.store.toggle_completed(id)
        {
            tracing::warn!(error = %e, "toggle failed");
        }
    }

    /// Delete the selected task.
    fn delete_selected(&mut self) {
        if let Some(id) = self.selected_task_id() {
            match self.store.remove(id) {
                Ok(task) => self.push_notice(format!("Deleted \"{}\"", task.text)),
                Err(e) => tracing::warn!(error = %e, "delete failed"),
            }
        }
    }

    /// Begin inline editing of the selected task's text.
    fn start_edit(&mut self) {
        if let Some(id) = self.selected_task_id()
            && let Some(task) = self.store.get(id)
        {
            let buffer = task.text.clone();
            let cursor = buffer.len();
            self.editing = Some(EditState { id, buffer, cursor });
        }
    }

    /// Commit the inline edit. Blank text cancels instead of saving,
    /// leaving the task unchanged.
    fn save_edit(&mut self) {
        let Some(edit) = self.editing.take() else {
            return;
        };
        match self.store.update_text(edit.id, &edit.buffer) {
            Ok(()) | Err(StoreError::TextEmpty) => {}
            Err(e) => self.push_notice(format!("Could not save edit: {e}")),
        }
    }

    /// Abandon the inline edit.
    fn cancel_edit(&mut self) {
        self.editing = None;
    }

    /// Toggle quick-entry mode.
    pub fn toggle_quick_entry(&mut self) {
        self.quick_entry = !self.quick_entry;
        if self.quick_entry {
            self.entry_field = EntryField::Text;
        }
    }

    /// Show or hide the filter panel.
    fn toggle_filter_panel(&mut self) {
        self.show_filters = !self.show_filters;
        if self.show_filters {
            self.focus = PanelFocus::Filters;
            self.filter_cursor = 0;
        } else {
            self.focus = PanelFocus::List;
        }
    }

    // -----------------------------------------------------------------
    // Draft selectors
    // -----------------------------------------------------------------

    /// Cycle the draft category through the presets.
    fn cycle_category(&mut self, forward: bool) {
        if self.categories.is_empty() {
            return;
        }
        let idx = self
            .categories
            .iter()
            .position(|c| *c == self.draft.category)
            .unwrap_or(0);
        let len = self.categories.len();
        let next = if forward {
            (idx + 1) % len
        } else {
            (idx + len - 1) % len
        };
        self.draft.category = self.categories[next].clone();
    }

    /// Toggle membership of the assignee under the cursor in the draft.
    fn toggle_draft_assignee(&mut self) {
        let Some(name) = self.assignees.get(self.assignee_cursor) else {
            return;
        };
        if let Some(pos) = self.draft.assignees.iter().position(|a| a == name) {
            self.draft.assignees.remove(pos);
        } else {
            self.draft.assignees.push(name.clone());
        }
    }

    // -----------------------------------------------------------------
    // Filter panel
    // -----------------------------------------------------------------

    /// Rows of the filter panel in display order.
    #[must_use]
    pub fn filter_rows(&self) -> Vec<FilterRow> {
        let mut rows = vec![
            FilterRow::Priority(Priority::Low),
            FilterRow::Priority(Priority::Medium),
            FilterRow::Priority(Priority::High),
        ];
        rows.extend(self.categories.iter().cloned().map(FilterRow::Category));
        rows.extend(self.assignees.iter().cloned().map(FilterRow::Assignee));
        rows.push(FilterRow::DueBucket);
        rows.push(FilterRow::Completion);
        rows
    }

    /// Toggle or cycle the filter row under the cursor.
    fn toggle_filter_row(&mut self) {
        let rows = self.filter_rows();
        let Some(row) = rows.get(self.filter_cursor) else {
            return;
        };
        match row {
            FilterRow::Priority(p) => toggle_in(&mut self.filter.priorities, *p),
            FilterRow::Category(c) => toggle_in(&mut self.filter.categories, c.clone()),
            FilterRow::Assignee(a) => toggle_in(&mut self.filter.assignees, a.clone()),
            FilterRow::DueBucket => {
                self.filter.due = match self.filter.due {
                    None => Some(DueBucket::Today),
                    Some(DueBucket::Today) => Some(DueBucket::Week),
                    Some(DueBucket::Week) => None,
                };
            }
            FilterRow::Completion => {
                self.filter.completed = match self.filter.completed {
                    None => Some(false),
                    Some(false) => Some(true),
                    Some(true) => None,
                };
            }
        }
    }
}

/// Adds `value` to the set-vec if absent, removes it if present.
fn toggle_in<T: PartialEq>(set: &mut Vec<T>, value: T) {
    if let Some(pos) = set.iter().position(|v| *v == value) {
        set.remove(pos);
    } else {
        set.push(value);
    }
}

/// Today's date for selection resolution.
///
/// Selection is a UI concern, so reading the clock here keeps the
/// store/filter APIs deterministic.
fn today_for_selection() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Largest char boundary at or below `index`.
fn floor_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index.min(s.len());
    while i > 0 && !s.is_char_boundary(i) {
        i -= 1;
    }
    i
}

/// Smallest char boundary at or above `index`.
fn ceil_char_boundary(s: &str, index: usize) -> usize {
    let mut i = index.min(s.len());
    while i < s.len() && !s.is_char_boundary(i) {
        i += 1;
    }
    i
}

/// Next priority in cycle order.
const fn next_priority(p: Priority) -> Priority {
    match p {
        Priority::Low => Priority::Medium,
        Priority::Medium => Priority::High,
        Priority::High => Priority::Low,
    }
}

/// Previous priority in cycle order.
const fn prev_priority(p: Priority) -> Priority {
    match p {
        Priority::Low => Priority::High,
        Priority::Medium => Priority::Low,
        Priority::High => Priority::Medium,
    }
}

/// Next frequency in cycle order.
const fn next_frequency(f: Frequency) -> Frequency {
    match f {
        Frequency::Daily => Frequency::Weekly,
        Frequency::Weekly => Frequency::Monthly,
        Frequency::Monthly => Frequency::Daily,
    }
}

/// Previous frequency in cycle order.
const fn prev_frequency(f: Frequency) -> Frequency {
    match f {
        Frequency::Daily => Frequency::Monthly,
        Frequency::Weekly => Frequency::Daily,
        Frequency::Monthly => Frequency::Weekly,
    }
}
