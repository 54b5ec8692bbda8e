//! Integration tests for the reminder sweep and permission gating.
//!
//! Exercises the 24-hour look-ahead window end to end through the app
//! (sweep tick → notice), the persisted permission decision, and the
//! accepted re-notification behavior across sweep cycles.

#![allow(clippy::expect_used, clippy::unwrap_used)]

use chrono::{NaiveDate, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use termtask::app::{App, PanelFocus};
use termtask::config::AppConfig;
use termtask::reminder::{Permission, PermissionStore};
use termtask::store::TaskStore;

// ---------------------------------------------------------------------------
// Helper functions
// ---------------------------------------------------------------------------

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(d: NaiveDate, h: u32) -> NaiveDateTime {
    d.and_hms_opt(h, 0, 0).unwrap()
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

/// An app with a zero-interval sweep so every tick runs the sweeps.
fn make_app(permission: Permission) -> App {
    let config = AppConfig {
        sweep_interval: std::time::Duration::ZERO,
        ..AppConfig::default()
    };
    let mut app = App::new(TaskStore::in_memory(), &config);
    app.permission = permission;
    app.start_sweeps();
    app
}

/// Adds a task due on the given date through the entry form.
fn add_task_due(app: &mut App, text: &str, due: NaiveDate) {
    app.focus = PanelFocus::Entry;
    app.due_input = due.format("%Y-%m-%d").to_string();
    for c in text.chars() {
        app.handle_key_event(key(KeyCode::Char(c)));
    }
    app.handle_key_event(key(KeyCode::Enter));
}

// ---------------------------------------------------------------------------
// Window behavior
// ---------------------------------------------------------------------------

#[test]
fn task_due_within_24h_produces_notice() {
    let mut app = make_app(Permission::Granted);
    add_task_due(&mut app, "Submit report", date(2024, 3, 15));

    app.tick_sweeps(at(date(2024, 3, 14), 20));

    assert!(app.notices.iter().any(|n| n.contains("Task due soon")));
    assert!(
        app.notices
            .iter()
            .any(|n| n.contains("\"Submit report\" is due in 4 hours"))
    );
}

#[test]
fn past_due_task_is_silent() {
    let mut app = make_app(Permission::Granted);
    add_task_due(&mut app, "Missed", date(2024, 3, 10));

    app.tick_sweeps(at(date(2024, 3, 14), 20));

    assert!(app.notices.is_empty());
}

#[test]
fn task_beyond_window_is_silent() {
    let mut app = make_app(Permission::Granted);
    add_task_due(&mut app, "Far out", date(2024, 3, 20));

    app.tick_sweeps(at(date(2024, 3, 14), 20));

    assert!(app.notices.is_empty());
}

#[test]
fn completed_task_is_silent() {
    let mut app = make_app(Permission::Granted);
    add_task_due(&mut app, "Done early", date(2024, 3, 15));
    let id = app.store().tasks()[0].id;

    app.focus = PanelFocus::List;
    app.handle_key_event(key(KeyCode::Char(' ')));
    assert!(app.store().get(id).unwrap().completed);

    app.tick_sweeps(at(date(2024, 3, 14), 20));
    assert!(app.notices.is_empty());
}

#[test]
fn renotifies_on_every_sweep_while_in_window() {
    // Accepted behavior: the sweep keeps no per-task notify state.
    let mut app = make_app(Permission::Granted);
    add_task_due(&mut app, "Nagging", date(2024, 3, 15));

    app.tick_sweeps(at(date(2024, 3, 14), 20));
    app.tick_sweeps(at(date(2024, 3, 14), 21));

    let count = app
        .notices
        .iter()
        .filter(|n| n.contains("Nagging"))
        .count();
    assert_eq!(count, 2);
}

#[test]
fn custom_window_from_config() {
    let config = AppConfig {
        sweep_interval: std::time::Duration::ZERO,
        reminder_window_hours: 2,
        ..AppConfig::default()
    };
    let mut app = App::new(TaskStore::in_memory(), &config);
    app.permission = Permission::Granted;
    app.start_sweeps();
    add_task_due(&mut app, "Near", date(2024, 3, 15));

    // 4 hours out: beyond the 2-hour window.
    app.tick_sweeps(at(date(2024, 3, 14), 20));
    assert!(app.notices.is_empty());

    // 1 hour out: inside it.
    app.tick_sweeps(at(date(2024, 3, 14), 23));
    assert!(app.notices.iter().any(|n| n.contains("Near")));
}

// ---------------------------------------------------------------------------
// Permission gating
// ---------------------------------------------------------------------------

#[test]
fn denied_permission_suppresses_all_reminders() {
    let mut app = make_app(Permission::Denied);
    add_task_due(&mut app, "Quiet", date(2024, 3, 15));

    app.tick_sweeps(at(date(2024, 3, 14), 20));

    assert!(app.notices.is_empty());
}

#[test]
fn unprompted_permission_does_not_remind() {
    let mut app = make_app(Permission::Unprompted);
    add_task_due(&mut app, "Waiting", date(2024, 3, 15));

    app.tick_sweeps(at(date(2024, 3, 14), 20));

    assert!(app.notices.is_empty());
}

#[test]
fn startup_question_persists_the_answer() {
    let dir = tempfile::tempdir().unwrap();
    let permission_path = dir.path().join("notify-permission");

    // First launch: undecided, the app asks, the user grants.
    let config = AppConfig::default();
    let mut app = App::new(TaskStore::in_memory(), &config)
        .with_permission(PermissionStore::new(&permission_path));
    assert!(app.prompting_permission);
    app.handle_key_event(key(KeyCode::Char('y')));
    assert_eq!(app.permission, Permission::Granted);

    // Second launch: the decision is remembered, no question.
    let app2 = App::new(TaskStore::in_memory(), &config)
        .with_permission(PermissionStore::new(&permission_path));
    assert_eq!(app2.permission, Permission::Granted);
    assert!(!app2.prompting_permission);
}

#[test]
fn denial_is_remembered_and_silent() {
    let dir = tempfile::tempdir().unwrap();
    let permission_path = dir.path().join("notify-permission");

    let config = AppConfig {
        sweep_interval: std::time::Duration::ZERO,
        ..AppConfig::default()
    };
    let mut app = App::new(TaskStore::in_memory(), &config)
        .with_permission(PermissionStore::new(&permission_path));
    app.handle_key_event(key(KeyCode::Char('n')));
    assert_eq!(app.permission, Permission::Denied);
    // Denial produces no notice of its own.
    assert!(app.notices.is_empty());

    let mut app2 = App::new(TaskStore::in_memory(), &config)
        .with_permission(PermissionStore::new(&permission_path));
    assert_eq!(app2.permission, Permission::Denied);
    app2.start_sweeps();
    add_task_due(&mut app2, "Still quiet", date(2024, 3, 15));
    app2.tick_sweeps(at(date(2024, 3, 14), 20));
    assert!(app2.notices.is_empty());
}

// ---------------------------------------------------------------------------
// Sweep lifecycle
// ---------------------------------------------------------------------------

#[test]
fn stopped_sweeps_do_not_fire() {
    let mut app = make_app(Permission::Granted);
    add_task_due(&mut app, "Paused", date(2024, 3, 15));
    app.stop_sweeps();

    app.tick_sweeps(at(date(2024, 3, 14), 20));
    assert!(app.notices.is_empty());
}

#[test]
fn interval_gates_repeat_sweeps() {
    let config = AppConfig::default(); // 1-hour interval
    let mut app = App::new(TaskStore::in_memory(), &config);
    app.permission = Permission::Granted;
    app.start_sweeps();

    app.focus = PanelFocus::Entry;
    add_task_due(&mut app, "Once for now", date(2024, 3, 15));

    app.tick_sweeps(at(date(2024, 3, 14), 20));
    let after_first = app.notices.len();
    // Immediately ticking again is inside the interval: no new notice.
    app.tick_sweeps(at(date(2024, 3, 14), 20));
    assert_eq!(app.notices.len(), after_first);
}
