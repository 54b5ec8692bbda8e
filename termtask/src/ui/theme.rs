//! Theme and styling constants for the TUI.

use ratatui::style::{Color, Modifier, Style};

use termtask_core::task::Priority;

/// Primary foreground color.
pub const FG_PRIMARY: Color = Color::White;

/// Secondary foreground color (dimmed text).
pub const FG_SECONDARY: Color = Color::Gray;

/// Highlight color for focused elements.
pub const HIGHLIGHT: Color = Color::Cyan;

/// High priority indicator color.
pub const PRIORITY_HIGH: Color = Color::Red;

/// Medium priority indicator color.
pub const PRIORITY_MEDIUM: Color = Color::Yellow;

/// Low priority indicator color.
pub const PRIORITY_LOW: Color = Color::Green;

/// Panel title color for the task list.
pub const LIST_TITLE: Color = Color::Green;

/// Panel title color for the entry form.
pub const ENTRY_TITLE: Color = Color::Cyan;

/// Panel title color for the filter panel.
pub const FILTER_TITLE: Color = Color::Blue;

/// Normal text style.
#[must_use]
pub fn normal() -> Style {
    Style::default().fg(FG_PRIMARY)
}

/// Dimmed text style (metadata, completed tasks).
#[must_use]
pub fn dimmed() -> Style {
    Style::default().fg(FG_SECONDARY)
}

/// Bold text style.
#[must_use]
pub fn bold() -> Style {
    Style::default().fg(FG_PRIMARY).add_modifier(Modifier::BOLD)
}

/// Highlighted text style (focused panel borders, active fields).
#[must_use]
pub fn highlighted() -> Style {
    Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)
}

/// Selected item style (in lists).
#[must_use]
pub fn selected() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(HIGHLIGHT)
        .add_modifier(Modifier::BOLD)
}

/// Style for completed task text (dim strikethrough).
#[must_use]
pub fn completed() -> Style {
    Style::default()
        .fg(FG_SECONDARY)
        .add_modifier(Modifier::CROSSED_OUT)
}

/// Color for a priority flag.
#[must_use]
pub const fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => PRIORITY_HIGH,
        Priority::Medium => PRIORITY_MEDIUM,
        Priority::Low => PRIORITY_LOW,
    }
}

/// Style for notice lines (italic, dim blue).
#[must_use]
pub fn notice() -> Style {
    Style::default()
        .fg(Color::Rgb(100, 140, 180))
        .add_modifier(Modifier::ITALIC)
}

/// Style for the permission question (bold yellow).
#[must_use]
pub fn prompt() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for the status bar background.
#[must_use]
pub fn status_bar_bg() -> Style {
    Style::default().fg(Color::White).bg(Color::Rgb(30, 30, 50))
}

/// Style for panel titles with a given color (bold).
#[must_use]
pub fn panel_title(color: Color) -> Style {
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}
