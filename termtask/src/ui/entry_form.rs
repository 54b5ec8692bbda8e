//! New-task entry form rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::app::{App, EntryField, PanelFocus};

use super::theme;

/// Height of the form in rows (including borders) for the current mode.
#[must_use]
pub fn height(app: &App) -> u16 {
    if app.quick_entry {
        3
    } else if app.draft.recurring {
        9
    } else {
        8
    }
}

/// Render the entry form.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Entry;

    let mut lines = vec![text_line(app, is_focused)];
    if !app.quick_entry {
        lines.push(selector_line(
            app,
            EntryField::Priority,
            "Priority",
            &app.draft.priority.to_string(),
            is_focused,
        ));
        lines.push(selector_line(
            app,
            EntryField::DueDate,
            "Due",
            &date_display(app),
            is_focused,
        ));
        lines.push(selector_line(
            app,
            EntryField::Category,
            "Category",
            &app.draft.category,
            is_focused,
        ));
        lines.push(assignee_line(app, is_focused));
        lines.push(selector_line(
            app,
            EntryField::Recurring,
            "Recurring",
            if app.draft.recurring { "yes" } else { "no" },
            is_focused,
        ));
        if app.draft.recurring {
            lines.push(selector_line(
                app,
                EntryField::Frequency,
                "Frequency",
                &app.draft.frequency.to_string(),
                is_focused,
            ));
        }
    }

    let title = if app.quick_entry {
        "New Task (quick)"
    } else {
        "New Task"
    };
    let block = Block::default()
        .title(Span::styled(title, theme::panel_title(theme::ENTRY_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// The text input line with cursor.
fn text_line(app: &App, is_focused: bool) -> Line<'static> {
    let active = is_focused && app.entry_field == EntryField::Text;

    let mut display = app.input.clone();
    if active {
        if app.cursor_position >= display.len() {
            display.push('█');
        } else {
            display.insert(app.cursor_position, '█');
        }
    }

    if display.is_empty() {
        Line::from(Span::styled(
            "Add a new task...".to_owned(),
            theme::dimmed(),
        ))
    } else {
        Line::from(Span::styled(
            display,
            if active { theme::bold() } else { theme::normal() },
        ))
    }
}

/// A labeled single-value selector line.
fn selector_line(
    app: &App,
    field: EntryField,
    label: &str,
    value: &str,
    is_focused: bool,
) -> Line<'static> {
    let active = is_focused && app.entry_field == field;
    let marker = if active { "> " } else { "  " };
    Line::from(vec![
        Span::styled(marker.to_owned(), theme::highlighted()),
        Span::styled(format!("{label}: "), theme::dimmed()),
        Span::styled(
            value.to_owned(),
            if active { theme::highlighted() } else { theme::normal() },
        ),
    ])
}

/// Due-date value with an input cursor while the field is active.
fn date_display(app: &App) -> String {
    if app.due_input.is_empty() {
        "(none)".to_owned()
    } else {
        app.due_input.clone()
    }
}

/// The assignee multi-select line: `[x]` marks draft members, the cursor
/// underlines the preset under selection.
fn assignee_line(app: &App, is_focused: bool) -> Line<'static> {
    let active = is_focused && app.entry_field == EntryField::Assignees;
    let marker = if active { "> " } else { "  " };

    let mut spans = vec![
        Span::styled(marker.to_owned(), theme::highlighted()),
        Span::styled("Assignees: ".to_owned(), theme::dimmed()),
    ];
    for (i, name) in app.assignees().iter().enumerate() {
        let member = app.draft.assignees.contains(name);
        let mark = if member { "[x] " } else { "[ ] " };
        let style = if active && i == app.assignee_cursor {
            theme::highlighted()
        } else if member {
            theme::normal()
        } else {
            theme::dimmed()
        };
        spans.push(Span::styled(format!("{mark}{name}  "), style));
    }
    Line::from(spans)
}
