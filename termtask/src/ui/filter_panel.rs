//! Filter panel rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use termtask_core::filter::DueBucket;

use crate::app::{App, FilterRow, PanelFocus};

use super::theme;

/// Render the filter panel rows with their current states.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let is_focused = app.focus == PanelFocus::Filters;

    let items: Vec<ListItem> = app
        .filter_rows()
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let line = row_line(app, row);
            let item = ListItem::new(line);
            if is_focused && i == app.filter_cursor {
                item.style(theme::selected())
            } else {
                item
            }
        })
        .collect();

    let block = Block::default()
        .title(Span::styled(
            "Filters",
            theme::panel_title(theme::FILTER_TITLE),
        ))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    frame.render_widget(List::new(items).block(block), area);
}

/// One display line per filter row.
fn row_line(app: &App, row: &FilterRow) -> Line<'static> {
    match row {
        FilterRow::Priority(p) => checkbox_line(
            &format!("priority: {p}"),
            app.filter.priorities.contains(p),
        ),
        FilterRow::Category(c) => {
            checkbox_line(&format!("category: {c}"), app.filter.categories.contains(c))
        }
        FilterRow::Assignee(a) => {
            checkbox_line(&format!("assignee: {a}"), app.filter.assignees.contains(a))
        }
        FilterRow::DueBucket => {
            let value = match app.filter.due {
                None => "all",
                Some(DueBucket::Today) => "due today",
                Some(DueBucket::Week) => "due this week",
            };
            value_line("due", value, app.filter.due.is_some())
        }
        FilterRow::Completion => {
            let value = match app.filter.completed {
                None => "all",
                Some(false) => "open",
                Some(true) => "done",
            };
            value_line("status", value, app.filter.completed.is_some())
        }
    }
}

/// A `[x] label` toggle line.
fn checkbox_line(label: &str, active: bool) -> Line<'static> {
    let mark = if active { "[x] " } else { "[ ] " };
    let style = if active { theme::normal() } else { theme::dimmed() };
    Line::from(Span::styled(format!("{mark}{label}"), style))
}

/// A `label: value` cycling line.
fn value_line(label: &str, value: &str, active: bool) -> Line<'static> {
    let style = if active { theme::normal() } else { theme::dimmed() };
    Line::from(vec![
        Span::styled(format!("{label}: "), theme::dimmed()),
        Span::styled(value.to_owned(), style),
    ])
}
