//! Task list rendering.

use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use termtask_core::task::Task;

use crate::app::{App, PanelFocus};

use super::theme;

/// Render the task list for the current filter state.
pub fn render(frame: &mut Frame, area: Rect, app: &App, today: NaiveDate) {
    let is_focused = app.focus == PanelFocus::List;
    let visible = app.visible_tasks(today);
    let selected = app.selected.min(visible.len().saturating_sub(1));

    let items: Vec<ListItem> = if visible.is_empty() {
        vec![ListItem::new(Line::from(Span::styled(
            "No tasks found. Add one above!",
            theme::dimmed(),
        )))]
    } else {
        visible
            .iter()
            .enumerate()
            .map(|(i, task)| task_item(app, task, is_focused && i == selected))
            .collect()
    };

    let title = format!("Tasks ({}/{})", visible.len(), app.store().len());
    let block = Block::default()
        .title(Span::styled(title, theme::panel_title(theme::LIST_TITLE)))
        .borders(Borders::ALL)
        .border_style(if is_focused {
            theme::highlighted()
        } else {
            theme::normal()
        });

    frame.render_widget(List::new(items).block(block), area);
}

/// Build the list item for one task.
fn task_item(app: &App, task: &Task, is_selected: bool) -> ListItem<'static> {
    // An in-progress edit of this task replaces its text with the buffer.
    if let Some(edit) = &app.editing
        && edit.id == task.id
    {
        let mut buffer = edit.buffer.clone();
        if edit.cursor >= buffer.len() {
            buffer.push('█');
        } else {
            buffer.insert(edit.cursor, '█');
        }
        return ListItem::new(Line::from(vec![
            Span::styled("edit: ".to_owned(), theme::highlighted()),
            Span::styled(buffer, theme::bold()),
        ]));
    }

    let checkbox = if task.completed { "[✓] " } else { "[ ] " };
    let text_style = if task.completed {
        theme::completed()
    } else if is_selected {
        theme::selected()
    } else {
        theme::normal()
    };

    let mut spans = vec![
        Span::styled(checkbox.to_owned(), theme::normal()),
        Span::styled(task.text.clone(), text_style),
        Span::raw("  "),
        Span::styled(
            format!("⚑ {}", task.priority),
            theme::normal().fg(theme::priority_color(task.priority)),
        ),
    ];
    if let Some(due) = task.due_date {
        spans.push(Span::styled(
            format!("  due {}", due.format("%Y-%m-%d")),
            theme::dimmed(),
        ));
    }
    spans.push(Span::styled(format!("  #{}", task.category), theme::dimmed()));
    if !task.assignees.is_empty() {
        spans.push(Span::styled(
            format!("  @{}", task.assignees.join(",@")),
            theme::dimmed(),
        ));
    }
    if task.recurrence.enabled
        && let Some(frequency) = task.recurrence.frequency
    {
        let next = task
            .recurrence
            .next_due
            .map_or_else(String::new, |d| format!(" → {}", d.format("%Y-%m-%d")));
        spans.push(Span::styled(format!("  ⟳ {frequency}{next}"), theme::dimmed()));
    }

    ListItem::new(Line::from(spans))
}
