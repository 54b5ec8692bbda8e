//! Status bar and notice line rendering.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{App, PanelFocus};

use super::theme;

/// Render the notice line (latest notice, or the permission question).
pub fn render_notice(frame: &mut Frame, area: Rect, app: &App) {
    let line = if app.prompting_permission {
        Line::from(Span::styled(
            "Enable due-date reminder notifications? (y/n)",
            theme::prompt(),
        ))
    } else if let Some(notice) = app.notices.last() {
        Line::from(Span::styled(notice.clone(), theme::notice()))
    } else {
        Line::default()
    };
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom of the screen.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let help_text = if app.editing.is_some() {
        "Enter: save | Esc: cancel | ←→: move cursor"
    } else {
        match app.focus {
            PanelFocus::List => {
                "Space: toggle | e: edit | d: delete | n: new | f: filters | m: quick mode | Tab: switch panel | Esc: quit"
            }
            PanelFocus::Entry => {
                "Enter: add | ↑↓: fields | Space/←→: change value | Tab: switch panel | Esc: quit"
            }
            PanelFocus::Filters => {
                "↑↓/jk: navigate | Space: toggle | c: clear | Tab: switch panel | Esc: close"
            }
        }
    };

    let mode = if app.quick_entry { "quick" } else { "full" };

    let status_line = Line::from(vec![
        Span::styled("TermTask v0.1.0", theme::bold()),
        Span::raw(" | "),
        Span::raw(format!("{} tasks", app.store().len())),
        Span::raw(" | "),
        Span::raw(format!("entry: {mode}")),
        Span::raw(" | "),
        Span::styled(help_text, theme::dimmed()),
    ]);

    frame.render_widget(
        Paragraph::new(status_line).style(theme::status_bar_bg()),
        area,
    );
}
