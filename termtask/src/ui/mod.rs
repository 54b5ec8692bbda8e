//! Terminal UI rendering.

pub mod entry_form;
pub mod filter_panel;
pub mod status_bar;
pub mod task_list;
pub mod theme;

use chrono::NaiveDate;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::app::App;

/// Main draw function for the entire UI.
pub fn draw(frame: &mut Frame, app: &App, today: NaiveDate) {
    // Entry form on top, task list in the middle, notice line and
    // status bar at the bottom.
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(entry_form::height(app)),
            Constraint::Min(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(frame.area());

    entry_form::render(frame, main_chunks[0], app);

    // The filter panel takes a right-hand column while visible.
    if app.show_filters {
        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(main_chunks[1]);
        task_list::render(frame, content_chunks[0], app, today);
        filter_panel::render(frame, content_chunks[1], app);
    } else {
        task_list::render(frame, main_chunks[1], app, today);
    }

    status_bar::render_notice(frame, main_chunks[2], app);
    status_bar::render(frame, main_chunks[3], app);
}
