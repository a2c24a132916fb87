//! TUI Views module
//!
//! The budgeting screen is a fixed arrangement of areas: income field,
//! expense rows, breakdown chart, summary, status bar.

pub mod chart;
pub mod form;
pub mod status_bar;
pub mod summary;

use ratatui::Frame;

use super::app::{ActiveDialog, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &mut App) {
    let layout = AppLayout::new(frame.area());

    form::render_income(frame, app, layout.income);
    form::render_expenses(frame, app, layout.expenses);
    chart::render(frame, app, layout.chart);
    summary::render(frame, app, layout.summary);
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    match app.active_dialog {
        ActiveDialog::ConfirmClear => dialogs::confirm::render(frame, "Clear all data?"),
        ActiveDialog::None => {}
    }
}
