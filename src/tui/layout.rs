//! Layout definitions for the TUI
//!
//! One screen: income field on top, expense rows beside the breakdown chart,
//! summary line, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    /// Income field
    pub income: Rect,
    /// Expense rows
    pub expenses: Rect,
    /// Breakdown chart
    pub chart: Rect,
    /// Total/balance summary
    pub summary: Rect,
    /// Status bar at the bottom
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Income
                Constraint::Min(5),    // Expenses + chart
                Constraint::Length(3), // Summary
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        let middle = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(40),        // Expense rows
                Constraint::Percentage(40), // Chart
            ])
            .split(vertical[1]);

        Self {
            income: vertical[0],
            expenses: middle[0],
            chart: middle[1],
            summary: vertical[2],
            status_bar: vertical[3],
        }
    }
}

/// Create a fixed-size centered rect for dialogs
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let x = r.x + (r.width.saturating_sub(width)) / 2;
    let y = r.y + (r.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(r.width), height.min(r.height))
}
