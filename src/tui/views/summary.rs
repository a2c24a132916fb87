//! Total/balance summary line

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

/// Render the derived figures
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let balance_color = if app.view.balance < 0.0 {
        Color::Red
    } else {
        Color::Green
    };

    let line = Line::from(vec![
        Span::styled("Total Expenses: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{:.2}", app.view.total),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw("   "),
        Span::styled("Balance: ", Style::default().fg(Color::White)),
        Span::styled(
            format!("{:.2}", app.view.balance),
            Style::default()
                .fg(balance_color)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    frame.render_widget(Paragraph::new(line).block(block), area);
}
