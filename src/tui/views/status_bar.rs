//! Status bar
//!
//! Shows transient status messages (exports, clears) or the key hints.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let line = if let Some(message) = &app.status_message {
        Line::from(Span::styled(
            message.clone(),
            Style::default().fg(Color::Green),
        ))
    } else if app.input_mode == InputMode::Editing {
        Line::from(Span::styled(
            " type to edit │ Tab other column │ Enter/Esc done",
            Style::default().fg(Color::Yellow),
        ))
    } else {
        Line::from(Span::styled(
            " a add │ d remove │ i edit │ j/k move │ e CSV │ E JSON │ X clear │ q quit",
            Style::default().fg(Color::DarkGray),
        ))
    };

    frame.render_widget(Paragraph::new(line), area);
}
