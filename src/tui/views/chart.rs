//! Breakdown chart view
//!
//! Renders the proportional expense breakdown as a bar chart, one bar per
//! entry in its pastel position color. Negative amounts cannot occupy a share
//! of a proportional chart, so their bars floor at zero; the amounts still
//! count in the totals.

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};

use crate::tui::app::App;

use super::form::to_color;

/// Render the breakdown chart
pub fn render(frame: &mut Frame, app: &mut App, area: Rect) {
    let block = Block::default()
        .title(" Breakdown ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));

    let breakdown = &app.view.breakdown;

    if breakdown.is_empty() {
        let text = Paragraph::new("Nothing to chart yet.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let bars: Vec<Bar> = breakdown
        .labels
        .iter()
        .zip(&breakdown.values)
        .zip(&breakdown.colors)
        .map(|((label, &value), &color)| {
            Bar::default()
                .value(value.max(0.0).round() as u64)
                .text_value(format!("{:.2}", value))
                .label(Line::from(truncate(label, 8)))
                .style(Style::default().fg(to_color(color)))
                .value_style(
                    Style::default()
                        .fg(Color::Black)
                        .bg(to_color(color))
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(9)
        .bar_gap(1);

    frame.render_widget(chart, area);
}

/// Truncate a label to fit under its bar
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let head: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", head)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Rent", 8), "Rent");
        assert_eq!(truncate("Subscriptions", 8), "Subscri…");
    }
}
