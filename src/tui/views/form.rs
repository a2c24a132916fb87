//! Income field and expense rows
//!
//! The editable half of the screen. The focused cell is highlighted; while
//! editing, the cell shows the raw edit buffer (the model keeps the coerced
//! value, so garbage input reads back as typed but counts as 0).

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::chart::Rgb;
use crate::tui::app::{App, Column, Focus, InputMode};

/// Render the monthly income field
pub fn render_income(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Income;
    let editing = focused && app.input_mode == InputMode::Editing;

    let block = Block::default()
        .title(" Monthly Income ")
        .borders(Borders::ALL)
        .border_style(border_style(focused));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    if editing {
        frame.render_widget(&app.editor, inner);
    } else {
        let text = format!("{:.2}", app.controller.ledger().income);
        frame.render_widget(
            Paragraph::new(text).style(Style::default().fg(Color::White)),
            inner,
        );
    }
}

/// Render the expense rows
pub fn render_expenses(frame: &mut Frame, app: &mut App, area: Rect) {
    let row_focused = matches!(app.focus, Focus::Row { .. });

    let block = Block::default()
        .title(" Expenses ")
        .borders(Borders::ALL)
        .border_style(border_style(row_focused));

    let ledger = app.controller.ledger();

    if ledger.expenses.is_empty() {
        let text = Paragraph::new("No expenses. Press 'a' to add a row.")
            .block(block)
            .style(Style::default().fg(Color::Yellow));
        frame.render_widget(text, area);
        return;
    }

    let mut rows: Vec<Row> = Vec::new();
    for (index, entry) in ledger.expenses.iter().enumerate() {
        let swatch = Cell::from("■").style(Style::default().fg(to_color(app.view.breakdown.colors[index])));

        let category_cell = cell_text(app, index, Column::Category, &entry.category);
        let amount_cell = cell_text(app, index, Column::Amount, &format!("{:.2}", entry.amount));

        rows.push(Row::new(vec![
            swatch,
            Cell::from(category_cell.0).style(category_cell.1),
            Cell::from(amount_cell.0).style(amount_cell.1),
        ]));
    }

    let widths = [
        Constraint::Length(2),  // Color swatch
        Constraint::Min(16),    // Category
        Constraint::Length(14), // Amount
    ];

    let header = Row::new(vec![
        Cell::from(""),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Amount").style(Style::default().add_modifier(Modifier::BOLD)),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("▶ ");

    let selected = match app.focus {
        Focus::Row { index, .. } => Some(index),
        Focus::Income => None,
    };

    let mut state = TableState::default();
    state.select(selected);

    frame.render_stateful_widget(table, area, &mut state);
}

/// Text and style for one table cell, swapping in the edit buffer when this
/// cell is being edited.
fn cell_text(app: &App, index: usize, column: Column, model_value: &str) -> (String, Style) {
    let focused = app.focus
        == Focus::Row {
            index,
            column,
        };

    if focused && app.input_mode == InputMode::Editing {
        (
            format!("{}▏", app.editor.value()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        )
    } else if focused {
        (
            model_value.to_string(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        (model_value.to_string(), Style::default().fg(Color::White))
    }
}

fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    }
}

/// Map a breakdown color to a terminal color
pub fn to_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.0, rgb.1, rgb.2)
}
