//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the current
//! application state. Every edit keystroke is committed through the
//! controller immediately, so totals, chart, and the on-disk snapshot follow
//! each keystroke.

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use crossterm::event::{KeyCode, KeyEvent};

use crate::export::ExportFormat;

use super::app::{ActiveDialog, App, Column, Focus, InputMode};
use super::event::Event;

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => Ok(()),
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Editing => handle_editing_key(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    app.clear_status();

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
        }

        // Navigation
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Tab | KeyCode::Char('h') | KeyCode::Char('l') | KeyCode::Left
        | KeyCode::Right => app.toggle_column(),

        // Add a blank expense row and start editing its category
        KeyCode::Char('a') => {
            app.view = app.controller.add_expense("", "")?;
            app.focus = Focus::Row {
                index: app.row_count() - 1,
                column: Column::Category,
            };
            app.begin_edit();
        }

        // Remove the focused row
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Focus::Row { index, .. } = app.focus {
                app.view = app.controller.remove_expense(index)?;
                app.clamp_focus();
            }
        }

        // Edit the focused cell
        KeyCode::Char('i') | KeyCode::Enter => app.begin_edit(),

        // Exports
        KeyCode::Char('e') => export(app, ExportFormat::Csv),
        KeyCode::Char('E') => export(app, ExportFormat::Json),

        // Clear all data (guarded by the confirm dialog)
        KeyCode::Char('X') => {
            app.active_dialog = ActiveDialog::ConfirmClear;
        }

        _ => {}
    }

    Ok(())
}

/// Handle keys while editing a cell
fn handle_editing_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.end_edit(),
        KeyCode::Char(c) => {
            app.editor.insert(c);
            app.commit_edit()?;
        }
        KeyCode::Backspace => {
            app.editor.backspace();
            app.commit_edit()?;
        }
        KeyCode::Left => app.editor.move_left(),
        KeyCode::Right => app.editor.move_right(),
        KeyCode::Tab => {
            // Jump to the other column of the same row and keep editing
            app.end_edit();
            app.toggle_column();
            app.begin_edit();
        }
        _ => {}
    }

    Ok(())
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match app.active_dialog {
        ActiveDialog::ConfirmClear => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => {
                if let Some(view) = app.controller.clear(true)? {
                    app.view = view;
                }
                app.focus = Focus::Income;
                app.active_dialog = ActiveDialog::None;
                app.set_status("All data cleared");
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                // Declined: no mutation
                app.active_dialog = ActiveDialog::None;
            }
            _ => {}
        },
        ActiveDialog::None => {}
    }

    Ok(())
}

/// Render an export into the current directory; failures land in the status
/// bar rather than tearing the screen down.
fn export(app: &mut App, format: ExportFormat) {
    match app
        .controller
        .export(format, Utc::now().date_naive(), Path::new("."))
    {
        Ok(file) => app.set_status(format!("Exported {}", file.filename)),
        Err(err) => app.set_status(format!("Export failed: {}", err)),
    }
}
