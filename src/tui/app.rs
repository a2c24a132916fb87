//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.
//! The ledger itself lives in the Controller; everything here is projection:
//! which cell has focus, the in-progress edit buffer, the active dialog.

use crate::controller::{Controller, ViewState};
use crate::error::BudgetResult;

use super::widgets::input::TextInput;

/// Which column of an expense row has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Category,
    Amount,
}

/// Which form element has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// The monthly income field
    Income,
    /// One cell of one expense row
    Row { index: usize, column: Column },
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    /// Blocking confirmation before Clear is allowed to execute
    ConfirmClear,
}

/// Main application state
pub struct App<'a> {
    /// The one mutation path; owns the ledger and the snapshot store
    pub controller: &'a mut Controller,

    /// Figures refreshed after every transition (total, balance, breakdown)
    pub view: ViewState,

    /// Focused form element
    pub focus: Focus,

    /// Current input mode
    pub input_mode: InputMode,

    /// Edit buffer for the focused cell while in Editing mode
    pub editor: TextInput,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Status message to display
    pub status_message: Option<String>,

    /// Whether the app should quit
    pub should_quit: bool,
}

impl<'a> App<'a> {
    /// Create a new App instance over a hydrated controller
    pub fn new(controller: &'a mut Controller) -> Self {
        let view = controller.view();
        Self {
            controller,
            view,
            focus: Focus::Income,
            input_mode: InputMode::default(),
            editor: TextInput::new(),
            active_dialog: ActiveDialog::default(),
            status_message: None,
            should_quit: false,
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        self.active_dialog != ActiveDialog::None
    }

    /// Number of expense rows
    pub fn row_count(&self) -> usize {
        self.controller.ledger().expenses.len()
    }

    /// Move focus up: row n -> row n-1 -> income
    pub fn move_up(&mut self) {
        if let Focus::Row { index, column } = self.focus {
            self.focus = if index == 0 {
                Focus::Income
            } else {
                Focus::Row {
                    index: index - 1,
                    column,
                }
            };
        }
    }

    /// Move focus down: income -> row 0 -> row n+1
    pub fn move_down(&mut self) {
        let count = self.row_count();
        match self.focus {
            Focus::Income => {
                if count > 0 {
                    self.focus = Focus::Row {
                        index: 0,
                        column: Column::Category,
                    };
                }
            }
            Focus::Row { index, column } => {
                if index + 1 < count {
                    self.focus = Focus::Row {
                        index: index + 1,
                        column,
                    };
                }
            }
        }
    }

    /// Toggle between the category and amount columns
    pub fn toggle_column(&mut self) {
        if let Focus::Row { index, column } = self.focus {
            self.focus = Focus::Row {
                index,
                column: match column {
                    Column::Category => Column::Amount,
                    Column::Amount => Column::Category,
                },
            };
        }
    }

    /// Clamp the focused row after a removal; falls back to the income field
    /// when no rows remain.
    pub fn clamp_focus(&mut self) {
        let count = self.row_count();
        if let Focus::Row { index, column } = self.focus {
            self.focus = if count == 0 {
                Focus::Income
            } else {
                Focus::Row {
                    index: index.min(count - 1),
                    column,
                }
            };
        }
    }

    /// Enter Editing mode with the buffer preloaded from the model
    pub fn begin_edit(&mut self) {
        let current = match self.focus {
            Focus::Income => format_number(self.controller.ledger().income),
            Focus::Row { index, column } => {
                match self.controller.ledger().expenses.get(index) {
                    Some(entry) => match column {
                        Column::Category => entry.category.clone(),
                        Column::Amount => format_number(entry.amount),
                    },
                    None => return,
                }
            }
        };
        self.editor = TextInput::new().content(current).focused(true);
        self.input_mode = InputMode::Editing;
    }

    /// Leave Editing mode
    pub fn end_edit(&mut self) {
        self.input_mode = InputMode::Normal;
        self.editor = TextInput::new();
    }

    /// Push the edit buffer through the controller. Called after every
    /// buffer change so the snapshot mirrors each keystroke.
    pub fn commit_edit(&mut self) -> BudgetResult<()> {
        let value = self.editor.value().to_string();
        self.view = match self.focus {
            Focus::Income => self.controller.edit_income(&value)?,
            Focus::Row {
                index,
                column: Column::Category,
            } => self.controller.edit_category(index, &value)?,
            Focus::Row {
                index,
                column: Column::Amount,
            } => self.controller.edit_amount(index, &value)?,
        };
        Ok(())
    }
}

/// Render a stored number for an edit buffer: zero becomes the empty
/// placeholder, anything else the shortest display form.
fn format_number(value: f64) -> String {
    if value == 0.0 {
        String::new()
    } else {
        format!("{}", value)
    }
}
