//! Budgetpad - Terminal-based monthly budget calculator
//!
//! One screen: monthly income, a variable list of expense rows, a live
//! total/balance readout, and a proportional breakdown chart. Every edit is
//! mirrored to a single JSON snapshot on disk, and the current budget can be
//! exported as CSV or JSON.
//!
//! # Architecture
//!
//! - `config`: data directory and snapshot slot paths
//! - `error`: custom error types
//! - `models`: the ledger (income + expense entries) and its snapshot form
//! - `storage`: the single-slot snapshot store with atomic writes
//! - `export`: CSV/JSON payload rendering and file delivery
//! - `chart`: breakdown data (labels, values, pastel colors) for the chart
//! - `controller`: the only mutation path; save-after-every-edit
//! - `display`: table formatting for the headless `show` command
//! - `cli`: clap command handlers
//! - `tui`: the interactive screen

pub mod chart;
pub mod cli;
pub mod config;
pub mod controller;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod storage;
pub mod tui;

pub use error::{BudgetError, BudgetResult};
