//! Reusable TUI widgets

pub mod input;
