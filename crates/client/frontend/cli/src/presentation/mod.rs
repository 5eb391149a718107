//! Ratatui rendering for the CLI client.
pub mod terminal;
pub mod theme;
pub mod ui;
pub mod widgets;
