//! Application state for mode management and UI context.

use client_frontend_core::ScoreboardView;

use crate::input::MAX_NAME_LEN;

/// Top-level application mode determining input handling and UI layout.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AppMode {
    /// Collecting stars.
    #[default]
    Playing,
    /// Scene ended; name entry and minting.
    Ending,
}

/// Mutable application state tracking mode and ending-screen input.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Nickname being typed on the ending screen.
    pub name: String,
    /// Scoreboard overlay, present while shown.
    pub scoreboard: Option<ScoreboardView>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn type_char(&mut self, ch: char) {
        if self.name.chars().count() < MAX_NAME_LEN {
            self.name.push(ch);
        }
    }

    pub fn erase_char(&mut self) {
        self.name.pop();
    }

    pub fn is_scoreboard_open(&self) -> bool {
        self.scoreboard.is_some()
    }
}
