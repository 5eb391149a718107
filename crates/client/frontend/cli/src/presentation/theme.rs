//! Colors and glyphs for the terminal UI.

use client_frontend_core::MessageLevel;
use game_core::BodyKind;
use ratatui::style::{Color, Modifier, Style};

/// Ratatui-specific theme.
///
/// This provides consistent color schemes and styling rules for the CLI.
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn body(&self, kind: BodyKind) -> (char, Style) {
        match kind {
            BodyKind::Player => (
                '@',
                Style::default()
                    .fg(Color::LightMagenta)
                    .add_modifier(Modifier::BOLD),
            ),
            BodyKind::Collectible => ('*', Style::default().fg(Color::Yellow)),
        }
    }

    pub fn platform(&self) -> (char, Style) {
        ('=', Style::default().fg(Color::Green))
    }

    pub fn sky(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(Color::Cyan)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn message(&self, level: MessageLevel) -> Style {
        match level {
            MessageLevel::Info => Style::default().fg(Color::White),
            MessageLevel::Warning => Style::default().fg(Color::Yellow),
            MessageLevel::Error => Style::default().fg(Color::LightRed),
        }
    }
}
