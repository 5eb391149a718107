//! UI rendering entry point.
//!
//! Composes the widgets into the complete terminal UI.
use anyhow::Result;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::{
    physics::ArcadePhysics,
    presentation::{terminal::Tui, theme::RatatuiTheme, widgets},
};
use client_frontend_core::{EndingView, HudView, MessageLog, ScoreboardView};

/// Rendering context containing all state needed for one frame.
pub struct RenderContext<'a> {
    pub hud: &'a HudView,
    pub physics: &'a ArcadePhysics,
    /// Present once the scene has ended.
    pub ending: Option<&'a EndingView>,
    pub name: &'a str,
    pub scoreboard: Option<&'a ScoreboardView>,
    pub messages: &'a MessageLog,
    pub message_panel_height: u16,
}

/// Render the terminal UI.
///
/// The middle panel shows, in priority order: the scoreboard when open,
/// the ending screen once the scene has ended, otherwise the level.
pub fn render(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    let theme = RatatuiTheme;

    terminal.draw(|frame| {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(8),
                Constraint::Length(ctx.message_panel_height),
            ])
            .split(frame.area());

        widgets::header::render(frame, chunks[0], ctx.hud, ctx.ending.is_some(), &theme);

        match (ctx.scoreboard, ctx.ending) {
            (Some(scoreboard), _) => widgets::scoreboard::render(frame, chunks[1], scoreboard, &theme),
            (None, Some(ending)) => {
                widgets::ending::render(frame, chunks[1], ending, ctx.name, &theme)
            }
            (None, None) => widgets::world::render(frame, chunks[1], ctx.physics, &theme),
        }

        widgets::messages::render(frame, chunks[2], ctx.messages, &theme);
    })?;

    Ok(())
}
