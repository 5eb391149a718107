//! Rendering handlers.

use anyhow::Result;
use client_frontend_core::EventConsumer;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let ctx = ui::RenderContext {
            hud: &self.hud,
            physics: &self.physics,
            ending: self.ending.as_ref(),
            name: &self.app_state.name,
            scoreboard: self.app_state.scoreboard.as_ref(),
            messages: self.consumer.message_log(),
            message_panel_height: self.cli_config.ui.message_panel_height,
        };

        ui::render(terminal, &ctx)
    }
}
