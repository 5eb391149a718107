//! Mint workflow interaction.

use anyhow::Result;
use client_frontend_core::{EndingView, EventConsumer, MessageEntry, MessageLevel, MintSnapshot};

use super::super::{EventLoop, scoreboard::Listing};
use crate::{presentation::terminal::Tui, state::AppMode};

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Applies a workflow snapshot to the ending screen and message log.
    pub(in crate::event) fn handle_snapshot(
        &mut self,
        snapshot: &MintSnapshot,
        terminal: &mut Tui,
    ) -> Result<()> {
        let impact = self.consumer.on_snapshot(snapshot);

        if self.app_state.mode == AppMode::Ending {
            self.ending = Some(EndingView::from_snapshot(snapshot));
        }

        if impact.requires_redraw {
            self.render(terminal)?;
        }
        Ok(())
    }

    /// Enter on the ending screen: submit the name, or re-arm a failure.
    pub(in crate::event) async fn confirm(&mut self) {
        let Some(ending) = &self.ending else {
            return;
        };

        let result = if ending.can_rearm {
            self.handle.rearm().await
        } else if ending.accepts_name {
            self.handle.submit(self.app_state.name.clone()).await
        } else {
            return;
        };

        if let Err(e) = result {
            tracing::warn!("Mint command refused: {}", e);
            self.consumer.message_log_mut().push(MessageEntry::new(
                e.to_string(),
                None,
                MessageLevel::Warning,
            ));
        }
    }

    /// Closes the scoreboard, or starts loading a fresh listing.
    pub(in crate::event) fn toggle_scoreboard(&mut self) {
        if self.app_state.scoreboard.take().is_some() {
            return;
        }

        if !self.scoreboard.request(&self.handle) {
            tracing::debug!("Scoreboard already loading");
        }
    }

    /// Shows a finished scoreboard listing.
    pub(in crate::event) fn handle_listing(
        &mut self,
        listing: Listing,
        terminal: &mut Tui,
    ) -> Result<()> {
        match listing {
            Ok(view) => {
                tracing::debug!(count = view.rows.len(), "Scoreboard loaded");
                self.app_state.scoreboard = Some(view);
            }
            Err(e) => {
                tracing::warn!("Failed to load scoreboard: {:#}", e);
                self.consumer.message_log_mut().push(MessageEntry::new(
                    "Scoreboard unavailable",
                    None,
                    MessageLevel::Warning,
                ));
            }
        }
        self.render(terminal)
    }
}
