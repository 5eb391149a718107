//! Scene stepping.

use client_frontend_core::{EventConsumer, HudView, MessageEntry, MessageLevel, format};
use game_core::TickOutcome;

use super::super::EventLoop;
use crate::state::AppMode;

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Steps physics and ticks the controller while playing.
    ///
    /// Reports the summary to the mint coordinator on the winning frame.
    pub(in crate::event) async fn advance_scene(&mut self) {
        if self.app_state.mode != AppMode::Playing {
            return;
        }

        self.physics.step(self.cli_config.frame_seconds());
        let input = self.held.frame();

        match self.controller.tick(input, &mut self.physics) {
            Ok(TickOutcome::Playing(hud)) => self.hud = HudView::from_snapshot(&hud),
            Ok(TickOutcome::Won(summary)) => {
                tracing::info!(
                    score = summary.score,
                    elapsed_ms = summary.elapsed_ms,
                    "Scene ended"
                );

                self.hud = HudView::from_snapshot(&self.controller.hud());
                self.app_state.mode = AppMode::Ending;
                self.held.release_all();
                self.consumer.message_log_mut().push_text(format!(
                    "All stars collected in {} seconds",
                    format::seconds(summary.elapsed_ms)
                ));

                if let Err(e) = self.handle.scene_ended(summary).await {
                    tracing::error!("Failed to report scene end: {}", e);
                    self.consumer.message_log_mut().push(MessageEntry::new(
                        "Minting is unavailable",
                        Some(summary.elapsed_ms),
                        MessageLevel::Error,
                    ));
                }
            }
            Ok(TickOutcome::Ended) => {}
            Err(e) if e.severity().is_recoverable() => {
                tracing::debug!("Scene tick skipped: {}", e);
            }
            Err(e) => {
                tracing::error!(severity = e.severity().as_str(), "Scene tick failed: {}", e);
            }
        }
    }
}
