//! Event loop orchestrating the scene, user input, and rendering.
//!
//! Two sources wake the loop:
//! - the frame interval, which drains keyboard input, steps physics, ticks
//!   the scene controller and redraws
//! - mint workflow snapshots, which refresh the ending screen and the
//!   message log
//! - scoreboard listings, fetched on their own task

use anyhow::Result;
use tokio::time::{self, Duration, MissedTickBehavior};

use client_frontend_core::{EndingView, EventConsumer, HudView, MintHandle};
use game_core::{SceneController, SystemClock};

use super::scoreboard::ScoreboardRequests;
use crate::{
    config::CliConfig,
    input::{HeldKeys, InputHandler},
    physics::ArcadePhysics,
    presentation::terminal::Tui,
    state::AppState,
};

/// Event loop owning the scene and the terminal-side state.
///
/// The scene controller and its physics live here; the mint workflow is
/// reached only through the [`MintHandle`].
pub struct EventLoop<C>
where
    C: EventConsumer,
{
    pub(crate) controller: SceneController<SystemClock>,
    pub(crate) physics: ArcadePhysics,
    pub(crate) input: InputHandler,
    pub(crate) held: HeldKeys,
    pub(crate) consumer: C,
    pub(crate) app_state: AppState,
    pub(crate) handle: MintHandle,
    pub(crate) cli_config: CliConfig,
    /// HUD labels from the latest tick.
    pub(crate) hud: HudView,
    /// Ending screen, present once the scene has ended.
    pub(crate) ending: Option<EndingView>,
    pub(crate) scoreboard: ScoreboardRequests,
}

impl<C> EventLoop<C>
where
    C: EventConsumer,
{
    /// Builds the loop; `physics` must already carry the controller's bodies.
    pub fn new(
        controller: SceneController<SystemClock>,
        physics: ArcadePhysics,
        consumer: C,
        handle: MintHandle,
        cli_config: CliConfig,
    ) -> Self {
        let hud = HudView::from_snapshot(&controller.hud());

        Self {
            controller,
            physics,
            input: InputHandler::new(),
            held: HeldKeys::new(cli_config.input_hold_frames),
            consumer,
            app_state: AppState::new(),
            handle,
            cli_config,
            hud,
            ending: None,
            scoreboard: ScoreboardRequests::new(),
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<C> {
        self.render(terminal)?;

        let mut updates = self.handle.subscribe();
        let mut updates_open = true;

        let mut frames = time::interval(Duration::from_millis(self.cli_config.frame_interval_ms));
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                _ = frames.tick() => {
                    if self.handle_frame_tick(terminal).await? {
                        break;
                    }
                }
                changed = updates.changed(), if updates_open => {
                    if changed.is_err() {
                        tracing::warn!("Mint coordinator stopped publishing snapshots");
                        updates_open = false;
                        continue;
                    }
                    let snapshot = updates.borrow_and_update().clone();
                    self.handle_snapshot(&snapshot, terminal)?;
                }
                listing = self.scoreboard.next(), if self.scoreboard.is_pending() => {
                    self.handle_listing(listing, terminal)?;
                }
            }
        }

        Ok(self.consumer)
    }
}
