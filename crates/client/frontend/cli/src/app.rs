//! Glue code tying the scene, the mint handle, and the terminal UI together.
use anyhow::Result;
use async_trait::async_trait;

use client_frontend_core::{EventConsumer, Frontend, FrontendConfig, MintHandle, NoticeFeed};
use game_core::{GameConfig, SceneController, SystemClock};

use crate::config::CliConfig;
use crate::event::EventLoop;
use crate::physics::ArcadePhysics;
use crate::presentation::terminal::TerminalSession;

/// Terminal frontend: plays one session, then hosts the mint screen.
pub struct CliFrontend {
    frontend_config: FrontendConfig,
    cli_config: CliConfig,
    game_config: GameConfig,
}

impl CliFrontend {
    pub fn new(frontend_config: FrontendConfig, cli_config: CliConfig) -> Self {
        Self {
            frontend_config,
            cli_config,
            game_config: GameConfig::default(),
        }
    }

    pub fn with_game_config(mut self, game_config: GameConfig) -> Self {
        self.game_config = game_config;
        self
    }

    /// Builds the scene and its physics; the session timer starts here.
    fn start_scene(&self) -> (SceneController<SystemClock>, ArcadePhysics) {
        let controller = SceneController::new(self.game_config.clone(), SystemClock::new());
        let mut physics = ArcadePhysics::new();
        controller.attach(&mut physics);
        (controller, physics)
    }
}

#[async_trait]
impl Frontend for CliFrontend {
    async fn run(&mut self, handle: MintHandle) -> Result<()> {
        tracing::info!("CLI client starting...");

        let mut consumer = NoticeFeed::new(self.frontend_config.messages.capacity);
        consumer.message_log_mut().push_text(format!(
            "Collect all {} stars. Arrows or WASD to move, Tab for the scoreboard, Esc to quit.",
            self.game_config.collectible_count
        ));

        let mut session = TerminalSession::enter()?;

        let (controller, physics) = self.start_scene();
        let event_loop = EventLoop::new(
            controller,
            physics,
            consumer,
            handle,
            self.cli_config.clone(),
        );

        let _consumer = event_loop.run(session.tui()).await?;

        session.leave()?;
        tracing::info!("CLI client exiting");

        Ok(())
    }
}
