//! Scene controller driving the session state machine.
//!
//! The [`SceneController`] is the authoritative owner of the [`Session`]. A
//! frontend calls [`SceneController::tick`] once per frame with the keys
//! held and the physics source; the controller drains overlaps into the
//! score tracker, runs the win check, and forwards movement. Once the
//! session has ended every tick is a no-op.

mod transition;

pub use transition::{SceneEvent, next_state};

use crate::clock::MonotonicClock;
use crate::config::GameConfig;
use crate::error::SceneError;
use crate::input::DirectionalInput;
use crate::physics::{BodyGroup, BodyKind, PhysicsSource};
use crate::state::{
    Collectible, EntityId, HudSnapshot, Position, SceneState, Session, SessionSummary,
};
use crate::tracker::{ScoreTracker, SessionTimer};

/// Result of a single frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Still collecting.
    Playing(HudSnapshot),
    /// The threshold was reached on this frame. Emitted exactly once.
    Won(SessionSummary),
    /// The session ended on an earlier frame.
    Ended,
}

pub struct SceneController<C: MonotonicClock> {
    config: GameConfig,
    session: Session,
    tracker: ScoreTracker,
    timer: SessionTimer,
    collectibles: Vec<Collectible>,
    clock: C,
}

impl<C: MonotonicClock> SceneController<C> {
    /// Starts a session: lays out the collectibles and starts the timer.
    pub fn new(config: GameConfig, clock: C) -> Self {
        let collectibles = (0..config.collectible_count)
            .map(|i| {
                let x = config.collectible_origin_x + config.collectible_step_x * i as f32;
                Collectible::new(
                    EntityId(EntityId::FIRST_COLLECTIBLE.0 + i),
                    Position::new(x, 0.0),
                )
            })
            .collect();

        let timer = SessionTimer::start(&clock);

        Self {
            tracker: ScoreTracker::new(config.points_per_collectible),
            config,
            session: Session::new(),
            timer,
            collectibles,
            clock,
        }
    }

    /// Spawns the player and collectibles and subscribes to their overlaps.
    pub fn attach(&self, physics: &mut dyn PhysicsSource) {
        let (x, y) = self.config.player_spawn;
        physics.spawn(EntityId::PLAYER, BodyKind::Player, Position::new(x, y));
        for collectible in &self.collectibles {
            physics.spawn(collectible.id, BodyKind::Collectible, collectible.position);
        }
        physics.on_overlap(EntityId::PLAYER, BodyGroup::Collectibles);
    }

    /// Advances the session by one frame.
    pub fn tick(
        &mut self,
        input: DirectionalInput,
        physics: &mut dyn PhysicsSource,
    ) -> Result<TickOutcome, SceneError> {
        if self.session.state == SceneState::Ended {
            self.session.state = next_state(self.session.state, SceneEvent::Tick)?;
            return Ok(TickOutcome::Ended);
        }

        // An unknown id must not cost the rest of the drained frame.
        let mut first_error = None;
        for overlap in physics.drain_overlaps() {
            if !overlap.a.is_player() {
                continue;
            }
            if let Err(e) = self.collect(overlap.b, physics) {
                first_error.get_or_insert(e);
            }
        }
        if let Some(e) = first_error {
            return Err(e);
        }

        if self.tracker.score() >= self.config.win_score {
            return self.finish().map(TickOutcome::Won);
        }

        self.session.state = next_state(self.session.state, SceneEvent::Tick)?;

        let command = input.velocity(physics.touching_down(EntityId::PLAYER), &self.config);
        physics.apply_velocity(EntityId::PLAYER, command);

        Ok(TickOutcome::Playing(self.hud()))
    }

    /// Credits a collectible the player touched.
    ///
    /// Returns `true` when the score changed; repeated overlaps return `false`.
    pub fn collect(
        &mut self,
        id: EntityId,
        physics: &mut dyn PhysicsSource,
    ) -> Result<bool, SceneError> {
        let collectible = self
            .collectibles
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(SceneError::UnknownCollectible(id))?;

        if !self.tracker.on_collect(collectible) {
            return Ok(false);
        }

        physics.disable_body(id);
        self.session.score = self.tracker.score();
        Ok(true)
    }

    fn finish(&mut self) -> Result<SessionSummary, SceneError> {
        self.session.state = next_state(self.session.state, SceneEvent::ThresholdReached)?;
        let elapsed_ms = self.timer.elapsed_ms(&self.clock);
        self.session.elapsed_time_ms = Some(elapsed_ms);
        Ok(SessionSummary::new(self.session.score, elapsed_ms))
    }

    pub fn hud(&self) -> HudSnapshot {
        HudSnapshot {
            score: self.session.score,
            elapsed_ms: self
                .session
                .elapsed_time_ms
                .unwrap_or_else(|| self.timer.elapsed_ms(&self.clock)),
        }
    }

    pub fn state(&self) -> SceneState {
        self.session.state
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Snapshot for the Ended scene; `None` while playing.
    pub fn summary(&self) -> Option<SessionSummary> {
        self.session.summary()
    }

    pub fn collectibles(&self) -> &[Collectible] {
        &self.collectibles
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }
}
