//! Session rules for the star-collecting platformer.
//!
//! `game-core` owns the game session state machine: scoring, timing and win
//! detection. It never integrates movement or resolves collisions itself;
//! those come from a [`PhysicsSource`] supplied by the frontend, and time
//! comes from a [`MonotonicClock`]. All session mutation flows through
//! [`engine::SceneController`].
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod input;
pub mod physics;
pub mod state;
pub mod tracker;

pub use clock::{ManualClock, MonotonicClock, SystemClock};
pub use config::GameConfig;
pub use engine::{SceneController, SceneEvent, TickOutcome, next_state};
pub use error::{ErrorSeverity, SceneError};
pub use input::{DirectionalInput, VelocityCommand};
pub use physics::{BodyGroup, BodyKind, Overlap, PhysicsSource};
pub use state::{
    Collectible, EntityId, HudSnapshot, Position, SceneState, Session, SessionSummary,
};
pub use tracker::{ScoreTracker, SessionTimer};
