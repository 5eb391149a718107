use strum::{Display, IntoStaticStr};

/// Scene the session is in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, IntoStaticStr)]
pub enum SceneState {
    /// Collecting stars. Initial state.
    #[default]
    Playing,
    /// Threshold reached; gameplay is over and the minting flow takes over.
    Ended,
}

/// Mutable bookkeeping for one play-through.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    pub score: u32,
    /// Captured once, when the win condition is detected.
    pub elapsed_time_ms: Option<u64>,
    pub state: SceneState,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot carried into the Ended scene. `None` until the session ends.
    pub fn summary(&self) -> Option<SessionSummary> {
        match (self.state, self.elapsed_time_ms) {
            (SceneState::Ended, Some(elapsed_ms)) => Some(SessionSummary {
                score: self.score,
                elapsed_ms,
            }),
            _ => None,
        }
    }
}

/// Score and time snapshotted at the instant the session was won.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SessionSummary {
    pub score: u32,
    pub elapsed_ms: u64,
}

impl SessionSummary {
    pub fn new(score: u32, elapsed_ms: u64) -> Self {
        Self { score, elapsed_ms }
    }

    /// Elapsed time in seconds with millisecond precision.
    pub fn record_seconds(&self) -> f64 {
        self.elapsed_ms as f64 / 1000.0
    }
}

/// What the HUD needs while playing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HudSnapshot {
    pub score: u32,
    /// Running clock reading since the session started.
    pub elapsed_ms: u64,
}
