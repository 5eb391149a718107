//! Error infrastructure for game-core.
//!
//! Scene errors carry a severity so frontends can decide whether to keep
//! ticking or abandon the session.

use crate::engine::SceneEvent;
use crate::state::{EntityId, SceneState};

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the tick can be retried or the event ignored
/// - **Internal**: the session bookkeeping and the physics source disagree
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    Recoverable,
    Internal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Internal => "internal",
        }
    }

    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Errors surfaced by the scene controller.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SceneError {
    /// The transition table has no entry for this pair.
    #[error("invalid scene transition: {event:?} while {from}")]
    InvalidTransition { from: SceneState, event: SceneEvent },

    /// The physics source reported an overlap with a body the session never spawned.
    #[error("overlap reported for unknown collectible {0}")]
    UnknownCollectible(EntityId),
}

impl SceneError {
    pub const fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidTransition { .. } => ErrorSeverity::Recoverable,
            Self::UnknownCollectible(_) => ErrorSeverity::Internal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_collectible_is_internal() {
        let error = SceneError::UnknownCollectible(EntityId(42));
        assert_eq!(error.severity(), ErrorSeverity::Internal);
        assert_eq!(error.to_string(), "overlap reported for unknown collectible #42");
    }

    #[test]
    fn invalid_transition_names_the_state() {
        let error = SceneError::InvalidTransition {
            from: SceneState::Ended,
            event: SceneEvent::ThresholdReached,
        };
        assert!(error.severity().is_recoverable());
        assert_eq!(
            error.to_string(),
            "invalid scene transition: ThresholdReached while Ended"
        );
    }
}
