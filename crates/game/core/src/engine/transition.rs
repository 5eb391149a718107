//! Scene transition table.

use crate::error::SceneError;
use crate::state::SceneState;

/// Inputs to the scene state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneEvent {
    /// One frame elapsed.
    Tick,
    /// The score reached or exceeded the win threshold.
    ThresholdReached,
}

/// Looks up the successor of `state` under `event`.
///
/// | from      | event              | to        |
/// |-----------|--------------------|-----------|
/// | `Playing` | `Tick`             | `Playing` |
/// | `Playing` | `ThresholdReached` | `Ended`   |
/// | `Ended`   | `Tick`             | `Ended`   |
///
/// `Ended` is terminal; a second `ThresholdReached` is rejected so the
/// session can only end once.
pub fn next_state(state: SceneState, event: SceneEvent) -> Result<SceneState, SceneError> {
    match (state, event) {
        (SceneState::Playing, SceneEvent::Tick) => Ok(SceneState::Playing),
        (SceneState::Playing, SceneEvent::ThresholdReached) => Ok(SceneState::Ended),
        (SceneState::Ended, SceneEvent::Tick) => Ok(SceneState::Ended),
        (from @ SceneState::Ended, event @ SceneEvent::ThresholdReached) => {
            Err(SceneError::InvalidTransition { from, event })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playing_ends_on_threshold() {
        assert_eq!(
            next_state(SceneState::Playing, SceneEvent::ThresholdReached),
            Ok(SceneState::Ended)
        );
        assert_eq!(
            next_state(SceneState::Playing, SceneEvent::Tick),
            Ok(SceneState::Playing)
        );
    }

    #[test]
    fn ended_is_terminal() {
        assert_eq!(
            next_state(SceneState::Ended, SceneEvent::Tick),
            Ok(SceneState::Ended)
        );
        assert!(next_state(SceneState::Ended, SceneEvent::ThresholdReached).is_err());
    }
}
