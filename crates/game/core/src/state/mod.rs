//! Session state representation.
//!
//! Plain data owned by the scene controller: the session itself, the
//! collectibles laid out in the level, and the identifiers and positions
//! shared with the physics source.
mod collectible;
mod common;
mod session;

pub use collectible::Collectible;
pub use common::{EntityId, Position};
pub use session::{HudSnapshot, SceneState, Session, SessionSummary};
