//! Capability interface onto the external physics engine.
//!
//! The session never integrates movement or runs broad-phase collision. It
//! spawns bodies, subscribes to overlaps between the player and a body
//! group, and forwards velocity commands. Overlap notifications are
//! delivered as events the controller drains once per tick.

use crate::input::VelocityCommand;
use crate::state::{EntityId, Position};

/// Kind of body the session asks the physics source to create.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyKind {
    Player,
    Collectible,
}

/// Group an overlap subscription pairs a body with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BodyGroup {
    Collectibles,
}

/// One overlap notification for a subscribed pair.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Overlap {
    /// The subscribed body (the player).
    pub a: EntityId,
    /// The group member it touched.
    pub b: EntityId,
}

/// Physics engine as seen by the session.
///
/// Implementations may report the same overlap on consecutive frames; the
/// session deduplicates through the collectible's own flag.
pub trait PhysicsSource {
    /// Creates a body at `position`.
    fn spawn(&mut self, entity: EntityId, kind: BodyKind, position: Position);

    /// Subscribes to overlaps between `a` and every member of `b`.
    fn on_overlap(&mut self, a: EntityId, b: BodyGroup);

    /// Returns overlaps observed since the last call.
    fn drain_overlaps(&mut self) -> Vec<Overlap>;

    fn apply_velocity(&mut self, entity: EntityId, velocity: VelocityCommand);

    /// Whether the body rests on a surface this frame.
    fn touching_down(&self, entity: EntityId) -> bool;

    /// Hides the body and removes it from collision.
    fn disable_body(&mut self, entity: EntityId);
}
