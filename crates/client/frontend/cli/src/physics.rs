//! Arcade physics for the terminal level.
//!
//! Axis-aligned boxes under constant gravity, landing on one-way static
//! platforms and kept inside the world. Enough to play the level in a
//! terminal; the session logic only sees it through [`PhysicsSource`].

use std::collections::BTreeMap;

use game_core::{
    BodyGroup, BodyKind, EntityId, GameConfig, Overlap, PhysicsSource, Position, VelocityCommand,
};

/// Downward acceleration in pixels per second squared.
pub const GRAVITY: f32 = 200.0;

const PLAYER_SIZE: (f32, f32) = (32.0, 48.0);
const COLLECTIBLE_SIZE: (f32, f32) = (24.0, 22.0);

/// Axis-aligned rectangle; `x`/`y` is the top-left corner.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn centered(center: Position, width: f32, height: f32) -> Self {
        Self::new(
            center.x - width / 2.0,
            center.y - height / 2.0,
            width,
            height,
        )
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    fn overlaps_x(&self, other: &Rect) -> bool {
        self.x < other.right() && other.x < self.right()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.y < other.bottom() && other.y < self.bottom()
    }
}

/// Dynamic body; `position` is its center.
#[derive(Clone, Debug, PartialEq)]
pub struct Body {
    pub kind: BodyKind,
    pub position: Position,
    pub velocity: (f32, f32),
    pub size: (f32, f32),
    pub enabled: bool,
    grounded: bool,
}

impl Body {
    fn new(kind: BodyKind, position: Position) -> Self {
        let size = match kind {
            BodyKind::Player => PLAYER_SIZE,
            BodyKind::Collectible => COLLECTIBLE_SIZE,
        };
        Self {
            kind,
            position,
            velocity: (0.0, 0.0),
            size,
            enabled: true,
            grounded: false,
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::centered(self.position, self.size.0, self.size.1)
    }

    fn in_group(&self, group: BodyGroup) -> bool {
        match group {
            BodyGroup::Collectibles => self.kind == BodyKind::Collectible,
        }
    }
}

pub struct ArcadePhysics {
    bodies: BTreeMap<EntityId, Body>,
    platforms: Vec<Rect>,
    world: Rect,
    gravity: f32,
    subscriptions: Vec<(EntityId, BodyGroup)>,
    pending: Vec<Overlap>,
}

impl Default for ArcadePhysics {
    fn default() -> Self {
        Self::new()
    }
}

impl ArcadePhysics {
    /// Physics world with the standard level layout.
    pub fn new() -> Self {
        Self::with_platforms(Self::level())
    }

    pub fn with_platforms(platforms: Vec<Rect>) -> Self {
        Self {
            bodies: BTreeMap::new(),
            platforms,
            world: Rect::new(0.0, 0.0, GameConfig::WORLD_WIDTH, GameConfig::WORLD_HEIGHT),
            gravity: GRAVITY,
            subscriptions: Vec::new(),
            pending: Vec::new(),
        }
    }

    /// Ground plus three ledges.
    pub fn level() -> Vec<Rect> {
        vec![
            Rect::centered(Position::new(400.0, 568.0), 800.0, 64.0),
            Rect::centered(Position::new(600.0, 400.0), 400.0, 32.0),
            Rect::centered(Position::new(50.0, 250.0), 400.0, 32.0),
            Rect::centered(Position::new(750.0, 220.0), 400.0, 32.0),
        ]
    }

    pub fn world(&self) -> Rect {
        self.world
    }

    pub fn platforms(&self) -> &[Rect] {
        &self.platforms
    }

    pub fn body(&self, entity: EntityId) -> Option<&Body> {
        self.bodies.get(&entity)
    }

    /// Enabled bodies in id order.
    pub fn bodies(&self) -> impl Iterator<Item = (EntityId, &Body)> {
        self.bodies
            .iter()
            .filter(|(_, body)| body.enabled)
            .map(|(id, body)| (*id, body))
    }

    /// Integrates every enabled body over `dt` seconds and records overlaps.
    pub fn step(&mut self, dt: f32) {
        for body in self.bodies.values_mut().filter(|body| body.enabled) {
            integrate(body, dt, self.gravity, &self.platforms, &self.world);
        }
        self.collect_overlaps();
    }

    fn collect_overlaps(&mut self) {
        for &(a, group) in &self.subscriptions {
            let Some(subject) = self.bodies.get(&a).filter(|body| body.enabled) else {
                continue;
            };
            let bounds = subject.bounds();

            let touched = self.bodies.iter().filter(|(id, body)| {
                **id != a && body.enabled && body.in_group(group) && body.bounds().intersects(&bounds)
            });
            self.pending
                .extend(touched.map(|(id, _)| Overlap { a, b: *id }));
        }
    }
}

fn integrate(body: &mut Body, dt: f32, gravity: f32, platforms: &[Rect], world: &Rect) {
    let (half_w, half_h) = (body.size.0 / 2.0, body.size.1 / 2.0);

    body.velocity.1 += gravity * dt;

    body.position.x = (body.position.x + body.velocity.0 * dt)
        .clamp(world.x + half_w, world.right() - half_w);

    let previous_bottom = body.position.y + half_h;
    body.position.y += body.velocity.1 * dt;
    body.grounded = false;

    // Platforms are one-way: only a body falling onto the top surface lands.
    if body.velocity.1 >= 0.0 {
        let bounds = body.bounds();
        let landing = platforms
            .iter()
            .filter(|platform| {
                bounds.overlaps_x(platform)
                    && previous_bottom <= platform.y
                    && bounds.bottom() >= platform.y
            })
            .map(|platform| platform.y)
            .reduce(f32::min);

        if let Some(top) = landing {
            body.position.y = top - half_h;
            body.velocity.1 = 0.0;
            body.grounded = true;
        }
    }

    if body.position.y + half_h >= world.bottom() {
        body.position.y = world.bottom() - half_h;
        body.velocity.1 = 0.0;
        body.grounded = true;
    } else if body.position.y - half_h < world.y {
        body.position.y = world.y + half_h;
        body.velocity.1 = body.velocity.1.max(0.0);
    }
}

impl PhysicsSource for ArcadePhysics {
    fn spawn(&mut self, entity: EntityId, kind: BodyKind, position: Position) {
        self.bodies.insert(entity, Body::new(kind, position));
    }

    fn on_overlap(&mut self, a: EntityId, b: BodyGroup) {
        if !self.subscriptions.contains(&(a, b)) {
            self.subscriptions.push((a, b));
        }
    }

    fn drain_overlaps(&mut self) -> Vec<Overlap> {
        std::mem::take(&mut self.pending)
    }

    fn apply_velocity(&mut self, entity: EntityId, velocity: VelocityCommand) {
        if let Some(body) = self.bodies.get_mut(&entity) {
            body.velocity.0 = velocity.x;
            if let Some(y) = velocity.y {
                body.velocity.1 = y;
            }
        }
    }

    fn touching_down(&self, entity: EntityId) -> bool {
        self.bodies.get(&entity).is_some_and(|body| body.grounded)
    }

    fn disable_body(&mut self, entity: EntityId) {
        if let Some(body) = self.bodies.get_mut(&entity) {
            body.enabled = false;
            body.velocity = (0.0, 0.0);
        }
    }
}
