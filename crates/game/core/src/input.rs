//! Directional input and the velocity commands derived from it.

use crate::config::GameConfig;

/// Cursor keys held during a frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DirectionalInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

impl DirectionalInput {
    pub const NONE: Self = Self {
        left: false,
        right: false,
        up: false,
    };

    /// Velocity the player body should take this frame.
    ///
    /// Left wins over right when both are held. A jump is only issued while
    /// the body rests on the ground; otherwise the vertical component is
    /// left to the physics source.
    pub fn velocity(&self, touching_down: bool, config: &GameConfig) -> VelocityCommand {
        let x = if self.left {
            -config.run_speed
        } else if self.right {
            config.run_speed
        } else {
            0.0
        };

        let y = (self.up && touching_down).then_some(-config.jump_speed);

        VelocityCommand { x, y }
    }
}

/// Velocity command forwarded to the physics source.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VelocityCommand {
    pub x: f32,
    /// `None` keeps the current vertical velocity (gravity keeps acting).
    pub y: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horizontal_speed_follows_held_keys() {
        let config = GameConfig::default();
        let left = DirectionalInput {
            left: true,
            ..DirectionalInput::NONE
        };
        let right = DirectionalInput {
            right: true,
            ..DirectionalInput::NONE
        };

        assert_eq!(left.velocity(true, &config).x, -160.0);
        assert_eq!(right.velocity(true, &config).x, 160.0);
        assert_eq!(DirectionalInput::NONE.velocity(true, &config).x, 0.0);
    }

    #[test]
    fn jump_requires_ground_contact() {
        let config = GameConfig::default();
        let up = DirectionalInput {
            up: true,
            ..DirectionalInput::NONE
        };

        assert_eq!(up.velocity(true, &config).y, Some(-360.0));
        assert_eq!(up.velocity(false, &config).y, None);
    }
}
