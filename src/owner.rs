//! The player-controlled owner the companion follows.
//!
//! Input is supplied as plain values each frame; reading devices is the
//! host's job.
use glam::Vec2;
use log::debug;

use crate::config::OwnerConfig;
use crate::session::GameSettings;
use crate::vector_math::direction_towards;

/// Input sampled for one frame.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OwnerInput {
    /// Raw movement axes; only the sign of each component matters.
    pub axis: Vec2,
    /// World position of the aiming reticle.
    pub aim: Vec2,
    /// Gamepad shoot axis; fires at exactly `1.0`.
    pub shoot_axis: f32,
    /// Mouse button pressed this frame.
    pub mouse_pressed: bool,
}

/// A projectile request produced by firing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    /// Where the projectile spawns.
    pub origin: Vec2,
    /// Unit direction towards the aim point.
    pub direction: Vec2,
}

/// Bounded movement, aim-facing and firing for the owner.
#[derive(Debug, Clone, PartialEq)]
pub struct OwnerController {
    position: Vec2,
    config: OwnerConfig,
    flipped: bool,
}

impl OwnerController {
    /// Creates an owner at `position`, clamped into the play area.
    #[must_use]
    pub fn new(position: Vec2, config: OwnerConfig) -> Self {
        let bounds = Vec2::new(config.max_x, config.max_y);
        Self {
            position: position.clamp(-bounds, bounds),
            config,
            flipped: false,
        }
    }

    /// Current position.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        self.position
    }

    /// Whether the sprite is mirrored to face left.
    #[must_use]
    pub const fn is_flipped(&self) -> bool {
        self.flipped
    }

    /// Applies one frame of input and returns a shot if the trigger fired.
    ///
    /// Each axis moves the owner by `speed * dt` according to its sign, so
    /// diagonal movement is faster than straight movement. The result is
    /// clamped to the configured bounds.
    pub fn update(&mut self, input: &OwnerInput, settings: &GameSettings, dt: f32) -> Option<Shot> {
        let step = self.config.speed * dt;
        let movement = Vec2::new(axis_step(input.axis.x, step), axis_step(input.axis.y, step));
        let bounds = Vec2::new(self.config.max_x, self.config.max_y);
        self.position = (self.position + movement).clamp(-bounds, bounds);

        self.flipped = input.aim.x < self.position.x;

        let fired = if settings.controller {
            input.shoot_axis == 1.0
        } else {
            input.mouse_pressed
        };
        fired.then(|| {
            let shot = Shot {
                origin: self.position,
                direction: direction_towards(self.position, input.aim),
            };
            debug!("owner fired from {:?} along {:?}", shot.origin, shot.direction);
            shot
        })
    }
}

fn axis_step(axis: f32, step: f32) -> f32 {
    if axis < 0.0 {
        -step
    } else if axis > 0.0 {
        step
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::{fixture, rstest};

    #[fixture]
    fn owner() -> OwnerController {
        OwnerController::new(Vec2::ZERO, OwnerConfig::default())
    }

    #[rstest]
    fn diagonal_input_moves_both_axes(mut owner: OwnerController) {
        let input = OwnerInput {
            axis: Vec2::new(0.3, -1.0),
            ..OwnerInput::default()
        };
        owner.update(&input, &GameSettings::default(), 0.5);
        assert_relative_eq!(owner.position().x, 1.0);
        assert_relative_eq!(owner.position().y, -1.0);
    }

    #[rstest]
    fn movement_is_clamped_to_bounds(mut owner: OwnerController) {
        let input = OwnerInput {
            axis: Vec2::new(1.0, 1.0),
            ..OwnerInput::default()
        };
        for _ in 0..20 {
            owner.update(&input, &GameSettings::default(), 1.0);
        }
        assert_eq!(owner.position(), Vec2::new(5.0, 4.0));
    }

    #[rstest]
    fn faces_the_aim(mut owner: OwnerController) {
        let left = OwnerInput {
            aim: Vec2::new(-2.0, 0.0),
            ..OwnerInput::default()
        };
        owner.update(&left, &GameSettings::default(), 0.0);
        assert!(owner.is_flipped());

        let right = OwnerInput {
            aim: Vec2::new(2.0, 0.0),
            ..OwnerInput::default()
        };
        owner.update(&right, &GameSettings::default(), 0.0);
        assert!(!owner.is_flipped());
    }

    #[rstest]
    #[case(false, 1.0, false, false)]
    #[case(false, 0.0, true, true)]
    #[case(true, 1.0, false, true)]
    #[case(true, 0.5, true, false)]
    fn trigger_depends_on_input_scheme(
        mut owner: OwnerController,
        #[case] controller: bool,
        #[case] shoot_axis: f32,
        #[case] mouse_pressed: bool,
        #[case] fires: bool,
    ) {
        let settings = GameSettings {
            controller,
            ..GameSettings::default()
        };
        let input = OwnerInput {
            aim: Vec2::new(0.0, 3.0),
            shoot_axis,
            mouse_pressed,
            ..OwnerInput::default()
        };
        let shot = owner.update(&input, &settings, 0.1);
        assert_eq!(shot.is_some(), fires);
        if let Some(shot) = shot {
            assert_eq!(shot.direction, Vec2::Y);
        }
    }
}
