//! Capability traits the companion consumes from its environment.
//!
//! The controller never talks to a renderer, physics engine or game manager
//! directly. A host value implementing every trait below is injected at
//! construction; [`CompanionHost`] bundles them.

use glam::Vec2;

use crate::entity::{EntityId, EntityTag};

/// Physics-backed overlap queries and liveness lookups.
pub trait SpatialQuery {
    /// Active entities carrying `tag` within `radius` of `center`.
    ///
    /// An empty result is valid and common.
    fn overlap_circle(&self, center: Vec2, radius: f32, tag: EntityTag) -> Vec<EntityId>;

    /// Current position of `entity`, or `None` once it is inactive or gone.
    fn locate(&self, entity: EntityId) -> Option<Vec2>;
}

/// Receives the companion's movement and presentation updates.
pub trait MotionSink {
    /// Moves the companion by `delta`.
    fn translate(&mut self, delta: Vec2);
    /// Mirrors the companion sprite horizontally when `flipped`.
    fn set_facing(&mut self, flipped: bool);
    /// Publishes the draw-order key derived from vertical position.
    fn set_draw_order(&mut self, order: i32);
}

/// Frame timing.
pub trait Clock {
    /// Seconds elapsed since the previous tick.
    fn delta_time(&self) -> f32;
}

/// Game-level queries and commands.
pub trait Environment {
    /// Whether the game is in its gameplay mode; the companion idles otherwise.
    fn is_gameplay_active(&self) -> bool;
    /// One-shot signal raised when the companion dies.
    fn notify_game_over(&mut self);
    /// Pixels-to-units factor applied to configuration at start-up.
    fn unit_scale(&self) -> f32;
    /// Current position of the owner the companion follows.
    fn owner_position(&self) -> Vec2;
}

/// Audio and animation cues. Fire-and-forget; never part of control flow.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cue {
    /// Standing still.
    Idle,
    /// Moving; `speed` is the magnitude of this tick's displacement.
    Move {
        /// Displacement length for the tick.
        speed: f32,
    },
    /// Took damage.
    Hit,
    /// Attacking the bound target.
    Attack,
    /// Died.
    Death,
}

/// Consumer of [`Cue`]s.
pub trait CueSink {
    /// Delivers a cue.
    fn emit(&mut self, cue: Cue);
}

/// Everything a [`crate::companion::CompanionController`] needs from its host.
pub trait CompanionHost: SpatialQuery + MotionSink + Clock + Environment + CueSink {}

impl<T> CompanionHost for T where T: SpatialQuery + MotionSink + Clock + Environment + CueSink {}
