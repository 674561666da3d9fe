//! Default tunables shared across the gameplay modules.
//!
//! Companion distances and speeds are expressed in pixels and converted to
//! world units once at start-up using the host's unit scale. Owner values are
//! already in world units.

/// Companion movement speed in pixels per second.
pub const COMPANION_SPEED: f32 = 120.0;
/// Owner distance (pixels) below which the companion idles.
pub const IDLE_RADIUS: f32 = 60.0;
/// Perception radius (pixels) for acquiring and keeping a hostile target.
pub const CHASE_RADIUS: f32 = 50.0;
/// Knockback distance (pixels) travelled after taking a hit.
pub const HIT_DISPLACEMENT: f32 = 5.0;
/// Hits the companion survives before dying.
pub const MAX_LIFE: u32 = 3;
/// Seconds spent in the attack sub-behaviour before returning to idle.
pub const ATTACK_DELAY: f32 = 0.5;
/// Knockback speed as a multiple of the companion speed.
pub const KNOCKBACK_SPEED_FACTOR: f32 = 5.0;
/// Extra world units allowed beyond the chase radius before a target is lost.
///
/// Not scaled by the unit scale.
pub const CHASE_HYSTERESIS: f32 = 1.0;

/// Owner movement speed in world units per second.
pub const OWNER_SPEED: f32 = 2.0;
/// Horizontal bound of the owner's play area.
pub const OWNER_MAX_X: f32 = 5.0;
/// Vertical bound of the owner's play area.
pub const OWNER_MAX_Y: f32 = 4.0;

/// Default master volume.
pub const DEFAULT_VOLUME: f32 = 1.0;
