//! Utility helpers for tests.
//!
//! Builders for small arenas measured in world units, so distances in
//! assertions read directly without a pixel scale.

use glam::Vec2;
use sidekick::{Arena, CompanionConfig, CompanionController, CompanionState, Contact, EntityId};

/// Seconds per frame used by [`unit_arena`].
pub const TEST_DT: f32 = 0.125;

/// Companion tunables in world units with round numbers.
///
/// Moves 0.25 per frame at [`TEST_DT`], knockbacks travel 1.25 per frame.
#[must_use]
pub fn unit_config() -> CompanionConfig {
    CompanionConfig {
        speed: 2.0,
        idle_radius: 1.0,
        chase_radius: 2.0,
        hit_displacement: 3.0,
        max_life: 3,
        attack_delay: 0.5,
        knockback_speed_factor: 5.0,
        chase_hysteresis: 1.0,
    }
}

/// An arena with a unit scale of one and the owner at the origin.
#[must_use]
pub fn unit_arena() -> Arena {
    Arena::new(1.0, TEST_DT)
}

/// Spawns a companion at the origin of `arena`.
///
/// # Panics
/// Panics if `config` is invalid.
#[must_use]
pub fn spawn_companion(config: &CompanionConfig, arena: Arena) -> CompanionController<Arena> {
    CompanionController::seeded(config, Vec2::ZERO, arena, 11)
        .unwrap_or_else(|err| panic!("invalid test config: {err}"))
}

/// A hostile contact from `id` pushing the companion along +Y.
#[must_use]
pub fn shove(id: u32) -> Contact {
    Contact::hostile(EntityId(id), Vec2::Y)
}

/// Ticks `companion` `n` times and returns the final state.
pub fn tick_n(companion: &mut CompanionController<Arena>, n: usize) -> CompanionState {
    for _ in 0..n {
        companion.tick();
    }
    companion.state()
}

/// Ticks until the in-flight knockback has finished.
///
/// # Panics
/// Panics if the knockback is still running after `limit` ticks.
pub fn settle(companion: &mut CompanionController<Arena>, limit: usize) -> CompanionState {
    for _ in 0..limit {
        if !companion.is_hit() {
            return companion.state();
        }
        companion.tick();
    }
    assert!(!companion.is_hit(), "knockback still running after {limit} ticks");
    companion.state()
}
