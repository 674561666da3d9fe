//! Timed sub-behaviours advanced by the controller's tick.
//!
//! Each task carries its own progress so it can span several ticks without
//! coroutine support from the host.

use glam::Vec2;

/// Countdown for the attack sub-behaviour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct AttackTimer {
    elapsed: f32,
    delay: f32,
}

impl AttackTimer {
    pub(crate) const fn new(delay: f32) -> Self {
        Self {
            elapsed: 0.0,
            delay,
        }
    }

    /// Adds `dt` and reports whether the delay has fully elapsed.
    pub(crate) fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        self.elapsed >= self.delay
    }
}

/// One knockback increment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum KnockbackStep {
    /// Move the companion by this delta and yield until the next tick.
    Moved(Vec2),
    /// The requested displacement has been covered.
    Finished,
}

/// Forced displacement along a contact normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Knockback {
    direction: Vec2,
    travelled: f32,
    distance: f32,
}

impl Knockback {
    /// A degenerate normal produces a knockback that finishes on its first
    /// step.
    pub(crate) fn new(normal: Vec2, distance: f32) -> Self {
        let direction = if normal.is_finite() {
            normal.try_normalize().unwrap_or(Vec2::ZERO)
        } else {
            Vec2::ZERO
        };
        Self {
            direction,
            travelled: 0.0,
            distance,
        }
    }

    pub(crate) fn step(&mut self, speed: f32, dt: f32) -> KnockbackStep {
        if self.direction == Vec2::ZERO || self.travelled >= self.distance {
            return KnockbackStep::Finished;
        }
        let delta = self.direction * speed * dt.max(0.0);
        self.travelled += delta.length();
        KnockbackStep::Moved(delta)
    }

    #[cfg(test)]
    pub(crate) const fn travelled(&self) -> f32 {
        self.travelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attack_timer_completes_after_delay() {
        let mut timer = AttackTimer::new(0.5);
        assert!(!timer.advance(0.25));
        assert!(timer.advance(0.25));
    }

    #[test]
    fn attack_timer_ignores_negative_time() {
        let mut timer = AttackTimer::new(0.5);
        assert!(!timer.advance(-4.0));
        assert!(!timer.advance(0.25));
    }

    #[test]
    fn knockback_moves_until_distance_is_covered() {
        let mut knockback = Knockback::new(Vec2::new(0.0, 2.0), 1.0);
        let mut steps = 0;
        while let KnockbackStep::Moved(delta) = knockback.step(2.0, 0.125) {
            assert_eq!(delta, Vec2::new(0.0, 0.25));
            steps += 1;
        }
        assert_eq!(steps, 4);
        assert!(knockback.travelled() >= 1.0);
    }

    #[test]
    fn zero_distance_finishes_immediately() {
        let mut knockback = Knockback::new(Vec2::X, 0.0);
        assert_eq!(knockback.step(1.0, 0.1), KnockbackStep::Finished);
    }

    #[test]
    fn degenerate_normal_finishes_immediately() {
        let mut knockback = Knockback::new(Vec2::ZERO, 3.0);
        assert_eq!(knockback.step(1.0, 0.1), KnockbackStep::Finished);
        let mut nan = Knockback::new(Vec2::new(f32::NAN, 0.0), 3.0);
        assert_eq!(nan.step(1.0, 0.1), KnockbackStep::Finished);
    }
}
