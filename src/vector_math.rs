//! Basic vector math helper functions.
//! Small helpers for directions, facing and radius checks on the 2D plane.
use glam::Vec2;

/// Returns the unit vector pointing from `from` towards `to`.
///
/// The function checks that the offset is finite and non-zero before
/// normalising. Coincident points or invalid input yield [`Vec2::ZERO`].
///
/// # Examples
///
/// ```
/// use glam::Vec2;
/// use sidekick::vector_math::direction_towards;
/// let dir = direction_towards(Vec2::ZERO, Vec2::new(3.0, 4.0));
/// assert!((dir.x - 0.6).abs() < 1e-6);
/// assert!((dir.y - 0.8).abs() < 1e-6);
///
/// assert_eq!(direction_towards(Vec2::ONE, Vec2::ONE), Vec2::ZERO);
/// ```
#[must_use]
pub fn direction_towards(from: Vec2, to: Vec2) -> Vec2 {
    let offset = to - from;
    if !offset.is_finite() {
        return Vec2::ZERO;
    }
    offset.try_normalize().unwrap_or(Vec2::ZERO)
}

/// Whether a sprite moving along `direction` should be drawn mirrored.
///
/// Sprites face right by default, so anything not strictly rightward flips.
#[must_use]
pub fn is_flipped(direction: Vec2) -> bool {
    direction.x <= 0.0
}

/// Squared-distance proximity test: `|a - b|² < radius²`.
///
/// Avoids the square root; equivalent to [`within_radius`] for non-negative
/// radii.
#[must_use]
pub fn within_radius_squared(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance_squared(b) < radius * radius
}

/// Euclidean proximity test: `|a - b| < radius`.
#[must_use]
pub fn within_radius(a: Vec2, b: Vec2, radius: f32) -> bool {
    a.distance(b) < radius
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Vec2::new(1.0, 0.0), false)]
    #[case(Vec2::new(-1.0, 0.0), true)]
    #[case(Vec2::new(0.0, 1.0), true)]
    #[case(Vec2::new(0.01, -1.0), false)]
    fn facing_follows_horizontal_sign(#[case] direction: Vec2, #[case] flipped: bool) {
        assert_eq!(is_flipped(direction), flipped);
    }

    #[test]
    fn direction_rejects_non_finite_offsets() {
        let dir = direction_towards(Vec2::ZERO, Vec2::new(f32::NAN, 1.0));
        assert_eq!(dir, Vec2::ZERO);
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.5)]
    #[case(2.0)]
    #[case(60.0)]
    fn squared_check_matches_true_distance(#[case] radius: f32) {
        let origin = Vec2::new(0.25, -0.75);
        let samples = [
            Vec2::ZERO,
            Vec2::new(0.5, 0.0),
            Vec2::new(-1.5, 1.0),
            Vec2::new(30.0, 40.0),
            Vec2::new(0.25, 1.25),
        ];
        for point in samples {
            assert_eq!(
                within_radius_squared(origin, point, radius),
                within_radius(origin, point, radius),
                "mismatch for {point:?} at radius {radius}"
            );
        }
    }
}
