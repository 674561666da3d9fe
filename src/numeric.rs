//! Numeric conversion helpers used across the project.
//!
//! These utilities guard conversions between floating-point and integer
//! domains.

/// Draw-order key for an entity at vertical position `y`.
///
/// Entities lower on screen draw in front, so the key is the negated,
/// truncated height. Non-finite input maps to `0` and the result is clamped
/// into the `i32` domain.
///
/// # Examples
///
/// ```
/// use sidekick::numeric::draw_order_for;
/// assert_eq!(draw_order_for(3.7), -3);
/// assert_eq!(draw_order_for(-2.2), 2);
/// assert_eq!(draw_order_for(f32::NAN), 0);
/// ```
#[expect(
    clippy::cast_possible_truncation,
    reason = "The value is clamped to the i32 bounds before casting."
)]
#[must_use]
pub fn draw_order_for(y: f32) -> i32 {
    if !y.is_finite() {
        return 0;
    }
    let truncated = f64::from(y).trunc();
    let clamped = truncated.clamp(-f64::from(i32::MAX), f64::from(i32::MAX));
    -(clamped as i32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.9, 0)]
    #[case(-0.9, 0)]
    #[case(12.5, -12)]
    #[case(f32::MAX, -i32::MAX)]
    #[case(f32::MIN, i32::MAX)]
    #[case(f32::INFINITY, 0)]
    fn draw_order_truncates_and_clamps(#[case] y: f32, #[case] expected: i32) {
        assert_eq!(draw_order_for(y), expected);
    }
}
