//! Quality bounds and the clamped arithmetic every category rule goes through.

/// Lowest quality a non-legendary item can reach.
pub const MIN_QUALITY: i64 = 0;

/// Highest quality a non-legendary item can reach.
pub const MAX_QUALITY: i64 = 50;

/// Pin `value` into `[low, high]`.
///
/// Unlike [`Ord::clamp`] this never panics; with `low > high` the result is
/// `high`.
pub fn clamp(value: i64, low: i64, high: i64) -> i64 {
    value.max(low).min(high)
}

/// Apply a single quality delta and clamp the result into the quality range.
///
/// Callers apply each delta of a day separately, so a saturated intermediate
/// value is what the next delta starts from.
pub fn adjust_quality(quality: i64, delta: i64) -> i64 {
    clamp(quality.saturating_add(delta), MIN_QUALITY, MAX_QUALITY)
}
