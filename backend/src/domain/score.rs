//! Derived score statistics.

/// Per-game threshold: the quotient is only reported once the total exceeds
/// `count * PER_GAME_THRESHOLD`.
pub const PER_GAME_THRESHOLD: f64 = 100.0;

/// Average score per game, reported only above the per-game threshold.
///
/// Returns `total / count` when at least one game was played and
/// `count * 100 < total`. Every other input, including an empty history and
/// any total at or below `count * 100`, yields `0.0`.
///
/// # Examples
/// ```
/// use usr_backend::domain::guarded_average;
///
/// assert_eq!(guarded_average(700.0, 6), 700.0 / 6.0);
/// assert_eq!(guarded_average(500.0, 6), 0.0);
/// assert_eq!(guarded_average(500.0, 0), 0.0);
/// ```
pub fn guarded_average(total_of_all_scores: f64, number_of_scores: u32) -> f64 {
    let count = f64::from(number_of_scores);
    if number_of_scores != 0 && count * PER_GAME_THRESHOLD < total_of_all_scores {
        total_of_all_scores / count
    } else {
        0.0
    }
}
