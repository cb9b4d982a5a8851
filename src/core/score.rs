//! Driver score: weighted composite index in [0, 100].

/// Points lost per drowsy event.
pub const DROWSY_PENALTY: f64 = 5.0;
/// Points lost per yawn event.
pub const YAWN_PENALTY: f64 = 3.0;
/// Points lost per distraction event.
pub const DISTRACTED_PENALTY: f64 = 4.0;
/// Points lost per minute spent in a non-awake state.
pub const NON_AWAKE_PENALTY_PER_MIN: f64 = 1.5;
/// Bonus per minute of the longest awake streak.
pub const STREAK_BONUS_PER_MIN: f64 = 0.5;
/// Ceiling on the streak bonus.
pub const STREAK_BONUS_CAP: f64 = 10.0;

pub fn compute_score(
    drowsy_count: usize,
    yawn_count: usize,
    distracted_count: usize,
    non_awake_minutes: f64,
    longest_awake_minutes: f64,
) -> f64 {
    let mut score = 100.0;
    score -= drowsy_count as f64 * DROWSY_PENALTY;
    score -= yawn_count as f64 * YAWN_PENALTY;
    score -= distracted_count as f64 * DISTRACTED_PENALTY;
    score -= non_awake_minutes * NON_AWAKE_PENALTY_PER_MIN;
    score += (longest_awake_minutes * STREAK_BONUS_PER_MIN).min(STREAK_BONUS_CAP);

    score.clamp(0.0, 100.0)
}

/// Human-readable band used by the terminal renderer.
pub fn rating(score: f64) -> &'static str {
    if score >= 85.0 {
        "Excellent"
    } else if score >= 60.0 {
        "Moderate"
    } else {
        "Needs Attention"
    }
}
