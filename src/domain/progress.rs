/// Fraction of the phase still remaining, clamped to [0, 1].
/// A non-positive total has no meaningful progress and yields 0.
pub fn progress(remaining: i64, total: i64) -> f64 {
    if total <= 0 {
        return 0.0;
    }
    (remaining as f64 / total as f64).clamp(0.0, 1.0)
}

/// Fraction of the phase already elapsed, clamped to [0, 1]
pub fn elapsed_progress(remaining: i64, total: i64) -> f64 {
    (1.0 - progress(remaining, total)).clamp(0.0, 1.0)
}

/// Format seconds as "MM:SS" (minutes may exceed 59)
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
