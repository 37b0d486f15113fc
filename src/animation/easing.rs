use std::time::Duration;

/// Cubic ease-out: fast start, decelerating into the target.
///
/// `progress` is clamped to `[0, 1]`; the curve hits exactly `0.0` and `1.0` at the ends.
pub fn ease_out_cubic(progress: f64) -> f64 {
    let p = progress.clamp(0.0, 1.0);
    1.0 - (1.0 - p).powi(3)
}

/// Fraction of `duration` covered by `elapsed`, capped at `1.0`.
///
/// A zero duration counts as already finished.
pub fn progress(elapsed: Duration, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    (elapsed.as_secs_f64() / duration.as_secs_f64()).min(1.0)
}
