use crate::animation::ease::Ease;

/// One full turn, in degrees.
pub const FULL_TURN_DEG: f64 = 360.0;

/// Normalized progress of frame `i` out of `n`.
///
/// `i / (n - 1)`; a single-frame animation sits at progress 0.
pub fn progress(i: usize, n: usize) -> f64 {
    if n <= 1 {
        return 0.0;
    }
    i as f64 / (n - 1) as f64
}

/// Rotation angle in degrees for each of `n` frames.
///
/// For `n >= 2` the first angle is exactly 0 and the last exactly 360; the
/// sequence is non-decreasing. `n == 1` yields `[0.0]`.
pub fn angle_sequence(n: usize, ease: Ease) -> Vec<f64> {
    (0..n)
        .map(|i| FULL_TURN_DEG * ease.apply(progress(i, n)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/animation/angles.rs"]
mod tests;
