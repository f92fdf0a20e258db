use std::f64::consts::PI;

/// Sinusoidal ease-in-out: `(1 - cos(pi * t)) / 2`.
///
/// Starts and ends with zero velocity and is symmetric about `t = 0.5`.
/// `t` is clamped to `[0, 1]`.
pub fn ease_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    0.5 * (1.0 - (PI * t).cos())
}

/// Timing curve used to map normalized progress to rotation progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant angular velocity.
    Linear,
    /// See [`ease_in_out`].
    #[default]
    InOutSine,
}

impl Ease {
    /// Eased progress for `t`, clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        match self {
            Self::Linear => t.clamp(0.0, 1.0),
            Self::InOutSine => ease_in_out(t),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
