/// Timing curve for the avatar: linear time in `[0, 1]` to progress in `[0, 1]`.
///
/// All curves except [`Ease::Linear`] accelerate out of the start and decelerate into
/// the target checkpoint.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Quadratic ease-in-ease-out.
    InOutQuad,
    /// Cubic ease-in-ease-out.
    #[default]
    InOutCubic,
    /// Sinusoidal ease-in-ease-out.
    InOutSine,
}

impl Ease {
    /// Eased value of `t`. `t` is clamped to `[0, 1]`; NaN counts as the start.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::InOutQuad if t < 0.5 => 2.0 * t * t,
            Self::InOutQuad => 1.0 - 2.0 * (1.0 - t).powi(2),
            Self::InOutCubic if t < 0.5 => 4.0 * t.powi(3),
            Self::InOutCubic => 1.0 - 4.0 * (1.0 - t).powi(3),
            Self::InOutSine => (1.0 - (std::f64::consts::PI * t).cos()) * 0.5,
        }
    }

    /// Eased progress after `elapsed_ms` of a `duration_ms` run. Zero durations finish at once.
    pub fn progress(self, elapsed_ms: f64, duration_ms: f64) -> f64 {
        if duration_ms <= 0.0 {
            return 1.0;
        }
        self.apply(elapsed_ms / duration_ms)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
