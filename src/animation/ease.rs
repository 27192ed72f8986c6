use std::f64::consts::FRAC_PI_2;

/// Symmetric in-out easing curves for bar transitions.
///
/// Every curve accelerates through the first half and mirrors itself through the second, so
/// `apply(0.5) == 0.5` (up to rounding for [`Ease::Sin`] and [`Ease::Exp`]).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// Quadratic.
    Quad,
    /// Cubic.
    #[default]
    Cubic,
    /// Sinusoidal.
    Sin,
    /// Exponential, normalized so both ends land exactly on 0 and 1.
    Exp,
}

impl Ease {
    /// Eased progress for normalized `t`; input outside `[0, 1]` is clamped.
    pub fn apply(self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let ease_in: fn(f64) -> f64 = match self {
            Self::Linear => return t,
            Self::Quad => |u: f64| u * u,
            Self::Cubic => |u: f64| u * u * u,
            Self::Sin => |u: f64| 1.0 - (u * FRAC_PI_2).cos(),
            Self::Exp => |u: f64| exp_tail(1.0 - u),
        };
        if t < 0.5 {
            ease_in(2.0 * t) / 2.0
        } else {
            1.0 - ease_in(2.0 - 2.0 * t) / 2.0
        }
    }
}

/// `2^(-10x)` rescaled to hit exactly 0 at `x = 1`.
fn exp_tail(x: f64) -> f64 {
    const FLOOR: f64 = 1.0 / 1024.0;
    ((-10.0 * x).exp2() - FLOOR) / (1.0 - FLOOR)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
