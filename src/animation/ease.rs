use std::f64::consts::PI;

/// Easing curves used to map normalized animation progress.
///
/// Serialized with the kebab-case tags used in slide documents. Unrecognized tags
/// deserialize as [`Ease::Linear`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Ease {
    /// Cubic ease-in.
    EaseIn,
    /// Cubic ease-out.
    EaseOut,
    /// Cubic ease-in/out.
    EaseInOut,
    /// Standard ease-out-bounce.
    Bounce,
    /// Exponentially decaying sine, overshoots past 1 before settling.
    Elastic,
    /// Identity.
    #[default]
    #[serde(other)]
    Linear,
}

const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

impl Ease {
    /// Every curve, in tag order.
    pub const ALL: [Ease; 6] = [
        Ease::Linear,
        Ease::EaseIn,
        Ease::EaseOut,
        Ease::EaseInOut,
        Ease::Bounce,
        Ease::Elastic,
    ];

    /// Apply this curve to progress `t`. `t` is clamped to `[0, 1]` first; NaN counts as 0.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => 1.0 - (1.0 - t).powi(3),
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(3) / 2.0)
                }
            }
            Self::Bounce => bounce_out(t),
            Self::Elastic => {
                if t == 0.0 || t == 1.0 {
                    return t;
                }
                let c4 = (2.0 * PI) / 3.0;
                2f64.powf(-10.0 * t) * ((t * 10.0 - 0.75) * c4).sin() + 1.0
            }
        }
    }

    /// Lenient tag lookup; unknown tags fall back to [`Ease::Linear`].
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().as_str() {
            "ease-in" => Self::EaseIn,
            "ease-out" => Self::EaseOut,
            "ease-in-out" => Self::EaseInOut,
            "bounce" => Self::Bounce,
            "elastic" => Self::Elastic,
            _ => Self::Linear,
        }
    }

    /// Document tag for this curve.
    pub fn as_tag(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
            Self::Bounce => "bounce",
            Self::Elastic => "elastic",
        }
    }
}

fn bounce_out(t: f64) -> f64 {
    if t < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * t * t
    } else if t < 2.0 / BOUNCE_D1 {
        let t = t - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D1 {
        let t = t - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * t * t + 0.984375
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
