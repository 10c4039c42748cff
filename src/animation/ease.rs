/// Easing curve applied to each segment of an ambient loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ease {
    /// Constant speed.
    Linear,
    /// CSS `ease-in-out`, i.e. `cubic-bezier(0.42, 0, 0.58, 1)`.
    #[default]
    EaseInOut,
}

impl Ease {
    /// Map linear segment time `t` to eased time. Input is clamped to `[0, 1]`.
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseInOut => cubic_bezier(t, 0.42, 0.0, 0.58, 1.0),
        }
    }
}

/// CSS timing function: solve `bx(u) = x` for `u`, then return `by(u)`.
fn cubic_bezier(x: f64, x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    if x <= 0.0 {
        return 0.0;
    }
    if x >= 1.0 {
        return 1.0;
    }
    fn curve(a1: f64, a2: f64, u: f64) -> f64 {
        let v = 1.0 - u;
        3.0 * v * v * u * a1 + 3.0 * v * u * u * a2 + u * u * u
    }
    fn slope(a1: f64, a2: f64, u: f64) -> f64 {
        let v = 1.0 - u;
        3.0 * v * v * a1 + 6.0 * v * u * (a2 - a1) + 3.0 * u * u * (1.0 - a2)
    }

    let mut u = x;
    for _ in 0..8 {
        let err = curve(x1, x2, u) - x;
        if err.abs() < 1e-12 {
            return curve(y1, y2, u);
        }
        let d = slope(x1, x2, u);
        if d.abs() < 1e-7 {
            break;
        }
        u = (u - err / d).clamp(0.0, 1.0);
    }

    // Newton stalled; bisect.
    let (mut lo, mut hi) = (0.0, 1.0);
    u = x;
    for _ in 0..50 {
        if curve(x1, x2, u) < x {
            lo = u;
        } else {
            hi = u;
        }
        u = 0.5 * (lo + hi);
    }
    curve(y1, y2, u)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
