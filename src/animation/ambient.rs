//! Time-driven idle loops (floating images, pulsing glows, drifting particles).
//!
//! These run independently of scroll position: the host samples them with the current
//! [`SceneTime`](crate::SceneTime).

use crate::{
    animation::ease::Ease,
    foundation::error::{LegacyError, LegacyResult},
};

/// Repeating keyframe track with evenly spaced values over one cycle.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct LoopTrack {
    values: Vec<f64>,
    duration_s: f64,
    delay_s: f64,
    ease: Ease,
}

impl LoopTrack {
    /// Build a loop that cycles through `values` every `duration_s` seconds, starting after
    /// `delay_s`.
    pub fn new(values: Vec<f64>, duration_s: f64, delay_s: f64, ease: Ease) -> LegacyResult<Self> {
        if values.is_empty() || values.iter().any(|v| !v.is_finite()) {
            return Err(LegacyError::validation(
                "loop track needs at least one finite value",
            ));
        }
        if !duration_s.is_finite() || duration_s <= 0.0 {
            return Err(LegacyError::validation("loop duration must be > 0"));
        }
        if !delay_s.is_finite() || delay_s < 0.0 {
            return Err(LegacyError::validation("loop delay must be >= 0"));
        }
        Ok(Self {
            values,
            duration_s,
            delay_s,
            ease,
        })
    }

    pub(crate) fn preset(values: &[f64], duration_s: f64, delay_s: f64, ease: Ease) -> Self {
        debug_assert!(!values.is_empty() && duration_s > 0.0 && delay_s >= 0.0);
        Self {
            values: values.to_vec(),
            duration_s,
            delay_s,
            ease,
        }
    }

    /// Cycle length in seconds.
    pub fn duration_s(&self) -> f64 {
        self.duration_s
    }

    /// Start delay in seconds.
    pub fn delay_s(&self) -> f64 {
        self.delay_s
    }

    /// Value at `t_s` seconds since session start. Holds the first value during the delay.
    pub fn sample(&self, t_s: f64) -> f64 {
        let first = self.values[0];
        if self.values.len() == 1 || t_s.is_nan() || t_s < self.delay_s {
            return first;
        }
        let local = (t_s - self.delay_s).rem_euclid(self.duration_s) / self.duration_s;
        let segments = (self.values.len() - 1) as f64;
        let pos = local * segments;
        let idx = (pos.floor() as usize).min(self.values.len() - 2);
        let te = self.ease.apply(pos - idx as f64);
        let a = self.values[idx];
        let b = self.values[idx + 1];
        a + (b - a) * te
    }
}

/// Resolved idle-loop channels for one element.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct AmbientSample {
    /// Vertical offset in pixels.
    pub y: f64,
    /// Uniform scale factor.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

impl Default for AmbientSample {
    fn default() -> Self {
        Self {
            y: 0.0,
            scale: 1.0,
            opacity: 1.0,
        }
    }
}

/// A bundle of optional loop tracks driving one element.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct AmbientLoop {
    /// Vertical offset track.
    pub y: Option<LoopTrack>,
    /// Scale track.
    pub scale: Option<LoopTrack>,
    /// Opacity track.
    pub opacity: Option<LoopTrack>,
}

impl AmbientLoop {
    /// Sample every present track; absent tracks keep their neutral value.
    pub fn sample(&self, t_s: f64) -> AmbientSample {
        let neutral = AmbientSample::default();
        AmbientSample {
            y: self.y.as_ref().map_or(neutral.y, |t| t.sample(t_s)),
            scale: self.scale.as_ref().map_or(neutral.scale, |t| t.sample(t_s)),
            opacity: self
                .opacity
                .as_ref()
                .map_or(neutral.opacity, |t| t.sample(t_s).clamp(0.0, 1.0)),
        }
    }

    /// "Scroll to explore" hint bobbing under the hero title.
    pub fn hero_hint() -> Self {
        Self {
            y: Some(LoopTrack::preset(&[0.0, 10.0, 0.0], 2.0, 0.0, Ease::EaseInOut)),
            ..Self::default()
        }
    }

    /// Product image float.
    pub fn product_float() -> Self {
        Self {
            y: Some(LoopTrack::preset(&[0.0, -20.0, 0.0], 4.0, 0.0, Ease::EaseInOut)),
            ..Self::default()
        }
    }

    /// Glow behind a product image.
    pub fn product_glow() -> Self {
        Self {
            scale: Some(LoopTrack::preset(&[1.0, 1.2, 1.0], 3.0, 0.0, Ease::EaseInOut)),
            opacity: Some(LoopTrack::preset(&[0.4, 0.6, 0.4], 3.0, 0.0, Ease::EaseInOut)),
            ..Self::default()
        }
    }

    /// Contact shoe float.
    pub fn contact_float() -> Self {
        Self {
            y: Some(LoopTrack::preset(&[0.0, -30.0, 0.0], 5.0, 0.0, Ease::EaseInOut)),
            ..Self::default()
        }
    }

    /// Glow behind the contact shoe.
    pub fn contact_glow() -> Self {
        Self {
            scale: Some(LoopTrack::preset(&[1.0, 1.3, 1.0], 3.0, 0.0, Ease::EaseInOut)),
            opacity: Some(LoopTrack::preset(&[0.3, 0.6, 0.3], 3.0, 0.0, Ease::EaseInOut)),
            ..Self::default()
        }
    }

    /// Expanding ring `index` around the contact shoe; rings start one second apart.
    pub fn contact_ring(index: usize) -> Self {
        let delay = index as f64;
        Self {
            scale: Some(LoopTrack::preset(&[1.0, 1.5, 1.0], 3.0, delay, Ease::EaseInOut)),
            opacity: Some(LoopTrack::preset(&[0.5, 0.0, 0.5], 3.0, delay, Ease::EaseInOut)),
            ..Self::default()
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ambient.rs"]
mod tests;
