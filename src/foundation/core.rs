use std::time::Duration;

use crate::foundation::error::{LegacyError, LegacyResult};

/// Normalized scroll progress, always inside `[0, 1]`.
///
/// Construction clamps, so a `Progress` value can never leave the unit interval. `NaN` maps to
/// `0.0`.
#[derive(Clone, Copy, Debug, Default, PartialEq, PartialOrd, serde::Serialize)]
#[serde(transparent)]
pub struct Progress(f64);

impl Progress {
    /// Progress at the start of a region.
    pub const START: Self = Self(0.0);
    /// Progress at the end of a region.
    pub const END: Self = Self(1.0);

    /// Clamp `v` into `[0, 1]`.
    pub fn new(v: f64) -> Self {
        if v.is_nan() {
            return Self::START;
        }
        Self(v.clamp(0.0, 1.0))
    }

    /// Raw value in `[0, 1]`.
    pub fn get(self) -> f64 {
        self.0
    }
}

/// Viewport dimensions in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct Viewport {
    /// Visible height of the scroll container.
    pub height: f64,
}

impl Viewport {
    /// Build a viewport, rejecting non-finite or non-positive heights.
    pub fn new(height: f64) -> LegacyResult<Self> {
        if !height.is_finite() || height <= 0.0 {
            return Err(LegacyError::validation("viewport height must be > 0"));
        }
        Ok(Self { height })
    }
}

/// Monotonic host-supplied timestamp, measured from session start.
///
/// The core never reads a wall clock; the dispatcher passes the current time in with every event
/// that needs it. This keeps timers deterministic and testable.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct SceneTime(pub Duration);

impl SceneTime {
    /// Session start.
    pub const ZERO: Self = Self(Duration::ZERO);

    /// Build from milliseconds since session start.
    pub fn from_millis(ms: u64) -> Self {
        Self(Duration::from_millis(ms))
    }

    /// Seconds since session start.
    pub fn as_secs_f64(self) -> f64 {
        self.0.as_secs_f64()
    }

    /// Timestamp `d` after `self`.
    pub fn after(self, d: Duration) -> Self {
        Self(self.0.saturating_add(d))
    }

    /// Elapsed time from `earlier` to `self`, zero if `earlier` is later.
    pub fn since(self, earlier: SceneTime) -> Duration {
        self.0.saturating_sub(earlier.0)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
