use crate::{
    animation::{
        spring::{SmoothedValue, SpringConfig},
        table::ControlTable,
    },
    foundation::core::Progress,
};

/// A control table whose output is followed by a spring.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SpringChannel {
    table: ControlTable,
    raw: f64,
    smoothed: SmoothedValue,
}

impl SpringChannel {
    /// Start at rest on the table's value for `progress`.
    pub fn new(table: ControlTable, spring: SpringConfig, progress: Progress) -> Self {
        let raw = table.sample(progress.get());
        Self {
            table,
            raw,
            smoothed: SmoothedValue::new(spring, raw),
        }
    }

    /// Re-evaluate the table and hand the result to the spring as its new target.
    pub fn retarget(&mut self, progress: Progress) {
        self.raw = self.table.sample(progress.get());
        self.smoothed.set_target(self.raw);
    }

    /// Advance the spring.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        self.smoothed.step(dt_secs)
    }

    /// Jump the spring onto the raw value.
    pub fn settle(&mut self) {
        self.smoothed.snap(self.raw);
    }

    /// Unsmoothed table output.
    pub fn raw(&self) -> f64 {
        self.raw
    }

    /// Displayed, smoothed value.
    pub fn value(&self) -> f64 {
        self.smoothed.value()
    }

    /// Whether the displayed value has caught up with the raw value.
    pub fn is_at_rest(&self) -> bool {
        self.smoothed.is_at_rest()
    }
}
