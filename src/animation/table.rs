use crate::foundation::error::{LegacyError, LegacyResult};

/// One `(input, output)` breakpoint of a [`ControlTable`].
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Breakpoint {
    /// Input coordinate (usually progress).
    pub input: f64,
    /// Output value at `input`.
    pub output: f64,
}

/// Piecewise-linear mapping from a progress domain to one visual channel.
///
/// Inputs are strictly increasing. Sampling outside the covered range clamps to the nearest edge
/// output, so [`ControlTable::sample`] is total.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ControlTable {
    points: Vec<Breakpoint>,
}

impl ControlTable {
    /// Build a table from breakpoints.
    pub fn new(points: Vec<Breakpoint>) -> LegacyResult<Self> {
        if points.is_empty() {
            return Err(LegacyError::validation(
                "control table must have at least one breakpoint",
            ));
        }
        if points
            .iter()
            .any(|p| !p.input.is_finite() || !p.output.is_finite())
        {
            return Err(LegacyError::validation(
                "control table breakpoints must be finite",
            ));
        }
        if !points.windows(2).all(|w| w[0].input < w[1].input) {
            return Err(LegacyError::validation(
                "control table inputs must be strictly increasing",
            ));
        }
        Ok(Self { points })
    }

    /// Build a table from parallel input and output slices, the way motion presets are written.
    pub fn from_pairs(inputs: &[f64], outputs: &[f64]) -> LegacyResult<Self> {
        if inputs.len() != outputs.len() {
            return Err(LegacyError::validation(format!(
                "control table has {} inputs but {} outputs",
                inputs.len(),
                outputs.len()
            )));
        }
        Self::new(
            inputs
                .iter()
                .zip(outputs)
                .map(|(&input, &output)| Breakpoint { input, output })
                .collect(),
        )
    }

    /// Infallible constructor for tables written as constants in this crate.
    pub(crate) fn preset(inputs: &[f64], outputs: &[f64]) -> Self {
        debug_assert_eq!(inputs.len(), outputs.len());
        debug_assert!(inputs.windows(2).all(|w| w[0] < w[1]));
        Self {
            points: inputs
                .iter()
                .zip(outputs)
                .map(|(&input, &output)| Breakpoint { input, output })
                .collect(),
        }
    }

    /// Breakpoints in input order.
    pub fn points(&self) -> &[Breakpoint] {
        &self.points
    }

    /// Evaluate the table at `x`.
    pub fn sample(&self, x: f64) -> f64 {
        interpolate(self, x)
    }
}

impl<'de> serde::Deserialize<'de> for ControlTable {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let points = Vec::<Breakpoint>::deserialize(deserializer)?;
        Self::new(points).map_err(serde::de::Error::custom)
    }
}

/// Piecewise-linear interpolation through `table` at `x`, clamped at both ends.
///
/// `NaN` samples the first breakpoint.
pub fn interpolate(table: &ControlTable, x: f64) -> f64 {
    let pts = &table.points;
    let first = pts[0];
    let last = pts[pts.len() - 1];
    if x.is_nan() || x <= first.input {
        return first.output;
    }
    if x >= last.input {
        return last.output;
    }

    // first.input < x < last.input, so 1 <= idx < len.
    let idx = pts.partition_point(|p| p.input <= x);
    let a = pts[idx - 1];
    let b = pts[idx];
    let t = (x - a.input) / (b.input - a.input);
    a.output + t * (b.output - a.output)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/table.rs"]
mod tests;
