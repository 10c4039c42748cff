use crate::foundation::error::{LegacyError, LegacyResult};

/// Physical constants of a damped spring.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpringConfig {
    /// Restoring force per unit displacement.
    pub stiffness: f64,
    /// Opposing force per unit velocity.
    pub damping: f64,
    /// Mass of the simulated body.
    pub mass: f64,
    /// Displacement below which the spring may settle.
    pub rest_delta: f64,
    /// Speed below which the spring may settle.
    pub rest_speed: f64,
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: 100.0,
            damping: 30.0,
            mass: 1.0,
            rest_delta: 0.001,
            rest_speed: 0.001,
        }
    }
}

impl SpringConfig {
    /// Reject non-finite or non-positive constants.
    pub fn validate(&self) -> LegacyResult<()> {
        let all = [
            self.stiffness,
            self.damping,
            self.mass,
            self.rest_delta,
            self.rest_speed,
        ];
        if all.iter().any(|v| !v.is_finite() || *v <= 0.0) {
            return Err(LegacyError::validation(
                "spring constants must be finite and > 0",
            ));
        }
        Ok(())
    }

    /// Undamped angular frequency `sqrt(k / m)`.
    pub fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    /// Damping ratio; `1.0` is critical, above is overdamped.
    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }
}

/// A value that follows a moving target through a damped spring.
///
/// The raw channel value is fed in with [`SmoothedValue::set_target`]; the host advances time
/// with [`SmoothedValue::step`]. Each step integrates the closed-form oscillator solution, so
/// the result does not depend on how a span of time is split into steps.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct SmoothedValue {
    config: SpringConfig,
    position: f64,
    velocity: f64,
    target: f64,
}

impl SmoothedValue {
    /// A spring resting at `initial`.
    pub fn new(config: SpringConfig, initial: f64) -> Self {
        Self {
            config,
            position: initial,
            velocity: 0.0,
            target: initial,
        }
    }

    /// Current displayed value.
    pub fn value(&self) -> f64 {
        self.position
    }

    /// Current velocity in units per second.
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Latest raw value the spring is chasing.
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Spring constants.
    pub fn config(&self) -> SpringConfig {
        self.config
    }

    /// Retarget without touching position or velocity.
    pub fn set_target(&mut self, target: f64) {
        if target.is_finite() {
            self.target = target;
        }
    }

    /// Jump straight to `value` and stop.
    pub fn snap(&mut self, value: f64) {
        self.position = value;
        self.target = value;
        self.velocity = 0.0;
    }

    /// Whether the spring has settled on its target.
    pub fn is_at_rest(&self) -> bool {
        self.position == self.target && self.velocity == 0.0
    }

    /// Advance the simulation by `dt_secs` and return the new displayed value.
    pub fn step(&mut self, dt_secs: f64) -> f64 {
        if dt_secs.is_nan() || dt_secs <= 0.0 || self.is_at_rest() {
            return self.position;
        }

        let (x, v) = oscillate(
            &self.config,
            self.position - self.target,
            self.velocity,
            dt_secs,
        );
        self.position = self.target + x;
        self.velocity = v;

        if x.abs() < self.config.rest_delta && v.abs() < self.config.rest_speed {
            self.position = self.target;
            self.velocity = 0.0;
        }
        self.position
    }
}

/// Closed-form damped oscillator: displacement `x0` and velocity `v0` after `t` seconds.
fn oscillate(cfg: &SpringConfig, x0: f64, v0: f64, t: f64) -> (f64, f64) {
    let w0 = cfg.natural_frequency();
    let zeta = cfg.damping_ratio();

    if (zeta - 1.0).abs() < 1e-9 {
        let c = v0 + w0 * x0;
        let e = (-w0 * t).exp();
        return (e * (x0 + c * t), e * (v0 - w0 * c * t));
    }

    if zeta < 1.0 {
        let a = zeta * w0;
        let wd = w0 * (1.0 - zeta * zeta).sqrt();
        let b = (v0 + a * x0) / wd;
        let e = (-a * t).exp();
        let (sin, cos) = (wd * t).sin_cos();
        let x = e * (x0 * cos + b * sin);
        let v = e * (v0 * cos - (a * b + x0 * wd) * sin);
        return (x, v);
    }

    let s = (zeta * zeta - 1.0).sqrt();
    let r1 = -w0 * (zeta - s);
    let r2 = -w0 * (zeta + s);
    let c2 = (v0 - r1 * x0) / (r2 - r1);
    let c1 = x0 - c2;
    let e1 = (r1 * t).exp();
    let e2 = (r2 * t).exp();
    (c1 * e1 + c2 * e2, c1 * r1 * e1 + c2 * r2 * e2)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/spring.rs"]
mod tests;
