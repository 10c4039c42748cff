use crate::{
    animation::{
        ambient::{AmbientLoop, LoopTrack},
        ease::Ease,
    },
    foundation::rng::Rng64,
};

/// Which decorative particle layer to generate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleKind {
    /// Faint white dust behind the hero title.
    Hero,
    /// Accent-tinted sparks around a product image.
    Product,
    /// Purple dust behind the contact form.
    Contact,
}

impl ParticleKind {
    /// Number of particles in a layer of this kind.
    pub fn count(self) -> usize {
        match self {
            Self::Hero => 20,
            Self::Product => 15,
            Self::Contact => 30,
        }
    }

    fn motion(self, duration_s: f64, delay_s: f64) -> AmbientLoop {
        let track = |values: &[f64]| {
            Some(LoopTrack::preset(values, duration_s, delay_s, Ease::EaseInOut))
        };
        match self {
            Self::Hero => AmbientLoop {
                y: track(&[0.0, -30.0, 0.0]),
                opacity: track(&[0.1, 0.3, 0.1]),
                scale: None,
            },
            Self::Product => AmbientLoop {
                y: track(&[0.0, -60.0, 0.0]),
                opacity: track(&[0.2, 0.6, 0.2]),
                scale: track(&[1.0, 1.5, 1.0]),
            },
            Self::Contact => AmbientLoop {
                y: track(&[0.0, -30.0, 0.0]),
                opacity: track(&[0.2, 0.5, 0.2]),
                scale: None,
            },
        }
    }
}

/// One decorative particle with a fixed anchor and its own loop timing.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct Particle {
    /// Horizontal anchor, percent of the container width.
    pub left_pct: f64,
    /// Vertical anchor, percent of the container height.
    pub top_pct: f64,
    /// Idle loop driving the particle.
    pub motion: AmbientLoop,
}

/// Resolved particle state for one instant.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ParticleSample {
    /// Horizontal anchor, percent.
    pub left_pct: f64,
    /// Vertical anchor, percent.
    pub top_pct: f64,
    /// Vertical offset in pixels.
    pub y: f64,
    /// Scale factor.
    pub scale: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f64,
}

/// Deterministic particle layout. The same `(kind, seed)` always yields the same field.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ParticleField {
    /// Layer kind.
    pub kind: ParticleKind,
    /// Particles in paint order.
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Place `kind.count()` particles using `seed`.
    pub fn generate(kind: ParticleKind, seed: u64) -> Self {
        let mut rng = Rng64::new(seed);
        let particles = (0..kind.count())
            .map(|_| {
                let left_pct = rng.range_f64(0.0, 100.0);
                let top_pct = rng.range_f64(0.0, 100.0);
                let duration_s = rng.range_f64(3.0, 5.0);
                let delay_s = rng.range_f64(0.0, 2.0);
                Particle {
                    left_pct,
                    top_pct,
                    motion: kind.motion(duration_s, delay_s),
                }
            })
            .collect();
        Self { kind, particles }
    }

    /// Sample every particle at `t_s` seconds.
    pub fn sample(&self, t_s: f64) -> Vec<ParticleSample> {
        self.particles
            .iter()
            .map(|p| {
                let s = p.motion.sample(t_s);
                ParticleSample {
                    left_pct: p.left_pct,
                    top_pct: p.top_pct,
                    y: s.y,
                    scale: s.scale,
                    opacity: s.opacity,
                }
            })
            .collect()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/particles.rs"]
mod tests;
