use kurbo::Affine;

use crate::{
    animation::{spring::SpringConfig, table::ControlTable},
    foundation::core::Progress,
    motion::{channel::SpringChannel, section::image_transform},
};

/// Control tables for the contact section's shoe. Inputs are section-local progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ContactMotionPreset {
    /// Shoe scale.
    pub scale: ControlTable,
    /// Shoe rotation in degrees.
    pub rotate_deg: ControlTable,
    /// Shoe vertical offset in pixels.
    pub y: ControlTable,
}

impl Default for ContactMotionPreset {
    fn default() -> Self {
        Self {
            scale: ControlTable::preset(&[0.0, 0.5, 1.0], &[0.5, 1.0, 1.2]),
            rotate_deg: ControlTable::preset(&[0.0, 1.0], &[-10.0, 5.0]),
            y: ControlTable::preset(&[0.0, 1.0], &[100.0, -50.0]),
        }
    }
}

/// Derived visual state of the contact shoe.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ContactVisual {
    /// Section-local progress.
    pub progress: Progress,
    /// Smoothed scale.
    pub scale: f64,
    /// Smoothed rotation in degrees.
    pub rotate_deg: f64,
    /// Smoothed vertical offset in pixels.
    pub y: f64,
    /// Shoe transform about its center.
    pub transform: Affine,
}

/// Scroll-linked motion for the contact shoe.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ContactMotion {
    progress: Progress,
    scale: SpringChannel,
    rotate_deg: SpringChannel,
    y: SpringChannel,
}

impl ContactMotion {
    /// Build at progress 0 with springs at rest.
    pub fn new(preset: &ContactMotionPreset, spring: SpringConfig) -> Self {
        let p = Progress::START;
        Self {
            progress: p,
            scale: SpringChannel::new(preset.scale.clone(), spring, p),
            rotate_deg: SpringChannel::new(preset.rotate_deg.clone(), spring, p),
            y: SpringChannel::new(preset.y.clone(), spring, p),
        }
    }

    /// Feed new section-local progress.
    pub fn set_progress(&mut self, progress: Progress) {
        self.progress = progress;
        for ch in [&mut self.scale, &mut self.rotate_deg, &mut self.y] {
            ch.retarget(progress);
        }
    }

    /// Advance the springs by `dt_secs`.
    pub fn step(&mut self, dt_secs: f64) {
        for ch in [&mut self.scale, &mut self.rotate_deg, &mut self.y] {
            ch.step(dt_secs);
        }
    }

    /// Snap every spring onto its raw value.
    pub fn settle(&mut self) {
        for ch in [&mut self.scale, &mut self.rotate_deg, &mut self.y] {
            ch.settle();
        }
    }

    /// Whether all springs are at rest.
    pub fn is_at_rest(&self) -> bool {
        self.scale.is_at_rest() && self.rotate_deg.is_at_rest() && self.y.is_at_rest()
    }

    /// Current visual state.
    pub fn visual(&self) -> ContactVisual {
        let scale = self.scale.value();
        let rotate_deg = self.rotate_deg.value();
        let y = self.y.value();
        ContactVisual {
            progress: self.progress,
            scale,
            rotate_deg,
            y,
            transform: image_transform(scale, rotate_deg, y),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/contact.rs"]
mod tests;
