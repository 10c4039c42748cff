use kurbo::Affine;

use crate::{
    animation::{spring::SpringConfig, table::ControlTable},
    foundation::core::Progress,
    motion::channel::SpringChannel,
};

/// Control tables for a product section. Inputs are section-local progress.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ProductMotionPreset {
    /// Image scale.
    pub scale: ControlTable,
    /// Image rotation in degrees.
    pub rotate_deg: ControlTable,
    /// Image vertical offset in pixels.
    pub y: ControlTable,
    /// Copy block opacity.
    pub text_opacity: ControlTable,
    /// Copy block vertical offset in pixels.
    pub text_y: ControlTable,
}

impl Default for ProductMotionPreset {
    fn default() -> Self {
        Self {
            scale: ControlTable::preset(&[0.0, 0.5, 1.0], &[0.7, 1.0, 1.5]),
            rotate_deg: ControlTable::preset(&[0.0, 0.5, 1.0], &[-20.0, 0.0, 15.0]),
            y: ControlTable::preset(&[0.0, 0.5, 1.0], &[200.0, 0.0, -150.0]),
            text_opacity: ControlTable::preset(&[0.0, 0.3, 0.5, 0.7], &[0.0, 1.0, 1.0, 0.0]),
            text_y: ControlTable::preset(&[0.0, 0.3, 0.7], &[50.0, 0.0, -100.0]),
        }
    }
}

/// Derived visual state of one product section.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionVisual {
    /// Stable product id.
    pub product_id: u32,
    /// 1-based section number.
    pub ordinal: usize,
    /// Zero-padded section badge, e.g. `"03"`.
    pub badge: String,
    /// Section-local progress.
    pub progress: Progress,
    /// Smoothed image scale.
    pub scale: f64,
    /// Smoothed image rotation in degrees.
    pub rotate_deg: f64,
    /// Smoothed image vertical offset in pixels.
    pub y: f64,
    /// Copy block and badge opacity.
    pub text_opacity: f64,
    /// Copy block vertical offset in pixels.
    pub text_y: f64,
    /// Image transform about its center: translate, then rotate, then scale.
    pub image_transform: Affine,
}

/// Scroll-linked motion for one product section.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SectionMotion {
    product_id: u32,
    ordinal: usize,
    progress: Progress,
    scale: SpringChannel,
    rotate_deg: SpringChannel,
    y: SpringChannel,
    text_opacity: ControlTable,
    text_y: ControlTable,
}

impl SectionMotion {
    /// Motion for the product with `product_id` shown as section `ordinal` (1-based).
    pub fn new(
        product_id: u32,
        ordinal: usize,
        preset: &ProductMotionPreset,
        spring: SpringConfig,
    ) -> Self {
        let p = Progress::START;
        Self {
            product_id,
            ordinal,
            progress: p,
            scale: SpringChannel::new(preset.scale.clone(), spring, p),
            rotate_deg: SpringChannel::new(preset.rotate_deg.clone(), spring, p),
            y: SpringChannel::new(preset.y.clone(), spring, p),
            text_opacity: preset.text_opacity.clone(),
            text_y: preset.text_y.clone(),
        }
    }

    /// Stable product id.
    pub fn product_id(&self) -> u32 {
        self.product_id
    }

    /// Feed new section-local progress. Smoothed channels pick it up as their target.
    pub fn set_progress(&mut self, progress: Progress) {
        self.progress = progress;
        self.scale.retarget(progress);
        self.rotate_deg.retarget(progress);
        self.y.retarget(progress);
    }

    /// Advance the springs by `dt_secs`.
    pub fn step(&mut self, dt_secs: f64) {
        self.scale.step(dt_secs);
        self.rotate_deg.step(dt_secs);
        self.y.step(dt_secs);
    }

    /// Snap every spring onto its raw value.
    pub fn settle(&mut self) {
        self.scale.settle();
        self.rotate_deg.settle();
        self.y.settle();
    }

    /// Whether all springs are at rest.
    pub fn is_at_rest(&self) -> bool {
        self.scale.is_at_rest() && self.rotate_deg.is_at_rest() && self.y.is_at_rest()
    }

    /// Current visual state.
    pub fn visual(&self) -> SectionVisual {
        let scale = self.scale.value();
        let rotate_deg = self.rotate_deg.value();
        let y = self.y.value();
        SectionVisual {
            product_id: self.product_id,
            ordinal: self.ordinal,
            badge: format!("{:02}", self.ordinal),
            progress: self.progress,
            scale,
            rotate_deg,
            y,
            text_opacity: self.text_opacity.sample(self.progress.get()),
            text_y: self.text_y.sample(self.progress.get()),
            image_transform: image_transform(scale, rotate_deg, y),
        }
    }
}

pub(crate) fn image_transform(scale: f64, rotate_deg: f64, y: f64) -> Affine {
    Affine::translate((0.0, y)) * Affine::rotate(rotate_deg.to_radians()) * Affine::scale(scale)
}

#[cfg(test)]
#[path = "../../tests/unit/motion/section.rs"]
mod tests;
