use std::{io::Read, time::Duration};

use crate::{
    animation::spring::SpringConfig,
    foundation::{
        core::Viewport,
        error::{LegacyError, LegacyResult},
    },
    motion::{contact::ContactMotionPreset, section::ProductMotionPreset},
    scroll::region::PageLayout,
};

/// Page-level settings. Every field has a default matching the shipped site, so a config file
/// only needs the keys it overrides.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PageConfig {
    /// Viewport height in CSS pixels.
    pub viewport_height: f64,
    /// Hero height, in viewport heights.
    pub hero_vh: f64,
    /// Height of each product section, in viewport heights.
    pub product_vh: f64,
    /// Contact section height, in viewport heights.
    pub contact_vh: f64,
    /// Footer height, in viewport heights.
    pub footer_vh: f64,
    /// Spring used for every smoothed channel.
    pub spring: SpringConfig,
    /// Product section control tables.
    pub product_motion: ProductMotionPreset,
    /// Contact shoe control tables.
    pub contact_motion: ContactMotionPreset,
    /// Delay between acknowledging a submission and resetting the form.
    pub form_reset_ms: u64,
    /// Seed for decorative particle placement.
    pub particle_seed: u64,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            viewport_height: 900.0,
            hero_vh: 1.0,
            product_vh: 1.0,
            contact_vh: 1.0,
            footer_vh: 1.0,
            spring: SpringConfig::default(),
            product_motion: ProductMotionPreset::default(),
            contact_motion: ContactMotionPreset::default(),
            form_reset_ms: 3000,
            particle_seed: 1985,
        }
    }
}

impl PageConfig {
    /// Parse a JSON config, filling missing keys with defaults, and validate it.
    pub fn from_json_reader(r: impl Read) -> LegacyResult<Self> {
        let cfg: Self = serde_json::from_reader(r)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Check numeric ranges.
    pub fn validate(&self) -> LegacyResult<()> {
        self.viewport()?;
        for (name, v) in [
            ("hero_vh", self.hero_vh),
            ("product_vh", self.product_vh),
            ("contact_vh", self.contact_vh),
            ("footer_vh", self.footer_vh),
        ] {
            if !v.is_finite() || v <= 0.0 {
                return Err(LegacyError::validation(format!("{name} must be > 0")));
            }
        }
        self.spring.validate()
    }

    /// Configured viewport.
    pub fn viewport(&self) -> LegacyResult<Viewport> {
        Viewport::new(self.viewport_height)
    }

    /// Form acknowledgement delay.
    pub fn form_reset_delay(&self) -> Duration {
        Duration::from_millis(self.form_reset_ms)
    }

    /// Stacked layout for `product_count` product sections.
    pub fn layout(&self, product_count: usize) -> LegacyResult<PageLayout> {
        let viewport = self.viewport()?;
        let vh = viewport.height;
        PageLayout::stacked(
            viewport,
            self.hero_vh * vh,
            self.product_vh * vh,
            product_count,
            self.contact_vh * vh,
            self.footer_vh * vh,
        )
    }
}

#[cfg(test)]
#[path = "../../tests/unit/page/config.rs"]
mod tests;
