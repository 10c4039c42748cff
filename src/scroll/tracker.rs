use crate::{
    foundation::core::{Progress, Viewport},
    scroll::region::{ScrollRegion, SectionBounds},
};

/// How a tracker's region was derived.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackingMode {
    /// The whole scrollable document.
    Global,
    /// One section's full transit through the viewport.
    SectionLocal,
}

/// Converts live scroll offsets into progress for one region.
///
/// Each tracker owns its region and last result; trackers never read each other's state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct ScrollProgressTracker {
    mode: TrackingMode,
    region: ScrollRegion,
    progress: Progress,
}

impl ScrollProgressTracker {
    /// Track the whole document.
    pub fn global(document_height: f64, viewport: Viewport) -> Self {
        Self::with_region(
            TrackingMode::Global,
            ScrollRegion::document(document_height, viewport),
        )
    }

    /// Track one section's transit through the viewport.
    pub fn section(bounds: SectionBounds, viewport: Viewport) -> Self {
        Self::with_region(
            TrackingMode::SectionLocal,
            ScrollRegion::section_transit(bounds, viewport),
        )
    }

    /// Track an explicit region.
    pub fn with_region(mode: TrackingMode, region: ScrollRegion) -> Self {
        Self {
            mode,
            region,
            progress: region.progress(0.0),
        }
    }

    /// Tracking mode.
    pub fn mode(&self) -> TrackingMode {
        self.mode
    }

    /// Current region bounds.
    pub fn region(&self) -> ScrollRegion {
        self.region
    }

    /// Latest computed progress.
    pub fn progress(&self) -> Progress {
        self.progress
    }

    /// Replace the region after a geometry change. Takes effect on the next [`Self::update`].
    pub fn set_region(&mut self, region: ScrollRegion) {
        self.region = region;
    }

    /// Recompute progress for `scroll_offset`. Idempotent for a given offset and region.
    pub fn update(&mut self, scroll_offset: f64) -> Progress {
        self.progress = self.region.progress(scroll_offset);
        self.progress
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/tracker.rs"]
mod tests;
