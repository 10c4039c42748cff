use crate::foundation::{
    core::{Progress, Viewport},
    error::{LegacyError, LegacyResult},
};

/// Vertical extent of one laid-out element, in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SectionBounds {
    /// Distance from the top of the document to the element's leading edge.
    pub top: f64,
    /// Element height.
    pub height: f64,
}

impl SectionBounds {
    /// Trailing edge in document coordinates.
    pub fn bottom(self) -> f64 {
        self.top + self.height
    }
}

/// Span of scroll offsets over which a tracked region goes from progress 0 to 1.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ScrollRegion {
    /// Scroll offset mapped to progress 0.
    pub start: f64,
    /// Scroll offset mapped to progress 1.
    pub end: f64,
}

impl ScrollRegion {
    /// Whole-document region: 0 at the top, 1 once the last pixel is visible.
    pub fn document(document_height: f64, viewport: Viewport) -> Self {
        Self {
            start: 0.0,
            end: (document_height - viewport.height).max(0.0),
        }
    }

    /// Full transit of a section: starts when its leading edge enters the bottom of the
    /// viewport, ends when its trailing edge leaves through the top.
    pub fn section_transit(bounds: SectionBounds, viewport: Viewport) -> Self {
        Self {
            start: bounds.top - viewport.height,
            end: bounds.bottom(),
        }
    }

    /// `clamp((offset - start) / (end - start), 0, 1)`.
    ///
    /// A degenerate region (`end <= start`) is a step: 0 before `start`, 1 from `start` on.
    pub fn progress(self, offset: f64) -> Progress {
        let span = self.end - self.start;
        if span <= 0.0 || !span.is_finite() {
            return if offset >= self.start {
                Progress::END
            } else {
                Progress::START
            };
        }
        Progress::new((offset - self.start) / span)
    }
}

/// Vertical layout of the page: hero, one section per product, contact, footer.
///
/// Stands in for live element measurement when the host cannot supply it (headless runs,
/// tests). Every section is stacked in document order with no gaps.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct PageLayout {
    viewport: Viewport,
    hero: SectionBounds,
    products: Vec<SectionBounds>,
    contact: SectionBounds,
    footer: SectionBounds,
}

impl PageLayout {
    /// Stack the page from per-region heights.
    pub fn stacked(
        viewport: Viewport,
        hero_height: f64,
        product_height: f64,
        product_count: usize,
        contact_height: f64,
        footer_height: f64,
    ) -> LegacyResult<Self> {
        for (name, h) in [
            ("hero", hero_height),
            ("product", product_height),
            ("contact", contact_height),
            ("footer", footer_height),
        ] {
            if !h.is_finite() || h <= 0.0 {
                return Err(LegacyError::validation(format!(
                    "{name} section height must be > 0"
                )));
            }
        }

        let mut cursor = 0.0;
        let mut place = |height: f64| {
            let b = SectionBounds {
                top: cursor,
                height,
            };
            cursor += height;
            b
        };
        let hero = place(hero_height);
        let products = (0..product_count).map(|_| place(product_height)).collect();
        let contact = place(contact_height);
        let footer = place(footer_height);

        Ok(Self {
            viewport,
            hero,
            products,
            contact,
            footer,
        })
    }

    /// Layout from host-measured bounds, listed in document order.
    pub fn from_bounds(
        viewport: Viewport,
        hero: SectionBounds,
        products: Vec<SectionBounds>,
        contact: SectionBounds,
        footer: SectionBounds,
    ) -> LegacyResult<Self> {
        let all = std::iter::once(&hero)
            .chain(products.iter())
            .chain([&contact, &footer]);
        for b in all {
            if !b.top.is_finite() || !b.height.is_finite() || b.height < 0.0 {
                return Err(LegacyError::validation(
                    "section bounds must be finite with height >= 0",
                ));
            }
        }
        Ok(Self {
            viewport,
            hero,
            products,
            contact,
            footer,
        })
    }

    /// Number of product sections.
    pub fn product_count(&self) -> usize {
        self.products.len()
    }

    /// Viewport the layout was built for.
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Total scrollable height.
    pub fn document_height(&self) -> f64 {
        self.footer.bottom()
    }

    /// Largest reachable scroll offset.
    pub fn max_scroll(&self) -> f64 {
        (self.document_height() - self.viewport.height).max(0.0)
    }

    /// Hero bounds.
    pub fn hero(&self) -> SectionBounds {
        self.hero
    }

    /// Bounds of the product at display position `index` (0-based).
    pub fn product(&self, index: usize) -> Option<SectionBounds> {
        self.products.get(index).copied()
    }

    /// Contact section bounds.
    pub fn contact(&self) -> SectionBounds {
        self.contact
    }

    /// Footer bounds.
    pub fn footer(&self) -> SectionBounds {
        self.footer
    }

    /// Region for global progress.
    pub fn document_region(&self) -> ScrollRegion {
        ScrollRegion::document(self.document_height(), self.viewport)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scroll/region.rs"]
mod tests;
