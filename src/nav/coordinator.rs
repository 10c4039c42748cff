use crate::{catalog::model::Catalog, foundation::core::Progress};

/// Accent style token shown while the hero or the closing regions are active. Same vocabulary
/// as [`ColorScheme::accent`](crate::ColorScheme).
pub const NEUTRAL_ACCENT: &str = "text-white";

/// Logical section index for navigation: `floor(progress * (count + 2))`, capped at
/// `count + 1`.
///
/// Index 0 is the hero, `1..=count` are products in catalog order, `count + 1` is the closing
/// contact/footer region.
pub fn active_index(global_progress: Progress, section_count: usize) -> usize {
    let slots = section_count + 2;
    let raw = (global_progress.get() * slots as f64).floor() as usize;
    raw.min(section_count + 1)
}

/// What the active index points at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActiveSection {
    /// Leading hero banner.
    Hero,
    /// Product section.
    Product {
        /// 1-based position in the catalog.
        ordinal: usize,
        /// Stable product id.
        id: u32,
    },
    /// Contact form and footer.
    Closing,
}

impl ActiveSection {
    /// Resolve an active index against the catalog.
    pub fn resolve(index: usize, catalog: &Catalog) -> Self {
        if index == 0 {
            return Self::Hero;
        }
        match catalog.at(index - 1) {
            Some(p) => Self::Product {
                ordinal: index,
                id: p.id,
            },
            None => Self::Closing,
        }
    }
}

/// Navigation bar state derived from the active index.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct NavState {
    /// Raw active index.
    pub active_index: usize,
    /// Resolved section.
    pub active: ActiveSection,
    /// Logo accent style token: the active product's accent, [`NEUTRAL_ACCENT`] otherwise.
    pub accent: String,
    /// One entry per product; `true` for the highlighted indicator.
    pub indicators: Vec<bool>,
}

impl NavState {
    /// Derive the navigation display for `global_progress`.
    pub fn derive(global_progress: Progress, catalog: &Catalog) -> Self {
        let active_index = active_index(global_progress, catalog.len());
        let active = ActiveSection::resolve(active_index, catalog);
        let accent = match active {
            ActiveSection::Product { ordinal, .. } => catalog
                .at(ordinal - 1)
                .map_or(NEUTRAL_ACCENT, |p| p.color_scheme.accent.as_str()),
            ActiveSection::Hero | ActiveSection::Closing => NEUTRAL_ACCENT,
        }
        .to_owned();
        let indicators = (0..catalog.len()).map(|i| active_index == i + 1).collect();
        Self {
            active_index,
            active,
            accent,
            indicators,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/nav/coordinator.rs"]
mod tests;
