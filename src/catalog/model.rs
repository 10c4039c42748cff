use std::{collections::BTreeSet, io::Read};

use crate::foundation::error::{LegacyError, LegacyResult};

/// Style tokens used to paint one product section.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ColorScheme {
    /// Section background gradient token.
    pub bg: String,
    /// Accent token for brand line, year badge, and navigation logo.
    pub accent: String,
    /// Feature card surface token.
    pub card: String,
}

/// One showcased product.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    /// Stable identifier, unique within a catalog.
    pub id: u32,
    /// Display name.
    pub name: String,
    /// Brand line shown above the name.
    pub brand: String,
    /// Opaque image handle resolved by the asset layer.
    #[serde(default, rename = "image", skip_serializing_if = "Option::is_none")]
    pub image_ref: Option<String>,
    /// Long-form description.
    pub description: String,
    /// Release year, four ASCII digits.
    pub year: String,
    /// Section style tokens.
    pub color_scheme: ColorScheme,
    /// Feature chips in display order.
    pub features: Vec<String>,
}

impl ProductRecord {
    fn validate(&self) -> LegacyResult<()> {
        if self.name.trim().is_empty() {
            return Err(LegacyError::catalog(format!(
                "product {} has an empty name",
                self.id
            )));
        }
        if self.year.len() != 4 || !self.year.bytes().all(|b| b.is_ascii_digit()) {
            return Err(LegacyError::catalog(format!(
                "product {} year '{}' must be four digits",
                self.id, self.year
            )));
        }
        Ok(())
    }
}

/// Ordered, immutable product list. Sequence order is display order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct Catalog {
    products: Vec<ProductRecord>,
}

impl Catalog {
    /// Validate and freeze a product list.
    pub fn new(products: Vec<ProductRecord>) -> LegacyResult<Self> {
        let mut seen = BTreeSet::new();
        for p in &products {
            if !seen.insert(p.id) {
                return Err(LegacyError::catalog(format!("duplicate product id {}", p.id)));
            }
            p.validate()?;
        }
        Ok(Self { products })
    }

    /// The five products shipped with the site.
    pub fn builtin() -> Self {
        let products = crate::catalog::builtin::products();
        debug_assert!(Self::new(products.clone()).is_ok());
        Self { products }
    }

    /// Parse a JSON array of products.
    pub fn from_json_reader(r: impl Read) -> LegacyResult<Self> {
        let products: Vec<ProductRecord> = serde_json::from_reader(r)?;
        Self::new(products)
    }

    /// Number of products.
    pub fn len(&self) -> usize {
        self.products.len()
    }

    /// Whether the catalog has no products.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Products in display order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.products
    }

    /// Product at display position `index` (0-based).
    pub fn at(&self, index: usize) -> Option<&ProductRecord> {
        self.products.get(index)
    }

    /// Lookup by stable id.
    pub fn get(&self, id: u32) -> Option<&ProductRecord> {
        self.products.iter().find(|p| p.id == id)
    }
}

impl<'de> serde::Deserialize<'de> for Catalog {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let products = Vec::<ProductRecord>::deserialize(deserializer)?;
        Self::new(products).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
