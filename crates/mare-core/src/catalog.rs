//! Static product catalog.
//!
//! The catalog ships inside the binary as JSON and is parsed once on first
//! use. It is read-only: views look products up by id and render a fallback
//! when the id is unknown.

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

const BUNDLED_CATALOG: &str = include_str!("../data/catalog.json");

static BUNDLED: LazyLock<Catalog> = LazyLock::new(|| match Catalog::from_json(BUNDLED_CATALOG) {
    Ok(catalog) => catalog,
    Err(err) => {
        tracing::error!("bundled catalog is invalid, serving an empty one: {err}");
        Catalog::default()
    }
});

/// Errors raised while loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate product id '{0}'")]
    DuplicateId(String),
    #[error("product has an empty id")]
    EmptyId,
}

/// One line of a product's technical sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spec {
    pub label: String,
    pub value: String,
}

/// A hull colour option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorVariant {
    pub name: String,
    /// CSS colour used for the swatch.
    pub swatch: String,
    /// Image showing the boat in this colour.
    pub image: String,
}

/// A boat model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub specs: Vec<Spec>,
    #[serde(default)]
    pub color_variants: Vec<ColorVariant>,
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    /// Image used on catalog cards and as the transition ghost.
    pub fn cover_image(&self) -> &str {
        self.images
            .first()
            .or_else(|| self.color_variants.first().map(|v| &v.image))
            .map_or("", String::as_str)
    }

    /// Image for the colour variant at `index`, or the cover when there is
    /// no such variant.
    pub fn variant_image(&self, index: usize) -> &str {
        self.color_variants
            .get(index)
            .map_or_else(|| self.cover_image(), |variant| variant.image.as_str())
    }
}

/// Ordered, id-unique list of products.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Catalog {
    products: Vec<Product>,
}

#[derive(Deserialize)]
struct CatalogFile {
    products: Vec<Product>,
}

impl Catalog {
    /// The catalog compiled into the crate.
    pub fn bundled() -> &'static Catalog {
        &BUNDLED
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::from_products(file.products)
    }

    pub fn from_products(products: Vec<Product>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(products.len());
        for product in &products {
            if product.id.is_empty() {
                return Err(CatalogError::EmptyId);
            }
            if !seen.insert(product.id.as_str()) {
                return Err(CatalogError::DuplicateId(product.id.clone()));
            }
        }
        Ok(Self { products })
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_catalog_parses() {
        let catalog = Catalog::from_json(BUNDLED_CATALOG).unwrap();
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), Catalog::bundled().len());
    }

    #[test]
    fn test_lookup_known_and_unknown() {
        let catalog = Catalog::bundled();
        let pono = catalog.get("pono").unwrap();
        assert_eq!(pono.name, "PONO");
        assert!(!pono.cover_image().is_empty());

        assert!(catalog.get("unknown-id").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_rejects_duplicate_ids() {
        let json = r#"{"products":[
            {"id":"a","name":"A","category":"x"},
            {"id":"a","name":"B","category":"x"}
        ]}"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn test_variant_image_follows_selection() {
        let pono = Catalog::bundled().get("pono").unwrap();
        // The first swatch is selected by default and shows its own image
        assert_eq!(pono.variant_image(0), "/assets/models/pono/sand.jpg");
        assert_eq!(pono.variant_image(1), "/assets/models/pono/abyss.jpg");
        assert_eq!(pono.variant_image(99), pono.cover_image());

        let json = r#"{"products":[
            {"id":"a","name":"A","category":"x","images":["/a.jpg"]}
        ]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        assert_eq!(catalog.get("a").unwrap().variant_image(0), "/a.jpg");
    }

    #[test]
    fn test_rejects_empty_id() {
        let json = r#"{"products":[{"id":"","name":"A","category":"x"}]}"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::EmptyId)));
    }

    #[test]
    fn test_optional_fields_default() {
        let json = r#"{"products":[{"id":"a","name":"A","category":"x"}]}"#;
        let catalog = Catalog::from_json(json).unwrap();
        let product = catalog.get("a").unwrap();
        assert!(product.specs.is_empty());
        assert_eq!(product.cover_image(), "");
    }
}
