//! # Catalog
//!
//! The immutable product list the storefront sells from.
//!
//! ## Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Catalog::builtin()  ──┐                                                │
//! │                        ├──► validate_catalog() ──► Catalog (read-only)  │
//! │  Catalog::from_json()──┘                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Reading the JSON off disk is the app's job; this module only parses.
//!
//! ## JSON Format
//! ```json
//! [
//!   {
//!     "id": 1,
//!     "name": "Wireless Headphones",
//!     "priceCents": 12999,
//!     "description": "Noise-cancelling over-ear headphones",
//!     "image": "/images/headphones.jpg"
//!   }
//! ]
//! ```

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Product, ProductId};
use crate::validation::validate_catalog;

/// Built-in products: (id, name, price cents, description, image).
const BUILTIN_PRODUCTS: &[(i64, &str, i64, &str, &str)] = &[
    (
        1,
        "Wireless Headphones",
        12999,
        "Over-ear Bluetooth headphones with active noise cancellation and 30-hour battery life.",
        "/images/wireless-headphones.jpg",
    ),
    (
        2,
        "Smart Watch",
        19999,
        "Fitness tracking, heart-rate monitoring and notifications on an always-on display.",
        "/images/smart-watch.jpg",
    ),
    (
        3,
        "Portable Speaker",
        7999,
        "Water-resistant speaker with deep bass and 12 hours of playback.",
        "/images/portable-speaker.jpg",
    ),
    (
        4,
        "Mechanical Keyboard",
        8999,
        "Tenkeyless keyboard with hot-swappable switches and RGB backlight.",
        "/images/mechanical-keyboard.jpg",
    ),
    (
        5,
        "Leather Backpack",
        14999,
        "Full-grain leather backpack with a padded 15-inch laptop sleeve.",
        "/images/leather-backpack.jpg",
    ),
    (
        6,
        "Ceramic Coffee Mug",
        1499,
        "Hand-glazed 350 ml mug, dishwasher and microwave safe.",
        "/images/coffee-mug.jpg",
    ),
    (
        7,
        "Desk Lamp",
        3999,
        "Dimmable LED lamp with adjustable colour temperature and USB charging port.",
        "/images/desk-lamp.jpg",
    ),
    (
        8,
        "Running Shoes",
        10999,
        "Lightweight cushioned running shoes with breathable mesh upper.",
        "/images/running-shoes.jpg",
    ),
];

/// A validated, read-only product list in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Builds a catalog after validating the records.
    pub fn new(products: Vec<Product>) -> CoreResult<Self> {
        validate_catalog(&products)?;
        Ok(Catalog { products })
    }

    /// Parses a JSON array of product records.
    pub fn from_json(source: &str) -> CoreResult<Self> {
        let products: Vec<Product> = serde_json::from_str(source)?;
        Self::new(products)
    }

    /// The catalog compiled into the storefront.
    pub fn builtin() -> Self {
        let products = BUILTIN_PRODUCTS
            .iter()
            .map(|&(id, name, price_cents, description, image)| Product {
                id: ProductId(id),
                name: name.to_string(),
                price: Money::from_cents(price_cents),
                description: description.to_string(),
                image: image.to_string(),
            })
            .collect();
        Catalog { products }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    /// Like [`Catalog::get`], but a missing id is an error.
    pub fn require(&self, id: ProductId) -> CoreResult<&Product> {
        self.get(id).ok_or(CoreError::ProductNotFound(id))
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
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), BUILTIN_PRODUCTS.len());
        assert!(validate_catalog(catalog.products()).is_ok());
    }

    #[test]
    fn test_get_and_require() {
        let catalog = Catalog::builtin();
        assert_eq!(
            catalog.get(ProductId(1)).map(|p| p.name.as_str()),
            Some("Wireless Headphones")
        );
        assert!(catalog.get(ProductId(999)).is_none());
        assert!(matches!(
            catalog.require(ProductId(999)),
            Err(CoreError::ProductNotFound(ProductId(999)))
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 10, "name": "Mug", "priceCents": 499, "description": "Blue", "image": "/mug.jpg"},
            {"id": 11, "name": "Plate", "priceCents": 899, "description": "White", "image": "/plate.jpg"}
        ]"#;
        let catalog = Catalog::from_json(json).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.products()[1].price.cents(), 899);
    }

    #[test]
    fn test_from_json_rejects_duplicates() {
        let json = r#"[
            {"id": 1, "name": "A", "priceCents": 1, "description": "", "image": ""},
            {"id": 1, "name": "B", "priceCents": 2, "description": "", "image": ""}
        ]"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CoreError::Validation(_))
        ));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            Catalog::from_json("{not json"),
            Err(CoreError::CatalogFormat(_))
        ));
    }
}
