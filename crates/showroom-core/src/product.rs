//! # Product Model
//!
//! Decoding structs for the storefront's product feed.
//!
//! ## Feed Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  {                                                                      │
//! │    "id": 17,                                                            │
//! │    "store": { "id": 3, "name": "Bialcon" },   ──► Product.brand        │
//! │    "name": "Sukienka",                                                  │
//! │    "msrp": 101.0,                             ──► Product.base_price   │
//! │    "price": 55.0,                             ──► Product.price        │
//! │    "imageUrl": "https://…"                                              │
//! │  }                                                                      │
//! │                                                                         │
//! │  base_price 101.00 zł, price 55.00 zł ──► discount_percent() = 46      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! List entries decode into [`Product`]; the product page decodes the
//! richer [`ProductDetails`].

use serde::Deserialize;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::CoreResult;
use crate::money::Money;

/// Feed identifier for products, brands, colors and sizes.
pub type ObjectId = i64;

// =============================================================================
// Priced
// =============================================================================

/// Anything carrying a list price and a selling price.
pub trait Priced {
    /// Manufacturer's suggested price (`msrp` in the feed).
    fn base_price(&self) -> Money;

    /// Current selling price.
    fn price(&self) -> Money;

    /// True when the selling price is below the base price.
    fn is_discounted(&self) -> bool {
        self.price() < self.base_price()
    }

    /// Whole-percent discount of `price` against `base_price`.
    fn discount_percent(&self) -> CoreResult<i64> {
        self.price().discount_percent_from(&self.base_price())
    }
}

// =============================================================================
// Product (list entry)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: ObjectId,
    #[serde(rename = "store")]
    pub brand: Brand,
    pub name: String,
    #[serde(rename = "msrp")]
    pub base_price: Money,
    pub price: Money,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
}

impl Priced for Product {
    fn base_price(&self) -> Money {
        self.base_price
    }

    fn price(&self) -> Money {
        self.price
    }
}

/// Decodes a feed array into list entries.
///
/// ## Example
/// ```rust
/// use serde_json::json;
/// use showroom_core::product::{decode_products, Priced};
///
/// let feed = json!([{
///     "id": 1,
///     "store": { "id": 2, "name": "Bialcon" },
///     "name": "Sukienka",
///     "msrp": 100.0,
///     "price": 55.0,
///     "imageUrl": "https://example.com/1.jpg"
/// }]);
/// let products = decode_products(&feed).unwrap();
/// assert_eq!(products[0].discount_percent().unwrap(), 45);
/// ```
pub fn decode_products(feed: &Value) -> serde_json::Result<Vec<Product>> {
    Vec::<Product>::deserialize(feed)
}

// =============================================================================
// Product Details (product page)
// =============================================================================

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ProductDetails {
    pub id: ObjectId,
    #[serde(rename = "store")]
    pub brand: Brand,
    pub name: String,
    #[serde(rename = "msrp")]
    pub base_price: Money,
    pub price: Money,
    pub images: Vec<ProductImage>,
    pub colors: Vec<ProductColor>,
    pub sizes: Vec<ProductSize>,
    pub fabrics: Vec<Fabric>,
    /// Shipping wait time in days.
    pub wait_time: u32,
    /// Description paragraphs.
    pub description: Vec<String>,
    pub emarsys_category: String,
    pub free_delivery: bool,
}

impl ProductDetails {
    /// Images for a color, followed by images not tied to any color.
    pub fn images_for_color(&self, color: ObjectId) -> Vec<&ProductImage> {
        let tagged = self.images.iter().filter(|image| image.color == Some(color));
        let untagged = self.images.iter().filter(|image| image.color.is_none());
        tagged.chain(untagged).collect()
    }

    /// Sizes available in a color.
    pub fn sizes_for_color(&self, color: ObjectId) -> Vec<&ProductSize> {
        self.sizes
            .iter()
            .filter(|size| size.colors.contains(&color))
            .collect()
    }

    pub fn total_fabric_percentage(&self) -> u32 {
        self.fabrics.iter().map(|fabric| fabric.percentage).sum()
    }
}

impl Priced for ProductDetails {
    fn base_price(&self) -> Money {
        self.base_price
    }

    fn price(&self) -> Money {
        self.price
    }
}

// =============================================================================
// Nested Types
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Brand {
    pub id: ObjectId,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductImage {
    pub url: String,
    #[serde(default)]
    pub color: Option<ObjectId>,
}

/// How a color swatch is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum ColorKind {
    /// `value` is a hex color.
    #[serde(rename = "RGB")]
    Rgb,
    /// `value` is a swatch image URL.
    Image,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductColor {
    pub id: ObjectId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ColorKind,
    pub value: String,
    /// Sizes available in this color.
    pub sizes: Vec<ObjectId>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductSize {
    pub id: ObjectId,
    pub name: String,
    /// Colors this size comes in.
    pub colors: Vec<ObjectId>,
    /// Measurement name → value, e.g. `"waist" → "72 cm"`.
    pub measurements: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fabric {
    pub name: String,
    pub percentage: u32,
}

// =============================================================================
// Unit Tests
// =============================================================================
