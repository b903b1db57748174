//! # showroom-core: Pure Model Logic for the Showroom Storefront
//!
//! Prices, product feed decoding and list filters, with zero I/O
//! dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Showroom Pricing Architecture                      │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 apps/price-tool (binary)                        │   │
//! │  │    env config ──► read feed ──► filter ──► print price lines    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ showroom-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────┐  ┌──────────┐  ┌─────────────┐  ┌────────────┐  │   │
//! │  │   │  money   │  │ product  │  │ price_range │  │ validation │  │   │
//! │  │   │  Money   │  │ Product  │  │ PriceRange  │  │   rules    │  │   │
//! │  │   │ Currency │  │ Details  │  │             │  │            │  │   │
//! │  │   └──────────┘  └──────────┘  └─────────────┘  └────────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING SETUP • PURE FUNCTIONS                    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Exact decimal `Money` with truncating display and discounts
//! - [`currency`] - `Currency` and display label lookup
//! - [`product`] - Feed decoding structs
//! - [`price_range`] - Price filter bounds
//! - [`validation`] - Feed entry validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use showroom_core::Money;
//!
//! let original = Money::try_from(100.0).unwrap();
//! let price = Money::try_from(55.0).unwrap();
//!
//! assert_eq!(price.to_string(), "55.00 zł");
//! assert_eq!(price.discount_percent_from(&original).unwrap(), 45);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod currency;
pub mod error;
pub mod money;
pub mod price_range;
pub mod product;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use currency::{Currency, CurrencyLabels, DefaultLabels, LabelTable};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use price_range::PriceRange;
pub use product::{Priced, Product, ProductDetails};
