//! # Validation Module
//!
//! Checks run on decoded feed entries before they are shown.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Decoding (serde)                                             │
//! │  ├── Field presence and JSON types                                     │
//! │  └── Money must be numeric                                             │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── Names present and bounded                                         │
//! │  ├── Prices not negative                                               │
//! │  └── Fabric composition adds up                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust,no_run
//! use showroom_core::validation::validate_product_name;
//!
//! validate_product_name("Sukienka midi").unwrap();
//! ```

use crate::error::ValidationError;
use crate::money::Money;
use crate::product::{Fabric, Product, ProductDetails};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Longest product name the list cell can show.
pub const MAX_NAME_LENGTH: usize = 200;

// =============================================================================
// Field Validators
// =============================================================================

/// Validates a product name.
///
/// ## Rules
/// - Must not be empty (after trimming)
/// - At most [`MAX_NAME_LENGTH`] characters
///
/// ## Example
/// ```rust
/// use showroom_core::validation::validate_product_name;
///
/// assert!(validate_product_name("Bluzka").is_ok());
/// assert!(validate_product_name("   ").is_err());
/// ```
pub fn validate_product_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LENGTH,
        });
    }

    Ok(())
}

/// Validates that a price is not negative.
pub fn validate_price(field: &str, price: &Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }
    Ok(())
}

/// Validates a fabric composition.
///
/// ## Rules
/// - Each percentage within 0..=100
/// - Total at most 100 (feeds sometimes list only the main fabrics)
pub fn validate_fabrics(fabrics: &[Fabric]) -> ValidationResult<()> {
    let out_of_range = || ValidationError::OutOfRange {
        field: "fabrics".to_string(),
        min: 0,
        max: 100,
    };

    if fabrics.iter().any(|fabric| fabric.percentage > 100) {
        return Err(out_of_range());
    }

    let total: u32 = fabrics.iter().map(|fabric| fabric.percentage).sum();
    if total > 100 {
        return Err(out_of_range());
    }

    Ok(())
}

// =============================================================================
// Entity Validators
// =============================================================================

/// Validates a list entry.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_product_name(&product.name)?;
    validate_price("msrp", &product.base_price)?;
    validate_price("price", &product.price)?;
    Ok(())
}

/// Validates a product page entry.
pub fn validate_product_details(details: &ProductDetails) -> ValidationResult<()> {
    validate_product_name(&details.name)?;
    validate_price("msrp", &details.base_price)?;
    validate_price("price", &details.price)?;
    validate_fabrics(&details.fabrics)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::Brand;

    fn product(name: &str, msrp: f64, price: f64) -> Product {
        Product {
            id: 1,
            brand: Brand {
                id: 1,
                name: "Bialcon".to_string(),
            },
            name: name.to_string(),
            base_price: Money::try_from(msrp).unwrap(),
            price: Money::try_from(price).unwrap(),
            image_url: "https://example.com/1.jpg".to_string(),
        }
    }

    fn fabric(percentage: u32) -> Fabric {
        Fabric {
            name: "Bawełna".to_string(),
            percentage,
        }
    }

    #[test]
    fn test_validate_product_name() {
        assert!(validate_product_name("Bluzka").is_ok());
        assert!(validate_product_name("").is_err());
        assert!(validate_product_name(&"ż".repeat(200)).is_ok());
        assert!(matches!(
            validate_product_name(&"a".repeat(201)),
            Err(ValidationError::TooLong { max: 200, .. })
        ));
    }

    #[test]
    fn test_validate_price() {
        let zero = Money::try_from(0.0).unwrap();
        assert!(validate_price("price", &zero).is_ok());

        let negative = Money::try_from(-1.0).unwrap();
        assert_eq!(
            validate_price("price", &negative),
            Err(ValidationError::Negative {
                field: "price".to_string()
            })
        );

        // Truncates to zero, so it is not negative
        let dust = Money::try_from(-0.001).unwrap();
        assert!(validate_price("price", &dust).is_ok());
    }

    #[test]
    fn test_validate_fabrics() {
        assert!(validate_fabrics(&[]).is_ok());
        assert!(validate_fabrics(&[fabric(95), fabric(5)]).is_ok());
        assert!(validate_fabrics(&[fabric(80)]).is_ok());
        assert!(validate_fabrics(&[fabric(101)]).is_err());
        assert!(validate_fabrics(&[fabric(60), fabric(50)]).is_err());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&product("Bluzka", 100.0, 50.0)).is_ok());
        assert!(validate_product(&product(" ", 100.0, 50.0)).is_err());
        assert!(matches!(
            validate_product(&product("Bluzka", -100.0, 50.0)),
            Err(ValidationError::Negative { field }) if field == "msrp"
        ));
    }

    #[test]
    fn test_validate_product_details() {
        let mut details: ProductDetails = serde_json::from_value(serde_json::json!({
            "id": 5,
            "store": { "id": 1, "name": "Bialcon" },
            "name": "Płaszcz",
            "msrp": 499.99,
            "price": 399.0,
            "images": [],
            "colors": [],
            "sizes": [],
            "fabrics": [{ "name": "Wełna", "percentage": 70 }],
            "wait_time": 7,
            "description": [],
            "emarsys_category": "Płaszcze",
            "free_delivery": false
        }))
        .unwrap();
        assert!(validate_product_details(&details).is_ok());

        details.fabrics.push(fabric(40));
        assert!(matches!(
            validate_product_details(&details),
            Err(ValidationError::OutOfRange { .. })
        ));
    }
}
