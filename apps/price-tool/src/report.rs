//! Filtering and rendering of price lines.

use showroom_core::validation::validate_product;
use showroom_core::{CurrencyLabels, PriceRange, Priced, Product};
use tracing::{debug, warn};

use crate::config::ToolConfig;

/// Products left after validation and filtering, in feed order.
pub fn select<'a>(products: &'a [Product], config: &ToolConfig) -> Vec<&'a Product> {
    products
        .iter()
        .filter(|product| match validate_product(product) {
            Ok(()) => true,
            Err(err) => {
                warn!(id = product.id, error = %err, "Skipping invalid product");
                false
            }
        })
        .filter(|product| !config.only_discounts || product.is_discounted())
        .filter(|product| {
            config
                .price_range
                .as_ref()
                .map_or(true, |range| range.contains(&product.price))
        })
        .collect()
}

/// `"<name> | <price> (was <base>, -<n>%)"`, or `"<name> | <price>"` when
/// the product is not discounted or the discount rounds to 0%.
pub fn render_line<L: CurrencyLabels + ?Sized>(product: &Product, labels: &L) -> String {
    let price = product.price.format_with(labels);
    if !product.is_discounted() {
        return format!("{} | {}", product.name, price);
    }

    match product.discount_percent() {
        Ok(0) => format!("{} | {}", product.name, price),
        Ok(percent) => format!(
            "{} | {} (was {}, -{}%)",
            product.name,
            price,
            product.base_price.format_with(labels),
            percent
        ),
        Err(err) => {
            debug!(id = product.id, error = %err, "No discount percent");
            format!("{} | {}", product.name, price)
        }
    }
}

/// Closing line: how many products matched and the price span.
pub fn render_summary<L: CurrencyLabels + ?Sized>(selected: &[&Product], labels: &L) -> String {
    match PriceRange::spanning(selected.iter().map(|product| product.price)) {
        Some(range) => format!("{} products, {}", selected.len(), range.label(labels)),
        None => "0 products".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use showroom_core::product::decode_products;
    use showroom_core::{Currency, DefaultLabels, LabelTable};

    fn feed() -> Vec<Product> {
        decode_products(&json!([
            {
                "id": 1, "store": { "id": 1, "name": "A" }, "name": "Bluzka",
                "msrp": 100.0, "price": 50.0, "imageUrl": "u1"
            },
            {
                "id": 2, "store": { "id": 1, "name": "A" }, "name": "Spódnica",
                "msrp": 80.0, "price": 80.0, "imageUrl": "u2"
            },
            {
                "id": 3, "store": { "id": 1, "name": "A" }, "name": "",
                "msrp": 10.0, "price": 5.0, "imageUrl": "u3"
            },
            {
                "id": 4, "store": { "id": 1, "name": "A" }, "name": "Sukienka",
                "msrp": 101.0, "price": 55.2, "imageUrl": "u4"
            }
        ]))
        .unwrap()
    }

    fn config() -> ToolConfig {
        ToolConfig::from_lookup(|_| None, None).unwrap()
    }

    fn ids(selected: &[&Product]) -> Vec<i64> {
        selected.iter().map(|product| product.id).collect()
    }

    #[test]
    fn test_select_drops_invalid() {
        let products = feed();
        assert_eq!(ids(&select(&products, &config())), vec![1, 2, 4]);
    }

    #[test]
    fn test_select_only_discounts() {
        let products = feed();
        let mut config = config();
        config.only_discounts = true;
        assert_eq!(ids(&select(&products, &config)), vec![1, 4]);
    }

    #[test]
    fn test_select_price_range() {
        let products = feed();
        let mut config = config();
        config.price_range = Some(
            PriceRange::new(
                showroom_core::Money::try_from(50.0).unwrap(),
                showroom_core::Money::try_from(60.0).unwrap(),
            )
            .unwrap(),
        );
        assert_eq!(ids(&select(&products, &config)), vec![1, 4]);
    }

    #[test]
    fn test_render_line() {
        let products = feed();
        assert_eq!(
            render_line(&products[0], &DefaultLabels),
            "Bluzka | 50.00 zł (was 100.00 zł, -50%)"
        );
        assert_eq!(render_line(&products[1], &DefaultLabels), "Spódnica | 80.00 zł");
        assert_eq!(
            render_line(&products[3], &DefaultLabels),
            "Sukienka | 55.20 zł (was 101.00 zł, -45%)"
        );

        let labels = LabelTable::new().with_label(Currency::Zl, "PLN");
        assert_eq!(render_line(&products[1], &labels), "Spódnica | 80.00 PLN");
    }

    #[test]
    fn test_render_line_zero_percent_discount() {
        let products = decode_products(&json!([{
            "id": 9, "store": { "id": 1, "name": "A" }, "name": "Szal",
            "msrp": 100.0, "price": 99.99, "imageUrl": "u9"
        }]))
        .unwrap();
        assert!(products[0].is_discounted());
        assert_eq!(render_line(&products[0], &DefaultLabels), "Szal | 99.99 zł");
    }

    #[test]
    fn test_render_summary() {
        let products = feed();
        let selected = select(&products, &config());
        assert_eq!(
            render_summary(&selected, &DefaultLabels),
            "3 products, 50.00zł - 80.00zł"
        );
        assert_eq!(render_summary(&[], &DefaultLabels), "0 products");
    }
}
