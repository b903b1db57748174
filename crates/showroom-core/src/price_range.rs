//! # Price Range Filter
//!
//! The inclusive price bounds behind the product-list price filter row.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Filter row "Cena"                                                      │
//! │     10.00zł - 49.99zł      ◄── PriceRange::label()                     │
//! │                                                                         │
//! │  product.price ──► contains() ──► shown / hidden                       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::currency::{Currency, CurrencyLabels};
use crate::error::{CoreError, CoreResult};
use crate::money::Money;

/// Inclusive `[min, max]` bounds in one currency, compared on truncated
/// amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    min: Money,
    max: Money,
}

impl PriceRange {
    /// ## Errors
    /// - [`CoreError::CurrencyMismatch`] when the bounds differ in currency
    /// - [`CoreError::InvalidPriceRange`] when `min` is above `max`
    pub fn new(min: Money, max: Money) -> CoreResult<Self> {
        if min.currency() != max.currency() {
            return Err(CoreError::CurrencyMismatch {
                left: min.currency(),
                right: max.currency(),
            });
        }
        if min.amount() > max.amount() {
            return Err(CoreError::InvalidPriceRange {
                min: min.amount_string(),
                max: max.amount_string(),
            });
        }
        Ok(PriceRange { min, max })
    }

    /// The smallest range covering every price, or `None` for no prices.
    ///
    /// Prices in a currency other than the first one's are skipped.
    ///
    /// ## Example
    /// ```rust
    /// use showroom_core::money::Money;
    /// use showroom_core::price_range::PriceRange;
    ///
    /// let prices = [49.99, 10.0, 25.5].map(|p| Money::try_from(p).unwrap());
    /// let range = PriceRange::spanning(prices).unwrap();
    /// assert_eq!(range.to_string(), "10.00zł - 49.99zł");
    /// ```
    pub fn spanning<I>(prices: I) -> Option<Self>
    where
        I: IntoIterator<Item = Money>,
    {
        let mut prices = prices.into_iter();
        let first = prices.next()?;
        let currency = first.currency();

        let (min, max) = prices
            .filter(|price| price.currency() == currency)
            .fold((first, first), |(min, max), price| {
                let min = if price.amount() < min.amount() { price } else { min };
                let max = if price.amount() > max.amount() { price } else { max };
                (min, max)
            });
        Some(PriceRange { min, max })
    }

    pub fn min(&self) -> Money {
        self.min
    }

    pub fn max(&self) -> Money {
        self.max
    }

    pub fn currency(&self) -> Currency {
        self.min.currency()
    }

    /// Whether `price` falls within the bounds, edges included.
    pub fn contains(&self, price: &Money) -> bool {
        price.currency() == self.currency()
            && price.amount() >= self.min.amount()
            && price.amount() <= self.max.amount()
    }

    /// `"<min><label> - <max><label>"`, e.g. `"10.00zł - 49.99zł"`.
    pub fn label<L: CurrencyLabels + ?Sized>(&self, labels: &L) -> String {
        let label = labels.label(self.currency());
        format!(
            "{}{label} - {}{label}",
            self.min.amount_string(),
            self.max.amount_string()
        )
    }
}

impl std::fmt::Display for PriceRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.label(&crate::currency::DefaultLabels))
    }
}
