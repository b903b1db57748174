//! # Money Module
//!
//! Provides the `Money` type for prices shown in the storefront.
//!
//! ## Precision Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  STORED vs. EXPOSED                                                     │
//! │                                                                         │
//! │  Feed value: 10.53912302193123                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  value()  = 10.53912302193123   exact decimal, full precision           │
//! │  amount() = 10.53               truncated toward zero at 2 places       │
//! │                                                                         │
//! │  10.539 → 10.53   (never rounds up, even when 3rd digit ≥ 5)           │
//! │  10.532 → 10.53                                                         │
//! │                                                                         │
//! │  Display, ordering, scalar addition and discounts use amount().        │
//! │  Equality and Money + Money use value().                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use showroom_core::money::Money;
//!
//! let price = Money::try_from(10.53912302193123).unwrap();
//! assert_eq!(price.to_string(), "10.53 zł");
//!
//! let original = Money::try_from(101.0).unwrap();
//! let discounted = Money::try_from(55.0).unwrap();
//! assert_eq!(discounted.discount_percent_from(&original).unwrap(), 46);
//! ```

use rust_decimal::prelude::*;
use serde::de::{self, Deserializer, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::cmp::Ordering;
use std::fmt;
use std::ops::Add;

use crate::currency::{Currency, CurrencyLabels, DefaultLabels};
use crate::error::{CoreError, CoreResult};

/// Fractional digits kept by [`Money::amount`].
pub const AMOUNT_SCALE: u32 = 2;

// =============================================================================
// Money Type
// =============================================================================

/// An exact decimal price in a single currency.
///
/// ## Design Decisions
/// - **Decimal storage**: binary floats cannot truncate to 2 places exactly
///   (`10.53_f64` is really `10.529999…`, which would truncate to 10.52)
/// - **Immutable + Copy**: every operation returns a new value
/// - **Currency tag**: values in different currencies never compare or add
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  Feed "msrp" ──► Product.base_price ──┐                                 │
/// │                                       ├──► discount_percent() ──► "-46%"│
/// │  Feed "price" ──► Product.price ──────┘                                 │
/// │                        │                                                │
/// │                        └──► PriceRange filter ──► "10.00zł - 49.99zł"  │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Money {
    value: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a złoty value from an exact decimal.
    #[inline]
    pub const fn new(value: Decimal) -> Self {
        Self::with_currency(value, Currency::Zl)
    }

    /// Creates a value from an exact decimal in the given currency.
    #[inline]
    pub const fn with_currency(value: Decimal, currency: Currency) -> Self {
        Money { value, currency }
    }

    /// Creates a value from a float in the given currency.
    ///
    /// The float is converted to the shortest decimal that round-trips to
    /// it, so `10.53` is stored as exactly `10.53`.
    ///
    /// ## Errors
    /// [`CoreError::Decode`] for NaN, infinities and magnitudes outside the
    /// decimal range.
    pub fn from_f64_in(value: f64, currency: Currency) -> CoreResult<Self> {
        let decode_error = || CoreError::Decode {
            value: value.to_string(),
        };
        if !value.is_finite() {
            return Err(decode_error());
        }

        // f64 Display is the shortest round-trip form and never uses exponents
        value
            .to_string()
            .parse::<Decimal>()
            .map(|value| Money::with_currency(value, currency))
            .map_err(|_| decode_error())
    }

    /// Zero in the given currency.
    #[inline]
    pub const fn zero_in(currency: Currency) -> Self {
        Money::with_currency(Decimal::ZERO, currency)
    }

    /// Decodes a value produced by a JSON deserializer.
    ///
    /// Integers are taken exactly, floats go through [`Money::from_f64_in`].
    ///
    /// ## Example
    /// ```rust
    /// use serde_json::json;
    /// use showroom_core::money::Money;
    ///
    /// assert_eq!(Money::from_json(&json!(49.99)).unwrap().to_string(), "49.99 zł");
    /// assert!(Money::from_json(&json!("49.99")).is_err());
    /// ```
    pub fn from_json(value: &Value) -> CoreResult<Self> {
        let Value::Number(number) = value else {
            return Err(CoreError::Decode {
                value: value.to_string(),
            });
        };

        if let Some(int) = number.as_i64() {
            return Ok(Money::new(Decimal::from(int)));
        }
        if let Some(uint) = number.as_u64() {
            return Ok(Money::new(Decimal::from(uint)));
        }
        match number.as_f64() {
            Some(float) => Money::from_f64_in(float, Currency::Zl),
            None => Err(CoreError::Decode {
                value: number.to_string(),
            }),
        }
    }

    /// The full-precision stored value.
    #[inline]
    pub const fn value(&self) -> Decimal {
        self.value
    }

    /// The value truncated toward zero at [`AMOUNT_SCALE`] places.
    pub fn amount(&self) -> Decimal {
        let truncated = self
            .value
            .round_dp_with_strategy(AMOUNT_SCALE, RoundingStrategy::ToZero);
        // -0.001 truncates to a signed zero
        if truncated.is_zero() {
            Decimal::ZERO
        } else {
            truncated
        }
    }

    #[inline]
    pub const fn currency(&self) -> Currency {
        self.currency
    }

    pub fn is_zero(&self) -> bool {
        self.amount().is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.amount().is_sign_negative()
    }

    /// The truncated amount with exactly two decimals, no label.
    pub fn amount_string(&self) -> String {
        format!("{:.2}", self.amount())
    }

    /// `"<amount> <label>"` using the built-in currency labels.
    pub fn string_value(&self) -> String {
        self.format_with(&DefaultLabels)
    }

    /// `"<amount> <label>"` with the label resolved through `labels`.
    pub fn format_with<L: CurrencyLabels + ?Sized>(&self, labels: &L) -> String {
        format!("{} {}", self.amount_string(), labels.label(self.currency))
    }

    /// Adds two values of the same currency at full precision.
    ///
    /// ## Errors
    /// - [`CoreError::CurrencyMismatch`] when the currencies differ
    /// - [`CoreError::Overflow`] when the sum leaves the decimal range
    pub fn try_add(&self, other: &Money) -> CoreResult<Money> {
        self.ensure_same_currency(other)?;
        self.value
            .checked_add(other.value)
            .map(|value| Money::with_currency(value, self.currency))
            .ok_or(CoreError::Overflow)
    }

    /// Adds a plain decimal to the truncated amount, keeping the currency.
    ///
    /// ## Errors
    /// [`CoreError::Overflow`] when the sum leaves the decimal range
    pub fn try_add_scalar(&self, scalar: Decimal) -> CoreResult<Money> {
        self.amount()
            .checked_add(scalar)
            .map(|value| Money::with_currency(value, self.currency))
            .ok_or(CoreError::Overflow)
    }

    /// Whole-percent reduction from `original` to `self`.
    ///
    /// Computed on the truncated amounts as
    /// `(original - discounted) * 100 / original`, rounded half away from
    /// zero. A price above the original yields a negative percent.
    ///
    /// ## Example
    /// ```rust
    /// use showroom_core::money::Money;
    ///
    /// let original = Money::try_from(101.0).unwrap();
    /// let discounted = Money::try_from(55.2).unwrap();
    /// // 45.34% → 45
    /// assert_eq!(discounted.discount_percent_from(&original).unwrap(), 45);
    /// ```
    ///
    /// ## Errors
    /// - [`CoreError::CurrencyMismatch`] when the currencies differ
    /// - [`CoreError::ZeroOriginalPrice`] when `original` truncates to zero
    pub fn discount_percent_from(&self, original: &Money) -> CoreResult<i64> {
        self.ensure_same_currency(original)?;

        let original = original.amount();
        if original.is_zero() {
            return Err(CoreError::ZeroOriginalPrice);
        }

        let percent = original
            .checked_sub(self.amount())
            .and_then(|saved| saved.checked_mul(Decimal::ONE_HUNDRED))
            .and_then(|scaled| scaled.checked_div(original))
            .ok_or(CoreError::Overflow)?;

        percent
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .ok_or(CoreError::Overflow)
    }

    fn ensure_same_currency(&self, other: &Money) -> CoreResult<()> {
        if self.currency == other.currency {
            Ok(())
        } else {
            Err(CoreError::CurrencyMismatch {
                left: self.currency,
                right: other.currency,
            })
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<Decimal> for Money {
    fn from(value: Decimal) -> Self {
        Money::new(value)
    }
}

impl TryFrom<f64> for Money {
    type Error = CoreError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Money::from_f64_in(value, Currency::Zl)
    }
}

/// Zero złoty.
impl Default for Money {
    fn default() -> Self {
        Money::zero_in(Currency::Zl)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Formats as `"10.53 zł"` with the built-in labels.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.2} {}",
            self.amount(),
            self.currency.default_label()
        )
    }
}

/// Ordering on truncated amounts within one currency.
///
/// Values in different currencies are unordered. Values whose amounts
/// truncate to the same cent but differ in full precision are unordered
/// too, which keeps `partial_cmp` consistent with `==`.
impl PartialOrd for Money {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.currency != other.currency {
            return None;
        }
        match self.amount().cmp(&other.amount()) {
            Ordering::Equal if self.value != other.value => None,
            ordering => Some(ordering),
        }
    }
}

/// `Money + Money` is fallible: currencies must match.
impl Add for Money {
    type Output = CoreResult<Money>;

    #[inline]
    fn add(self, other: Money) -> CoreResult<Money> {
        self.try_add(&other)
    }
}

/// `Money + scalar` adds to the truncated amount.
impl Add<Decimal> for Money {
    type Output = CoreResult<Money>;

    #[inline]
    fn add(self, scalar: Decimal) -> CoreResult<Money> {
        self.try_add_scalar(scalar)
    }
}

/// `scalar + Money` adds to the truncated amount.
impl Add<Money> for Decimal {
    type Output = CoreResult<Money>;

    #[inline]
    fn add(self, money: Money) -> CoreResult<Money> {
        money.try_add_scalar(self)
    }
}

// =============================================================================
// Decoding
// =============================================================================

struct MoneyVisitor;

impl<'de> Visitor<'de> for MoneyVisitor {
    type Value = Money;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a numeric money amount")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Money, E> {
        Ok(Money::new(Decimal::from(v)))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Money, E> {
        Ok(Money::new(Decimal::from(v)))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Money, E> {
        Money::try_from(v).map_err(E::custom)
    }
}

/// Feed prices are bare JSON numbers in złoty.
impl<'de> Deserialize<'de> for Money {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(MoneyVisitor)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
