//! # Currency Module
//!
//! The currencies the storefront prices in, and the label lookup used to
//! render them.
//!
//! ## Label Resolution
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Money::format_with(&labels)                                            │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  labels.label(Currency::Zl) ──► "zł"   (DefaultLabels)                 │
//! │                             ──► "PLN"  (LabelTable from config)        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Labels are resolved through [`CurrencyLabels`], never stored on
//! [`Currency`].

use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

// =============================================================================
// Currency
// =============================================================================

/// A currency a price can be expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    /// Polish złoty.
    #[default]
    #[serde(rename = "PLN", alias = "ZL")]
    Zl,
}

impl Currency {
    /// ISO 4217 code.
    pub const fn code(&self) -> &'static str {
        match self {
            Currency::Zl => "PLN",
        }
    }

    /// Label used when no lookup is supplied.
    pub const fn default_label(&self) -> &'static str {
        match self {
            Currency::Zl => "zł",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Currency {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let token = s.trim();
        match token.to_lowercase().as_str() {
            "pln" | "zl" | "zł" => Ok(Currency::Zl),
            _ => Err(CoreError::UnknownCurrency(token.to_string())),
        }
    }
}

// =============================================================================
// Label Lookup
// =============================================================================

/// Resolves the display label of a currency.
pub trait CurrencyLabels {
    fn label(&self, currency: Currency) -> Cow<'_, str>;
}

/// Built-in labels (`"zł"` for [`Currency::Zl`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultLabels;

impl CurrencyLabels for DefaultLabels {
    fn label(&self, currency: Currency) -> Cow<'_, str> {
        Cow::Borrowed(currency.default_label())
    }
}

/// Label overrides, falling back to the built-in label per currency.
///
/// ## Example
/// ```rust
/// use showroom_core::currency::{Currency, CurrencyLabels, LabelTable};
///
/// let labels = LabelTable::new().with_label(Currency::Zl, "PLN");
/// assert_eq!(labels.label(Currency::Zl), "PLN");
/// ```
#[derive(Debug, Clone, Default)]
pub struct LabelTable {
    labels: HashMap<Currency, String>,
}

impl LabelTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(mut self, currency: Currency, label: impl Into<String>) -> Self {
        self.labels.insert(currency, label.into());
        self
    }
}

impl CurrencyLabels for LabelTable {
    fn label(&self, currency: Currency) -> Cow<'_, str> {
        match self.labels.get(&currency) {
            Some(label) => Cow::Borrowed(label.as_str()),
            None => Cow::Borrowed(currency.default_label()),
        }
    }
}
