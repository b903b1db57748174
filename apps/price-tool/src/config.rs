//! Price tool configuration module.
//!
//! Configuration is loaded from environment variables with fallback to defaults.
//!
//! | Variable                      | Default | Meaning                         |
//! |-------------------------------|---------|---------------------------------|
//! | `SHOWROOM_FEED_PATH`          | -       | Feed file (else argv[1], stdin) |
//! | `SHOWROOM_CURRENCY_LABEL_ZL`  | `zł`    | Złoty display label             |
//! | `SHOWROOM_ONLY_DISCOUNTS`     | `false` | Show discounted products only   |
//! | `SHOWROOM_PRICE_MIN`          | -       | Lower price bound               |
//! | `SHOWROOM_PRICE_MAX`          | -       | Upper price bound               |
//! | `SHOWROOM_PRICE_CURRENCY`     | `PLN`   | Currency of the price bounds    |

use rust_decimal::Decimal;
use std::env;
use std::path::PathBuf;

use showroom_core::{Currency, LabelTable, Money, PriceRange};

/// Price tool configuration.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Feed file; `None` reads stdin
    pub feed_path: Option<PathBuf>,

    /// Currency label overrides
    pub labels: LabelTable,

    /// Drop products that are not discounted
    pub only_discounts: bool,

    /// Price filter bounds
    pub price_range: Option<PriceRange>,
}

impl ToolConfig {
    /// Load configuration from environment variables.
    ///
    /// `fallback_path` (the first CLI argument) is used when
    /// `SHOWROOM_FEED_PATH` is not set.
    pub fn load(fallback_path: Option<String>) -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok(), fallback_path)
    }

    /// Builds the configuration from any variable source.
    pub fn from_lookup<F>(lookup: F, fallback_path: Option<String>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let feed_path = lookup("SHOWROOM_FEED_PATH")
            .or(fallback_path)
            .filter(|path| !path.trim().is_empty())
            .map(PathBuf::from);

        let labels = match lookup("SHOWROOM_CURRENCY_LABEL_ZL") {
            Some(label) => LabelTable::new().with_label(Currency::Zl, label),
            None => LabelTable::new(),
        };

        let only_discounts = match lookup("SHOWROOM_ONLY_DISCOUNTS") {
            Some(value) => parse_bool(&value)
                .ok_or_else(|| ConfigError::InvalidValue("SHOWROOM_ONLY_DISCOUNTS".to_string()))?,
            None => false,
        };

        let currency = match lookup("SHOWROOM_PRICE_CURRENCY") {
            Some(code) => code.parse::<Currency>()?,
            None => Currency::default(),
        };
        let min = parse_price(&lookup, "SHOWROOM_PRICE_MIN", currency)?;
        let max = parse_price(&lookup, "SHOWROOM_PRICE_MAX", currency)?;

        // Validate price bounds
        let price_range = match (min, max) {
            (Some(min), Some(max)) => Some(PriceRange::new(min, max)?),
            (None, None) => None,
            (Some(_), None) => {
                return Err(ConfigError::MissingRequired("SHOWROOM_PRICE_MAX".to_string()))
            }
            (None, Some(_)) => {
                return Err(ConfigError::MissingRequired("SHOWROOM_PRICE_MIN".to_string()))
            }
        };

        Ok(ToolConfig {
            feed_path,
            labels,
            only_discounts,
            price_range,
        })
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_price<F>(
    lookup: &F,
    name: &str,
    currency: Currency,
) -> Result<Option<Money>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name)
        .map(|raw| {
            raw.trim()
                .parse::<Decimal>()
                .map(|value| Money::with_currency(value, currency))
                .map_err(|_| ConfigError::InvalidValue(name.to_string()))
        })
        .transpose()
}

/// Configuration error types.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),

    #[error("Missing required configuration: {0}")]
    MissingRequired(String),

    #[error("Invalid price filter: {0}")]
    PriceRange(#[from] showroom_core::CoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)], fallback: Option<&str>) -> Result<ToolConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ToolConfig::from_lookup(|name| vars.get(name).cloned(), fallback.map(String::from))
    }

    #[test]
    fn test_defaults() {
        let config = load(&[], None).unwrap();
        assert_eq!(config.feed_path, None);
        assert!(!config.only_discounts);
        assert!(config.price_range.is_none());
    }

    #[test]
    fn test_feed_path_precedence() {
        let config = load(&[], Some("feed.json")).unwrap();
        assert_eq!(config.feed_path, Some(PathBuf::from("feed.json")));

        let config = load(&[("SHOWROOM_FEED_PATH", "env.json")], Some("feed.json")).unwrap();
        assert_eq!(config.feed_path, Some(PathBuf::from("env.json")));
    }

    #[test]
    fn test_only_discounts() {
        let config = load(&[("SHOWROOM_ONLY_DISCOUNTS", "yes")], None).unwrap();
        assert!(config.only_discounts);

        let err = load(&[("SHOWROOM_ONLY_DISCOUNTS", "maybe")], None).unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for SHOWROOM_ONLY_DISCOUNTS");
    }

    #[test]
    fn test_price_range() {
        let config = load(
            &[("SHOWROOM_PRICE_MIN", "10"), ("SHOWROOM_PRICE_MAX", "49.99")],
            None,
        )
        .unwrap();
        let range = config.price_range.unwrap();
        assert_eq!(range.to_string(), "10.00zł - 49.99zł");
    }

    #[test]
    fn test_price_range_errors() {
        assert!(matches!(
            load(&[("SHOWROOM_PRICE_MIN", "10")], None),
            Err(ConfigError::MissingRequired(name)) if name == "SHOWROOM_PRICE_MAX"
        ));
        assert!(matches!(
            load(&[("SHOWROOM_PRICE_MIN", "ten"), ("SHOWROOM_PRICE_MAX", "20")], None),
            Err(ConfigError::InvalidValue(name)) if name == "SHOWROOM_PRICE_MIN"
        ));
        assert!(matches!(
            load(&[("SHOWROOM_PRICE_MIN", "50"), ("SHOWROOM_PRICE_MAX", "20")], None),
            Err(ConfigError::PriceRange(_))
        ));
    }

    #[test]
    fn test_price_currency() {
        let config = load(
            &[
                ("SHOWROOM_PRICE_MIN", "10"),
                ("SHOWROOM_PRICE_MAX", "20"),
                ("SHOWROOM_PRICE_CURRENCY", "zł"),
            ],
            None,
        )
        .unwrap();
        assert_eq!(config.price_range.unwrap().currency(), Currency::Zl);

        let err = load(&[("SHOWROOM_PRICE_CURRENCY", "USD")], None).unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::PriceRange(showroom_core::CoreError::UnknownCurrency(code)) if code == "USD"
        ));
        assert_eq!(err.to_string(), "Invalid price filter: Unknown currency: USD");
    }

    #[test]
    fn test_label_override() {
        use showroom_core::CurrencyLabels;

        let config = load(&[("SHOWROOM_CURRENCY_LABEL_ZL", "PLN")], None).unwrap();
        assert_eq!(config.labels.label(Currency::Zl), "PLN");
    }
}
