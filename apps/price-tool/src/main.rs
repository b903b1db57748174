//! # Showroom Price Tool
//!
//! Prints storefront price lines for a product feed.
//!
//! ## Usage
//! ```text
//! price-tool feed.json
//! SHOWROOM_ONLY_DISCOUNTS=true price-tool < feed.json
//! SHOWROOM_PRICE_MIN=10 SHOWROOM_PRICE_MAX=50 price-tool feed.json
//! ```
//!
//! ## Output
//! ```text
//! Bluzka | 50.00 zł (was 100.00 zł, -50%)
//! Spódnica | 80.00 zł
//! 2 products, 50.00zł - 80.00zł
//! ```

mod config;
mod report;

use std::fs;
use std::io::{self, Read};

use anyhow::Context;
use serde_json::Value;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use showroom_core::product::decode_products;

use crate::config::ToolConfig;

fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = ToolConfig::load(std::env::args().nth(1))?;
    info!(
        feed = ?config.feed_path,
        only_discounts = config.only_discounts,
        price_range = ?config.price_range.map(|range| range.to_string()),
        "Configuration loaded"
    );

    let raw = read_feed(&config)?;
    let feed: Value = serde_json::from_str(&raw).context("Feed is not valid JSON")?;
    let products = decode_products(&feed).context("Feed does not match the product schema")?;
    debug!(count = products.len(), "Decoded products");

    let selected = report::select(&products, &config);
    info!(selected = selected.len(), total = products.len(), "Filter applied");

    for product in &selected {
        println!("{}", report::render_line(product, &config.labels));
    }
    println!("{}", report::render_summary(&selected, &config.labels));

    Ok(())
}

/// Logs go to stderr so stdout stays clean for price lines.
///
/// ## Environment Variables
/// - `RUST_LOG`: Set log level (e.g., `debug`, `showroom_price_tool=trace`)
/// - Default: WARN, INFO for the tool itself
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("warn,showroom_price_tool=info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_feed(config: &ToolConfig) -> anyhow::Result<String> {
    match &config.feed_path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read feed {}", path.display())),
        None => {
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("Failed to read feed from stdin")?;
            Ok(raw)
        }
    }
}
