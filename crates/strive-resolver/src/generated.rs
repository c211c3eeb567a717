//! Machine-generated product image filenames.
//!
//! Exporters name files `product_<id>_<order>.<ext>`; the id and display order
//! are read straight from the name.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;
use strive_common::ProductId;

static GENERATED_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^product_(\d+)_(\d+)\.(?:jpg|jpeg|png)$").expect("valid regex")
});

/// Product id and display order parsed from a generated filename.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneratedName {
    pub product_id: ProductId,
    pub display_order: u32,
}

/// Parse `product_<id>_<order>.<jpg|jpeg|png>`.
///
/// Returns `None` for any other shape, including numbers too large to store.
///
/// # Examples
///
/// ```
/// use strive_resolver::generated::parse_generated_name;
///
/// let name = parse_generated_name("product_5_1.jpg").unwrap();
/// assert_eq!(name.product_id.get(), 5);
/// assert_eq!(name.display_order, 1);
///
/// assert!(parse_generated_name("product_5.jpg").is_none());
/// ```
pub fn parse_generated_name(filename: &str) -> Option<GeneratedName> {
    let caps = GENERATED_NAME.captures(filename)?;
    let product_id = caps[1].parse::<i64>().ok()?;
    let display_order = caps[2].parse::<u32>().ok()?;

    Some(GeneratedName {
        product_id: ProductId::from(product_id),
        display_order,
    })
}
