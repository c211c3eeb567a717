//! Rust models matching the database schema.
//!
//! Only the columns the ingestion tool reads or writes are modeled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strive_common::{ImageMime, ProductId, ProductImageId};

/// Product category. The tool only ever updates its image columns.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub image_data: Option<Vec<u8>>,
    pub image_type: Option<String>,
}

/// Sellable product. Read-only from the tool's perspective.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
}

/// One gallery image of a product.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductImage {
    pub id: ProductImageId,
    pub product_id: ProductId,
    pub image_data: Vec<u8>,
    pub image_type: String,
    pub display_order: u32,
    pub created_at: DateTime<Utc>,
}

/// Values for a product image row about to be written.
#[derive(Debug, Clone, Copy)]
pub struct NewProductImage<'a> {
    pub product_id: ProductId,
    pub image_data: &'a [u8],
    pub mime: ImageMime,
    pub display_order: u32,
}
