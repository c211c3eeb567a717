//! Strive-Common: Shared types and utilities.
//!
//! This crate provides common functionality used across strive-images:
//!
//! - **Typed IDs**: Integer wrappers for product and product image rows
//! - **MIME Classification**: Content type detection by file extension
//! - **Path Utilities**: Functions to detect ingestible image files
//! - **Error Handling**: Common error types and result aliases
//!
//! # Examples
//!
//! ```
//! use strive_common::{ImageMime, ProductId, Error, Result};
//! use strive_common::paths::is_image_file;
//! use std::path::Path;
//!
//! let product_id = ProductId::from(5);
//! assert_eq!(product_id.get(), 5);
//!
//! assert_eq!(ImageMime::from_path(Path::new("1.JPG")), ImageMime::Jpeg);
//! assert!(is_image_file(Path::new("product_5_1.png")));
//!
//! fn example() -> Result<()> {
//!     Err(Error::invalid_input("display order must be at least 1"))
//! }
//! ```

pub mod error;
pub mod ids;
pub mod mime;
pub mod paths;

pub use error::{Error, Result};
pub use ids::*;
pub use mime::ImageMime;
