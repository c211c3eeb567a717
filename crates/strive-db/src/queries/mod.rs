//! Database query modules.
//!
//! Operations are grouped by table:
//! - categories: Category lookup and image binding
//! - products: Product lookup by id or name pattern
//! - product_images: Gallery image insert, replace and listing

pub mod categories;
pub mod product_images;
pub mod products;
