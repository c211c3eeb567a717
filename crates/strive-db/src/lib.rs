//! Strive-DB: Database connection, schema loading, and query operations
//!
//! This crate provides the database side of strive-images using SQLite
//! with rusqlite. A run uses a single connection, strictly sequentially.
//!
//! # Modules
//!
//! - `connection` - Opening the database
//! - `schema` - Best-effort schema application
//! - `models` - Rust models matching database schema
//! - `queries` - Database query operations
//!
//! # Example
//!
//! ```
//! use strive_db::connection::open_in_memory;
//! use strive_db::schema::{apply_schema, BUNDLED_SCHEMA};
//! use strive_db::queries::categories;
//!
//! let conn = open_in_memory().unwrap();
//! let report = apply_schema(&conn, BUNDLED_SCHEMA);
//! assert_eq!(report.failed, 0);
//!
//! let category = categories::get_category_by_name(&conn, "Outdoor").unwrap();
//! assert!(category.is_none());
//! ```

pub mod connection;
pub mod models;
pub mod queries;
pub mod schema;
