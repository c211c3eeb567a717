//! Product database queries.

use rusqlite::Connection;
use strive_common::{Error, ProductId, Result};

use crate::models::Product;

fn parse_product_row(row: &rusqlite::Row) -> rusqlite::Result<Product> {
    Ok(Product {
        id: ProductId::from(row.get::<_, i64>(0)?),
        name: row.get(1)?,
    })
}

/// Get a product by ID.
///
/// # Returns
///
/// * `Ok(Some(Product))` - The product if found
/// * `Ok(None)` - If the product does not exist
/// * `Err(Error)` - If a database error occurs
pub fn get_product(conn: &Connection, id: ProductId) -> Result<Option<Product>> {
    let result = conn.query_row(
        "SELECT id, name FROM products WHERE id = :id",
        rusqlite::named_params! { ":id": id.get() },
        parse_product_row,
    );

    match result {
        Ok(product) => Ok(Some(product)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}

/// Find one product whose name contains `pattern`.
///
/// The match is a case-insensitive substring test. When several products
/// match, the one with the lowest id is returned; no further disambiguation
/// is attempted.
///
/// # Returns
///
/// * `Ok(Some(Product))` - A matching product
/// * `Ok(None)` - If no product name contains the pattern
/// * `Err(Error)` - If a database error occurs
pub fn find_product_by_name(conn: &Connection, pattern: &str) -> Result<Option<Product>> {
    let result = conn.query_row(
        "SELECT id, name FROM products
         WHERE instr(lower(name), lower(:pattern)) > 0
         ORDER BY id
         LIMIT 1",
        rusqlite::named_params! { ":pattern": pattern },
        parse_product_row,
    );

    match result {
        Ok(product) => Ok(Some(product)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}
