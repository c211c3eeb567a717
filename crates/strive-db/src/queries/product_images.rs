//! Product image database queries.
//!
//! Gallery images are keyed by product and display order. Two write paths
//! exist: a plain insert, which may leave several rows at the same
//! (product, order) pair, and a replace, which deletes the pair first.

use chrono::{DateTime, Utc};
use rusqlite::Connection;
use strive_common::{Error, ProductId, ProductImageId, Result};

use crate::models::{NewProductImage, ProductImage};

/// Parse a product image from a database row.
///
/// Expects columns in order: id, product_id, image_data, image_type, display_order, created_at.
fn parse_product_image_row(row: &rusqlite::Row) -> rusqlite::Result<ProductImage> {
    let created_at: String = row.get(5)?;
    let created_at = DateTime::parse_from_rfc3339(&created_at)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(5, rusqlite::types::Type::Text, Box::new(e))
        })?;

    Ok(ProductImage {
        id: ProductImageId::from(row.get::<_, i64>(0)?),
        product_id: ProductId::from(row.get::<_, i64>(1)?),
        image_data: row.get(2)?,
        image_type: row.get(3)?,
        display_order: row.get(4)?,
        created_at,
    })
}

fn check_display_order(display_order: u32) -> Result<()> {
    if display_order == 0 {
        return Err(Error::invalid_input("display order must be at least 1"));
    }
    Ok(())
}

/// Insert a new product image row.
///
/// Existing rows at the same (product, order) pair are kept.
///
/// # Returns
///
/// * `Ok(ProductImageId)` - The ID of the inserted row
/// * `Err(Error)` - If the display order is 0 or a database error occurs
pub fn insert_product_image(conn: &Connection, image: &NewProductImage) -> Result<ProductImageId> {
    check_display_order(image.display_order)?;

    conn.execute(
        "INSERT INTO product_images (product_id, image_data, image_type, display_order, created_at)
         VALUES (:product_id, :image_data, :image_type, :display_order, :created_at)",
        rusqlite::named_params! {
            ":product_id": image.product_id.get(),
            ":image_data": image.image_data,
            ":image_type": image.mime.as_str(),
            ":display_order": image.display_order,
            ":created_at": Utc::now().to_rfc3339(),
        },
    )
    .map_err(|e| Error::database(e.to_string()))?;

    Ok(ProductImageId::from(conn.last_insert_rowid()))
}

/// Delete every image of `product_id` at `display_order`.
///
/// # Returns
///
/// * `Ok(n)` - Number of rows deleted
/// * `Err(Error)` - If a database error occurs
pub fn delete_product_images_at(
    conn: &Connection,
    product_id: ProductId,
    display_order: u32,
) -> Result<usize> {
    conn.execute(
        "DELETE FROM product_images
         WHERE product_id = :product_id AND display_order = :display_order",
        rusqlite::named_params! {
            ":product_id": product_id.get(),
            ":display_order": display_order,
        },
    )
    .map_err(|e| Error::database(e.to_string()))
}

/// Replace the image at the row's (product, order) pair.
///
/// Runs a delete followed by an insert as two separate statements; callers
/// needing atomicity must wrap the call in a transaction.
pub fn replace_product_image(conn: &Connection, image: &NewProductImage) -> Result<ProductImageId> {
    check_display_order(image.display_order)?;

    let removed = delete_product_images_at(conn, image.product_id, image.display_order)?;
    if removed > 0 {
        tracing::debug!(
            "Removed {} existing image(s) for product {} at order {}",
            removed,
            image.product_id,
            image.display_order
        );
    }

    insert_product_image(conn, image)
}

/// Get all images of a product, ordered by display order then insertion.
pub fn get_images_for_product(conn: &Connection, product_id: ProductId) -> Result<Vec<ProductImage>> {
    let mut stmt = conn
        .prepare(
            "SELECT id, product_id, image_data, image_type, display_order, created_at
             FROM product_images
             WHERE product_id = :product_id
             ORDER BY display_order, id",
        )
        .map_err(|e| Error::database(e.to_string()))?;

    let images = stmt
        .query_map(
            rusqlite::named_params! { ":product_id": product_id.get() },
            parse_product_image_row,
        )
        .map_err(|e| Error::database(e.to_string()))?
        .collect::<std::result::Result<Vec<_>, _>>()
        .map_err(|e| Error::database(e.to_string()))?;

    Ok(images)
}

/// Count the images of a product at one display order.
pub fn count_images_at(conn: &Connection, product_id: ProductId, display_order: u32) -> Result<usize> {
    conn.query_row(
        "SELECT COUNT(*) FROM product_images
         WHERE product_id = :product_id AND display_order = :display_order",
        rusqlite::named_params! {
            ":product_id": product_id.get(),
            ":display_order": display_order,
        },
        |row| row.get::<_, i64>(0),
    )
    .map(|count| count as usize)
    .map_err(|e| Error::database(e.to_string()))
}
