//! Category database queries.
//!
//! Categories are matched by their unique name. The tool never creates or
//! deletes categories; it only sets their image columns.

use rusqlite::Connection;
use strive_common::{Error, ImageMime, Result};

use crate::models::Category;

fn parse_category_row(row: &rusqlite::Row) -> rusqlite::Result<Category> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        image_data: row.get(2)?,
        image_type: row.get(3)?,
    })
}

/// Set the image payload and MIME type of the category named `name`.
///
/// # Returns
///
/// * `Ok(n)` - Number of rows updated; `0` when no category has that name
/// * `Err(Error)` - If a database error occurs
pub fn update_category_image(
    conn: &Connection,
    name: &str,
    image_data: &[u8],
    mime: ImageMime,
) -> Result<usize> {
    conn.execute(
        "UPDATE categories
         SET image_data = :image_data,
             image_type = :image_type
         WHERE name = :name",
        rusqlite::named_params! {
            ":image_data": image_data,
            ":image_type": mime.as_str(),
            ":name": name,
        },
    )
    .map_err(|e| Error::database(e.to_string()))
}

/// Get a category by its exact name.
///
/// # Returns
///
/// * `Ok(Some(Category))` - The category if found
/// * `Ok(None)` - If no category has that name
/// * `Err(Error)` - If a database error occurs
pub fn get_category_by_name(conn: &Connection, name: &str) -> Result<Option<Category>> {
    let result = conn.query_row(
        "SELECT id, name, image_data, image_type FROM categories WHERE name = :name",
        rusqlite::named_params! { ":name": name },
        parse_category_row,
    );

    match result {
        Ok(category) => Ok(Some(category)),
        Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
        Err(e) => Err(Error::database(e.to_string())),
    }
}
