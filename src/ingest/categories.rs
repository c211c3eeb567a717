//! Category image binding.

use rusqlite::Connection;
use std::path::Path;
use strive_common::mime;
use strive_db::queries::categories;

use super::report::CategoryReport;
use crate::config::CategoryImage;

/// Bind each mapped file's bytes to the category of the mapped name.
///
/// Every entry is independent: a missing file, an unknown category or a
/// failed write is logged and counted, and the next entry still runs.
pub fn bind_category_images(
    conn: &Connection,
    image_dir: &Path,
    mapping: &[CategoryImage],
) -> CategoryReport {
    let mut report = CategoryReport::default();

    for entry in mapping {
        let image_path = image_dir.join(&entry.file);

        if !image_path.is_file() {
            tracing::warn!(
                "Image not found: {} - Skipping category: {}",
                image_path.display(),
                entry.name
            );
            report.missing_files += 1;
            continue;
        }

        let image_data = match std::fs::read(&image_path) {
            Ok(data) => data,
            Err(e) => {
                tracing::error!("Failed to update {}: {}", entry.name, e);
                report.failed += 1;
                continue;
            }
        };

        let image_mime = mime::classify(&image_path);

        match categories::update_category_image(conn, &entry.name, &image_data, image_mime) {
            Ok(0) => {
                tracing::warn!("Category '{}' not found in database", entry.name);
                report.not_found += 1;
            }
            Ok(_) => {
                tracing::info!("Updated category: {} ({})", entry.name, image_mime);
                report.updated += 1;
            }
            Err(e) => {
                tracing::error!("Failed to update {}: {}", entry.name, e);
                report.failed += 1;
            }
        }
    }

    report
}
