//! Product image ingestion, one function per product mode.
//!
//! Each file is handled independently. Failures are logged and counted; they
//! never abort the run.

use rusqlite::Connection;
use std::path::{Path, PathBuf};
use strive_common::{mime, ProductId, Result};
use strive_db::models::NewProductImage;
use strive_db::queries::{product_images, products};
use strive_resolver::generated::parse_generated_name;
use strive_resolver::tables::MappedImage;
use strive_resolver::ProductResolver;

use super::report::ProductReport;
use crate::config::{ProductMode, WriteMode};

fn file_name(path: &Path) -> &str {
    path.file_name().and_then(|n| n.to_str()).unwrap_or("")
}

/// Read a file and write it as an image of `product_id` at `display_order`.
fn write_image(
    conn: &Connection,
    path: &Path,
    product_id: ProductId,
    display_order: u32,
    write_mode: WriteMode,
) -> Result<()> {
    let image_data = std::fs::read(path)?;
    let image = NewProductImage {
        product_id,
        image_data: &image_data,
        mime: mime::classify(path),
        display_order,
    };

    match write_mode {
        WriteMode::Append => product_images::insert_product_image(conn, &image)?,
        WriteMode::Replace => product_images::replace_product_image(conn, &image)?,
    };

    Ok(())
}

/// Resolve hand-named files through the special-case and key phrase tables.
pub fn ingest_fuzzy(
    conn: &Connection,
    resolver: &ProductResolver,
    files: &[PathBuf],
    write_mode: WriteMode,
) -> ProductReport {
    let mut report = ProductReport::new(ProductMode::Fuzzy, write_mode);

    for path in files {
        let filename = file_name(path);
        let resolution = resolver.resolve(filename);

        let Some(pattern) = resolution.pattern() else {
            tracing::warn!("No product match found for {}", filename);
            report.failed += 1;
            continue;
        };
        let view = resolution.view().unwrap_or_default();

        let product = match products::find_product_by_name(conn, pattern) {
            Ok(Some(product)) => product,
            Ok(None) => {
                tracing::warn!("Product not found for {} (pattern: {})", filename, pattern);
                report.failed += 1;
                continue;
            }
            Err(e) => {
                tracing::error!("Failed to look up product for {}: {}", filename, e);
                report.failed += 1;
                continue;
            }
        };

        let display_order = resolver.display_order(view);
        match write_image(conn, path, product.id, display_order, write_mode) {
            Ok(()) => {
                tracing::info!(
                    "Added {} for {} (ID: {}, view: {}, order: {}, via {})",
                    filename,
                    product.name,
                    product.id,
                    view,
                    display_order,
                    resolution.strategy()
                );
                report.imported += 1;
            }
            Err(e) => {
                tracing::error!("Failed to add {} for product ID {}: {}", filename, product.id, e);
                report.failed += 1;
            }
        }
    }

    report
}

/// Ingest `product_<id>_<order>` files, replacing any image at that slot.
pub fn ingest_generated(conn: &Connection, files: &[PathBuf]) -> ProductReport {
    let mut report = ProductReport::new(ProductMode::Generated, WriteMode::Replace);

    for path in files {
        let filename = file_name(path);

        let Some(name) = parse_generated_name(filename) else {
            tracing::warn!("Skipping {}: expected product_<id>_<order>", filename);
            report.skipped += 1;
            continue;
        };

        match products::get_product(conn, name.product_id) {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::warn!("Product ID {} not found, skipping {}", name.product_id, filename);
                report.failed += 1;
                continue;
            }
            Err(e) => {
                tracing::error!("Failed to look up product ID {}: {}", name.product_id, e);
                report.failed += 1;
                continue;
            }
        }

        match write_image(conn, path, name.product_id, name.display_order, WriteMode::Replace) {
            Ok(()) => {
                tracing::info!(
                    "Added image for product ID: {} (Order: {})",
                    name.product_id,
                    name.display_order
                );
                report.imported += 1;
            }
            Err(e) => {
                tracing::error!("Failed to add image for product ID {}: {}", name.product_id, e);
                report.failed += 1;
            }
        }
    }

    report
}

/// Ingest the files listed in the fixed filename to product table.
pub fn ingest_mapped(
    conn: &Connection,
    image_dir: &Path,
    mapped: &[MappedImage],
    write_mode: WriteMode,
) -> ProductReport {
    let mut report = ProductReport::new(ProductMode::Mapped, write_mode);

    for entry in mapped {
        let image_path = image_dir.join(&entry.file);
        let product_id = ProductId::from(entry.product_id);

        if !image_path.is_file() {
            tracing::warn!(
                "Image not found: {} - Skipping product ID: {}",
                image_path.display(),
                product_id
            );
            report.missing_files += 1;
            continue;
        }

        match products::get_product(conn, product_id) {
            Ok(Some(_)) => {}
            Ok(None) => {
                tracing::warn!("Product ID {} not found, skipping {}", product_id, entry.file);
                report.failed += 1;
                continue;
            }
            Err(e) => {
                tracing::error!("Failed to look up product ID {}: {}", product_id, e);
                report.failed += 1;
                continue;
            }
        }

        match write_image(conn, &image_path, product_id, entry.order, write_mode) {
            Ok(()) => {
                tracing::info!(
                    "Added image for product ID: {} (Order: {})",
                    product_id,
                    entry.order
                );
                report.imported += 1;
            }
            Err(e) => {
                tracing::error!("Failed to add image for product ID {}: {}", product_id, e);
                report.failed += 1;
            }
        }
    }

    report
}
