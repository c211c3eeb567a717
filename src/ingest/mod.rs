//! Image ingestion driver.
//!
//! A run applies the schema (optional), binds category images, then ingests
//! product images with the configured mode. All steps share one transaction
//! that is committed once at the end.

pub mod categories;
pub mod products;
mod report;

pub use report::{CategoryReport, IngestReport, ProductReport};

use anyhow::{Context, Result};
use rusqlite::Connection;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use strive_common::paths::is_image_file;
use strive_db::schema::{self, SchemaReport, BUNDLED_SCHEMA};
use strive_resolver::ProductResolver;
use walkdir::WalkDir;

use crate::config::{Config, ProductMode};

/// List the image files directly inside `dir`, sorted by name.
///
/// Subdirectories are not descended into. Files named in `excluded` and
/// files without a UTF-8 name are left out.
pub fn list_image_files(dir: &Path, excluded: &HashSet<&str>) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry =
            entry.with_context(|| format!("Failed to read image directory {}", dir.display()))?;
        if !entry.file_type().is_file() || !is_image_file(entry.path()) {
            continue;
        }

        let Some(name) = entry.file_name().to_str() else {
            tracing::warn!("Skipping file with non UTF-8 name: {:?}", entry.path());
            continue;
        };
        if excluded.contains(name) {
            continue;
        }

        files.push(entry.into_path());
    }

    Ok(files)
}

/// Runs the ingestion steps against one database connection.
pub struct Ingestor<'a> {
    config: &'a Config,
    resolver: ProductResolver,
}

impl<'a> Ingestor<'a> {
    pub fn new(config: &'a Config) -> Self {
        Self {
            config,
            resolver: ProductResolver::new(&config.products.tables),
        }
    }

    /// Run every step and commit.
    ///
    /// With `dry_run` the transaction is rolled back instead. A failed commit
    /// is reported through [`IngestReport::committed`], not as an error.
    pub fn run(&self, conn: &mut Connection, dry_run: bool) -> Result<IngestReport> {
        let tx = conn
            .transaction()
            .context("Failed to begin transaction")?;

        let schema = if self.config.schema.apply {
            tracing::info!("Step 1: Executing SQL schema...");
            self.apply_schema(&tx)
        } else {
            tracing::info!("Step 1: Schema application disabled");
            None
        };

        if tx.is_autocommit() {
            anyhow::bail!("Schema step ended the run's transaction; refusing to continue");
        }

        tracing::info!("Step 2: Adding category images...");
        let categories = categories::bind_category_images(
            &tx,
            &self.config.images.dir,
            &self.config.categories,
        );

        tracing::info!(
            "Step 3: Adding product images ({} mode)...",
            self.config.products.mode
        );
        let products = self.ingest_products(&tx);

        let committed = if dry_run {
            tx.rollback().context("Failed to roll back dry run")?;
            tracing::info!("Dry run: database changes rolled back");
            false
        } else {
            match tx.commit() {
                Ok(()) => {
                    tracing::info!("Database changes committed");
                    true
                }
                Err(e) => {
                    tracing::error!("Failed to commit changes: {}", e);
                    false
                }
            }
        };

        Ok(IngestReport {
            schema,
            categories,
            products,
            dry_run,
            committed,
        })
    }

    fn apply_schema(&self, conn: &Connection) -> Option<SchemaReport> {
        let report = match &self.config.schema.path {
            Some(path) => match schema::apply_schema_file(conn, path) {
                Ok(report) => report,
                Err(e) => {
                    tracing::error!("SQL file not readable at {}: {}", path.display(), e);
                    return None;
                }
            },
            None => {
                tracing::info!("Executing bundled SQL schema");
                schema::apply_schema(conn, BUNDLED_SCHEMA)
            }
        };

        tracing::info!(
            "SQL schema execution finished ({} executed, {} failed)",
            report.executed,
            report.failed
        );
        Some(report)
    }

    fn ingest_products(&self, conn: &Connection) -> ProductReport {
        let settings = &self.config.products;
        let write_mode = settings.effective_write_mode();

        if settings.mode == ProductMode::Mapped {
            return products::ingest_mapped(
                conn,
                &self.config.images.dir,
                &settings.mapped,
                write_mode,
            );
        }

        let claimed: HashSet<&str> = self
            .config
            .categories
            .iter()
            .map(|c| c.file.as_str())
            .collect();

        let files = match list_image_files(&self.config.images.dir, &claimed) {
            Ok(files) => files,
            Err(e) => {
                tracing::error!("{:#}", e);
                Vec::new()
            }
        };
        tracing::debug!("Found {} product image files", files.len());

        match settings.mode {
            ProductMode::Generated => products::ingest_generated(conn, &files),
            _ => products::ingest_fuzzy(conn, &self.resolver, &files, write_mode),
        }
    }
}
