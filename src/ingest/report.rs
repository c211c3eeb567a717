//! Run reports.
//!
//! Every step counts what it did so the operator gets an end-of-run summary,
//! either as text or as JSON.

use serde::Serialize;
use std::fmt;
use strive_db::schema::SchemaReport;

use crate::config::{ProductMode, WriteMode};

/// Outcome of the category binding step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryReport {
    /// Categories whose image was set.
    pub updated: usize,
    /// Mapping entries naming a category that does not exist.
    pub not_found: usize,
    /// Mapping entries whose file is absent.
    pub missing_files: usize,
    /// Entries that hit an I/O or database error.
    pub failed: usize,
}

/// Outcome of the product image step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductReport {
    pub mode: ProductMode,
    pub write_mode: WriteMode,
    /// Images written.
    pub imported: usize,
    /// Files that could not be resolved, matched or written.
    pub failed: usize,
    /// Files ignored because their name does not fit the mode.
    pub skipped: usize,
    /// Table entries whose file is absent (mapped mode).
    pub missing_files: usize,
}

impl ProductReport {
    pub fn new(mode: ProductMode, write_mode: WriteMode) -> Self {
        Self {
            mode,
            write_mode,
            imported: 0,
            failed: 0,
            skipped: 0,
            missing_files: 0,
        }
    }
}

/// Outcome of a whole ingestion run.
#[derive(Debug, Clone, Serialize)]
pub struct IngestReport {
    /// `None` when schema application was disabled or the file was unreadable.
    pub schema: Option<SchemaReport>,
    pub categories: CategoryReport,
    pub products: ProductReport,
    pub dry_run: bool,
    pub committed: bool,
}

impl fmt::Display for IngestReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Summary")?;
        match self.schema {
            Some(schema) => writeln!(
                f,
                "  Schema: {} executed, {} failed",
                schema.executed, schema.failed
            )?,
            None => writeln!(f, "  Schema: not applied")?,
        }

        let c = &self.categories;
        writeln!(
            f,
            "  Categories: {} updated, {} not found, {} missing files, {} failed",
            c.updated, c.not_found, c.missing_files, c.failed
        )?;

        let p = &self.products;
        write!(
            f,
            "  Products ({}, {}): {} imported, {} failed, {} skipped",
            p.mode, p.write_mode, p.imported, p.failed, p.skipped
        )?;
        if p.mode == ProductMode::Mapped {
            write!(f, ", {} missing files", p.missing_files)?;
        }
        writeln!(f)?;

        if self.dry_run {
            write!(f, "  Dry run: changes rolled back")
        } else if self.committed {
            write!(f, "  Database changes committed")
        } else {
            write!(f, "  Database changes NOT committed")
        }
    }
}
