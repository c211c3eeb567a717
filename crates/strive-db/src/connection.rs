//! Database connection management.
//!
//! Opens the SQLite database the ingestion run writes to. Every connection
//! has foreign key constraints enabled so product images cannot point at
//! missing products.

use rusqlite::Connection;
use std::path::Path;
use strive_common::{Error, Result};

/// Open the database file at `db_path`.
///
/// The file is created if it does not exist yet. A failure here is fatal for
/// the run: nothing has been touched at this point.
///
/// # Example
///
/// ```no_run
/// use strive_db::connection::open;
///
/// let conn = open("/var/lib/strive/strive.db".as_ref()).unwrap();
/// ```
pub fn open(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path).map_err(|e| {
        Error::database(format!(
            "Failed to open database {}: {}",
            db_path.display(),
            e
        ))
    })?;

    configure(&conn)?;
    tracing::debug!("Opened database at {}", db_path.display());

    Ok(conn)
}

/// Open an in-memory database for testing.
///
/// # Example
///
/// ```
/// use strive_db::connection::open_in_memory;
///
/// let conn = open_in_memory().unwrap();
/// ```
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()
        .map_err(|e| Error::database(format!("Failed to open in-memory database: {}", e)))?;

    configure(&conn)?;

    Ok(conn)
}

fn configure(conn: &Connection) -> Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")
        .map_err(|e| Error::database(format!("Failed to enable foreign keys: {}", e)))
}
