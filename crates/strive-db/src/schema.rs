//! Schema application.
//!
//! Executes a schema script statement by statement. Application is
//! best-effort: a failing statement is logged and the next one still runs.
//!
//! Statements are found by splitting on `;`. The splitter does not understand
//! string literals, comments or trigger bodies, so schema text must not
//! contain a `;` anywhere other than between statements.
//!
//! Transaction control (`BEGIN`, `COMMIT`, `END`, `ROLLBACK`, `SAVEPOINT`,
//! `RELEASE`) is never executed: the caller owns the transaction the schema
//! runs in. Such statements, common in `sqlite3 .dump` output, are logged and
//! counted as failed.

use rusqlite::Connection;
use serde::Serialize;
use std::path::Path;
use strive_common::Result;

/// Reference schema for the storefront tables, compiled into the binary.
///
/// Every statement is `IF NOT EXISTS`, so applying it to a populated database
/// changes nothing.
pub const BUNDLED_SCHEMA: &str = include_str!("schema.sql");

/// Outcome of applying a schema script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SchemaReport {
    /// Statements that executed successfully.
    pub executed: usize,
    /// Statements that failed or were refused, and were skipped.
    pub failed: usize,
}

const TRANSACTION_KEYWORDS: [&str; 6] =
    ["BEGIN", "COMMIT", "END", "ROLLBACK", "SAVEPOINT", "RELEASE"];

/// True if `stmt` starts or ends a transaction or savepoint.
pub fn is_transaction_control(stmt: &str) -> bool {
    let keyword = stmt
        .split(|c: char| c.is_whitespace() || c == ';')
        .find(|word| !word.is_empty())
        .unwrap_or("");
    TRANSACTION_KEYWORDS
        .iter()
        .any(|k| k.eq_ignore_ascii_case(keyword))
}

/// Split schema text into trimmed, non-empty statements in source order.
///
/// # Example
///
/// ```
/// use strive_db::schema::split_statements;
///
/// let stmts = split_statements("CREATE TABLE a (x INT);\n\n ; CREATE TABLE b (y INT)");
/// assert_eq!(stmts, vec!["CREATE TABLE a (x INT)", "CREATE TABLE b (y INT)"]);
/// ```
pub fn split_statements(sql: &str) -> Vec<&str> {
    sql.split(';')
        .map(str::trim)
        .filter(|stmt| !stmt.is_empty())
        .collect()
}

/// First line of a statement, used when reporting failures.
fn first_line(stmt: &str) -> &str {
    stmt.lines().next().unwrap_or("")
}

/// Execute every statement of `sql` against `conn`.
///
/// Failures are logged with the statement's first line and the database
/// error; they never abort the remaining statements.
pub fn apply_schema(conn: &Connection, sql: &str) -> SchemaReport {
    let mut report = SchemaReport::default();

    for stmt in split_statements(sql) {
        if is_transaction_control(stmt) {
            report.failed += 1;
            tracing::warn!("Skipping transaction control statement: {}", first_line(stmt));
            continue;
        }

        match conn.execute_batch(stmt) {
            Ok(()) => {
                report.executed += 1;
                tracing::debug!("Executed: {}", first_line(stmt));
            }
            Err(e) => {
                report.failed += 1;
                tracing::warn!("Failed to execute command: {}... Error: {}", first_line(stmt), e);
            }
        }
    }

    report
}

/// Read a schema file and apply it.
///
/// A missing or unreadable file is returned as an error without touching the
/// database; statement failures are counted in the report instead.
pub fn apply_schema_file(conn: &Connection, path: &Path) -> Result<SchemaReport> {
    let sql = std::fs::read_to_string(path)?;
    tracing::info!("Executing SQL schema from {}", path.display());

    Ok(apply_schema(conn, &sql))
}
