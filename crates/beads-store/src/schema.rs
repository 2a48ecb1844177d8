use rusqlite::types::Value;
use rusqlite::{Connection, OpenFlags, OptionalExtension};
use std::path::Path;

use crate::{Error, Result};

/// Key of the schema version marker in the `metadata` table.
pub const VERSION_KEY: &str = "bd_version";

fn open_read_only(db_path: &Path) -> Result<Connection> {
    Ok(Connection::open_with_flags(
        db_path,
        OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
    )?)
}

/// Read the version marker written by the CLI that last migrated the database.
///
/// The connection is opened read-only, so probing never creates the file
/// or touches its journal.
pub fn read_version_marker(db_path: &Path) -> Result<String> {
    let conn = open_read_only(db_path)?;

    let value: Option<Value> = conn
        .query_row(
            "SELECT value FROM metadata WHERE key = ?1",
            [VERSION_KEY],
            |row| row.get(0),
        )
        .optional()?;

    // Older CLIs stored the marker as an integer
    let marker = match value {
        Some(Value::Text(text)) => text.trim().to_string(),
        Some(Value::Integer(n)) => n.to_string(),
        Some(other) => {
            return Err(Error::InvalidMarker(format!(
                "{} has unsupported type {:?}",
                VERSION_KEY,
                other.data_type()
            )));
        }
        None => {
            return Err(Error::InvalidMarker(format!(
                "no {} entry in metadata table",
                VERSION_KEY
            )));
        }
    };

    if marker.is_empty() {
        return Err(Error::InvalidMarker(format!("{} is empty", VERSION_KEY)));
    }

    Ok(marker)
}

/// Number of rows in the `issues` table.
///
/// A freshly initialized database holds schema pages but no issues, so
/// file size alone cannot tell whether there is anything to export.
pub fn count_issues(db_path: &Path) -> Result<u64> {
    let conn = open_read_only(db_path)?;
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM issues", [], |row| row.get(0))?;
    Ok(u64::try_from(count).unwrap_or(0))
}
