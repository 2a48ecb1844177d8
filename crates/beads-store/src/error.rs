use std::fmt;

/// Result type for beads-store operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while probing the metadata directory
#[derive(Debug)]
pub enum Error {
    /// Database operation failed
    Database(rusqlite::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Version marker missing or malformed
    InvalidMarker(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Database(err) => {
                let msg = err.to_string();
                // Missing tables mean an uninitialized or foreign database file
                if msg.contains("no such table") || msg.contains("file is not a database") {
                    write!(f, "Database schema unreadable: {}", msg)
                } else {
                    write!(f, "Database error: {}", err)
                }
            }
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::InvalidMarker(msg) => write!(f, "Invalid version marker: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Database(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::InvalidMarker(_) => None,
        }
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Error::Database(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<walkdir::Error> for Error {
    fn from(err: walkdir::Error) -> Self {
        Error::Io(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_table_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(1),
            Some("no such table: metadata".to_string()),
        );
        let msg = Error::Database(sqlite_err).to_string();

        assert!(msg.starts_with("Database schema unreadable"));
        assert!(msg.contains("metadata"));
    }

    #[test]
    fn test_regular_database_error_message() {
        let sqlite_err = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(5),
            Some("database is locked".to_string()),
        );
        let msg = Error::Database(sqlite_err).to_string();

        assert!(msg.starts_with("Database error:"));
    }

    #[test]
    fn test_invalid_marker_message() {
        let msg = Error::InvalidMarker("empty value".to_string()).to_string();
        assert_eq!(msg, "Invalid version marker: empty value");
    }
}
