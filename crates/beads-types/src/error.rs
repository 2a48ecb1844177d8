use std::fmt;

/// Result type for beads-types operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the types layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A version string contained a segment that is not a non-negative integer
    InvalidVersion { version: String, segment: String },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidVersion { version, segment } => write!(
                f,
                "Invalid version '{}': segment '{}' is not a number",
                version, segment
            ),
        }
    }
}

impl std::error::Error for Error {}
