use std::fmt;

/// Result type for beads-doctor operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while evaluating checks
#[derive(Debug)]
pub enum Error {
    /// Storage probe failed
    Store(beads_store::Error),

    /// A version string could not be parsed
    Version(beads_types::Error),

    /// IO operation failed
    Io(std::io::Error),

    /// Configuration error
    Config(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Store(err) => write!(f, "{}", err),
            Error::Version(err) => write!(f, "{}", err),
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Store(err) => Some(err),
            Error::Version(err) => Some(err),
            Error::Io(err) => Some(err),
            Error::Config(_) => None,
        }
    }
}

impl From<beads_store::Error> for Error {
    fn from(err: beads_store::Error) -> Self {
        Error::Store(err)
    }
}

impl From<beads_types::Error> for Error {
    fn from(err: beads_types::Error) -> Self {
        Error::Version(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}
