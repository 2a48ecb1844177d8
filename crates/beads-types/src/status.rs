use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome of a single diagnostic check.
///
/// Variants are declared in severity order, so `Ord` gives
/// `Ok < Warning < Error` and aggregation is a plain `max` fold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Ok,
    Warning,
    Error,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Ok => "ok",
            Status::Warning => "warning",
            Status::Error => "error",
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Status::Error)
    }

    /// Most severe status in `statuses`, or `Ok` when empty.
    pub fn worst<I>(statuses: I) -> Status
    where
        I: IntoIterator<Item = Status>,
    {
        statuses.into_iter().max().unwrap_or(Status::Ok)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_order() {
        assert!(Status::Ok < Status::Warning);
        assert!(Status::Warning < Status::Error);
    }

    #[test]
    fn test_worst() {
        assert_eq!(Status::worst([]), Status::Ok);
        assert_eq!(Status::worst([Status::Ok, Status::Warning]), Status::Warning);
        assert_eq!(
            Status::worst([Status::Error, Status::Ok, Status::Warning]),
            Status::Error
        );
    }

    #[test]
    fn test_serializes_lowercase() {
        let json = serde_json::to_string(&Status::Warning).unwrap();
        assert_eq!(json, "\"warning\"");

        let parsed: Status = serde_json::from_str("\"error\"").unwrap();
        assert_eq!(parsed, Status::Error);
    }
}
