use std::cmp::Ordering;
use std::fmt;

use crate::{Error, Result};

/// Dot-separated numeric version such as `0.20.1`.
///
/// Comparison is numeric per segment and treats missing trailing
/// segments as zero, so `1.2 == 1.2.0` and `0.20.1 > 0.3.0`.
#[derive(Debug, Clone, Default)]
pub struct Version {
    segments: Vec<u64>,
}

impl Version {
    pub fn parse(version: &str) -> Result<Self> {
        let trimmed = version.trim();
        if trimmed.is_empty() {
            return Ok(Self::default());
        }

        let segments = trimmed
            .split('.')
            .map(|segment| {
                segment.parse::<u64>().map_err(|_| Error::InvalidVersion {
                    version: version.to_string(),
                    segment: segment.to_string(),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { segments })
    }

    /// Segment at `index`, zero when the version is shorter.
    pub fn segment(&self, index: usize) -> u64 {
        self.segments.get(index).copied().unwrap_or(0)
    }

    pub fn major(&self) -> u64 {
        self.segment(0)
    }

    pub fn minor(&self) -> u64 {
        self.segment(1)
    }

    pub fn patch(&self) -> u64 {
        self.segment(2)
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        let len = self.segments.len().max(other.segments.len());
        (0..len)
            .map(|i| self.segment(i).cmp(&other.segment(i)))
            .find(|ord| ord.is_ne())
            .unwrap_or(Ordering::Equal)
    }
}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.segments.iter().map(|s| s.to_string()).collect();
        f.write_str(&parts.join("."))
    }
}

/// Compare two version strings numerically.
///
/// Fails with [`Error::InvalidVersion`] if either contains a non-numeric segment.
pub fn compare_versions(v1: &str, v2: &str) -> Result<Ordering> {
    Ok(Version::parse(v1)?.cmp(&Version::parse(v2)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors_pad_with_zero() {
        let v = Version::parse("1.2").unwrap();
        assert_eq!(v.major(), 1);
        assert_eq!(v.minor(), 2);
        assert_eq!(v.patch(), 0);
        assert_eq!(v.segment(7), 0);
    }

    #[test]
    fn test_display_keeps_written_segments() {
        assert_eq!(Version::parse("0.20.1").unwrap().to_string(), "0.20.1");
        assert_eq!(Version::parse(" 1.2 ").unwrap().to_string(), "1.2");
    }

    #[test]
    fn test_empty_versions_are_equal() {
        assert_eq!(compare_versions("", "").unwrap(), Ordering::Equal);
        assert_eq!(compare_versions("", "0.0").unwrap(), Ordering::Equal);
    }

    #[test]
    fn test_invalid_segment() {
        let err = compare_versions("1.x.0", "1.0.0").unwrap_err();
        assert_eq!(
            err,
            Error::InvalidVersion {
                version: "1.x.0".to_string(),
                segment: "x".to_string(),
            }
        );

        assert!(Version::parse("1..2").is_err());
        assert!(Version::parse("-1.0").is_err());
    }
}
