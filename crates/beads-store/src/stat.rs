use std::io::ErrorKind;
use std::path::Path;
use std::time::SystemTime;

use crate::Result;

/// Size and modification time of a regular file, captured once.
#[derive(Debug, Clone)]
pub struct FileStat {
    pub len: u64,
    pub modified: Option<SystemTime>,
}

impl FileStat {
    /// Stat `path`; `None` when it does not exist or is not a regular file.
    pub fn probe(path: &Path) -> Result<Option<Self>> {
        let metadata = match std::fs::metadata(path) {
            Ok(metadata) => metadata,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        if !metadata.is_file() {
            return Ok(None);
        }

        Ok(Some(Self {
            len: metadata.len(),
            // Some filesystems do not record mtime
            modified: metadata.modified().ok(),
        }))
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}
