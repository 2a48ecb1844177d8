use std::path::{Path, PathBuf};

/// Metadata directory created by `bd init`, directly under the workspace root.
pub const BEADS_DIR: &str = ".beads";

/// Database file the CLI opens by default.
pub const CANONICAL_DB_NAME: &str = "beads.db";

/// Secondary database owned by the VC integration. Lives next to the
/// primary store and is never a competing copy.
pub const VC_DB_NAME: &str = "vc.db";

/// Current append-log name.
pub const JSONL_NAME: &str = "issues.jsonl";

/// Append-log name used before the rename to `issues.jsonl`.
pub const LEGACY_JSONL_NAME: &str = "beads.jsonl";

const DB_EXTENSION: &str = ".db";
const BACKUP_MARKERS: [&str; 2] = [".backup", ".bak."];

/// Any `*.db` file name.
pub fn is_database_file(name: &str) -> bool {
    name.len() > DB_EXTENSION.len() && name.ends_with(DB_EXTENSION)
}

/// Backup copies such as `beads.backup.db` or `beads.bak.db`.
pub fn is_backup_file(name: &str) -> bool {
    BACKUP_MARKERS.iter().any(|marker| name.contains(marker))
}

pub fn is_reserved_database(name: &str) -> bool {
    name == VC_DB_NAME
}

/// A database file that competes with the canonical store.
pub fn is_primary_database(name: &str) -> bool {
    is_database_file(name) && !is_backup_file(name) && !is_reserved_database(name)
}

/// The two recognized names for the append-log mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonlKind {
    Current,
    Legacy,
}

impl JsonlKind {
    /// Preference order: the current name wins when both exist.
    pub const ALL: [JsonlKind; 2] = [JsonlKind::Current, JsonlKind::Legacy];

    pub fn file_name(&self) -> &'static str {
        match self {
            JsonlKind::Current => JSONL_NAME,
            JsonlKind::Legacy => LEGACY_JSONL_NAME,
        }
    }
}

/// Paths inside a workspace's `.beads` directory.
#[derive(Debug, Clone)]
pub struct MetadataDir {
    path: PathBuf,
}

impl MetadataDir {
    pub fn for_root(root: &Path) -> Self {
        Self {
            path: root.join(BEADS_DIR),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.is_dir()
    }

    pub fn database_path(&self) -> PathBuf {
        self.path.join(CANONICAL_DB_NAME)
    }

    pub fn jsonl_path(&self, kind: JsonlKind) -> PathBuf {
        self.path.join(kind.file_name())
    }

    pub fn join(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_file_pattern() {
        assert!(is_database_file("beads.db"));
        assert!(is_database_file("old.db"));
        assert!(!is_database_file(".db"));
        assert!(!is_database_file("beads.db-wal"));
        assert!(!is_database_file("issues.jsonl"));
    }

    #[test]
    fn test_backup_exclusion() {
        assert!(is_backup_file("beads.backup.db"));
        assert!(is_backup_file("beads.db.backup-20240101.db"));
        assert!(is_backup_file("beads.bak.db"));
        assert!(!is_backup_file("beads.db"));
        assert!(!is_primary_database("beads.backup.db"));
    }

    #[test]
    fn test_reserved_vc_database() {
        assert!(is_reserved_database("vc.db"));
        assert!(!is_reserved_database("beads.db"));
        assert!(!is_primary_database("vc.db"));
        assert!(is_primary_database("old.db"));
    }

    #[test]
    fn test_jsonl_kind_names() {
        assert_eq!(JsonlKind::Current.file_name(), "issues.jsonl");
        assert_eq!(JsonlKind::Legacy.file_name(), "beads.jsonl");
        assert_eq!(JsonlKind::ALL[0], JsonlKind::Current);
    }

    #[test]
    fn test_metadata_dir_paths() {
        let dir = MetadataDir::for_root(Path::new("/work"));
        assert_eq!(dir.path(), Path::new("/work/.beads"));
        assert_eq!(dir.database_path(), Path::new("/work/.beads/beads.db"));
        assert_eq!(
            dir.jsonl_path(JsonlKind::Legacy),
            Path::new("/work/.beads/beads.jsonl")
        );
    }
}
