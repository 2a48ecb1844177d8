// Read-only view of the .beads metadata directory
// Lists and stats files, probes the schema version marker; never writes

mod error;
mod layout;
mod scan;
mod schema;
mod stat;

// Public API
pub use error::{Error, Result};
pub use layout::{
    BEADS_DIR, CANONICAL_DB_NAME, JsonlKind, LEGACY_JSONL_NAME, JSONL_NAME, MetadataDir,
    VC_DB_NAME, is_backup_file, is_database_file, is_primary_database, is_reserved_database,
};
pub use scan::{list_file_names, primary_databases, present_jsonl_files};
pub use schema::{VERSION_KEY, count_issues, read_version_marker};
pub use stat::FileStat;
