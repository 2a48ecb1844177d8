mod db_version;
mod installation;
mod multiple_databases;
mod multiple_jsonl;
mod permissions;
mod sync;

pub use db_version::DatabaseVersionCheck;
pub use installation::InstallationCheck;
pub use multiple_databases::MultipleDatabasesCheck;
pub use multiple_jsonl::MultipleJsonlCheck;
pub use permissions::PermissionsCheck;
pub use sync::DatabaseJsonlSyncCheck;

use crate::Check;

pub const INSTALLATION: &str = "Installation";
pub const DATABASE_VERSION: &str = "Database Version";
pub const DATABASE_FILES: &str = "Database Files";
pub const JSONL_FILES: &str = "JSONL Files";
pub const PERMISSIONS: &str = "Permissions";
pub const DB_JSONL_SYNC: &str = "DB-JSONL Sync";

/// All checks in report order. Installation always comes first.
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(InstallationCheck),
        Box::new(DatabaseVersionCheck),
        Box::new(MultipleDatabasesCheck),
        Box::new(MultipleJsonlCheck),
        Box::new(PermissionsCheck),
        Box::new(DatabaseJsonlSyncCheck),
    ]
}
