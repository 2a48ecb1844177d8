use beads_store::{CANONICAL_DB_NAME, VC_DB_NAME, primary_databases};
use beads_types::CheckResult;

use super::DATABASE_FILES;
use crate::{Check, CheckContext, Result};

/// More than one competing `*.db` in `.beads`. Backups and `vc.db` do not count.
pub struct MultipleDatabasesCheck;

impl Check for MultipleDatabasesCheck {
    fn name(&self) -> &'static str {
        DATABASE_FILES
    }

    fn fallback_fix(&self) -> &'static str {
        "Check that the .beads directory is readable"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let databases = primary_databases(&ctx.metadata)?;

        let result = match databases.as_slice() {
            [] => CheckResult::ok(DATABASE_FILES, "No database files"),
            [single] => CheckResult::ok(DATABASE_FILES, format!("Single database: {}", single)),
            multiple => CheckResult::warning(
                DATABASE_FILES,
                format!("Multiple database files found ({})", multiple.len()),
                format!(
                    "bd only reads {}; remove or rename the stale database files \
                     (backups and {} are ignored by this check)",
                    CANONICAL_DB_NAME, VC_DB_NAME
                ),
            )
            .with_detail(multiple.join(", ")),
        };

        Ok(result)
    }
}
