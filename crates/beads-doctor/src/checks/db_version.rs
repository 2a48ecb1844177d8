use beads_store::{FileStat, JsonlKind, read_version_marker};
use beads_types::{CheckResult, Version};
use tracing::debug;

use super::DATABASE_VERSION;
use crate::{Check, CheckContext, Result, SchemaPolicy};

const MIGRATE_FIX: &str = "Run 'bd migrate' to upgrade the database schema";
const UNREADABLE_FIX: &str = "Run 'bd migrate' to rewrite the version marker, or move beads.db \
                              aside and run 'bd import -i .beads/issues.jsonl' to rebuild it";

/// Where a database's version sits relative to the CLI's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Drift {
    Current,
    /// Newer patch release of the same minor: schema-compatible.
    AheadPatch,
    /// Written by a newer minor or major release.
    AheadRelease,
    /// Behind, but within the configured minor lag.
    BehindWithinPolicy,
    /// Older major, or too many minor releases behind.
    BehindBeyondPolicy,
}

fn classify(db: &Version, cli: &Version, policy: &SchemaPolicy) -> Drift {
    use std::cmp::Ordering;

    match db.cmp(cli) {
        Ordering::Equal => Drift::Current,
        Ordering::Greater => {
            if db.major() == cli.major() && db.minor() == cli.minor() {
                Drift::AheadPatch
            } else {
                Drift::AheadRelease
            }
        }
        Ordering::Less => {
            if db.major() < cli.major() {
                return Drift::BehindBeyondPolicy;
            }
            let minor_lag = cli.minor().saturating_sub(db.minor());
            if minor_lag > policy.max_minor_lag {
                Drift::BehindBeyondPolicy
            } else {
                Drift::BehindWithinPolicy
            }
        }
    }
}

/// Schema version of `beads.db` against the running CLI, or JSONL-only mode.
pub struct DatabaseVersionCheck;

impl Check for DatabaseVersionCheck {
    fn name(&self) -> &'static str {
        DATABASE_VERSION
    }

    fn fallback_fix(&self) -> &'static str {
        UNREADABLE_FIX
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let db_path = ctx.metadata.database_path();

        if FileStat::probe(&db_path)?.is_none() {
            for kind in JsonlKind::ALL {
                if FileStat::probe(&ctx.metadata.jsonl_path(kind))?.is_some() {
                    return Ok(CheckResult::ok(DATABASE_VERSION, "JSONL-only mode").with_detail(
                        format!(
                            "No beads.db; {} is the source of truth (--no-db mode)",
                            kind.file_name()
                        ),
                    ));
                }
            }

            return Ok(CheckResult::error(
                DATABASE_VERSION,
                "No beads.db found",
                "Run 'bd init' to create the database",
            )
            .with_detail(format!("Looked for {}", db_path.display())));
        }

        let marker = match read_version_marker(&db_path) {
            Ok(marker) => marker,
            Err(err) => {
                return Ok(CheckResult::error(
                    DATABASE_VERSION,
                    "Unable to read database version",
                    UNREADABLE_FIX,
                )
                .with_detail(err.to_string()));
            }
        };

        let db_version = match Version::parse(&marker) {
            Ok(version) => version,
            Err(err) => {
                return Ok(CheckResult::error(
                    DATABASE_VERSION,
                    "Unable to read database version",
                    UNREADABLE_FIX,
                )
                .with_detail(err.to_string()));
            }
        };

        let cli_version = Version::parse(ctx.tool_version)?;
        let drift = classify(&db_version, &cli_version, &ctx.config.schema);
        debug!(db = %db_version, cli = %cli_version, ?drift, "Compared schema versions");

        let result = match drift {
            Drift::Current => CheckResult::ok(DATABASE_VERSION, format!("version {}", marker)),
            Drift::AheadPatch => CheckResult::ok(
                DATABASE_VERSION,
                format!("version {} (CLI: {})", marker, ctx.tool_version),
            )
            .with_detail("Database is from a newer patch release; the schema is unchanged"),
            Drift::AheadRelease => CheckResult::warning(
                DATABASE_VERSION,
                format!(
                    "Database version {} is newer than CLI {}",
                    marker, ctx.tool_version
                ),
                "Upgrade bd to the release that last wrote this database",
            ),
            Drift::BehindWithinPolicy => CheckResult::warning(
                DATABASE_VERSION,
                format!("version {} (CLI: {})", marker, ctx.tool_version),
                MIGRATE_FIX,
            )
            .with_detail("Database schema is behind the CLI but still readable"),
            Drift::BehindBeyondPolicy => CheckResult::error(
                DATABASE_VERSION,
                format!(
                    "Database version {} is incompatible with CLI {}",
                    marker, ctx.tool_version
                ),
                MIGRATE_FIX,
            )
            .with_detail(format!(
                "More than {} minor release(s) or a major release behind",
                ctx.config.schema.max_minor_lag
            )),
        };

        Ok(result)
    }
}
