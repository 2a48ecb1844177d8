use beads_store::{FileStat, JsonlKind, count_issues};
use beads_types::CheckResult;
use chrono::{DateTime, SecondsFormat, Utc};
use std::time::{Duration, SystemTime};
use tracing::debug;

use super::DB_JSONL_SYNC;
use crate::{Check, CheckContext, Result};

/// Structural sync heuristic between `beads.db` and its JSONL mirror.
///
/// Compares modification times, plus the issue count when the JSONL is
/// empty; record-level diffing is left to `bd import` / `bd export`.
pub struct DatabaseJsonlSyncCheck;

fn format_time(time: SystemTime) -> String {
    DateTime::<Utc>::from(time).to_rfc3339_opts(SecondsFormat::Secs, true)
}

/// How much later `a` was modified than `b`, if at all.
fn newer_by(a: SystemTime, b: SystemTime) -> Option<Duration> {
    a.duration_since(b).ok()
}

impl Check for DatabaseJsonlSyncCheck {
    fn name(&self) -> &'static str {
        DB_JSONL_SYNC
    }

    fn fallback_fix(&self) -> &'static str {
        "Run 'bd sync' to reconcile the database and JSONL"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let Some(db) = FileStat::probe(&ctx.metadata.database_path())? else {
            return Ok(CheckResult::ok(DB_JSONL_SYNC, "No database (nothing to sync)"));
        };

        let mut jsonl = None;
        for kind in JsonlKind::ALL {
            if let Some(stat) = FileStat::probe(&ctx.metadata.jsonl_path(kind))? {
                jsonl = Some((kind, stat));
                break;
            }
        }
        let Some((kind, jsonl)) = jsonl else {
            return Ok(CheckResult::ok(DB_JSONL_SYNC, "No JSONL file (nothing to sync)"));
        };

        let name = kind.file_name();
        let import_fix = format!("Run 'bd import -i .beads/{}' to load the JSONL changes", name);
        let export_fix = format!("Run 'bd export -o .beads/{}' to refresh the JSONL", name);

        // A fresh database is never zero bytes; only issue rows count as data
        if jsonl.is_empty() && !db.is_empty() {
            match count_issues(&ctx.metadata.database_path()) {
                Ok(0) => {
                    return Ok(CheckResult::ok(DB_JSONL_SYNC, "Database and JSONL are both empty")
                        .with_detail("No issues to export yet"));
                }
                Ok(issues) => {
                    return Ok(CheckResult::warning(
                        DB_JSONL_SYNC,
                        format!("{} is empty but the database has {} issue(s)", name, issues),
                        export_fix,
                    ));
                }
                Err(err) => {
                    debug!(error = %err, "Could not count issues; comparing modification times only");
                }
            }
        }

        let (Some(db_time), Some(jsonl_time)) = (db.modified, jsonl.modified) else {
            return Ok(CheckResult::ok(DB_JSONL_SYNC, "Database and JSONL both present")
                .with_detail("Modification times unavailable; staleness not assessed"));
        };

        let tolerance = Duration::from_secs(ctx.config.sync.tolerance_secs);
        let detail = format!(
            "beads.db modified {}, {} modified {}",
            format_time(db_time),
            name,
            format_time(jsonl_time)
        );

        if let Some(gap) = newer_by(jsonl_time, db_time).filter(|gap| *gap > tolerance) {
            return Ok(CheckResult::warning(
                DB_JSONL_SYNC,
                format!("JSONL is newer than database by {}s", gap.as_secs()),
                import_fix,
            )
            .with_detail(detail));
        }

        if let Some(gap) = newer_by(db_time, jsonl_time).filter(|gap| *gap > tolerance)
            && !jsonl.is_empty()
        {
            return Ok(CheckResult::warning(
                DB_JSONL_SYNC,
                format!("Database has unexported changes ({}s newer)", gap.as_secs()),
                export_fix,
            )
            .with_detail(detail));
        }

        Ok(CheckResult::ok(DB_JSONL_SYNC, "Database and JSONL are in sync").with_detail(detail))
    }
}
