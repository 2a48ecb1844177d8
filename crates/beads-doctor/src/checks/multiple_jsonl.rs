use beads_store::{JsonlKind, present_jsonl_files};
use beads_types::CheckResult;

use super::JSONL_FILES;
use crate::{Check, CheckContext, Result};

/// Both the current and the legacy JSONL name present at once.
pub struct MultipleJsonlCheck;

impl Check for MultipleJsonlCheck {
    fn name(&self) -> &'static str {
        JSONL_FILES
    }

    fn fallback_fix(&self) -> &'static str {
        "Check that the .beads directory is readable"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let present = present_jsonl_files(&ctx.metadata)?;

        let result = match present.as_slice() {
            [] => CheckResult::ok(JSONL_FILES, "No JSONL file"),
            [kind] => CheckResult::ok(JSONL_FILES, format!("Using {}", kind.file_name())),
            _ => {
                let current = JsonlKind::Current.file_name();
                let legacy = JsonlKind::Legacy.file_name();
                CheckResult::warning(
                    JSONL_FILES,
                    "Multiple JSONL files found",
                    format!(
                        "{} is authoritative: merge any newer records from {} into it, \
                         then delete {}",
                        current, legacy, legacy
                    ),
                )
                .with_detail(format!(
                    "{}, {} (ambiguous source of truth)",
                    current, legacy
                ))
            }
        };

        Ok(result)
    }
}
