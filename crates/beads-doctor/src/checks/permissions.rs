use beads_types::CheckResult;
use std::io::Write;
use tempfile::Builder;

use super::PERMISSIONS;
use crate::{Check, CheckContext, Result};

const PROBE_PREFIX: &str = ".doctor-write-probe-";

/// `.beads` is writable by this process.
///
/// Creates a named temp file inside the directory and removes it again.
/// The file is deleted on drop, so every exit path cleans up.
pub struct PermissionsCheck;

impl PermissionsCheck {
    fn fix(ctx: &CheckContext<'_>) -> String {
        format!(
            "Fix ownership and permissions: chown -R $USER {0} && chmod -R u+rwX {0}",
            ctx.metadata.path().display()
        )
    }
}

impl Check for PermissionsCheck {
    fn name(&self) -> &'static str {
        PERMISSIONS
    }

    fn fallback_fix(&self) -> &'static str {
        "Fix ownership and permissions of the .beads directory"
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let dir = ctx.metadata.path();

        let probe = Builder::new()
            .prefix(PROBE_PREFIX)
            .tempfile_in(dir)
            .and_then(|mut probe| {
                probe.write_all(b"ok")?;
                probe.as_file().sync_all()?;
                Ok(probe)
            });

        let outcome = probe.and_then(|probe| probe.close());

        let result = match outcome {
            Ok(()) => CheckResult::ok(PERMISSIONS, "All permissions OK"),
            Err(err) => CheckResult::error(
                PERMISSIONS,
                format!("Cannot write to .beads directory: {}", err),
                Self::fix(ctx),
            )
            .with_detail(format!("Write probe in {} failed", dir.display())),
        };

        Ok(result)
    }
}
