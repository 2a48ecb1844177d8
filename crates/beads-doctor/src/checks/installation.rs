use beads_store::BEADS_DIR;
use beads_types::CheckResult;

use super::INSTALLATION;
use crate::{Check, CheckContext, Result};

const INIT_FIX: &str = "Run 'bd init' in the workspace root to create the .beads directory";

/// `.beads` exists directly under the root. Contents are not inspected.
pub struct InstallationCheck;

impl Check for InstallationCheck {
    fn name(&self) -> &'static str {
        INSTALLATION
    }

    fn fallback_fix(&self) -> &'static str {
        INIT_FIX
    }

    fn evaluate(&self, ctx: &CheckContext<'_>) -> Result<CheckResult> {
        let dir = ctx.metadata.path();

        if dir.is_dir() {
            return Ok(CheckResult::ok(
                INSTALLATION,
                format!("{} directory found", BEADS_DIR),
            ));
        }

        let result = if dir.exists() {
            CheckResult::error(
                INSTALLATION,
                format!("{} exists but is not a directory", BEADS_DIR),
                format!(
                    "Remove or rename the file at {}, then run 'bd init'",
                    dir.display()
                ),
            )
        } else {
            CheckResult::error(
                INSTALLATION,
                format!("No {} directory found", BEADS_DIR),
                INIT_FIX,
            )
        };

        Ok(result.with_detail(format!("Looked for {}", dir.display())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DoctorConfig;
    use beads_types::Status;
    use tempfile::TempDir;

    #[test]
    fn test_file_named_beads_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join(".beads"), b"").unwrap();

        let config = DoctorConfig::default();
        let ctx = CheckContext::new(temp_dir.path(), &config, "0.21.0");
        let result = InstallationCheck.evaluate(&ctx).unwrap();

        assert_eq!(result.status, Status::Error);
        assert!(result.message.contains("not a directory"));
        assert!(!result.fix().is_empty());
    }
}
