use std::path::Path;

use beads_store::MetadataDir;
use beads_types::CheckResult;

use crate::{DoctorConfig, Result};

/// Inputs shared by every check in one diagnostics pass.
///
/// Holds only what the caller supplied; nothing here is derived from
/// another check's outcome.
#[derive(Debug, Clone)]
pub struct CheckContext<'a> {
    pub root: &'a Path,
    pub metadata: MetadataDir,
    pub config: &'a DoctorConfig,
    pub tool_version: &'a str,
}

impl<'a> CheckContext<'a> {
    pub fn new(root: &'a Path, config: &'a DoctorConfig, tool_version: &'a str) -> Self {
        Self {
            root,
            metadata: MetadataDir::for_root(root),
            config,
            tool_version,
        }
    }
}

/// One independent diagnostic evaluation.
pub trait Check: Send + Sync {
    /// Name shown in the report.
    fn name(&self) -> &'static str;

    /// Remediation used when [`Check::evaluate`] itself fails.
    fn fallback_fix(&self) -> &'static str;

    /// Inspect the workspace. An `Err` means the probe could not complete;
    /// the orchestrator turns it into an `error` result for this check.
    fn evaluate(&self, ctx: &CheckContext<'_>) -> Result<CheckResult>;
}
