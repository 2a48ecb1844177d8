use std::path::Path;
use tracing::{debug, info, instrument, warn};

use beads_types::{CheckResult, DiagnosticReport};

use crate::checks::default_checks;
use crate::{Check, CheckContext, DoctorConfig};

/// Version of the running tool, reported as `toolVersion` and used as the
/// expected database schema version.
pub const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Runs every check in a fixed order and folds the results into a report.
pub struct Doctor {
    config: DoctorConfig,
    tool_version: String,
    checks: Vec<Box<dyn Check>>,
}

impl Default for Doctor {
    fn default() -> Self {
        Self::new(DoctorConfig::default())
    }
}

impl Doctor {
    pub fn new(config: DoctorConfig) -> Self {
        Self {
            config,
            tool_version: TOOL_VERSION.to_string(),
            checks: default_checks(),
        }
    }

    /// Override the version the database is compared against.
    pub fn with_tool_version(mut self, version: impl Into<String>) -> Self {
        self.tool_version = version.into();
        self
    }

    /// Check names in report order.
    pub fn check_names(&self) -> Vec<&'static str> {
        self.checks.iter().map(|c| c.name()).collect()
    }

    /// Run all checks against `root`. Never fails: problems are check results.
    #[instrument(skip(self), fields(root = %root.display()))]
    pub fn run(&self, root: &Path) -> DiagnosticReport {
        let ctx = CheckContext::new(root, &self.config, &self.tool_version);

        let results: Vec<CheckResult> = self
            .checks
            .iter()
            .map(|check| evaluate(check.as_ref(), &ctx))
            .collect();

        let report = DiagnosticReport::new(
            root.display().to_string(),
            self.tool_version.clone(),
            results,
        );

        info!(
            overall_ok = report.overall_ok,
            errors = report.error_count(),
            warnings = report.warning_count(),
            "Diagnostics complete"
        );

        report
    }

    /// Run a single check by name; `None` if no check has that name.
    pub fn run_check(&self, name: &str, root: &Path) -> Option<CheckResult> {
        let check = self.checks.iter().find(|c| c.name() == name)?;
        let ctx = CheckContext::new(root, &self.config, &self.tool_version);
        Some(evaluate(check.as_ref(), &ctx))
    }
}

/// Run all checks against `root` with the default configuration.
pub fn run_diagnostics(root: &Path) -> DiagnosticReport {
    Doctor::default().run(root)
}

fn evaluate(check: &dyn Check, ctx: &CheckContext<'_>) -> CheckResult {
    match check.evaluate(ctx) {
        Ok(result) => {
            debug!(check = check.name(), status = %result.status, message = %result.message);
            result
        }
        Err(err) => {
            warn!(check = check.name(), error = %err, "Check could not complete");
            CheckResult::error(
                check.name(),
                format!("Check failed: {}", err),
                check.fallback_fix(),
            )
            .with_detail(format!("While inspecting {}", ctx.metadata.path().display()))
        }
    }
}
