use serde::{Deserialize, Serialize};

use crate::{CheckResult, Status};

/// Output of one diagnostics pass over a workspace.
///
/// Deserializing recomputes `overallOK` from the checks, so a report read
/// back from JSON always agrees with its own check statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ReportFields")]
pub struct DiagnosticReport {
    pub path: String,
    #[serde(rename = "toolVersion")]
    pub tool_version: String,
    #[serde(rename = "overallOK")]
    pub overall_ok: bool,
    pub checks: Vec<CheckResult>,
}

#[derive(Deserialize)]
struct ReportFields {
    path: String,
    #[serde(rename = "toolVersion")]
    tool_version: String,
    checks: Vec<CheckResult>,
}

impl From<ReportFields> for DiagnosticReport {
    fn from(fields: ReportFields) -> Self {
        DiagnosticReport::new(fields.path, fields.tool_version, fields.checks)
    }
}

impl DiagnosticReport {
    /// Assemble a report; `overall_ok` is true iff no check reported `error`.
    pub fn new(
        path: impl Into<String>,
        tool_version: impl Into<String>,
        checks: Vec<CheckResult>,
    ) -> Self {
        let overall_ok = checks.iter().all(|c| !c.status.is_error());
        Self {
            path: path.into(),
            tool_version: tool_version.into(),
            overall_ok,
            checks,
        }
    }

    pub fn worst_status(&self) -> Status {
        Status::worst(self.checks.iter().map(|c| c.status))
    }

    pub fn error_count(&self) -> usize {
        self.count(Status::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Status::Warning)
    }

    /// Process exit status: 0 when overall ok, 1 otherwise.
    pub fn exit_code(&self) -> i32 {
        if self.overall_ok { 0 } else { 1 }
    }

    pub fn check(&self, name: &str) -> Option<&CheckResult> {
        self.checks.iter().find(|c| c.name == name)
    }

    fn count(&self, status: Status) -> usize {
        self.checks.iter().filter(|c| c.status == status).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_checks() -> Vec<CheckResult> {
        vec![
            CheckResult::ok("Installation", ".beads directory found"),
            CheckResult::warning("JSONL Files", "Multiple JSONL files", "Keep issues.jsonl"),
        ]
    }

    #[test]
    fn test_warnings_do_not_fail_overall() {
        let report = DiagnosticReport::new("/tmp/ws", "0.21.0", sample_checks());
        assert!(report.overall_ok);
        assert_eq!(report.worst_status(), Status::Warning);
        assert_eq!(report.warning_count(), 1);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_error_fails_overall() {
        let mut checks = sample_checks();
        checks.push(CheckResult::error("Permissions", "not writable", "chmod u+w .beads"));

        let report = DiagnosticReport::new("/tmp/ws", "0.21.0", checks);
        assert!(!report.overall_ok);
        assert_eq!(report.error_count(), 1);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_field_names() {
        let report = DiagnosticReport::new("/tmp/ws", "0.21.0", sample_checks());
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["path"], "/tmp/ws");
        assert_eq!(json["toolVersion"], "0.21.0");
        assert_eq!(json["overallOK"], true);
        assert_eq!(json["checks"][1]["fix"], "Keep issues.jsonl");
    }

    #[test]
    fn test_deserialize_recomputes_overall_ok() {
        let json = r#"{
            "path": "/tmp/ws",
            "toolVersion": "0.21.0",
            "overallOK": true,
            "checks": [
                {"name": "Permissions", "status": "error", "message": "not writable", "fix": "chmod u+w .beads"}
            ]
        }"#;

        let report: DiagnosticReport = serde_json::from_str(json).unwrap();
        assert!(!report.overall_ok);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_round_trip_keeps_every_field() {
        let report = DiagnosticReport::new("/tmp/ws", "0.21.0", sample_checks());
        let json = serde_json::to_string(&report).unwrap();

        let parsed: DiagnosticReport = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, report);
    }

    #[test]
    fn test_check_lookup() {
        let report = DiagnosticReport::new("/tmp/ws", "0.21.0", sample_checks());
        assert!(report.check("JSONL Files").is_some());
        assert!(report.check("Missing").is_none());
    }
}
