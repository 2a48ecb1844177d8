use beads_types::{DiagnosticReport, Status};

use super::view_models::{CheckLineViewModel, ReportViewModel, StatusBadge};

pub fn present_report(report: &DiagnosticReport) -> ReportViewModel {
    let errors = report.error_count();
    let warnings = report.warning_count();

    let badge = if errors > 0 {
        StatusBadge::new(
            Status::Error,
            format!("{} of {} checks failed", errors, report.checks.len()),
        )
    } else if warnings > 0 {
        StatusBadge::new(
            Status::Warning,
            format!("All checks passed with {} {}", warnings, plural(warnings, "warning")),
        )
    } else {
        StatusBadge::new(Status::Ok, "All checks passed")
    };

    let checks = report
        .checks
        .iter()
        .map(|check| CheckLineViewModel {
            name: check.name.clone(),
            status: check.status,
            message: check.message.clone(),
            detail: check.detail.clone(),
            fix: check.fix.clone(),
        })
        .collect();

    ReportViewModel {
        badge,
        path: report.path.clone(),
        tool_version: report.tool_version.clone(),
        checks,
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        noun.to_string()
    } else {
        format!("{}s", noun)
    }
}
