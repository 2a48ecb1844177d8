use anyhow::Result;
use owo_colors::OwoColorize;
use std::io::Write;

use beads_types::{DiagnosticReport, Status};

use super::presenter::present_report;
use super::view_models::ReportViewModel;
use crate::OutputFormat;

pub struct ConsoleRenderer {
    format: OutputFormat,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(format: OutputFormat, color: bool) -> Self {
        Self { format, color }
    }

    pub fn render(&self, report: &DiagnosticReport) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.render_to(&mut out, report)?;
        out.flush()?;
        Ok(())
    }

    pub fn render_to<W: Write>(&self, out: &mut W, report: &DiagnosticReport) -> Result<()> {
        match self.format {
            OutputFormat::Json => {
                writeln!(out, "{}", serde_json::to_string_pretty(report)?)?;
            }
            OutputFormat::Plain => self.render_plain(out, &present_report(report))?,
        }
        Ok(())
    }

    fn render_plain<W: Write>(&self, out: &mut W, vm: &ReportViewModel) -> Result<()> {
        writeln!(
            out,
            "{} {}",
            self.paint(vm.badge.level, vm.badge.icon()),
            self.bold(&vm.badge.label)
        )?;
        writeln!(out)?;
        writeln!(out, "Workspace: {}", vm.path)?;
        writeln!(out, "bd version: {}", vm.tool_version)?;
        writeln!(out)?;

        for check in &vm.checks {
            writeln!(
                out,
                "  {} {}: {}",
                self.paint(check.status, check.icon()),
                self.bold(&check.name),
                check.message
            )?;
            if let Some(detail) = &check.detail {
                writeln!(out, "      {}", self.dim(detail))?;
            }
            if let Some(fix) = &check.fix {
                writeln!(out, "      Fix: {}", self.cyan(fix))?;
            }
        }

        Ok(())
    }

    fn paint(&self, status: Status, text: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        match status {
            Status::Ok => text.green().to_string(),
            Status::Warning => text.yellow().to_string(),
            Status::Error => text.red().to_string(),
        }
    }

    fn bold(&self, text: &str) -> String {
        if self.color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    fn cyan(&self, text: &str) -> String {
        if self.color {
            text.cyan().to_string()
        } else {
            text.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use beads_types::CheckResult;

    fn sample() -> DiagnosticReport {
        DiagnosticReport::new(
            "/repo",
            "0.21.0",
            vec![
                CheckResult::ok("Installation", ".beads directory found"),
                CheckResult::warning("Database Files", "Multiple database files found (2)", "Keep beads.db")
                    .with_detail("beads.db, old.db"),
            ],
        )
    }

    fn render(format: OutputFormat, color: bool) -> String {
        let mut out = Vec::new();
        ConsoleRenderer::new(format, color)
            .render_to(&mut out, &sample())
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output_lists_checks() {
        let text = render(OutputFormat::Plain, false);

        assert!(text.starts_with("⚠ All checks passed with 1 warning\n"));
        assert!(text.contains("Workspace: /repo"));
        assert!(text.contains("  ✓ Installation: .beads directory found\n"));
        assert!(text.contains("  ⚠ Database Files: Multiple database files found (2)\n"));
        assert!(text.contains("      beads.db, old.db\n"));
        assert!(text.contains("      Fix: Keep beads.db\n"));
    }

    #[test]
    fn test_plain_output_without_color_has_no_escapes() {
        assert!(!render(OutputFormat::Plain, false).contains('\u{1b}'));
        assert!(render(OutputFormat::Plain, true).contains('\u{1b}'));
    }

    #[test]
    fn test_json_output_is_the_report() {
        let text = render(OutputFormat::Json, true);
        let parsed: DiagnosticReport = serde_json::from_str(&text).unwrap();

        assert_eq!(parsed, sample());
        assert!(!text.contains('\u{1b}'));
    }
}
