//! Custom assertions over the doctor's JSON report.
//!
//! Provides high-level assertions that make CLI tests more readable:
//! - Overall verdict
//! - Per-check status lookup

use anyhow::{Context, Result};
use serde_json::Value;

/// Assert the report's `overallOK` flag.
pub fn assert_overall_ok(json: &Value, expected: bool) -> Result<()> {
    let actual = json["overallOK"]
        .as_bool()
        .context("Expected boolean 'overallOK' in report")?;

    if actual != expected {
        anyhow::bail!("Expected overallOK = {}, got {}", expected, actual);
    }

    Ok(())
}

/// Status string of the check called `name`.
pub fn check_status<'a>(json: &'a Value, name: &str) -> Result<&'a str> {
    let checks = json["checks"]
        .as_array()
        .context("Expected 'checks' array in report")?;

    let check = checks
        .iter()
        .find(|c| c["name"] == name)
        .with_context(|| format!("No check named '{}' in report", name))?;

    check["status"]
        .as_str()
        .with_context(|| format!("Check '{}' has no status", name))
}

/// Assert that the check called `name` reported `expected`.
pub fn assert_check_status(json: &Value, name: &str, expected: &str) -> Result<()> {
    let actual = check_status(json, name)?;
    if actual != expected {
        anyhow::bail!(
            "Expected check '{}' to be {}, got {}",
            name,
            expected,
            actual
        );
    }
    Ok(())
}

/// Check names in report order.
pub fn check_names(json: &Value) -> Result<Vec<String>> {
    let checks = json["checks"]
        .as_array()
        .context("Expected 'checks' array in report")?;

    checks
        .iter()
        .map(|c| {
            c["name"]
                .as_str()
                .map(str::to_string)
                .context("Check without a name")
        })
        .collect()
}
