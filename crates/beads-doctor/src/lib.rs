// NOTE: Doctor Architecture Rationale
//
// Why a flat list of checks (not a dependency graph)?
// - No check reads another check's result; each probes the filesystem itself
// - Installation runs first only so the report reads top-down
// - Every check always runs, so one pass surfaces every problem
//
// Why convert evaluation errors into check results?
// - A broken database must not hide a permissions problem
// - The orchestrator owns the conversion, so checks can use `?` freely

pub mod check;
pub mod checks;
pub mod config;
pub mod doctor;
pub mod error;

pub use check::{Check, CheckContext};
pub use config::{CONFIG_ENV_VAR, CONFIG_FILE_NAME, DoctorConfig, SchemaPolicy, SyncPolicy};
pub use doctor::{Doctor, TOOL_VERSION, run_diagnostics};
pub use error::{Error, Result};

pub use beads_types::{CheckResult, DiagnosticReport, Status};
