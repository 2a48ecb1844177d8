//! Testing infrastructure for beads doctor tests.
//!
//! - `TestWorkspace`: Fluent builder for an isolated workspace on disk
//! - `assertions`: Checks over the JSON report emitted by the CLI

pub mod assertions;
pub mod workspace;

pub use workspace::{CliResult, TestWorkspace};
