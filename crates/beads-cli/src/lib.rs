// NOTE: bd-doctor Rationale
//
// Why a separate binary (not a `bd` subcommand here)?
// - The checks only read the workspace, so they need no issue-store writer
// - The report contract (JSON shape, exit status) is testable end to end
//
// Why is the exit status derived from the report?
// - Scripts and CI gate on `bd-doctor`; warnings must not fail a build
// - CLI errors (bad flags, unreadable config) also exit 1

mod args;
mod commands;
pub mod logging;
pub mod presentation;

pub use args::{Cli, LogLevel, OutputFormat};
pub use commands::run;
