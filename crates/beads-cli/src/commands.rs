use anyhow::{Context, Result};
use is_terminal::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::debug;

use beads_doctor::{Doctor, DoctorConfig};

use crate::presentation::ConsoleRenderer;
use crate::{Cli, OutputFormat, logging};

/// Run diagnostics and render the report. Returns the process exit status.
pub fn run(cli: Cli) -> Result<i32> {
    logging::init(cli.log_level);

    let root = resolve_root(cli.path.as_deref())?;
    let config = DoctorConfig::load(cli.config.as_deref(), &root)
        .context("Failed to load doctor configuration")?;
    debug!(root = %root.display(), ?config, "Resolved workspace");

    let report = Doctor::new(config).run(&root);

    let color =
        cli.format == OutputFormat::Plain && !cli.no_color && std::io::stdout().is_terminal();
    ConsoleRenderer::new(cli.format, color).render(&report)?;

    Ok(report.exit_code())
}

/// Absolute form of the workspace path. Falls back to joining onto the
/// current directory when the path cannot be canonicalized (e.g. missing).
fn resolve_root(path: Option<&Path>) -> Result<PathBuf> {
    let cwd = std::env::current_dir().context("Failed to determine current directory")?;

    let path = match path {
        Some(p) if p.is_absolute() => p.to_path_buf(),
        Some(p) => cwd.join(p),
        None => cwd,
    };

    Ok(path.canonicalize().unwrap_or(path))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_root_keeps_missing_absolute_path() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("does-not-exist");

        assert_eq!(resolve_root(Some(missing.as_path())).unwrap(), missing);
    }

    #[test]
    fn test_resolve_root_is_absolute() {
        assert!(resolve_root(None).unwrap().is_absolute());
        assert!(resolve_root(Some(Path::new("relative/dir"))).unwrap().is_absolute());
    }
}
