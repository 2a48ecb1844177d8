use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use beads_store::MetadataDir;

/// Environment variable pointing at an explicit config file.
pub const CONFIG_ENV_VAR: &str = "BD_DOCTOR_CONFIG";

/// Config file looked up inside `.beads` when nothing else is given.
pub const CONFIG_FILE_NAME: &str = "doctor.toml";

/// Resolve the config file path based on priority:
/// 1. Explicit path (`--config`)
/// 2. BD_DOCTOR_CONFIG environment variable
/// 3. `<root>/.beads/doctor.toml`
pub fn resolve_config_path(explicit_path: Option<&Path>, root: &Path) -> PathBuf {
    if let Some(path) = explicit_path {
        return path.to_path_buf();
    }

    if let Some(env_path) = std::env::var_os(CONFIG_ENV_VAR) {
        return PathBuf::from(env_path);
    }

    MetadataDir::for_root(root).join(CONFIG_FILE_NAME)
}

/// How far a database's schema version may drift from the CLI's.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SchemaPolicy {
    /// Minor releases (same major) a database may trail before the check errors.
    pub max_minor_lag: u64,
}

impl Default for SchemaPolicy {
    fn default() -> Self {
        Self { max_minor_lag: 1 }
    }
}

/// Staleness tolerance between the database and its JSONL mirror.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncPolicy {
    /// Modification-time skew, in seconds, that still counts as in sync.
    pub tolerance_secs: u64,
}

impl Default for SyncPolicy {
    fn default() -> Self {
        Self {
            tolerance_secs: 300,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct DoctorConfig {
    #[serde(default)]
    pub schema: SchemaPolicy,
    #[serde(default)]
    pub sync: SyncPolicy,
}

impl DoctorConfig {
    /// Load the config for `root`, falling back to defaults when no file exists.
    pub fn load(explicit_path: Option<&Path>, root: &Path) -> Result<Self> {
        let path = resolve_config_path(explicit_path, root);

        // An explicitly named file has to exist
        if explicit_path.is_some() && !path.exists() {
            return Err(Error::Config(format!(
                "config file not found: {}",
                path.display()
            )));
        }

        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: DoctorConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = DoctorConfig::default();
        assert_eq!(config.schema.max_minor_lag, 1);
        assert_eq!(config.sync.tolerance_secs, 300);
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config = DoctorConfig::load_from(&temp_dir.path().join("nonexistent.toml"))?;
        assert_eq!(config, DoctorConfig::default());
        Ok(())
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("doctor.toml");
        std::fs::write(&config_path, "[schema]\nmax_minor_lag = 3\n")?;

        let config = DoctorConfig::load_from(&config_path)?;
        assert_eq!(config.schema.max_minor_lag, 3);
        assert_eq!(config.sync, SyncPolicy::default());
        Ok(())
    }

    #[test]
    fn test_invalid_file_is_config_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("doctor.toml");
        std::fs::write(&config_path, "[sync]\ntolerance_secs = \"soon\"\n")?;

        let err = DoctorConfig::load_from(&config_path).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
        assert!(err.to_string().contains("doctor.toml"));
        Ok(())
    }

    #[test]
    fn test_workspace_config_is_found() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let beads_dir = temp_dir.path().join(".beads");
        std::fs::create_dir_all(&beads_dir)?;
        std::fs::write(beads_dir.join("doctor.toml"), "[sync]\ntolerance_secs = 5\n")?;

        let path = resolve_config_path(None, temp_dir.path());
        let config = DoctorConfig::load_from(&path)?;
        assert_eq!(config.sync.tolerance_secs, 5);
        Ok(())
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let missing = temp_dir.path().join("missing.toml");

        let err = DoctorConfig::load(Some(&missing), temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains("config file not found"));
        Ok(())
    }
}
