//! TestWorkspace pattern for declarative test setup.
//!
//! Provides a fluent interface for:
//! - Creating an isolated workspace root with or without `.beads`
//! - Placing database and JSONL files with controlled contents and mtimes
//! - Executing the `bd-doctor` binary against the workspace

use anyhow::{Context, Result};
use assert_cmd::Command;
use filetime::FileTime;
use rusqlite::{Connection, params};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::time::{Duration, SystemTime};
use tempfile::TempDir;

use beads_store::{BEADS_DIR, VERSION_KEY};

/// Isolated workspace for doctor tests.
///
/// # Example
/// ```no_run
/// use beads_testing::TestWorkspace;
///
/// let ws = TestWorkspace::new().with_beads_dir();
/// ws.touch("issues.jsonl").unwrap();
///
/// let result = ws.run(&["--format", "json"]).unwrap();
/// assert!(result.success());
/// ```
pub struct TestWorkspace {
    temp_dir: TempDir,
    root: PathBuf,
    env_vars: HashMap<String, String>,
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}

impl TestWorkspace {
    /// Create an empty workspace root (no `.beads` directory).
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let root = temp_dir.path().join("workspace");
        std::fs::create_dir_all(&root).expect("Failed to create workspace root");

        Self {
            temp_dir,
            root,
            env_vars: HashMap::new(),
        }
    }

    /// Create the `.beads` metadata directory.
    pub fn with_beads_dir(self) -> Self {
        std::fs::create_dir_all(self.beads_dir()).expect("Failed to create .beads dir");
        self
    }

    /// Create an empty file inside `.beads` (builder form of [`Self::touch`]).
    pub fn with_file(self, name: &str) -> Self {
        self.touch(name).expect("Failed to create file");
        self
    }

    /// Create a database inside `.beads` carrying `version` as its marker.
    pub fn with_database(self, version: &str) -> Self {
        self.create_database(beads_store::CANONICAL_DB_NAME, Some(version))
            .expect("Failed to create database");
        self
    }

    /// Set an environment variable for CLI execution.
    pub fn with_env(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.env_vars.insert(key.into(), value.into());
        self
    }

    /// Workspace root (what the doctor is pointed at).
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Temp directory root; the workspace lives one level below it.
    pub fn temp_dir(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn beads_dir(&self) -> PathBuf {
        self.root.join(BEADS_DIR)
    }

    /// Path of `name` inside `.beads`.
    pub fn path(&self, name: &str) -> PathBuf {
        self.beads_dir().join(name)
    }

    pub fn touch(&self, name: &str) -> Result<PathBuf> {
        self.write(name, "")
    }

    pub fn write(&self, name: &str, contents: &str) -> Result<PathBuf> {
        let path = self.path(name);
        std::fs::write(&path, contents)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(path)
    }

    /// Write JSONL with one `{"id": ...}` record per issue id.
    pub fn write_jsonl(&self, name: &str, issue_ids: &[&str]) -> Result<PathBuf> {
        let mut contents = String::new();
        for id in issue_ids {
            contents.push_str(&serde_json::json!({ "id": id, "title": id }).to_string());
            contents.push('\n');
        }
        self.write(name, &contents)
    }

    /// Create a SQLite database laid out like the CLI's: a `metadata` table,
    /// optionally holding the version marker, and an `issues` table.
    pub fn create_database(&self, name: &str, version: Option<&str>) -> Result<PathBuf> {
        let path = self.path(name);
        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to create database: {}", path.display()))?;

        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS metadata (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL
            );

            CREATE TABLE IF NOT EXISTS issues (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL
            );
            "#,
        )?;

        if let Some(version) = version {
            conn.execute(
                "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
                params![VERSION_KEY, version],
            )?;
        }

        Ok(path)
    }

    /// Insert one row per issue id into the `issues` table of database `name`.
    pub fn insert_issues(&self, name: &str, issue_ids: &[&str]) -> Result<()> {
        let path = self.path(name);
        let conn = Connection::open(&path)
            .with_context(|| format!("Failed to open database: {}", path.display()))?;

        for id in issue_ids {
            conn.execute(
                "INSERT INTO issues (id, title) VALUES (?1, ?2)",
                params![id, id],
            )?;
        }

        Ok(())
    }

    /// Set the modification time of `name` to `secs_ago` seconds before now.
    pub fn set_modified_ago(&self, name: &str, secs_ago: u64) -> Result<()> {
        let time = SystemTime::now() - Duration::from_secs(secs_ago);
        self.set_modified(name, time)
    }

    pub fn set_modified(&self, name: &str, time: SystemTime) -> Result<()> {
        let path = self.path(name);
        filetime::set_file_mtime(&path, FileTime::from_system_time(time))
            .with_context(|| format!("Failed to set mtime on {}", path.display()))?;
        Ok(())
    }

    /// Every regular file currently in `.beads`, sorted by name.
    pub fn beads_files(&self) -> Result<Vec<String>> {
        Ok(beads_store::list_file_names(&self.beads_dir())?)
    }

    /// Configure a CLI command with this workspace's settings.
    ///
    /// The caller provides the base command (e.g. from `cargo_bin_cmd!("bd-doctor")`).
    /// Ambient configuration from the developer's shell is cleared so runs
    /// only see what the test sets.
    pub fn configure_command<'a>(&self, cmd: &'a mut Command) -> &'a mut Command {
        cmd.current_dir(&self.root)
            .env_remove("BD_DOCTOR_CONFIG")
            .env_remove("RUST_LOG")
            .arg("--no-color");

        for (key, value) in &self.env_vars {
            cmd.env(key, value);
        }

        cmd
    }

    /// Execute `bd-doctor` against this workspace and capture its output.
    ///
    /// Uses `Command::cargo_bin()`, which requires the binary to be built
    /// by the surrounding `cargo test` run.
    #[allow(deprecated)]
    pub fn run(&self, args: &[&str]) -> Result<CliResult> {
        let mut cmd = Command::cargo_bin("bd-doctor")
            .map_err(|e| anyhow::anyhow!("Failed to find bd-doctor binary: {}", e))?;

        self.configure_command(&mut cmd);
        cmd.args(args);

        let output = cmd.output()?;

        Ok(CliResult {
            status: output.status,
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        })
    }
}

/// Captured output of one CLI run.
#[derive(Debug)]
pub struct CliResult {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

impl CliResult {
    pub fn success(&self) -> bool {
        self.status.success()
    }

    pub fn exit_code(&self) -> Option<i32> {
        self.status.code()
    }

    /// Parse stdout as JSON.
    pub fn json(&self) -> Result<serde_json::Value> {
        serde_json::from_str(&self.stdout)
            .with_context(|| format!("stdout is not JSON:\n{}", self.stdout))
    }
}
