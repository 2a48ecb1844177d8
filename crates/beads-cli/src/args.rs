use clap::{Parser, ValueEnum};
use std::fmt;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bd-doctor")]
#[command(about = "Check the health of a beads workspace", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace root to inspect (defaults to the current directory)
    pub path: Option<PathBuf>,

    #[arg(long, default_value = "plain")]
    pub format: OutputFormat,

    /// Config file (overrides BD_DOCTOR_CONFIG and .beads/doctor.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log level for stderr diagnostics; RUST_LOG takes precedence
    #[arg(long, default_value = "warn")]
    pub log_level: LogLevel,

    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    Plain,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Plain => write!(f, "plain"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}
