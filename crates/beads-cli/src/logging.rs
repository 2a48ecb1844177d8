use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use crate::LogLevel;

/// Install the stderr subscriber. `RUST_LOG` wins over `level`.
///
/// Stdout is reserved for the report, so JSON output stays parseable
/// at any log level.
pub fn init(level: LogLevel) {
    let default_level = level.to_string();
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .or_else(|_| EnvFilter::try_new(&default_level))
                .unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .try_init();
}
