//! Stderr logging bootstrap for the CLI binary.

use anyhow::{Context, Result};
use flexi_logger::{Logger, LoggerHandle};

/// Start stderr logging. `RUST_LOG` overrides the verbosity flag.
/// The returned handle must stay alive for the duration of the process.
pub fn init(verbose: bool) -> Result<LoggerHandle> {
    let default_level = if verbose { "debug" } else { "warn" };
    Logger::try_with_env_or_str(default_level)
        .context("Invalid log specification")?
        .log_to_stderr()
        .start()
        .context("Failed to start logger")
}
