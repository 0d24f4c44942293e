//! Tracing subscriber setup
//!
//! The filter comes from `BUDGET_LOG` when set, otherwise `warn` (or `debug`
//! with `--verbose`). One-shot commands log to stderr; the interactive form
//! owns the terminal, so it logs to a file instead.

use std::fs::OpenOptions;
use std::path::Path;

use tracing_subscriber::EnvFilter;

use crate::error::{BudgetError, BudgetResult};

/// Environment variable holding the log filter directive
pub const LOG_ENV_VAR: &str = "BUDGET_LOG";

/// Where log output goes
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Filter used when `BUDGET_LOG` is unset or invalid
pub fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}

/// Install the global subscriber
pub fn init_logging(verbose: bool, target: LogTarget<'_>) -> BudgetResult<()> {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let result = match target {
        LogTarget::Stderr => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init(),
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(std::sync::Mutex::new(file))
                .try_init()
        }
    };

    result.map_err(|e| BudgetError::Config(format!("Failed to initialize logging: {}", e)))
}
