//! Tracing setup.
//!
//! Stdout is the game screen, so logs only go to a file, and only when
//! `TUI_2048_LOG_PATH` is set. The filter comes from `RUST_LOG` (default `info`).

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::config::GameConfig;

/// Install the global subscriber. Returns `false` when logging is disabled.
pub fn init(config: &GameConfig) -> Result<bool> {
    let Some(path) = config.log_path.as_deref() else {
        return Ok(false);
    };

    let file = File::create(path).with_context(|| format!("creating log file {}", path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();

    Ok(true)
}
