//! File-based tracing setup. The terminal belongs to the UI, so logs go to
//! `moodboard.log` in the data directory.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use color_eyre::eyre::eyre;
use tracing_subscriber::EnvFilter;

/// Log file name inside the data directory.
pub const LOG_FILE: &str = "moodboard.log";

/// Environment variable that overrides the configured log filter.
pub const LOG_ENV: &str = "MOODBOARD_LOG";

/// Install the global subscriber, appending to the log file in `dir`.
pub fn init(dir: &Path, default_level: &str) -> color_eyre::Result<()> {
    fs::create_dir_all(dir)?;
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))?;

    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| eyre!(err))
}
