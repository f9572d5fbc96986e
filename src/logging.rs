//! File logging. The terminal belongs to the game, so log lines go to a
//! file instead of stderr.

use anyhow::{anyhow, Context};
use directories::ProjectDirs;
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::filter::EnvFilter;

/// `flappy.log` in the platform data directory, or the temp dir if the
/// platform has none.
pub fn default_log_path() -> PathBuf {
    ProjectDirs::from("", "", "flappy")
        .map(|dirs| dirs.data_dir().join("flappy.log"))
        .unwrap_or_else(|| std::env::temp_dir().join("flappy.log"))
}

/// Install the global subscriber. `RUST_LOG` overrides the default `info`.
pub fn init(path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating log directory {}", parent.display()))?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow!("installing log subscriber: {}", e))
}
