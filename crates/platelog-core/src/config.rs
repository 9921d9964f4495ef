//! Configuration and data directory management.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default number of unknown foods collected per estimation run.
pub const DEFAULT_MAX_UNKNOWN: usize = 5;

/// Paths to all Platelog data locations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataPaths {
    /// Root data directory (e.g., `data/`).
    pub root: PathBuf,
    /// SQLite key-value database (`data/platelog.db`).
    pub db_file: PathBuf,
    /// JSON exports (`data/exports/`).
    pub exports: PathBuf,
}

impl DataPaths {
    /// Create data paths from a root directory. Creates directories if needed.
    pub fn new(root: impl AsRef<Path>) -> std::io::Result<Self> {
        let root = root.as_ref().to_path_buf();
        let paths = Self {
            db_file: root.join("platelog.db"),
            exports: root.join("exports"),
            root,
        };
        paths.ensure_dirs()?;
        Ok(paths)
    }

    fn ensure_dirs(&self) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.root)?;
        std::fs::create_dir_all(&self.exports)?;
        Ok(())
    }
}

/// Top-level Platelog configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatelogConfig {
    /// Data directory paths.
    pub data_paths: DataPaths,
    /// Maximum number of unknown foods surfaced by one estimation run.
    pub max_unknown: usize,
}

impl PlatelogConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env(data_dir: impl AsRef<Path>) -> std::io::Result<Self> {
        let max_unknown = parse_max_unknown(std::env::var("PLATELOG_MAX_UNKNOWN").ok().as_deref());
        let data_paths = DataPaths::new(data_dir)?;

        Ok(Self {
            data_paths,
            max_unknown,
        })
    }
}

fn parse_max_unknown(raw: Option<&str>) -> usize {
    match raw.and_then(|v| v.trim().parse::<usize>().ok()) {
        Some(n) if n > 0 => n,
        Some(_) | None => {
            if let Some(v) = raw {
                tracing::warn!("Ignoring PLATELOG_MAX_UNKNOWN={:?}, using {}", v, DEFAULT_MAX_UNKNOWN);
            }
            DEFAULT_MAX_UNKNOWN
        }
    }
}
