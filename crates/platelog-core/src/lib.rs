//! Platelog Core: error type, data paths, configuration.

pub mod config;
pub mod error;

pub use config::{DataPaths, PlatelogConfig, DEFAULT_MAX_UNKNOWN};
pub use error::{Error, Result};
