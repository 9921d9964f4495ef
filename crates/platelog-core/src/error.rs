//! Error types for Platelog.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Not found: {0}")]
    NotFound(String),

    /// A calorie value that is not a finite, strictly positive number.
    #[error("Invalid calories per portion: {0} (expected a positive number)")]
    InvalidCalories(f64),

    /// A food name that normalizes to nothing and would match every segment.
    #[error("Invalid food name: {0:?}")]
    InvalidFoodName(String),

    /// A resolution transition requested from a state that does not allow it.
    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Whether the caller can recover by asking the user again.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidCalories(_) | Self::InvalidFoodName(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
