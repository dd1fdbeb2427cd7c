//! Error types for the dashboard helpers

use thiserror::Error;

/// Dashboard error type
#[derive(Error, Debug)]
pub enum DashboardError {
    /// Backing key-value store refused a read or write
    #[error("Storage error: {0}")]
    Storage(String),

    /// Stored or supplied JSON could not be (de)serialized
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure on the host
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// No audio output could be created
    #[error("Audio unavailable: {0}")]
    AudioUnavailable(String),
}

/// Result type alias for dashboard operations
pub type Result<T> = std::result::Result<T, DashboardError>;
