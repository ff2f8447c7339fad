//! # Error Types
//!
//! Custom error types for Starbase Bridge using `thiserror`.

use thiserror::Error;

/// Main error type for Starbase Bridge
#[derive(Debug, Error)]
pub enum StarbaseBridgeError {
    /// Engine index outside the decodable bitmask range
    #[error("invalid engine index {index}: engine numbers range from 1 to {limit}")]
    InvalidEngineIndex { index: u32, limit: u32 },

    /// Telemetry snapshot decode errors
    #[error("snapshot decode error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Starbase Bridge
pub type Result<T> = std::result::Result<T, StarbaseBridgeError>;
