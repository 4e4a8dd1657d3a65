//! Tuner error types

use thiserror::Error;

/// Errors raised while loading hardware capabilities or generating candidates
#[derive(Debug, Error)]
pub enum TuneError {
    #[error("Unsupported target_device: {0}")]
    UnsupportedDevice(String),

    #[error("Unsupported preset option: {0}")]
    UnsupportedPreset(String),

    #[error("Unknown tuning knob: {0}")]
    UnknownKnob(String),

    #[error("No hardware base configurations to select from")]
    EmptyHardwareConfig,

    #[error("Failed to read hardware catalogue: {0}")]
    CatalogueIo(#[from] std::io::Error),

    #[error("Malformed hardware catalogue: {0}")]
    CatalogueFormat(#[from] serde_json::Error),
}

/// Result type for tuner operations
pub type Result<T> = std::result::Result<T, TuneError>;
