//! Error types for touchrot
//!
//! Every error is terminal: `main` reports it and exits non-zero.

use std::path::PathBuf;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("{0} command not found. Please ensure {0} is installed and in your PATH.")]
    MissingDependency(String),

    #[error("{program} is not working ({reason}). Please install {program} to use this feature.")]
    DependencyError { program: String, reason: String },

    #[error(transparent)]
    Resolution(#[from] ResolutionError),

    #[error("Invalid choice {0:?}, expected a number from 1 to 4")]
    InvalidChoice(String),

    #[error("Orientation selection was cancelled")]
    Cancelled,

    #[error("Unsupported session type {0:?}, pass --session x11 or --session wayland")]
    UnsupportedSession(String),

    #[error("Touchscreen name {0:?} cannot be embedded in a udev rule")]
    UnsafeDeviceName(String),

    #[error("Failed to rotate output {output}: {reason}")]
    RotationFailed { output: String, reason: String },

    #[error(
        "Output {output} was rotated to {rotation}, but the calibration rule could not be written to {}: {reason}. \
         The touchscreen stays misaligned until this succeeds",
        .path.display()
    )]
    PartiallyApplied {
        output: String,
        rotation: String,
        path: PathBuf,
        reason: String,
    },

    #[error("{program} failed: {reason}")]
    CommandFailed { program: String, reason: String },

    #[error("Could not encode JSON: {0}")]
    JSONError(#[from] serde_json::Error),

    #[error("Underlying I/O error: {0}")]
    IOError(#[from] std::io::Error),
}

/// Failures while scraping the active output or touchscreen out of
/// display utility output.
#[derive(thiserror::Error, Debug)]
pub enum ResolutionError {
    #[error("No active output found. Please check your display connections.")]
    NoActiveOutput,

    #[error("No touchscreen device found. Please check your connections.")]
    NoTouchscreenFound,

    #[error("{program} failed: {reason}")]
    CommandFailed { program: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
