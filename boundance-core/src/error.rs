//! Error types for boundance

use crate::geometry::GeometryKind;
use thiserror::Error;

/// Main error type for boundance operations
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Unsupported geometry type: {0}")]
    UnsupportedGeometry(GeometryKind),

    #[error("Unknown region: {0}")]
    UnknownRegion(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Render error: {0}")]
    Render(String),
}

/// Result type alias for boundance operations
pub type Result<T> = std::result::Result<T, Error>;
