//! Error types for the random-dot-motion core.

use thiserror::Error;

/// Errors produced while building or driving a dot field.
///
/// Everything inside the per-tick loop is total once construction has
/// succeeded; the only runtime failures come from an attached display or
/// from writing frames to disk.
#[derive(Debug, Error)]
pub enum RdmError {
    /// The configuration cannot describe a valid dot field.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Canvas size was zero or `size * size * 3` overflowed.
    #[error("invalid dimensions: canvas size must be non-zero and addressable")]
    InvalidDimensions,

    /// A color string could not be parsed.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// An attached display surface reported a failure.
    #[error("render backend failure: {0}")]
    RenderBackend(String),

    /// A file-system operation failed.
    #[error("I/O error: {0}")]
    Io(String),
}
