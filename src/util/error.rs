//! Error types for subimage.

use crate::image::Dims;
use std::path::PathBuf;
use thiserror::Error;

/// Result alias for subimage operations.
pub type SubImageResult<T> = std::result::Result<T, SubImageError>;

/// Errors that terminate a matching run.
#[derive(Debug, Error, PartialEq)]
pub enum SubImageError {
    /// The path is missing, names a directory, or cannot be opened for reading.
    #[error("{} does not exist, is a directory, or has insufficient read privileges.", path.display())]
    Unreadable { path: PathBuf },
    /// The file is readable but the codec could not decode it.
    #[error("{} is not a compatible image.", path.display())]
    Decode { path: PathBuf, reason: String },
    /// Neither image fits inside the other along both axes.
    #[error("Bad dimensions. Neither image can be a proper subset of the other: {first}, {second}")]
    IncompatibleDimensions { first: Dims, second: Dims },
    /// The acceptance threshold is not a finite value in [-1, 1].
    #[error("invalid threshold: {value} (expected a finite value in [-1, 1])")]
    InvalidThreshold { value: f32 },
}
