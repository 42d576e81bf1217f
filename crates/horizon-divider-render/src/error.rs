//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while preparing divider assets.
#[derive(Error, Debug)]
pub enum RenderError {
    /// The image could not be decoded.
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    /// Invalid image dimensions (zero width or height).
    #[error("invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
