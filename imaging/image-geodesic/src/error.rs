//! Error types for image-based path computation.

use surface_geodesic::GeodesicError;
use thiserror::Error;

/// Result type for image path operations.
pub type ImageResult<T> = Result<T, ImageError>;

/// Errors that can occur constructing an image grid or searching on it.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ImageError {
    /// The intensity buffer does not match the grid dimensions.
    #[error("intensity buffer length {actual} does not match {width}x{height}")]
    DimensionMismatch {
        /// Grid width in pixels.
        width: usize,
        /// Grid height in pixels.
        height: usize,
        /// Length of the supplied buffer.
        actual: usize,
    },

    /// The pixel spacing is not a positive finite number.
    #[error("pixel spacing must be positive (got {0})")]
    InvalidSpacing(f64),

    /// A pixel coordinate lies outside the grid.
    #[error("pixel ({i}, {j}) is outside the {width}x{height} grid")]
    PixelOutOfRange {
        /// Column index.
        i: usize,
        /// Row index.
        j: usize,
        /// Grid width in pixels.
        width: usize,
        /// Grid height in pixels.
        height: usize,
    },

    /// An underlying shortest-path failure.
    #[error(transparent)]
    Geodesic(#[from] GeodesicError),
}
