//! Export error types.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The capture source could not produce a raster.
    #[error("capture failed: {0}")]
    Capture(String),

    /// Captured bytes are not a decodable PNG/JPEG image.
    #[error("image decode failed: {0}")]
    Decode(#[from] image::ImageError),

    /// Page or image geometry cannot be laid out (zero-sized image,
    /// non-positive page height, unknown page format, ...).
    #[error("invalid layout: {0}")]
    InvalidLayout(String),

    /// PDF object construction or serialization failed.
    #[error("pdf error: {0}")]
    Pdf(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
