//! Errors

use thiserror::Error;

/// Errors raised while building polygons, configuring a rasterizer,
///   or reading and writing images
///
/// Scan conversion itself never fails.
#[derive(Debug,Error)]
pub enum Error {
    /// Polygon needs at least three vertices
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),
    /// Vertex coordinate is NaN or infinite
    #[error("vertex {index} is not finite: ({x}, {y})")]
    NonFiniteVertex { index: usize, x: f64, y: f64 },
    /// Pixel size must be positive and finite
    #[error("pixel size must be positive and finite, got {0}")]
    InvalidPixelSize(f64),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
