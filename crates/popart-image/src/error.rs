/// An error type for the image and image processing crates.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when an image is created with a zero dimension.
    #[error("Image size must be non-zero, got {0}x{1}")]
    EmptyImage(usize, usize),

    /// Error when a pixel coordinate is outside the image.
    #[error("Pixel index ({0}, {1}) is out of bounds ({2}x{3})")]
    PixelIndexOutOfBounds(usize, usize, usize, usize),

    /// Error when two images are expected to share a size.
    #[error("Image size mismatch: {0}x{1} vs {2}x{3}")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a collage receives the wrong number of tiles.
    #[error("Expected 6 tiles, got {0}")]
    InvalidTileCount(usize),

    /// Error when the shrink factor cannot be applied.
    #[error("Invalid shrink factor {0}")]
    InvalidShrinkFactor(usize),

    /// Error when the target size used to compute a shrink factor is degenerate.
    #[error("Target size must be non-zero, got {0}x{1}")]
    InvalidTargetSize(usize, usize),

    /// Error when a convolution kernel is not 3x3.
    #[error("Kernel must be 3x3, got {0}x{1}")]
    InvalidKernelShape(usize, usize),
}
