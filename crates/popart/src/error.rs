use popart_image::ImageError;
use popart_imgproc::parallel::ParallelError;
use popart_io::IoError;

/// An error type for the collage pipeline.
#[derive(thiserror::Error, Debug)]
pub enum CollageError {
    /// A pixel operation failed.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// Reading or writing an image file failed.
    #[error(transparent)]
    Io(#[from] IoError),

    /// The filter pipelines could not be scheduled.
    #[error(transparent)]
    Parallel(#[from] ParallelError),

    /// The collage bounds cannot hold a 3x2 grid of tiles.
    #[error("Collage bounds {0}x{1} are smaller than the 3x2 tile grid")]
    InvalidBounds(usize, usize),
}
