#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use popart_image as image;

#[doc(inline)]
pub use popart_imgproc as imgproc;

#[doc(inline)]
pub use popart_io as io;

/// The collage pipeline and its external collaborators.
pub mod collage;

/// Error types for the collage pipeline.
pub mod error;

pub use crate::collage::{create_collage, run, CollageConfig, Variant};
pub use crate::error::CollageError;
