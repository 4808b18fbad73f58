#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// color transformations module.
pub mod color;

/// collage tiling and compositing module.
pub mod compose;

/// image filtering module.
pub mod filter;

/// image flipping and mirroring module.
pub mod flip;

/// module containing parallization utilities.
pub mod parallel;

/// utility functions for shrinking images.
pub mod resize;
