//! Filter operations
//!
//! This module provides the 3x3 convolution used by the blur and edge tiles.

/// Filter kernels
pub mod kernels;

/// 3x3 convolution
mod convolution;
pub use convolution::*;
