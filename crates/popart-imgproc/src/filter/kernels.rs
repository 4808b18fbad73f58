use popart_image::ImageError;

/// An immutable 3x3 convolution kernel, indexed `[row][col]`.
///
/// Weights are used as given; no normalization is applied.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Kernel3([[f64; 3]; 3]);

impl Kernel3 {
    /// Create a kernel from its rows.
    pub const fn new(weights: [[f64; 3]; 3]) -> Self {
        Self(weights)
    }

    /// Create a kernel from a dynamically sized grid.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::InvalidKernelShape`] unless the grid is exactly 3x3.
    ///
    /// # Example
    ///
    /// ```
    /// use popart_imgproc::filter::kernels::Kernel3;
    ///
    /// let rows = vec![vec![0.0, 0.0, 0.0], vec![0.0, 1.0, 0.0], vec![0.0, 0.0, 0.0]];
    /// let kernel = Kernel3::from_rows(&rows).unwrap();
    /// assert_eq!(kernel.weight(1, 1), 1.0);
    ///
    /// assert!(Kernel3::from_rows(&rows[..2]).is_err());
    /// ```
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ImageError> {
        let cols = rows
            .iter()
            .map(Vec::len)
            .find(|&n| n != 3)
            .or_else(|| rows.first().map(Vec::len))
            .unwrap_or(0);
        if rows.len() != 3 || cols != 3 {
            return Err(ImageError::InvalidKernelShape(rows.len(), cols));
        }

        let mut weights = [[0.0; 3]; 3];
        for (dst, src) in weights.iter_mut().zip(rows) {
            dst.copy_from_slice(src);
        }
        Ok(Self(weights))
    }

    /// Get the weight at `[row][col]`.
    pub fn weight(&self, row: usize, col: usize) -> f64 {
        self.0[row][col]
    }

    /// Get the kernel rows.
    pub fn weights(&self) -> &[[f64; 3]; 3] {
        &self.0
    }

    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.0.iter().flatten().sum()
    }
}

/// The 3x3 blur kernel: `[1, 2, 1; 2, 4, 2; 1, 2, 1] / 16`.
pub const BLUR: Kernel3 = Kernel3::new([
    [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
    [2.0 / 16.0, 4.0 / 16.0, 2.0 / 16.0],
    [1.0 / 16.0, 2.0 / 16.0, 1.0 / 16.0],
]);

/// The 3x3 edge detection kernel: `-1` everywhere except `8` at the center.
pub const EDGE: Kernel3 = Kernel3::new([
    [-1.0, -1.0, -1.0],
    [-1.0, 8.0, -1.0],
    [-1.0, -1.0, -1.0],
]);

/// Create the blur kernel.
pub fn blur_kernel() -> Kernel3 {
    BLUR
}

/// Create the edge detection kernel.
pub fn edge_kernel() -> Kernel3 {
    EDGE
}
