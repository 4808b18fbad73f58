use crate::error::ImageError;

/// Image size in pixels
///
/// A struct to represent the size of an image in pixels.
///
/// # Examples
///
/// ```
/// use popart_image::ImageSize;
///
/// let image_size = ImageSize {
///   width: 10,
///   height: 20,
/// };
///
/// assert_eq!(image_size.width, 10);
/// assert_eq!(image_size.height, 20);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ImageSize {
    /// Width of the image in pixels
    pub width: usize,
    /// Height of the image in pixels
    pub height: usize,
}

impl std::fmt::Display for ImageSize {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "ImageSize {{ width: {}, height: {} }}",
            self.width, self.height
        )
    }
}

impl From<[usize; 2]> for ImageSize {
    fn from(size: [usize; 2]) -> Self {
        ImageSize {
            width: size[0],
            height: size[1],
        }
    }
}

/// An 8-bit RGB image, the pixel format every collage operation works on.
pub type Rgb8 = Image<u8, 3>;

/// Represents an image with pixel data.
///
/// The pixels are stored row-major and interleaved, i.e. with shape (H, W, C). Images are
/// value-like: cloning deep-copies the pixel data and the clone owns its storage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<T, const CHANNELS: usize> {
    size: ImageSize,
    data: Vec<T>,
}

impl<T, const CHANNELS: usize> Image<T, CHANNELS> {
    /// Create a new image from pixel data.
    ///
    /// # Arguments
    ///
    /// * `size` - The size of the image in pixels.
    /// * `data` - The pixel data of the image.
    ///
    /// # Errors
    ///
    /// If either dimension is zero, or the length of the pixel data does not match the image
    /// size, an error is returned.
    ///
    /// # Examples
    ///
    /// ```
    /// use popart_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::new(
    ///     ImageSize {
    ///         width: 10,
    ///         height: 20,
    ///     },
    ///     vec![0u8; 10 * 20 * 3],
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(image.size().width, 10);
    /// assert_eq!(image.size().height, 20);
    /// assert_eq!(image.num_channels(), 3);
    /// ```
    pub fn new(size: ImageSize, data: Vec<T>) -> Result<Self, ImageError> {
        if size.width == 0 || size.height == 0 {
            return Err(ImageError::EmptyImage(size.width, size.height));
        }

        // check if the data length matches the image size
        if data.len() != size.width * size.height * CHANNELS {
            return Err(ImageError::InvalidChannelShape(
                data.len(),
                size.width * size.height * CHANNELS,
            ));
        }

        Ok(Self { size, data })
    }

    /// Create a new image with the given size and every channel set to `val`.
    ///
    /// # Examples
    ///
    /// ```
    /// use popart_image::{Image, ImageSize};
    ///
    /// let image = Image::<u8, 3>::from_size_val([4, 2].into(), 7).unwrap();
    ///
    /// assert_eq!(image.get_pixel(3, 1).unwrap(), [7, 7, 7]);
    /// ```
    pub fn from_size_val(size: ImageSize, val: T) -> Result<Self, ImageError>
    where
        T: Clone,
    {
        let data = vec![val; size.width * size.height * CHANNELS];
        Image::new(size, data)
    }

    /// Create a new zero-initialized image.
    pub fn zeros(size: ImageSize) -> Result<Self, ImageError>
    where
        T: Clone + Default,
    {
        Self::from_size_val(size, T::default())
    }

    /// Create a new image where every pixel is set to `pixel`.
    pub fn from_size_pixel(size: ImageSize, pixel: [T; CHANNELS]) -> Result<Self, ImageError>
    where
        T: Copy,
    {
        let data = pixel
            .iter()
            .copied()
            .cycle()
            .take(size.width * size.height * CHANNELS)
            .collect();
        Image::new(size, data)
    }

    /// Get the size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        self.size
    }

    /// Get the number of columns of the image.
    pub fn cols(&self) -> usize {
        self.width()
    }

    /// Get the number of rows of the image.
    pub fn rows(&self) -> usize {
        self.height()
    }

    /// Get the width of the image in pixels.
    pub fn width(&self) -> usize {
        self.size.width
    }

    /// Get the height of the image in pixels.
    pub fn height(&self) -> usize {
        self.size.height
    }

    /// Get the number of channels in the image.
    pub fn num_channels(&self) -> usize {
        CHANNELS
    }

    /// Get the raw pixel data, row-major and channel-interleaved.
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Get the raw pixel data mutably.
    pub fn as_slice_mut(&mut self) -> &mut [T] {
        &mut self.data
    }

    fn offset(&self, x: usize, y: usize) -> Result<usize, ImageError> {
        if x >= self.width() || y >= self.height() {
            return Err(ImageError::PixelIndexOutOfBounds(
                x,
                y,
                self.width(),
                self.height(),
            ));
        }
        Ok((y * self.width() + x) * CHANNELS)
    }

    /// Get the pixel at the given coordinates.
    ///
    /// # Arguments
    ///
    /// * `x` - The x-coordinate (column) of the pixel.
    /// * `y` - The y-coordinate (row) of the pixel.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the coordinate is outside the image.
    pub fn get_pixel(&self, x: usize, y: usize) -> Result<[T; CHANNELS], ImageError>
    where
        T: Copy,
    {
        let offset = self.offset(x, y)?;
        Ok(std::array::from_fn(|c| self.data[offset + c]))
    }

    /// Set the pixel at the given coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if the coordinate is outside the image.
    pub fn set_pixel(
        &mut self,
        x: usize,
        y: usize,
        pixel: [T; CHANNELS],
    ) -> Result<(), ImageError>
    where
        T: Copy,
    {
        let offset = self.offset(x, y)?;
        self.data[offset..offset + CHANNELS].copy_from_slice(&pixel);
        Ok(())
    }

    /// Get a row of the image as a channel-interleaved slice.
    ///
    /// # Errors
    ///
    /// Returns [`ImageError::PixelIndexOutOfBounds`] if `y` is outside the image.
    pub fn row(&self, y: usize) -> Result<&[T], ImageError> {
        let offset = self.offset(0, y)?;
        Ok(&self.data[offset..offset + self.width() * CHANNELS])
    }
}

#[cfg(test)]
mod tests {
    use crate::image::{Image, ImageError, ImageSize};

    #[test]
    fn image_size() {
        let image_size = ImageSize {
            width: 10,
            height: 20,
        };
        assert_eq!(image_size.width, 10);
        assert_eq!(image_size.height, 20);
        assert_eq!(
            image_size.to_string(),
            "ImageSize { width: 10, height: 20 }"
        );
    }

    #[test]
    fn image_smoke() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::new(
            ImageSize {
                width: 10,
                height: 20,
            },
            vec![0u8; 10 * 20 * 3],
        )?;
        assert_eq!(image.size().width, 10);
        assert_eq!(image.size().height, 20);
        assert_eq!(image.num_channels(), 3);

        Ok(())
    }

    #[test]
    fn image_invalid_data_length() {
        let res = Image::<u8, 3>::new([2, 2].into(), vec![0u8; 5]);
        assert_eq!(res, Err(ImageError::InvalidChannelShape(5, 12)));
    }

    #[test]
    fn image_empty() {
        let res = Image::<u8, 3>::zeros([0, 4].into());
        assert_eq!(res, Err(ImageError::EmptyImage(0, 4)));
    }

    #[test]
    fn image_get_set_pixel() -> Result<(), ImageError> {
        let mut image = Image::<u8, 3>::zeros([3, 2].into())?;
        image.set_pixel(2, 1, [10, 20, 30])?;

        assert_eq!(image.get_pixel(2, 1)?, [10, 20, 30]);
        assert_eq!(image.get_pixel(0, 0)?, [0, 0, 0]);
        assert_eq!(&image.as_slice()[15..18], &[10, 20, 30]);

        Ok(())
    }

    #[test]
    fn image_pixel_out_of_bounds() -> Result<(), ImageError> {
        let mut image = Image::<u8, 3>::zeros([3, 2].into())?;

        assert_eq!(
            image.get_pixel(3, 0),
            Err(ImageError::PixelIndexOutOfBounds(3, 0, 3, 2))
        );
        assert_eq!(
            image.set_pixel(0, 2, [1, 2, 3]),
            Err(ImageError::PixelIndexOutOfBounds(0, 2, 3, 2))
        );

        Ok(())
    }

    #[test]
    fn image_clone_is_independent() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_pixel([2, 2].into(), [1, 2, 3])?;
        let mut copy = image.clone();
        copy.set_pixel(0, 0, [9, 9, 9])?;

        assert_eq!(image.get_pixel(0, 0)?, [1, 2, 3]);
        assert_eq!(copy.get_pixel(0, 0)?, [9, 9, 9]);

        Ok(())
    }

    #[test]
    fn image_row() -> Result<(), ImageError> {
        let image = Image::<u8, 1>::new([2, 3].into(), vec![0, 1, 2, 3, 4, 5])?;
        assert_eq!(image.row(1)?, &[2, 3]);
        assert!(image.row(3).is_err());
        Ok(())
    }
}
