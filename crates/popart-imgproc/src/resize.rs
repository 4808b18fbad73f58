use popart_image::{Image, ImageError, ImageSize};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Compute the smallest integer factor that makes the image fit in the target size.
///
/// The factor is `max(ceil(W / target_width), ceil(H / target_height))`.
///
/// # Arguments
///
/// * `src` - The image to fit.
/// * `target_width` - The maximum width after shrinking.
/// * `target_height` - The maximum height after shrinking.
///
/// # Errors
///
/// Returns [`ImageError::InvalidTargetSize`] if either target dimension is zero.
///
/// # Example
///
/// ```
/// use popart_image::Image;
/// use popart_imgproc::resize::shrink_factor;
///
/// let image = Image::<u8, 3>::zeros([1000, 500].into()).unwrap();
/// assert_eq!(shrink_factor(&image, 300, 200).unwrap(), 4);
/// ```
pub fn shrink_factor<T, const C: usize>(
    src: &Image<T, C>,
    target_width: usize,
    target_height: usize,
) -> Result<usize, ImageError> {
    if target_width == 0 || target_height == 0 {
        return Err(ImageError::InvalidTargetSize(target_width, target_height));
    }

    let factor_w = src.width().div_ceil(target_width);
    let factor_h = src.height().div_ceil(target_height);

    Ok(factor_w.max(factor_h))
}

/// Shrink an image by an integer factor using nearest-neighbor subsampling.
///
/// The output has size `(floor(W / factor), floor(H / factor))` and the pixel `(x, y)` is the
/// source pixel `(x * factor, y * factor)`. No averaging is done.
///
/// # Arguments
///
/// * `src` - The image to shrink.
/// * `factor` - The integer divisor applied to both dimensions.
///
/// # Errors
///
/// Returns [`ImageError::InvalidShrinkFactor`] if the factor is zero or larger than either
/// dimension, since the result would be empty.
///
/// # Example
///
/// ```
/// use popart_image::Image;
/// use popart_imgproc::resize::shrink;
///
/// let image = Image::<u8, 1>::new([3, 2].into(), vec![0, 1, 2, 3, 4, 5]).unwrap();
/// let shrunk = shrink(&image, 2).unwrap();
///
/// assert_eq!(shrunk.as_slice(), &[0]);
/// ```
pub fn shrink<T, const C: usize>(src: &Image<T, C>, factor: usize) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + Send + Sync,
{
    if factor == 0 || factor > src.width() || factor > src.height() {
        return Err(ImageError::InvalidShrinkFactor(factor));
    }

    if factor == 1 {
        return Ok(src.clone());
    }

    let dst_size = ImageSize {
        width: src.width() / factor,
        height: src.height() / factor,
    };
    let mut dst = Image::<T, C>::zeros(dst_size)?;

    let src_row_len = src.cols() * C;
    let src_data = src.as_slice();

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_size.width * C)
        .enumerate()
        .for_each(|(y, dst_row)| {
            let src_row = &src_data[y * factor * src_row_len..][..src_row_len];
            dst_row
                .chunks_exact_mut(C)
                .enumerate()
                .for_each(|(x, dst_pixel)| {
                    let offset = x * factor * C;
                    dst_pixel.copy_from_slice(&src_row[offset..offset + C]);
                });
        });

    Ok(dst)
}
