use crate::parallel;
use popart_image::{ImageError, Rgb8};

/// The factor applied to the green and blue channels by [`sunset`].
pub const SUNSET_FACTOR: f64 = 0.7;

/// Invert every channel of an RGB8 image: `c -> 255 - c`.
///
/// # Example
///
/// ```
/// use popart_image::Image;
/// use popart_imgproc::color::negative;
///
/// let image = Image::<u8, 3>::new([1, 1].into(), vec![0, 100, 255]).unwrap();
/// assert_eq!(negative(&image).unwrap().as_slice(), &[255, 155, 0]);
/// ```
pub fn negative(src: &Rgb8) -> Result<Rgb8, ImageError> {
    let mut dst = Rgb8::zeros(src.size())?;

    parallel::par_iter_rows_val(src, &mut dst, |src_val, dst_val| {
        *dst_val = u8::MAX - *src_val;
    });

    Ok(dst)
}

/// Apply a warm sunset tint to an RGB8 image.
///
/// Red is kept; green and blue are scaled by [`SUNSET_FACTOR`] and truncated toward zero.
///
/// # Example
///
/// ```
/// use popart_image::Image;
/// use popart_imgproc::color::sunset;
///
/// let image = Image::<u8, 3>::new([1, 1].into(), vec![200, 200, 200]).unwrap();
/// assert_eq!(sunset(&image).unwrap().as_slice(), &[200, 140, 140]);
/// ```
pub fn sunset(src: &Rgb8) -> Result<Rgb8, ImageError> {
    let mut dst = Rgb8::zeros(src.size())?;

    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = src_pixel[0];
        dst_pixel[1] = scale_truncate(src_pixel[1]);
        dst_pixel[2] = scale_truncate(src_pixel[2]);
    });

    Ok(dst)
}

fn scale_truncate(value: u8) -> u8 {
    (SUNSET_FACTOR * value as f64) as u8
}
