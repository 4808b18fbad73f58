use crate::parallel;
use popart_image::{ImageError, Rgb8};

/// Map a single channel value onto one of the three poster levels.
///
/// `< 63 -> 95`, `< 128 -> 159`, otherwise `223`.
pub fn posterize_channel(value: u8) -> u8 {
    match value {
        0..=62 => 95,
        63..=127 => 159,
        _ => 223,
    }
}

/// Reduce every channel of an RGB8 image to three levels, independently per channel.
///
/// # Example
///
/// ```
/// use popart_image::Image;
/// use popart_imgproc::color::posterize;
///
/// let image = Image::<u8, 3>::new([1, 1].into(), vec![10, 70, 200]).unwrap();
/// assert_eq!(posterize(&image).unwrap().as_slice(), &[95, 159, 223]);
/// ```
pub fn posterize(src: &Rgb8) -> Result<Rgb8, ImageError> {
    let mut dst = Rgb8::zeros(src.size())?;

    parallel::par_iter_rows_val(src, &mut dst, |src_val, dst_val| {
        *dst_val = posterize_channel(*src_val);
    });

    Ok(dst)
}
