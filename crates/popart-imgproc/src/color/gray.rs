use crate::parallel;
use popart_image::{ImageError, Rgb8};

/// Convert an RGB8 image to a gray RGB8 image using the channel mean:
///
/// Y = floor((R + G + B) / 3)
///
/// The result keeps three channels, each set to `Y`.
///
/// # Arguments
///
/// * `src` - The input RGB8 image.
///
/// # Example
///
/// ```
/// use popart_image::{Image, ImageSize};
/// use popart_imgproc::color::grayscale;
///
/// let image = Image::<u8, 3>::new(
///     ImageSize {
///         width: 1,
///         height: 1,
///     },
///     vec![10, 20, 31],
/// )
/// .unwrap();
///
/// let gray = grayscale(&image).unwrap();
/// assert_eq!(gray.as_slice(), &[20, 20, 20]);
/// ```
pub fn grayscale(src: &Rgb8) -> Result<Rgb8, ImageError> {
    let mut dst = Rgb8::zeros(src.size())?;

    parallel::par_iter_rows(src, &mut dst, |src_pixel, dst_pixel| {
        let sum = src_pixel[0] as u16 + src_pixel[1] as u16 + src_pixel[2] as u16;
        dst_pixel.fill((sum / 3) as u8);
    });

    Ok(dst)
}
