use popart_image::{Image, ImageError};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::ParallelSliceMut,
};

/// Flip the input image vertically.
///
/// Row `r` is swapped with row `H - 1 - r` for every `r < H / 2`; the middle row of an
/// odd-height image stays in place.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The flipped image.
///
/// # Example
///
/// ```
/// use popart_image::{Image, ImageSize};
/// use popart_imgproc::flip::flip;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize {
///         width: 2,
///         height: 3,
///     },
///     vec![0, 1, 2, 3, 4, 5],
/// )
/// .unwrap();
///
/// let flipped = flip(&image).unwrap();
///
/// assert_eq!(flipped.as_slice(), &[4, 5, 2, 3, 0, 1]);
/// ```
pub fn flip<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Clone + Send + Sync,
{
    let mut dst = src.clone();

    let row_len = src.cols() * C;
    let half = src.rows() / 2;

    let (top, rest) = dst.as_slice_mut().split_at_mut(half * row_len);
    let bottom_start = rest.len() - half * row_len;

    top.par_chunks_exact_mut(row_len)
        .zip(rest[bottom_start..].par_chunks_exact_mut(row_len).rev())
        .for_each(|(top_row, bottom_row)| top_row.swap_with_slice(bottom_row));

    Ok(dst)
}

/// Mirror the input image with the collage's historical index pattern.
///
/// The buffer is copied, then for `x` in `[0, H / 2)` and `y` in `[0, W)` the pixel at
/// `(x, H - 1 - y)` is overwritten with the value currently stored at `(x, y)`. Reads see
/// earlier writes. On a square image this copies the top half of each of the first `H / 2`
/// columns onto the bottom half, leaving the remaining columns untouched.
///
/// The loop bounds mix width and height, so on non-square images some index pairs fall
/// outside the buffer, e.g. every wide image. Following the pattern literally reads and
/// writes out of range there, so those pairs are skipped. Do not turn the skip into an error:
/// such collages would then fail.
///
/// # Arguments
///
/// * `src` - The input image with shape (H, W, C).
///
/// # Returns
///
/// The mirrored image.
pub fn mirror<T, const C: usize>(src: &Image<T, C>) -> Result<Image<T, C>, ImageError>
where
    T: Copy,
{
    let mut dst = src.clone();
    let (width, height) = (src.width(), src.height());

    if width != height {
        log::debug!("mirror on a non-square {width}x{height} image skips out-of-range pairs");
    }

    for (x, y) in mirror_index_pairs(width, height) {
        let pixel = dst.get_pixel(x, y)?;
        dst.set_pixel(x, height - 1 - y, pixel)?;
    }

    Ok(dst)
}

/// The `(x, y)` source coordinates visited by [`mirror`], in visiting order.
///
/// `x` runs over half the height and `y` over the width; this pairing is what the mirror
/// filter has always produced and is kept as is.
fn mirror_index_pairs(width: usize, height: usize) -> impl Iterator<Item = (usize, usize)> {
    (0..height / 2)
        .flat_map(move |x| (0..width).map(move |y| (x, y)))
        .filter(move |&(x, y)| x < width && y < height)
}

#[cfg(test)]
mod tests {
    use popart_image::{Image, ImageError, ImageSize};

    #[test]
    fn test_flip() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0u8, 1, 2, 3, 4, 5],
        )?;
        let data_expected = vec![4u8, 5, 2, 3, 0, 1];
        let flipped = super::flip(&image)?;
        assert_eq!(flipped.as_slice(), &data_expected);
        Ok(())
    }

    #[test]
    fn test_flip_even_rgb() -> Result<(), ImageError> {
        #[rustfmt::skip]
        let image = Image::<_, 3>::new(
            ImageSize { width: 1, height: 2 },
            vec![
                1u8, 2, 3,
                4u8, 5, 6,
            ],
        )?;
        let flipped = super::flip(&image)?;
        assert_eq!(flipped.as_slice(), &[4, 5, 6, 1, 2, 3]);
        Ok(())
    }

    #[test]
    fn test_flip_single_row() -> Result<(), ImageError> {
        let image = Image::<_, 3>::new([2, 1].into(), vec![1u8, 2, 3, 4, 5, 6])?;
        assert_eq!(super::flip(&image)?, image);
        Ok(())
    }

    #[test]
    fn test_mirror_square() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new([4, 4].into(), (0u8..16).collect())?;

        #[rustfmt::skip]
        let data_expected = vec![
            0u8, 1, 2, 3,
            4, 5, 6, 7,
            4, 5, 10, 11,
            0, 1, 14, 15,
        ];

        let mirrored = super::mirror(&image)?;
        assert_eq!(mirrored.as_slice(), &data_expected);
        Ok(())
    }

    #[test]
    fn test_mirror_wide() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new([3, 2].into(), vec![0u8, 1, 2, 3, 4, 5])?;
        let mirrored = super::mirror(&image)?;
        assert_eq!(mirrored.as_slice(), &[0, 1, 2, 0, 4, 5]);
        Ok(())
    }

    #[test]
    fn test_mirror_tall() -> Result<(), ImageError> {
        let image = Image::<_, 1>::new([2, 6].into(), (0u8..12).collect())?;

        #[rustfmt::skip]
        let data_expected = vec![
            0u8, 1,
            2, 3,
            4, 5,
            6, 7,
            2, 3,
            0, 1,
        ];

        let mirrored = super::mirror(&image)?;
        assert_eq!(mirrored.as_slice(), &data_expected);
        Ok(())
    }

    #[test]
    fn test_mirror_index_pairs_square() {
        let pairs = super::mirror_index_pairs(2, 2).collect::<Vec<_>>();
        assert_eq!(pairs, vec![(0, 0), (0, 1)]);
    }

    #[test]
    fn test_mirror_index_pairs_non_square_skips_out_of_range() {
        // 3x2: y = 2 would read row 2, which does not exist
        let wide = super::mirror_index_pairs(3, 2).collect::<Vec<_>>();
        assert_eq!(wide, vec![(0, 0), (0, 1)]);

        // 2x6: x = 2 would read column 2, which does not exist
        let tall = super::mirror_index_pairs(2, 6).collect::<Vec<_>>();
        assert_eq!(tall, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }
}
