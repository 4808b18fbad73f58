use popart_image::{Image, ImageError, ImageSize};
use rayon::{
    iter::{IndexedParallelIterator, ParallelIterator},
    slice::{ParallelSlice, ParallelSliceMut},
};

/// Number of tile columns in a collage.
pub const COLLAGE_COLS: usize = 3;

/// Number of tile rows in a collage.
pub const COLLAGE_ROWS: usize = 2;

/// Number of tiles in a collage.
pub const COLLAGE_TILES: usize = COLLAGE_COLS * COLLAGE_ROWS;

/// The top-left corner of every tile of a collage made of `tile_size` tiles.
///
/// Offsets are row-major: `(0, 0)`, `(w, 0)`, `(2w, 0)`, `(0, h)`, `(w, h)`, `(2w, h)`.
pub fn tile_offsets(tile_size: ImageSize) -> [(usize, usize); COLLAGE_TILES] {
    std::array::from_fn(|i| {
        (
            (i % COLLAGE_COLS) * tile_size.width,
            (i / COLLAGE_COLS) * tile_size.height,
        )
    })
}

/// Copy `src` into `dst` with its top-left corner at `(x, y)`.
///
/// # Arguments
///
/// * `src` - The image to copy.
/// * `dst` - The image to copy into.
/// * `x` - The column of `dst` where the copy starts.
/// * `y` - The row of `dst` where the copy starts.
///
/// # Errors
///
/// Returns [`ImageError::PixelIndexOutOfBounds`] if `src` does not fit inside `dst` at the
/// given position; `dst` is left untouched in that case.
///
/// # Examples
///
/// ```rust
/// use popart_image::{Image, ImageSize};
/// use popart_imgproc::compose::copy_to;
///
/// let tile = Image::<_, 1>::new(ImageSize { width: 2, height: 1 }, vec![7u8, 8]).unwrap();
/// let mut canvas = Image::<u8, 1>::zeros(ImageSize { width: 3, height: 2 }).unwrap();
///
/// copy_to(&tile, &mut canvas, 1, 1).unwrap();
///
/// assert_eq!(canvas.as_slice(), &[0u8, 0, 0, 0, 7, 8]);
/// ```
pub fn copy_to<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    x: usize,
    y: usize,
) -> Result<(), ImageError>
where
    T: Copy + Send + Sync,
{
    let (end_x, end_y) = (x + src.width(), y + src.height());
    if end_x > dst.width() || end_y > dst.height() {
        return Err(ImageError::PixelIndexOutOfBounds(
            end_x - 1,
            end_y - 1,
            dst.width(),
            dst.height(),
        ));
    }

    let src_row_len = src.cols() * C;
    let dst_row_len = dst.cols() * C;

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_row_len)
        .skip(y)
        .take(src.rows())
        .zip(src.as_slice().par_chunks_exact(src_row_len))
        .for_each(|(dst_row, src_row)| {
            dst_row[x * C..x * C + src_row_len].copy_from_slice(src_row);
        });

    Ok(())
}

/// Assemble six equally sized tiles into a 3x2 collage.
///
/// Tiles are placed row-major at the offsets given by [`tile_offsets`] and copied verbatim.
///
/// # Arguments
///
/// * `tiles` - Exactly six images sharing the same size `(w, h)`.
///
/// # Returns
///
/// A new image of size `(3w, 2h)`.
///
/// # Errors
///
/// Returns [`ImageError::InvalidTileCount`] unless six tiles are given and
/// [`ImageError::InvalidImageSize`] if any tile differs in size from the first.
pub fn assemble<T, const C: usize>(tiles: &[Image<T, C>]) -> Result<Image<T, C>, ImageError>
where
    T: Copy + Default + Send + Sync,
{
    if tiles.len() != COLLAGE_TILES {
        return Err(ImageError::InvalidTileCount(tiles.len()));
    }

    let tile_size = tiles[0].size();
    if let Some(tile) = tiles.iter().find(|tile| tile.size() != tile_size) {
        return Err(ImageError::InvalidImageSize(
            tile_size.width,
            tile_size.height,
            tile.width(),
            tile.height(),
        ));
    }

    let mut canvas = Image::<T, C>::zeros(ImageSize {
        width: COLLAGE_COLS * tile_size.width,
        height: COLLAGE_ROWS * tile_size.height,
    })?;

    for (tile, (x, y)) in tiles.iter().zip(tile_offsets(tile_size)) {
        copy_to(tile, &mut canvas, x, y)?;
    }

    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use popart_image::{Image, ImageError, ImageSize};

    fn tile(value: u8) -> Result<Image<u8, 1>, ImageError> {
        Image::new([2, 1].into(), vec![value, value + 1])
    }

    #[test]
    fn test_tile_offsets() {
        let offsets = super::tile_offsets(ImageSize {
            width: 4,
            height: 3,
        });
        assert_eq!(offsets, [(0, 0), (4, 0), (8, 0), (0, 3), (4, 3), (8, 3)]);
    }

    #[test]
    fn test_assemble() -> Result<(), ImageError> {
        let tiles = [tile(0)?, tile(10)?, tile(20)?, tile(30)?, tile(40)?, tile(50)?];
        let canvas = super::assemble(&tiles)?;

        assert_eq!(canvas.size(), [6, 2].into());

        #[rustfmt::skip]
        assert_eq!(
            canvas.as_slice(),
            &[
                0, 1, 10, 11, 20, 21,
                30, 31, 40, 41, 50, 51,
            ]
        );
        Ok(())
    }

    #[test]
    fn test_assemble_tile_count() -> Result<(), ImageError> {
        let tiles = [tile(0)?, tile(10)?];
        assert_eq!(
            super::assemble(&tiles),
            Err(ImageError::InvalidTileCount(2))
        );
        Ok(())
    }

    #[test]
    fn test_assemble_size_mismatch() -> Result<(), ImageError> {
        let odd = Image::<u8, 1>::zeros([1, 1].into())?;
        let tiles = [tile(0)?, tile(0)?, tile(0)?, odd, tile(0)?, tile(0)?];
        assert_eq!(
            super::assemble(&tiles),
            Err(ImageError::InvalidImageSize(2, 1, 1, 1))
        );
        Ok(())
    }

    #[test]
    fn test_copy_to_out_of_bounds() -> Result<(), ImageError> {
        let src = tile(0)?;
        let mut dst = Image::<u8, 1>::zeros([2, 2].into())?;
        assert_eq!(
            super::copy_to(&src, &mut dst, 1, 0),
            Err(ImageError::PixelIndexOutOfBounds(2, 0, 2, 2))
        );
        assert_eq!(dst.as_slice(), &[0, 0, 0, 0]);
        Ok(())
    }
}
