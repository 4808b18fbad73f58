use std::path::Path;

use popart_image::{ImageSize, Rgb8};
use popart_imgproc::{
    color, compose,
    filter::{self, kernels},
    flip,
    parallel::{self, ExecutionStrategy},
    resize,
};

use crate::error::CollageError;

/// Configuration for building a collage.
///
/// # Example
///
/// ```
/// use popart::CollageConfig;
/// use popart::imgproc::parallel::ExecutionStrategy;
///
/// let config = CollageConfig::default()
///     .with_max_size(1200, 600)
///     .with_strategy(ExecutionStrategy::Serial);
///
/// assert_eq!(config.tile_bounds(), (400, 300));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollageConfig {
    /// Maximum width of the collage canvas in pixels.
    pub max_width: usize,
    /// Maximum height of the collage canvas in pixels.
    pub max_height: usize,
    /// How the six filter pipelines are scheduled.
    pub strategy: ExecutionStrategy,
}

impl Default for CollageConfig {
    fn default() -> Self {
        Self {
            max_width: 900,
            max_height: 400,
            strategy: ExecutionStrategy::Parallel,
        }
    }
}

impl CollageConfig {
    /// Set the maximum canvas size.
    pub fn with_max_size(mut self, max_width: usize, max_height: usize) -> Self {
        self.max_width = max_width;
        self.max_height = max_height;
        self
    }

    /// Set the pipeline execution strategy.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// The largest tile that fits in the configured canvas.
    pub fn tile_bounds(&self) -> (usize, usize) {
        (
            self.max_width / compose::COLLAGE_COLS,
            self.max_height / compose::COLLAGE_ROWS,
        )
    }

    fn validate(&self) -> Result<(), CollageError> {
        let (tile_width, tile_height) = self.tile_bounds();
        if tile_width == 0 || tile_height == 0 {
            return Err(CollageError::InvalidBounds(self.max_width, self.max_height));
        }
        Ok(())
    }
}

/// One of the six filtered tiles of a collage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Variant {
    /// Three-level posterization.
    Posterize,
    /// Sunset tint followed by the mirror operator.
    Sunset,
    /// Color negative.
    Negative,
    /// 3x3 blur followed by a vertical flip.
    Blur,
    /// 3x3 edge detection.
    Edge,
    /// Channel-mean grayscale followed by a vertical flip.
    Grayscale,
}

impl Variant {
    /// All variants in collage order: left to right, top to bottom.
    pub const ALL: [Variant; compose::COLLAGE_TILES] = [
        Variant::Posterize,
        Variant::Sunset,
        Variant::Negative,
        Variant::Blur,
        Variant::Edge,
        Variant::Grayscale,
    ];

    /// Human readable name of the variant.
    pub fn name(&self) -> &'static str {
        match self {
            Variant::Posterize => "posterize",
            Variant::Sunset => "sunset",
            Variant::Negative => "negative",
            Variant::Blur => "blur",
            Variant::Edge => "edge",
            Variant::Grayscale => "grayscale",
        }
    }

    /// Run the variant's filter pipeline on `src`.
    pub fn apply(&self, src: &Rgb8) -> Result<Rgb8, CollageError> {
        let tile = match self {
            Variant::Posterize => color::posterize(src)?,
            Variant::Sunset => flip::mirror(&color::sunset(src)?)?,
            Variant::Negative => color::negative(src)?,
            Variant::Blur => flip::flip(&filter::convolve(src, &kernels::BLUR)?)?,
            Variant::Edge => filter::convolve(src, &kernels::EDGE)?,
            Variant::Grayscale => flip::flip(&color::grayscale(src)?)?,
        };
        log::debug!("{} tile ready ({})", self.name(), tile.size());
        Ok(tile)
    }
}

/// Produce the six filtered tiles of `src` in collage order.
///
/// The order is posterize, sunset then mirror, negative, blur then flip, edge, grayscale then
/// flip. The pipelines are independent and are scheduled according to `strategy`.
///
/// # Example
///
/// ```
/// use popart::collage::build_six_filtered_variants;
/// use popart::image::Rgb8;
/// use popart::imgproc::parallel::ExecutionStrategy;
///
/// let image = Rgb8::from_size_pixel([4, 4].into(), [10, 70, 200]).unwrap();
/// let tiles = build_six_filtered_variants(&image, ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(tiles.len(), 6);
/// assert_eq!(tiles[0].get_pixel(0, 0).unwrap(), [95, 159, 223]);
/// ```
pub fn build_six_filtered_variants(
    src: &Rgb8,
    strategy: ExecutionStrategy,
) -> Result<Vec<Rgb8>, CollageError> {
    parallel::map_with_strategy(strategy, &Variant::ALL, |variant| variant.apply(src))?
        .into_iter()
        .collect()
}

/// Build a collage from a source image.
///
/// The source is shrunk so that a tile fits in a third of the maximum width and half of the
/// maximum height, filtered six ways and assembled on a 3x2 canvas.
///
/// # Errors
///
/// Returns [`CollageError::InvalidBounds`] if the bounds are smaller than the tile grid, or
/// the first error raised by a pixel operation.
pub fn create_collage(src: &Rgb8, config: &CollageConfig) -> Result<Rgb8, CollageError> {
    config.validate()?;

    let (tile_width, tile_height) = config.tile_bounds();
    let factor = resize::shrink_factor(src, tile_width, tile_height)?;
    log::info!(
        "shrinking {} by {} to fit {}x{} tiles",
        src.size(),
        factor,
        tile_width,
        tile_height
    );

    let shrunk = resize::shrink(src, factor)?;
    let tiles = build_six_filtered_variants(&shrunk, config.strategy)?;
    let canvas = compose::assemble(&tiles)?;

    log::info!("assembled collage {}", canvas.size());

    Ok(canvas)
}

/// Decodes source images.
pub trait ImageLoader {
    /// Load the image at `path` as RGB8.
    fn load_image(&self, path: &Path) -> Result<Rgb8, CollageError>;
}

/// Encodes finished collages.
pub trait ImageSaver {
    /// Save `image` at `path`.
    fn save_image(&self, image: &Rgb8, path: &Path) -> Result<(), CollageError>;
}

/// Shows a finished collage to the user.
pub trait ImagePresenter {
    /// Present `image`.
    fn present(&self, image: &Rgb8) -> Result<(), CollageError>;
}

/// Loader and saver backed by image files on disk.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileSystemIo;

impl ImageLoader for FileSystemIo {
    fn load_image(&self, path: &Path) -> Result<Rgb8, CollageError> {
        Ok(popart_io::functional::read_image_any_rgb8(path)?)
    }
}

impl ImageSaver for FileSystemIo {
    fn save_image(&self, image: &Rgb8, path: &Path) -> Result<(), CollageError> {
        Ok(popart_io::functional::write_image_rgb8(path, image)?)
    }
}

/// Presenter that reports the collage through the `log` facade.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogPresenter;

impl ImagePresenter for LogPresenter {
    fn present(&self, image: &Rgb8) -> Result<(), CollageError> {
        let ImageSize { width, height } = image.size();
        log::info!("collage is {width}x{height} pixels");
        Ok(())
    }
}

/// Load an image, build its collage, present it and save it.
///
/// # Arguments
///
/// * `loader` - Decodes the source image.
/// * `saver` - Encodes the collage.
/// * `presenter` - Shows the collage before it is saved.
/// * `input` - Path of the source image.
/// * `output` - Path the collage is saved to.
/// * `config` - Collage bounds and scheduling.
///
/// # Returns
///
/// The collage that was saved.
pub fn run(
    loader: &impl ImageLoader,
    saver: &impl ImageSaver,
    presenter: &impl ImagePresenter,
    input: &Path,
    output: &Path,
    config: &CollageConfig,
) -> Result<Rgb8, CollageError> {
    let source = loader.load_image(input)?;
    log::info!("loaded {} ({})", input.display(), source.size());

    let collage = create_collage(&source, config)?;

    presenter.present(&collage)?;
    saver.save_image(&collage, output)?;
    log::info!("saved collage to {}", output.display());

    Ok(collage)
}
