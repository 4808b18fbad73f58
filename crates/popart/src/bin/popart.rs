use argh::FromArgs;
use std::path::PathBuf;

use popart::collage::{self, CollageConfig, FileSystemIo, LogPresenter};
use popart::imgproc::parallel::ExecutionStrategy;

#[derive(FromArgs)]
/// Create a pop-art collage of six filtered copies of an image
struct Args {
    /// path to the input image
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// path the collage is saved to; the extension selects the format
    #[argh(option, short = 'o')]
    output: PathBuf,

    /// maximum collage width in pixels
    #[argh(option, default = "900")]
    max_width: usize,

    /// maximum collage height in pixels
    #[argh(option, default = "400")]
    max_height: usize,

    /// run the six filter pipelines on the current thread
    #[argh(switch)]
    serial: bool,

    /// run the filter pipelines on a dedicated pool with this many threads
    #[argh(option)]
    threads: Option<usize>,
}

impl Args {
    fn strategy(&self) -> ExecutionStrategy {
        match (self.serial, self.threads) {
            (true, _) => ExecutionStrategy::Serial,
            (false, Some(n)) => ExecutionStrategy::Fixed(n),
            (false, None) => ExecutionStrategy::Parallel,
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Args = argh::from_env();

    let config = CollageConfig::default()
        .with_max_size(args.max_width, args.max_height)
        .with_strategy(args.strategy());

    collage::run(
        &FileSystemIo,
        &FileSystemIo,
        &LogPresenter,
        &args.input,
        &args.output,
        &config,
    )?;

    Ok(())
}
