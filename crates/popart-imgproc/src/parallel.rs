use rayon::prelude::*;
use thiserror::Error;

use popart_image::Image;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how independent jobs, such as the six collage pipelines, are executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExecutionStrategy {
    /// Use the global Rayon thread pool, one task per job.
    #[default]
    Parallel,

    /// Run sequentially on the current thread.
    ///
    /// Useful for small images, debugging, or when the overhead of parallelization
    /// outweighs the benefits.
    Serial,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call.
    Fixed(usize),
}

/// Apply a function to each pixel of `src`, writing the matching pixel of `dst`.
///
/// Rows are processed in parallel. `src` and `dst` must have the same size.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}

/// Apply a function to each channel value of `src`, writing the matching value of `dst`.
///
/// Rows are processed in parallel. `src` and `dst` must have the same size.
pub fn par_iter_rows_val<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&T1, &mut T2) + Send + Sync,
) where
    T1: Send + Sync,
    T2: Send + Sync,
{
    let cols = src.cols();
    src.as_slice()
        .par_chunks_exact(C1 * cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .iter()
                .zip(dst_chunk.iter_mut())
                .for_each(|(src_val, dst_val)| {
                    f(src_val, dst_val);
                });
        });
}

/// Map every job through `op` with the given strategy, keeping the input order.
///
/// # Arguments
///
/// * `strategy` - The execution strategy.
/// * `jobs` - The inputs to process; each is handled independently.
/// * `op` - The operation to run on each job.
///
/// # Returns
///
/// The outputs in the same order as `jobs`.
pub fn map_with_strategy<I, O, F>(
    strategy: ExecutionStrategy,
    jobs: &[I],
    op: F,
) -> Result<Vec<O>, ParallelError>
where
    I: Sync,
    O: Send,
    F: Fn(&I) -> O + Sync + Send,
{
    let outputs: Vec<O> = match strategy {
        ExecutionStrategy::Serial => jobs.iter().map(op).collect(),
        ExecutionStrategy::Parallel => jobs.par_iter().map(op).collect(),
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| jobs.par_iter().map(op).collect())
        }
    };
    Ok(outputs)
}
