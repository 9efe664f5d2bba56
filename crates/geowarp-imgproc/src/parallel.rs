use rayon::prelude::*;
use thiserror::Error;

use geowarp_image::Image;

/// Errors that can occur during parallel execution.
#[derive(Error, Debug, PartialEq)]
pub enum ParallelError {
    /// The thread pool failed to build.
    #[error("failed to build thread pool: {0}")]
    BuildError(String),

    /// The requested thread count is invalid.
    #[error("thread count must be > 0, got {0}")]
    InvalidThreadCount(usize),
}

/// Controls how the rows of an output image are produced.
///
/// Every output pixel only reads the source image, so all strategies produce
/// identical results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionStrategy {
    /// Run sequentially on the current thread.
    #[default]
    Serial,

    /// Use the global Rayon thread pool to process rows in parallel.
    ParallelRows,

    /// Run on a local thread pool with `n` threads.
    ///
    /// # Warning
    /// Creates a new thread pool on every call, which has significant overhead.
    Fixed(usize),
}

/// Apply a function to every pixel of `dst`, row by row, with the given strategy.
///
/// The closure receives the column, the row and the channels of the pixel.
pub fn par_iter_rows_resample<T, const C: usize>(
    dst: &mut Image<T, C>,
    strategy: ExecutionStrategy,
    f: impl Fn(usize, usize, &mut [T]) + Send + Sync,
) -> Result<(), ParallelError>
where
    T: Send + Sync,
{
    let cols = dst.cols();
    let row_fn = |(y, row): (usize, &mut [T])| {
        row.chunks_exact_mut(C)
            .enumerate()
            .for_each(|(x, dst_pixel)| f(x, y, dst_pixel));
    };

    let dst_slice = dst.as_slice_mut();

    match strategy {
        ExecutionStrategy::Serial => {
            dst_slice.chunks_exact_mut(C * cols).enumerate().for_each(row_fn);
        }
        ExecutionStrategy::ParallelRows => {
            dst_slice
                .par_chunks_exact_mut(C * cols)
                .enumerate()
                .for_each(row_fn);
        }
        ExecutionStrategy::Fixed(n) => {
            if n == 0 {
                return Err(ParallelError::InvalidThreadCount(n));
            }
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| ParallelError::BuildError(e.to_string()))?;

            pool.install(|| {
                dst_slice
                    .par_chunks_exact_mut(C * cols)
                    .enumerate()
                    .for_each(row_fn);
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use geowarp_image::{ImageError, ImageSize};

    fn fill(strategy: ExecutionStrategy) -> Result<Image<f32, 2>, Box<dyn std::error::Error>> {
        let mut dst = Image::<f32, 2>::from_size_val(
            ImageSize {
                width: 3,
                height: 4,
            },
            0.0,
        )?;
        par_iter_rows_resample(&mut dst, strategy, |x, y, pixel| {
            pixel[0] = x as f32;
            pixel[1] = y as f32;
        })?;
        Ok(dst)
    }

    #[test]
    fn test_serial_visits_every_pixel() -> Result<(), Box<dyn std::error::Error>> {
        let dst = fill(ExecutionStrategy::Serial)?;
        assert_eq!(dst.pixel(2, 3), Some(&[2.0f32, 3.0][..]));
        assert_eq!(dst.pixel(0, 1), Some(&[0.0f32, 1.0][..]));
        Ok(())
    }

    #[test]
    fn test_strategies_agree() -> Result<(), Box<dyn std::error::Error>> {
        let serial = fill(ExecutionStrategy::Serial)?;
        assert_eq!(fill(ExecutionStrategy::ParallelRows)?, serial);
        assert_eq!(fill(ExecutionStrategy::Fixed(2))?, serial);
        Ok(())
    }

    #[test]
    fn test_fixed_zero_threads() -> Result<(), ImageError> {
        let mut dst = Image::<u8, 1>::from_size_val([2, 2].into(), 0)?;
        let res = par_iter_rows_resample(&mut dst, ExecutionStrategy::Fixed(0), |_, _, _| {});
        assert_eq!(res, Err(ParallelError::InvalidThreadCount(0)));
        Ok(())
    }
}
