use geowarp_image::{Image, ImageDtype};

use super::{Matrix3x3, TransformError};
use crate::interpolation::{interpolate_pixel, InterpolationMode};
use crate::padding::BorderMode;
use crate::parallel::{self, ExecutionStrategy};

/// Applies an affine transformation to an image.
///
/// Each pixel of `dst` is mapped back into `src` through the inverse of `m`
/// and sampled at its center, so pixel `(x, y)` reads the source at
/// `m^-1 * (x + 0.5, y + 0.5) - 0.5` in pixel-index units.
///
/// # Arguments
///
/// * `src` - The input image with shape (height, width, channels).
/// * `dst` - The output image with shape (new_height, new_width, channels).
/// * `m` - The forward affine transform from `src` to `dst` coordinates.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - How to sample coordinates outside of `src`.
/// * `strategy` - How the output rows are scheduled.
///
/// # Errors
///
/// [`TransformError::SingularTransform`] when `m` cannot be inverted.
///
/// # Example
///
/// ```
/// use geowarp_image::{Image, ImageSize};
/// use geowarp_imgproc::interpolation::InterpolationMode;
/// use geowarp_imgproc::padding::BorderMode;
/// use geowarp_imgproc::parallel::ExecutionStrategy;
/// use geowarp_imgproc::warp::{warp_affine, Matrix3x3};
///
/// let src = Image::<f32, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     1f32,
/// ).unwrap();
///
/// let mut dst = Image::<f32, 3>::from_size_val(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     0.0,
/// ).unwrap();
///
/// warp_affine(
///     &src,
///     &mut dst,
///     &Matrix3x3::IDENTITY,
///     InterpolationMode::Nearest,
///     BorderMode::Reflect,
///     ExecutionStrategy::Serial,
/// ).unwrap();
///
/// assert_eq!(dst.as_slice(), src.as_slice());
/// ```
pub fn warp_affine<T: ImageDtype, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    m: &Matrix3x3,
    interpolation: InterpolationMode,
    border: BorderMode,
    strategy: ExecutionStrategy,
) -> Result<(), TransformError> {
    // invert affine transform matrix to find corresponding positions in src from dst
    let m_inv = m.inverse()?;

    log::trace!(
        "warp {} -> {} with {interpolation:?}/{border:?}, inverse {m_inv}",
        src.size(),
        dst.size()
    );

    parallel::par_iter_rows_resample(dst, strategy, |x, y, dst_pixel| {
        let (u, v) = m_inv.transform_point(x as f32 + 0.5, y as f32 + 0.5);
        let pixel = interpolate_pixel(src, u - 0.5, v - 0.5, interpolation, border);
        dst_pixel
            .iter_mut()
            .zip(pixel)
            .for_each(|(d, p)| *d = T::from_f32(p));
    })?;

    Ok(())
}
