use geowarp_image::{Image, ImageDtype, ImageSize};

use super::affine::warp_affine;
use super::{Matrix3x3, ReflectionAxis, TransformError, TransformKind};
use crate::interpolation::InterpolationMode;
use crate::padding::BorderMode;
use crate::parallel::ExecutionStrategy;

fn ensure_finite(name: &'static str, value: f32) -> Result<f32, TransformError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(TransformError::invalid(
            name,
            format!("must be finite, got {value}"),
        ))
    }
}

fn ensure_positive(name: &'static str, value: f32) -> Result<f32, TransformError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TransformError::invalid(
            name,
            format!("must be strictly positive, got {value}"),
        ))
    }
}

/// Builds the homogeneous matrix of a transform.
///
/// | Kind | Matrix |
/// |---|---|
/// | Translation(dx, dy) | `[[1, 0, dx], [0, 1, dy], [0, 0, 1]]` |
/// | Scaling(sx, sy) | `[[sx, 0, 0], [0, sy, 0], [0, 0, 1]]` |
/// | Rotation(θ, cx, cy) | `T(cx, cy) * R(θ) * T(-cx, -cy)` |
/// | Shear(shx, shy) | `[[1, shx, 0], [shy, 1, 0], [0, 0, 1]]` |
/// | Reflection(Horizontal) | `[[1, 0, 0], [0, -1, h], [0, 0, 1]]` |
/// | Reflection(Vertical) | `[[-1, 0, w], [0, 1, 0], [0, 0, 1]]` |
/// | Reflection(Diagonal) | `[[0, 1, 0], [1, 0, 0], [0, 0, 1]]` |
///
/// # Arguments
///
/// * `kind` - The transform and its parameters.
/// * `image_size` - The size of the source image, used for the default
///   rotation center and the reflection offsets.
///
/// # Errors
///
/// [`TransformError::InvalidParameter`] when a scale factor is not strictly
/// positive, any parameter is not finite, or a reflection is requested on an
/// empty image size.
///
/// # Example
///
/// ```
/// use geowarp_image::ImageSize;
/// use geowarp_imgproc::warp::{build_matrix, TransformKind};
///
/// let size = ImageSize { width: 100, height: 100 };
/// let m = build_matrix(&TransformKind::Scaling { sx: 2.0, sy: 0.5 }, size).unwrap();
///
/// assert_eq!(m.transform_point(10.0, 10.0), (20.0, 5.0));
/// ```
pub fn build_matrix(
    kind: &TransformKind,
    image_size: ImageSize,
) -> Result<Matrix3x3, TransformError> {
    let m = match *kind {
        TransformKind::Translation { dx, dy } => {
            Matrix3x3::translation(ensure_finite("dx", dx)?, ensure_finite("dy", dy)?)
        }
        TransformKind::Scaling { sx, sy } => {
            Matrix3x3::scaling(ensure_positive("sx", sx)?, ensure_positive("sy", sy)?)
        }
        TransformKind::Rotation {
            angle_degrees,
            center,
        } => {
            let angle = ensure_finite("angle_degrees", angle_degrees)?;
            let (cx, cy) = match center {
                Some((cx, cy)) => (ensure_finite("cx", cx)?, ensure_finite("cy", cy)?),
                None => (
                    image_size.width as f32 / 2.0,
                    image_size.height as f32 / 2.0,
                ),
            };
            // translate to the origin first, rotate, then translate back
            Matrix3x3::translation(cx, cy)
                * Matrix3x3::rotation(angle.to_radians())
                * Matrix3x3::translation(-cx, -cy)
        }
        TransformKind::Shear { shx, shy } => {
            Matrix3x3::shear(ensure_finite("shx", shx)?, ensure_finite("shy", shy)?)
        }
        TransformKind::Reflection { axis } => {
            if image_size.is_empty() {
                return Err(TransformError::invalid(
                    "image_size",
                    format!("reflection needs a non-empty image, got {image_size}"),
                ));
            }
            let (w, h) = (image_size.width as f32, image_size.height as f32);
            match axis {
                ReflectionAxis::Horizontal => {
                    Matrix3x3::from_affine_2x3([1.0, 0.0, 0.0, 0.0, -1.0, h])
                }
                ReflectionAxis::Vertical => {
                    Matrix3x3::from_affine_2x3([-1.0, 0.0, w, 0.0, 1.0, 0.0])
                }
                ReflectionAxis::Diagonal => {
                    Matrix3x3::from_affine_2x3([0.0, 1.0, 0.0, 1.0, 0.0, 0.0])
                }
            }
        }
    };

    log::debug!("{} matrix for {image_size}: {m}", kind.name());

    Ok(m)
}

/// The default output size of a transform.
///
/// Scaling resizes the grid to `(round(width * sx), round(height * sy))`, never
/// smaller than one pixel. Every other transform keeps the source size.
pub fn output_size(kind: &TransformKind, image_size: ImageSize) -> ImageSize {
    match *kind {
        TransformKind::Scaling { sx, sy } => {
            let scale = |len: usize, s: f32| (len as f32 * s).round().max(1.0) as usize;
            ImageSize {
                width: scale(image_size.width, sx),
                height: scale(image_size.height, sy),
            }
        }
        _ => image_size,
    }
}

/// Composes a chain of transforms into a single matrix.
///
/// The first matrix is applied first: `compose(&[a, b])` is `b * a`.
/// An empty chain is the identity.
pub fn compose(matrices: &[Matrix3x3]) -> Matrix3x3 {
    matrices
        .iter()
        .fold(Matrix3x3::IDENTITY, |acc, m| acc.then(m))
}

/// Resamples an image through an affine matrix into a new image.
///
/// Every output pixel is mapped back to the source with the inverse of
/// `matrix`, sampled with bilinear interpolation and a reflected border.
/// The output has the same pixel type and number of channels as the input.
///
/// # Arguments
///
/// * `image` - The source image, left untouched.
/// * `matrix` - The forward transform from source to output coordinates.
/// * `output_size` - The size of the output grid.
///
/// # Errors
///
/// [`TransformError::SingularTransform`] when the matrix cannot be inverted,
/// [`TransformError::InvalidParameter`] when the output size is empty and
/// [`TransformError::ImageError`] when it is too large to allocate.
///
/// # Sampling
///
/// `matrix` maps continuous coordinates, where pixel `(i, j)` spans
/// `[i, i + 1) x [j, j + 1)`. Output pixel `(x, y)` therefore reads the source
/// at `matrix^-1 * (x + 0.5, y + 0.5) - 0.5` in pixel indices. A point mapping
/// such as `Scaling(2, 0.5)` sending `(10, 10)` to `(20, 5)` holds for the
/// matrix, while output pixel `(20, 5)` samples the source at `(9.75, 10.5)`.
pub fn apply_transform<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    matrix: &Matrix3x3,
    output_size: ImageSize,
) -> Result<Image<T, C>, TransformError> {
    if output_size.is_empty() {
        return Err(TransformError::invalid(
            "output_size",
            format!("must not be empty, got {output_size}"),
        ));
    }

    let mut dst = Image::from_size_val(output_size, T::default())?;

    warp_affine(
        image,
        &mut dst,
        matrix,
        InterpolationMode::Bilinear,
        BorderMode::Reflect,
        ExecutionStrategy::Serial,
    )?;

    Ok(dst)
}

/// Builds the matrix of `kind` and applies it with the default output size.
///
/// # Example
///
/// ```
/// use geowarp_image::{Image, ImageSize};
/// use geowarp_imgproc::warp::{transform, TransformKind};
///
/// let image = Image::<u8, 1>::new(ImageSize { width: 2, height: 1 }, vec![0, 255]).unwrap();
/// let scaled = transform(&image, &TransformKind::Scaling { sx: 2.0, sy: 3.0 }).unwrap();
///
/// assert_eq!(scaled.size(), ImageSize { width: 4, height: 3 });
/// ```
pub fn transform<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    kind: &TransformKind,
) -> Result<Image<T, C>, TransformError> {
    let m = build_matrix(kind, image.size())?;
    apply_transform(image, &m, output_size(kind, image.size()))
}
