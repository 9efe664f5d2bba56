use super::bilinear::bilinear_interpolation;
use super::nearest::nearest_neighbor_interpolation;
use crate::padding::BorderMode;
use geowarp_image::{Image, ImageDtype};

/// Interpolation mode for the resampling operations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InterpolationMode {
    /// Bilinear interpolation
    #[default]
    Bilinear,
    /// Nearest neighbor interpolation
    Nearest,
}

/// Coordinates are clamped to this magnitude before they are turned into pixel
/// indices, so that neighbour offsets stay representable as `isize`.
const MAX_COORDINATE: f32 = (isize::MAX / 4) as f32;

/// Kernel for interpolating a pixel value
///
/// # Arguments
///
/// * `image` - The input image container with shape (height, width, C).
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `interpolation` - The interpolation mode to use.
/// * `border` - How to resolve samples outside of the image.
///
/// # Returns
///
/// The interpolated value of every channel.
pub fn interpolate_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    interpolation: InterpolationMode,
    border: BorderMode,
) -> [f32; C] {
    let u = u.clamp(-MAX_COORDINATE, MAX_COORDINATE);
    let v = v.clamp(-MAX_COORDINATE, MAX_COORDINATE);

    match interpolation {
        InterpolationMode::Bilinear => bilinear_interpolation(image, u, v, border),
        InterpolationMode::Nearest => nearest_neighbor_interpolation(image, u, v, border),
    }
}

/// Fetch a pixel at integer coordinates, resolving out-of-bounds positions
/// with the border mode.
#[inline]
pub(crate) fn border_pixel<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    x: isize,
    y: isize,
    border: BorderMode,
) -> [f32; C] {
    let src = border
        .map_index(x, image.cols())
        .zip(border.map_index(y, image.rows()))
        .and_then(|(ix, iy)| image.pixel(ix, iy));

    match src {
        Some(src) => {
            let mut pixel = [0.0; C];
            for (dst, &val) in pixel.iter_mut().zip(src) {
                *dst = val.into();
            }
            pixel
        }
        None => [border.fill_value(); C],
    }
}

#[cfg(test)]
mod tests {
    use super::{interpolate_pixel, InterpolationMode};
    use crate::padding::BorderMode;
    use geowarp_image::{Image, ImageError, ImageSize};

    fn ramp() -> Result<Image<u8, 1>, ImageError> {
        // 0 10 20
        // 30 40 50
        Image::new(
            ImageSize {
                width: 3,
                height: 2,
            },
            vec![0, 10, 20, 30, 40, 50],
        )
    }

    #[test]
    fn bilinear_on_grid_is_exact() -> Result<(), ImageError> {
        let image = ramp()?;
        let val = interpolate_pixel(
            &image,
            2.0,
            1.0,
            InterpolationMode::Bilinear,
            BorderMode::Reflect,
        );
        assert_eq!(val, [50.0]);
        Ok(())
    }

    #[test]
    fn bilinear_between_pixels() -> Result<(), ImageError> {
        let image = ramp()?;
        let val = interpolate_pixel(
            &image,
            0.5,
            0.5,
            InterpolationMode::Bilinear,
            BorderMode::Reflect,
        );
        assert_eq!(val, [20.0]);
        Ok(())
    }

    #[test]
    fn bilinear_reflects_outside() -> Result<(), ImageError> {
        let image = ramp()?;
        // x = -0.5 blends the reflected column 0 with column 0
        let val = interpolate_pixel(
            &image,
            -0.5,
            0.0,
            InterpolationMode::Bilinear,
            BorderMode::Reflect,
        );
        assert_eq!(val, [0.0]);
        // x = 2.5 blends column 2 with its reflection
        let val = interpolate_pixel(
            &image,
            2.5,
            1.0,
            InterpolationMode::Bilinear,
            BorderMode::Reflect,
        );
        assert_eq!(val, [50.0]);
        Ok(())
    }

    #[test]
    fn bilinear_constant_border() -> Result<(), ImageError> {
        let image = ramp()?;
        let val = interpolate_pixel(
            &image,
            2.5,
            1.0,
            InterpolationMode::Bilinear,
            BorderMode::Constant(0.0),
        );
        assert_eq!(val, [25.0]);
        Ok(())
    }

    #[test]
    fn far_coordinates_fold_back() -> Result<(), ImageError> {
        let image = ramp()?;
        for interpolation in [InterpolationMode::Bilinear, InterpolationMode::Nearest] {
            for (u, v) in [(1e30, 0.0), (-1e30, 1.0), (0.0, f32::MAX), (f32::MIN, f32::MIN)] {
                let [val] = interpolate_pixel(&image, u, v, interpolation, BorderMode::Reflect);
                assert!(
                    image.as_slice().contains(&(val as u8)),
                    "({u}, {v}) with {interpolation:?} gave {val}"
                );
            }
        }
        Ok(())
    }

    #[test]
    fn nearest_rounds_to_closest() -> Result<(), ImageError> {
        let image = ramp()?;
        let val = interpolate_pixel(
            &image,
            1.4,
            0.6,
            InterpolationMode::Nearest,
            BorderMode::Reflect,
        );
        assert_eq!(val, [40.0]);
        let val = interpolate_pixel(
            &image,
            -1.0,
            0.0,
            InterpolationMode::Nearest,
            BorderMode::Reflect,
        );
        assert_eq!(val, [0.0]);
        Ok(())
    }
}
