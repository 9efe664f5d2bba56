use super::interpolate::border_pixel;
use crate::padding::BorderMode;
use geowarp_image::{Image, ImageDtype};

/// Kernel for nearest neighbor interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `border` - How to resolve samples outside of the image.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn nearest_neighbor_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    border: BorderMode,
) -> [f32; C] {
    // half-way samples go to the right/bottom neighbour on both sides of zero
    let iu = (u + 0.5).floor() as isize;
    let iv = (v + 0.5).floor() as isize;

    border_pixel(image, iu, iv, border)
}
