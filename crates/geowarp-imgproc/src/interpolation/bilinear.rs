use super::interpolate::border_pixel;
use crate::padding::BorderMode;
use geowarp_image::{Image, ImageDtype};

/// Kernel for bilinear interpolation
///
/// # Arguments
///
/// * `image` - The input image container.
/// * `u` - The x coordinate of the pixel to interpolate.
/// * `v` - The y coordinate of the pixel to interpolate.
/// * `border` - How to resolve the neighbours outside of the image.
///
/// # Returns
///
/// The interpolated pixel values.
pub(crate) fn bilinear_interpolation<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    u: f32,
    v: f32,
    border: BorderMode,
) -> [f32; C] {
    let u0 = u.floor();
    let v0 = v.floor();

    let frac_u = u - u0;
    let frac_v = v - v0;

    let frac_uu = 1.0 - frac_u;
    let frac_vv = 1.0 - frac_v;

    let iu0 = u0 as isize;
    let iv0 = v0 as isize;

    let neighbours = [
        (iu0, iv0, frac_uu * frac_vv),
        (iu0 + 1, iv0, frac_u * frac_vv),
        (iu0, iv0 + 1, frac_uu * frac_v),
        (iu0 + 1, iv0 + 1, frac_u * frac_v),
    ];

    let mut pixel = [0.0; C];
    for (iu, iv, w) in neighbours {
        // zero weights skip the fetch, keeping on-grid samples exact
        if w == 0.0 {
            continue;
        }
        let p = border_pixel(image, iu, iv, border);
        pixel.iter_mut().zip(p).for_each(|(acc, val)| *acc += val * w);
    }

    pixel
}
