use std::path::Path;

use geowarp_image::{Image, ImageSize};
use image::ImageEncoder;

use crate::error::IoError;

/// The JPEG quality used when none is given.
pub const DEFAULT_JPEG_QUALITY: u8 = 95;

/// The encoded formats supported for writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Lossless PNG.
    Png,
    /// Lossy JPEG with the given quality in `[1, 100]`.
    Jpeg(u8),
}

impl ImageFormat {
    /// Picks the format from the file extension (`png`, `jpg` or `jpeg`).
    pub fn from_path(file_path: impl AsRef<Path>) -> Result<Self, IoError> {
        let file_path = file_path.as_ref();
        let ext = file_path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        match ext.as_deref() {
            Some("png") => Ok(ImageFormat::Png),
            Some("jpg") | Some("jpeg") => Ok(ImageFormat::Jpeg(DEFAULT_JPEG_QUALITY)),
            _ => Err(IoError::InvalidFileExtension(file_path.to_path_buf())),
        }
    }
}

fn rgb8_from_dynamic(img: image::DynamicImage) -> Result<Image<u8, 3>, IoError> {
    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };
    Ok(Image::new(size, img.into_rgb8().into_raw())?)
}

fn encoder_dims(image: &Image<u8, 3>) -> Result<(u32, u32), IoError> {
    match (u32::try_from(image.width()), u32::try_from(image.height())) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(IoError::ImageTooLarge(image.width(), image.height())),
    }
}

/// Reads an image of any supported format as 8-bit RGB.
///
/// Grayscale and RGBA inputs are converted to RGB.
///
/// # Arguments
///
/// * `file_path` - The path to the image.
pub fn read_image_any_rgb8(file_path: impl AsRef<Path>) -> Result<Image<u8, 3>, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let img = image::ImageReader::open(file_path)?
        .with_guessed_format()?
        .decode()?;

    log::debug!(
        "decoded {} ({}x{}, {:?})",
        file_path.display(),
        img.width(),
        img.height(),
        img.color()
    );

    rgb8_from_dynamic(img)
}

/// Decodes an in-memory encoded image as 8-bit RGB.
pub fn decode_image_rgb8(bytes: &[u8]) -> Result<Image<u8, 3>, IoError> {
    rgb8_from_dynamic(image::load_from_memory(bytes)?)
}

/// Encodes an RGB image to PNG bytes.
pub fn encode_image_png_rgb8(image: &Image<u8, 3>) -> Result<Vec<u8>, IoError> {
    let (width, height) = encoder_dims(image)?;
    let mut buf = Vec::new();
    image::codecs::png::PngEncoder::new(&mut buf).write_image(
        image.as_slice(),
        width,
        height,
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(buf)
}

/// Encodes an RGB image to JPEG bytes.
///
/// # Arguments
///
/// * `image` - The image to encode.
/// * `quality` - The JPEG quality, clamped to `[1, 100]`.
pub fn encode_image_jpeg_rgb8(image: &Image<u8, 3>, quality: u8) -> Result<Vec<u8>, IoError> {
    let (width, height) = encoder_dims(image)?;
    let mut buf = Vec::new();
    let mut encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut buf, quality.clamp(1, 100));
    encoder.encode(
        image.as_slice(),
        width,
        height,
        image::ExtendedColorType::Rgb8,
    )?;
    Ok(buf)
}

/// Encodes an RGB image in the given format.
pub fn encode_image_rgb8(image: &Image<u8, 3>, format: ImageFormat) -> Result<Vec<u8>, IoError> {
    match format {
        ImageFormat::Png => encode_image_png_rgb8(image),
        ImageFormat::Jpeg(quality) => encode_image_jpeg_rgb8(image, quality),
    }
}

/// Writes an RGB image as PNG.
pub fn write_image_png_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    std::fs::write(file_path, encode_image_png_rgb8(image)?)?;
    Ok(())
}

/// Writes an RGB image as JPEG.
pub fn write_image_jpeg_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
    quality: u8,
) -> Result<(), IoError> {
    std::fs::write(file_path, encode_image_jpeg_rgb8(image, quality)?)?;
    Ok(())
}

/// Writes an RGB image, choosing PNG or JPEG from the file extension.
pub fn write_image_any_rgb8(
    file_path: impl AsRef<Path>,
    image: &Image<u8, 3>,
) -> Result<(), IoError> {
    let file_path = file_path.as_ref();
    let format = ImageFormat::from_path(file_path)?;
    std::fs::write(file_path, encode_image_rgb8(image, format)?)?;
    log::debug!("wrote {} as {format:?}", file_path.display());
    Ok(())
}
