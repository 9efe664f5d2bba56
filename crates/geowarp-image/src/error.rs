/// An error type for the image module.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ImageError {
    /// Error when channel and shape are not valid.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image has a zero width or height, or is too large to address.
    #[error("Invalid image size: {0}x{1}")]
    InvalidImageSize(usize, usize),
}
