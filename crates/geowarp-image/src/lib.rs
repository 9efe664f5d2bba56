#![deny(missing_docs)]
//! Image types used by the geowarp transforms.

/// image representation for geometric processing.
pub mod image;

/// Error types for the image module.
pub mod error;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
