use geowarp_image::ImageError;

use crate::parallel::ParallelError;

/// An error type for the transform engine.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum TransformError {
    /// A parameter is outside of its valid domain.
    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// The matrix cannot be inverted.
    #[error("Transform matrix is singular (determinant {0})")]
    SingularTransform(f32),

    /// Error from the image container.
    #[error(transparent)]
    ImageError(#[from] ImageError),

    /// Error from the execution strategy.
    #[error(transparent)]
    ParallelError(#[from] ParallelError),
}

impl TransformError {
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        TransformError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}
