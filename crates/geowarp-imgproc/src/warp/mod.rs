//! Geometric image transformations using affine warps.
//!
//! This module provides the affine transform engine:
//!
//! - [`Matrix3x3`], a homogeneous 3x3 affine matrix
//! - [`build_matrix`] to build the matrix of a [`TransformKind`]
//!   (translation, scaling, rotation about a center, shear, reflection)
//! - [`compose`] to chain several matrices into one
//! - [`apply_transform`] to resample an image through a matrix with bilinear
//!   interpolation and a reflected border
//! - [`warp_affine`], the lower level resampler with configurable
//!   interpolation, border and execution strategy
//!
//! # Coordinates
//!
//! x grows to the right and y grows downwards. The pixel at column `i` and
//! row `j` covers `[i, i + 1) x [j, j + 1)` and is sampled at its center.
//!
//! # Examples
//!
//! Rotating an image by 45 degrees about its center:
//!
//! ```
//! use geowarp_image::{Image, ImageSize};
//! use geowarp_imgproc::warp::{apply_transform, build_matrix, output_size, TransformKind};
//!
//! let image = Image::<u8, 3>::from_size_val(ImageSize { width: 8, height: 6 }, 128).unwrap();
//!
//! let kind = TransformKind::Rotation {
//!     angle_degrees: 45.0,
//!     center: None,
//! };
//! let m = build_matrix(&kind, image.size()).unwrap();
//! let rotated = apply_transform(&image, &m, output_size(&kind, image.size())).unwrap();
//!
//! assert_eq!(rotated.size(), image.size());
//! ```

mod affine;
mod engine;
mod error;
mod kind;
mod matrix;

pub use affine::warp_affine;
pub use engine::{apply_transform, build_matrix, compose, output_size, transform};
pub use error::TransformError;
pub use kind::{ReflectionAxis, TransformKind};
pub use matrix::Matrix3x3;
