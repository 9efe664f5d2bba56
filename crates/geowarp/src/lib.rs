//! Translate, scale, rotate, shear and reflect images through 3x3 homogeneous
//! matrices.
//!
//! ```
//! use geowarp::image::{Image, ImageSize};
//! use geowarp::imgproc::warp::{transform, TransformKind};
//!
//! let image = Image::<u8, 1>::new(
//!     ImageSize {
//!         width: 2,
//!         height: 2,
//!     },
//!     vec![1, 2, 3, 4],
//! )?;
//!
//! let moved = transform(&image, &TransformKind::Translation { dx: 1.0, dy: 0.0 })?;
//! assert_eq!(moved.as_slice(), &[1, 1, 3, 3]);
//! # Ok::<(), geowarp::imgproc::warp::TransformError>(())
//! ```

#[doc(inline)]
pub use geowarp_image as image;

#[doc(inline)]
pub use geowarp_imgproc as imgproc;

#[doc(inline)]
pub use geowarp_io as io;
