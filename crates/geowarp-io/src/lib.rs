#![deny(missing_docs)]
//! Image decoding and encoding for geowarp images.

/// Error types for the io module.
pub mod error;

/// High-level read and write functions.
pub mod functional;

pub use crate::error::IoError;
