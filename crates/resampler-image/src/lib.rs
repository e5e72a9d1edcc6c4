#![deny(missing_docs)]
//! Image types and traits for holding and converting sample grids

/// image representation for resampling purposes.
pub mod image;

/// element kinds and their representable ranges.
pub mod dtype;

/// Error types for the image module.
pub mod error;

pub use crate::dtype::{DtypeKind, ImageDtype};
pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
