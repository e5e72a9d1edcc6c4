#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access, decoding and encoding failures.
pub mod error;

/// High-level image reading and writing functions.
///
/// Decodes any container supported by the `image` crate into a [`functional::GenericImage`]
/// and encodes it back. See [`functional::read_image_any`] for automatic format detection.
pub mod functional;

pub use crate::error::IoError;
pub use crate::functional::{
    decode_image_bytes, decode_image_reader, read_image_any, write_image_any, GenericImage,
};
