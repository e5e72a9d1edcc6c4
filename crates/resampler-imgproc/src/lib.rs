#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// dtype-aware range clipping.
pub mod clip;

/// error types for resampling and metrics.
pub mod error;

/// two dimensional discrete Fourier transform helpers.
pub mod fft;

/// utilities for interpolation.
pub mod interpolation;

/// image quality metrics module.
pub mod metrics;

/// scale-factor resampling methods and the method dispatcher.
pub mod resize;

/// scale factor resolution and output size rules.
pub mod scale;

pub use crate::error::ResampleError;
pub use crate::resize::{resample, ResampleMethod, ResampleOptions, ResampledImage};
pub use crate::scale::Scale;
