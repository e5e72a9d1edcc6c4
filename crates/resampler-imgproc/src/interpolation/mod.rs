//! Sample-position mapping and interpolation kernels.
//!
//! Every resampler maps an output index `i` to the real position `i / scale` in input index
//! space and reads the input there. Positions past the last valid index are pinned to it
//! (clamped-edge boundary policy), never extrapolated or wrapped.
//!
//! - **Nearest**: the sample at the half-to-even rounded position
//! - **Linear taps**: the two bracketing samples and the fractional weight, for bilinear blending
//! - **Linear 1-D**: piecewise-linear interpolation of an ordered sequence, applied per axis

/// Grid sampling helpers shared by all methods.
pub mod grid;

/// One dimensional piecewise-linear interpolation.
pub mod linear;

pub use grid::{
    clamp_index, clamp_position, linear_taps, nearest_indices, sample_position, LinearTap,
};
pub use linear::{interp_axis, interp_linear};
