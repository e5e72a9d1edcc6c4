#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

#[doc(inline)]
pub use resampler_tensor as tensor;

#[doc(inline)]
pub use resampler_image as image;

#[doc(inline)]
pub use resampler_imgproc as imgproc;

#[doc(inline)]
pub use resampler_io as io;
