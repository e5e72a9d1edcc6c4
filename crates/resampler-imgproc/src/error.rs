use resampler_image::ImageError;
use resampler_tensor::TensorError;

/// An error type for the resampling and metrics operations.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ResampleError {
    /// A scale factor, method name or grid is not acceptable for the operation.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Two grids that must share a shape do not.
    #[error("shape mismatch: {0:?} vs {1:?}")]
    ShapeMismatch([usize; 3], [usize; 3]),

    /// Error creating or converting an image.
    #[error(transparent)]
    ImageError(#[from] ImageError),

    /// Error creating an intermediate tensor.
    #[error(transparent)]
    TensorError(#[from] TensorError),
}

impl ResampleError {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
