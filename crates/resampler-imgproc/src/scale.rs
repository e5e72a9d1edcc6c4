use resampler_image::ImageSize;

use crate::error::ResampleError;

/// Output-to-input size ratio of a resampling operation.
///
/// A scale is either a single factor applied to both axes or a `(rows, cols)` pair. It is
/// resolved into a per-axis pair once, at the entry of every method, with [`Scale::axes`].
///
/// # Example
///
/// ```
/// use resampler_imgproc::Scale;
///
/// assert_eq!(Scale::from(2.0).axes().unwrap(), (2.0, 2.0));
/// assert_eq!(Scale::from((1.5, 3.0)).axes().unwrap(), (1.5, 3.0));
/// assert!(Scale::from(0.0).axes().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scale {
    /// The same factor along rows and columns.
    Uniform(f64),
    /// Independent factors along each axis.
    PerAxis {
        /// Factor along the row (height) axis.
        rows: f64,
        /// Factor along the column (width) axis.
        cols: f64,
    },
}

impl From<f64> for Scale {
    fn from(scale: f64) -> Self {
        Scale::Uniform(scale)
    }
}

impl From<f32> for Scale {
    fn from(scale: f32) -> Self {
        Scale::Uniform(scale as f64)
    }
}

impl From<u32> for Scale {
    fn from(scale: u32) -> Self {
        Scale::Uniform(scale as f64)
    }
}

impl From<(f64, f64)> for Scale {
    fn from((rows, cols): (f64, f64)) -> Self {
        Scale::PerAxis { rows, cols }
    }
}

impl From<[f64; 2]> for Scale {
    fn from(scale: [f64; 2]) -> Self {
        Scale::PerAxis {
            rows: scale[0],
            cols: scale[1],
        }
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Scale::Uniform(s) => write!(f, "{s}"),
            Scale::PerAxis { rows, cols } => write!(f, "({rows}, {cols})"),
        }
    }
}

impl Scale {
    /// Resolve the scale into a `(rows, cols)` pair.
    ///
    /// # Errors
    ///
    /// Fails with [`ResampleError::InvalidArgument`] if a factor is zero, negative or not finite.
    pub fn axes(&self) -> Result<(f64, f64), ResampleError> {
        let (rows, cols) = match *self {
            Scale::Uniform(s) => (s, s),
            Scale::PerAxis { rows, cols } => (rows, cols),
        };

        for s in [rows, cols] {
            if !s.is_finite() || s <= 0.0 {
                return Err(ResampleError::invalid(format!(
                    "scale factors must be finite and positive, got {self}"
                )));
            }
        }

        Ok((rows, cols))
    }

    /// Resolve the scale into a pair of exact positive integers.
    ///
    /// Integral floats such as `3.0` are accepted.
    ///
    /// # Errors
    ///
    /// Fails with [`ResampleError::InvalidArgument`] if a factor has a fractional part.
    pub fn integer_axes(&self) -> Result<(usize, usize), ResampleError> {
        let (rows, cols) = self.axes()?;
        if rows.fract() != 0.0 || cols.fract() != 0.0 {
            return Err(ResampleError::invalid(format!(
                "L2 optimal interpolation via Fourier zero-padding requires an integer scale factor, got {self}"
            )));
        }
        if rows >= usize::MAX as f64 || cols >= usize::MAX as f64 {
            return Err(ResampleError::invalid(format!(
                "scale factors {self} do not fit the platform size"
            )));
        }
        Ok((rows as usize, cols as usize))
    }

    /// The size of the grid produced from `size` at this scale.
    ///
    /// # Errors
    ///
    /// Fails if the scale is invalid or an output dimension rounds to zero.
    pub fn output_size(&self, size: ImageSize) -> Result<ImageSize, ResampleError> {
        let (rows, cols) = self.axes()?;
        Ok(ImageSize {
            width: output_len(size.width, cols)?,
            height: output_len(size.height, rows)?,
        })
    }
}

/// Number of output samples along an axis of `len` input samples.
///
/// The product is rounded half to even, so `3 × 2.5 = 7.5` gives `8` and `5 × 0.5 = 2.5`
/// gives `2`.
///
/// # Errors
///
/// Fails with [`ResampleError::InvalidArgument`] if the result is zero or does not fit a `usize`.
pub fn output_len(len: usize, scale: f64) -> Result<usize, ResampleError> {
    let out = (len as f64 * scale).round_ties_even();
    if out < 1.0 {
        return Err(ResampleError::invalid(format!(
            "an axis of {len} samples at scale {scale} leaves no output samples"
        )));
    }
    if out >= usize::MAX as f64 {
        return Err(ResampleError::invalid(format!(
            "an axis of {len} samples at scale {scale} overflows the output size"
        )));
    }
    Ok(out as usize)
}
