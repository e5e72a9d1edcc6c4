use resampler_image::{Image, ImageDtype};

use crate::error::ResampleError;

/// The range representable by both `T` and `U`, as f64.
pub fn common_range<T: ImageDtype, U: ImageDtype>() -> (f64, f64) {
    let (t_min, t_max) = T::range();
    let (u_min, u_max) = U::range();
    (t_min.max(u_min), t_max.min(u_max))
}

/// Clamp a value into the range of `T` and store it as `T`.
///
/// `NaN` is stored as zero.
#[inline]
pub fn clip_to<T: ImageDtype>(x: f64) -> T {
    let (min, max) = T::range();
    T::from_f64(x.clamp(min, max))
}

/// Convert an image to another element kind, clamping every value into the target range.
///
/// Unlike [`Image::cast`], values that do not fit are saturated instead of rejected, and
/// fractional values stored into an integer kind are truncated toward zero.
///
/// # Arguments
///
/// * `src` - The image to convert.
///
/// # Returns
///
/// A new image of the same size and channel count in the kind `U`.
///
/// # Example
///
/// ```
/// use resampler_image::{Image, ImageSize};
/// use resampler_imgproc::clip::cast_clipped;
///
/// let image = Image::<f64, 1>::new(
///     ImageSize { width: 4, height: 1 },
///     vec![-20.0, 12.7, 255.0, 1e6],
/// )
/// .unwrap();
///
/// let clipped = cast_clipped::<f64, u8, 1>(&image).unwrap();
/// assert_eq!(clipped.as_slice(), &[0, 12, 255, 255]);
/// ```
pub fn cast_clipped<T, U, const C: usize>(src: &Image<T, C>) -> Result<Image<U, C>, ResampleError>
where
    T: ImageDtype,
    U: ImageDtype,
{
    let data = src
        .as_slice()
        .iter()
        .map(|&v| clip_to::<U>(v.as_f64()))
        .collect();

    Ok(Image::new(src.size(), data)?)
}
