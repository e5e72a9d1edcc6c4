use num_traits::AsPrimitive;
use resampler_image::{Image, ImageDtype, ImageSize};

use super::check_grid;
use crate::{
    clip::common_range,
    error::ResampleError,
    interpolation::nearest_indices,
    scale::{output_len, Scale},
};

/// Resize an image by a scale factor using nearest-neighbor sampling.
///
/// Output sample `(i, j)` copies input sample `(round(i / h_scale), round(j / w_scale))`,
/// clamped to the input grid. Positions are rounded half to even.
///
/// The output element kind `U` defaults to the input kind when inferred from context; picking a
/// different one converts each sample with an `as` cast, which wraps on narrowing integer
/// conversions. With `clip` set every sample is clamped into the range representable by both
/// the input and the output kind first, so the conversion saturates instead.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `scale` - A single factor or a `(rows, cols)` pair.
/// * `clip` - Clamp to the input kind range before converting.
///
/// # Errors
///
/// Fails with [`ResampleError::InvalidArgument`] for a non-positive scale or an empty input.
///
/// # Example
///
/// ```
/// use resampler_image::{Image, ImageSize};
/// use resampler_imgproc::resize::resize_nearest;
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![0, 1, 2, 3],
/// )
/// .unwrap();
///
/// let up: Image<u8, 1> = resize_nearest(&image, 2.0, false).unwrap();
/// assert_eq!(up.as_slice(), &[0, 0, 1, 1, 0, 0, 1, 1, 2, 2, 3, 3, 2, 2, 3, 3]);
/// ```
pub fn resize_nearest<T, U, const C: usize>(
    src: &Image<T, C>,
    scale: impl Into<Scale>,
    clip: bool,
) -> Result<Image<U, C>, ResampleError>
where
    T: ImageDtype + AsPrimitive<U>,
    U: ImageDtype,
{
    let (h_scale, w_scale) = scale.into().axes()?;
    check_grid(src)?;

    let dst_size = ImageSize {
        width: output_len(src.cols(), w_scale)?,
        height: output_len(src.rows(), h_scale)?,
    };

    let rows = nearest_indices(dst_size.height, h_scale, src.rows());
    let cols = nearest_indices(dst_size.width, w_scale, src.cols());

    let (lo, hi) = common_range::<T, U>();
    let convert = |v: T| -> U {
        if clip {
            U::from_f64(v.as_f64().clamp(lo, hi))
        } else {
            v.as_()
        }
    };

    let mut data = Vec::with_capacity(dst_size.width * dst_size.height * C);
    for &r in rows.iter() {
        for &c in cols.iter() {
            data.extend(src.pixel(r, c).iter().map(|&v| convert(v)));
        }
    }

    Ok(Image::new(dst_size, data)?)
}
