use resampler_image::{Image, ImageDtype};

use super::check_grid;
use crate::{
    error::ResampleError,
    interpolation::interp_axis,
    scale::{output_len, Scale},
};

/// Resize an image by a scale factor with two separable piecewise-linear passes.
///
/// Every column is first resampled along the rows, then every row of that intermediate grid
/// along the columns. Both passes use [`interp_linear`](crate::interpolation::interp_linear),
/// so queries past the last sample take the edge value. The intermediate grid is stored in the
/// input element kind.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `scale` - A single factor or a `(rows, cols)` pair.
///
/// # Example
///
/// ```
/// use resampler_image::Image;
/// use resampler_imgproc::resize::resize_piecewise_linear;
///
/// let image = Image::<f64, 1>::new([2, 2].into(), vec![0.0, 2.0, 4.0, 6.0]).unwrap();
/// let up = resize_piecewise_linear(&image, 2.0).unwrap();
/// assert_eq!(up.pixel(1, 1), &[3.0]);
/// ```
pub fn resize_piecewise_linear<T, const C: usize>(
    src: &Image<T, C>,
    scale: impl Into<Scale>,
) -> Result<Image<T, C>, ResampleError>
where
    T: ImageDtype,
{
    let (h_scale, w_scale) = scale.into().axes()?;
    check_grid(src)?;

    let new_h = output_len(src.rows(), h_scale)?;
    let new_w = output_len(src.cols(), w_scale)?;

    let rows_done = interp_axis(&src.0, 0, new_h, h_scale)?;
    let dst = interp_axis(&rows_done, 1, new_w, w_scale)?;

    Ok(Image(dst))
}
