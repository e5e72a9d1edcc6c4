use resampler_image::ImageDtype;
use resampler_tensor::Tensor;

use super::grid::{clamp_index, clamp_position, sample_position};
use crate::error::ResampleError;

/// Piecewise-linear interpolation of the sequence `fp`, sampled at `0, 1, .., n - 1`, at `x`.
///
/// Queries outside `[0, n - 1]` take the nearest endpoint value. An empty sequence yields `NaN`.
///
/// # Example
///
/// ```
/// use resampler_imgproc::interpolation::interp_linear;
///
/// let fp = [0.0, 10.0, 30.0];
/// assert_eq!(interp_linear(&fp, 0.5), 5.0);
/// assert_eq!(interp_linear(&fp, 1.5), 20.0);
/// assert_eq!(interp_linear(&fp, 7.0), 30.0);
/// ```
pub fn interp_linear(fp: &[f64], x: f64) -> f64 {
    let n = fp.len();
    if n == 0 || x.is_nan() {
        return f64::NAN;
    }

    let x = clamp_position(x, n);
    let j0 = clamp_index(x.floor() as usize, n);
    let j1 = clamp_index(j0 + 1, n);
    let t = x - j0 as f64;
    if t == 0.0 {
        return fp[j0];
    }

    (fp[j1] - fp[j0]) * t + fp[j0]
}

/// Resample a tensor of any rank along one axis with [`interp_linear`].
///
/// Every 1-D lane of `src` along `axis` is resampled independently to `new_len` samples at the
/// positions `arange(new_len) / scale`; all other axes keep their size. Values are computed in
/// f64 and stored back in the element kind of `src`.
///
/// # Errors
///
/// Fails with [`ResampleError::InvalidArgument`] if `axis` is out of range, the axis is empty,
/// or `new_len` is zero.
///
/// # Example
///
/// ```
/// use resampler_imgproc::interpolation::interp_axis;
/// use resampler_tensor::Tensor;
///
/// let t = Tensor::<f32, 2>::from_shape_vec([2, 2], vec![0.0, 2.0, 4.0, 6.0]).unwrap();
/// let up = interp_axis(&t, 1, 4, 2.0).unwrap();
/// assert_eq!(up.shape, [2, 4]);
/// assert_eq!(up.as_slice(), &[0.0, 1.0, 2.0, 2.0, 4.0, 5.0, 6.0, 6.0]);
/// ```
pub fn interp_axis<T, const N: usize>(
    src: &Tensor<T, N>,
    axis: usize,
    new_len: usize,
    scale: f64,
) -> Result<Tensor<T, N>, ResampleError>
where
    T: ImageDtype,
{
    if axis >= N {
        return Err(ResampleError::invalid(format!(
            "axis {axis} is out of range for a tensor of rank {N}"
        )));
    }

    let in_len = src.shape[axis];
    if in_len == 0 || new_len == 0 {
        return Err(ResampleError::invalid(format!(
            "cannot resample an axis of {in_len} samples to {new_len} samples"
        )));
    }

    let mut shape = src.shape;
    shape[axis] = new_len;
    let mut dst = Tensor::from_shape_val(shape, T::default());

    // lanes along `axis` are indexed by the (outer, inner) coordinates around it
    let outer = src.shape[..axis].iter().product::<usize>();
    let inner = src.shape[axis + 1..].iter().product::<usize>();

    let queries = (0..new_len)
        .map(|i| sample_position(i, scale))
        .collect::<Vec<_>>();

    let src_data = src.as_slice();
    let dst_data = dst.as_slice_mut();
    let mut lane = vec![0f64; in_len];

    for o in 0..outer {
        for i in 0..inner {
            let src_base = o * in_len * inner + i;
            for (j, v) in lane.iter_mut().enumerate() {
                *v = src_data[src_base + j * inner].as_f64();
            }

            let dst_base = o * new_len * inner + i;
            for (q, &x) in queries.iter().enumerate() {
                dst_data[dst_base + q * inner] = T::from_f64(interp_linear(&lane, x));
            }
        }
    }

    Ok(dst)
}
