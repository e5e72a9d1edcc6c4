use resampler_image::{Image, ImageDtype, ImageSize};
use rustfft::{num_complex::Complex, FftDirection, FftPlanner};

use super::check_grid;
use crate::{
    error::ResampleError,
    fft::{fftshift, ifftshift, Fft2d},
    scale::Scale,
};

/// Upscale an image by an integer factor with bandlimited (L2 optimal) interpolation.
///
/// Each channel is transformed to the frequency domain, its centered spectrum is zero-padded
/// to `(h * sh, w * sw)` and transformed back. The result is the real part, rescaled by
/// `sh * sw` to keep the amplitude of the input. The output is always f64.
///
/// The reconstruction passes through the input samples: output sample `(i * sh, j * sw)`
/// equals input sample `(i, j)` up to rounding. Sharp edges ring.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `scale` - An integer factor, or a `(rows, cols)` pair of integer factors.
///
/// # Errors
///
/// Fails with [`ResampleError::InvalidArgument`] when a factor is not a positive integer.
///
/// # Example
///
/// ```
/// use resampler_image::{Image, ImageSize};
/// use resampler_imgproc::resize::resize_l2_optimal;
///
/// let image = Image::<u8, 1>::new([2, 2].into(), vec![5; 4]).unwrap();
/// let up = resize_l2_optimal(&image, 2u32).unwrap();
/// assert_eq!(up.size(), ImageSize::from([4, 4]));
/// assert!(up.as_slice().iter().all(|v| (v - 5.0).abs() < 1e-9));
/// ```
pub fn resize_l2_optimal<T, const C: usize>(
    src: &Image<T, C>,
    scale: impl Into<Scale>,
) -> Result<Image<f64, C>, ResampleError>
where
    T: ImageDtype,
{
    let (sh, sw) = scale.into().integer_axes()?;
    check_grid(src)?;

    let (h, w) = (src.rows(), src.cols());
    let (new_h, new_w) = match (h.checked_mul(sh), w.checked_mul(sw)) {
        (Some(new_h), Some(new_w)) if new_h.checked_mul(new_w).is_some() => (new_h, new_w),
        _ => {
            return Err(ResampleError::invalid(format!(
                "a {} grid at scale ({sh}, {sw}) overflows the output size",
                src.size()
            )))
        }
    };
    let new_size = ImageSize {
        width: new_w,
        height: new_h,
    };

    let mut planner = FftPlanner::new();
    let forward = Fft2d::new(&mut planner, h, w, FftDirection::Forward);
    let inverse = Fft2d::new(&mut planner, new_h, new_w, FftDirection::Inverse);

    // the inverse transform is unnormalized
    let gain = (sh * sw) as f64 / (new_h * new_w) as f64;

    // top-left corner of the original spectrum inside the padded one
    let off_r = new_h / 2 - h / 2;
    let off_c = new_w / 2 - w / 2;

    let mut planes = Vec::with_capacity(C);
    for channel in src.split_channels()? {
        let mut spectrum = channel
            .as_slice()
            .iter()
            .map(|v| Complex::new(v.as_f64(), 0.0))
            .collect::<Vec<_>>();
        forward.process(&mut spectrum);
        let centered = fftshift(&spectrum, h, w);

        let mut padded = vec![Complex::default(); new_h * new_w];
        for (r, row) in centered.chunks_exact(w).enumerate() {
            let start = (r + off_r) * new_w + off_c;
            padded[start..start + w].copy_from_slice(row);
        }

        let mut upsampled = ifftshift(&padded, new_h, new_w);
        inverse.process(&mut upsampled);

        let plane = upsampled.iter().map(|v| v.re * gain).collect();
        planes.push(Image::<f64, 1>::new(new_size, plane)?);
    }

    Ok(Image::from_channels(&planes)?)
}
