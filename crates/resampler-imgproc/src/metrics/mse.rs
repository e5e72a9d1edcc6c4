use resampler_image::{Image, ImageDtype};

use super::{all_close, check_not_empty, check_same_shape, data_range};
use crate::error::ResampleError;

/// Compute the mean squared error (MSE) between two images.
///
/// The MSE is defined as:
///
/// $ MSE = \frac{1}{n} \sum_{i=1}^{n} (I_1 - I_2)^2 $
///
/// where `I_1` and `I_2` are the two images and `n` is the number of samples.
///
/// # Arguments
///
/// * `image1` - The first input image with shape (H, W, C).
/// * `image2` - The second input image with shape (H, W, C).
///
/// # Errors
///
/// Fails with [`ResampleError::ShapeMismatch`] if the images differ in shape, and with
/// [`ResampleError::InvalidArgument`] if they are empty.
///
/// # Example
///
/// ```
/// use resampler_image::{Image, ImageSize};
/// use resampler_imgproc::metrics::mse;
///
/// let zeros = Image::<u8, 1>::new(ImageSize { width: 2, height: 2 }, vec![0; 4]).unwrap();
/// let ones = Image::<u8, 1>::new(ImageSize { width: 2, height: 2 }, vec![1; 4]).unwrap();
///
/// assert_eq!(mse(&zeros, &ones).unwrap(), 1.0);
/// ```
pub fn mse<T1, T2, const C: usize>(
    image1: &Image<T1, C>,
    image2: &Image<T2, C>,
) -> Result<f64, ResampleError>
where
    T1: ImageDtype,
    T2: ImageDtype,
{
    check_same_shape(image1, image2)?;
    check_not_empty(image1)?;

    let sum = image1
        .as_slice()
        .iter()
        .zip(image2.as_slice())
        .map(|(a, b)| (a.as_f64() - b.as_f64()).powi(2))
        .sum::<f64>();

    Ok(sum / image1.numel() as f64)
}

/// Compute the peak signal-to-noise ratio (PSNR) between two images.
///
/// The PSNR is defined as:
///
/// $ PSNR = 10 \log_{10} \left( \frac{R^2}{MSE} \right) $
///
/// where `R = max(I_1) - min(I_1)` is the dynamic range of the first image.
///
/// Identical images give `+inf`. When the first image is constant (`R = 0`) the result is
/// `+inf` if the images are all-close and `NaN` otherwise.
///
/// # Arguments
///
/// * `image1` - The reference image with shape (H, W, C).
/// * `image2` - The compared image with shape (H, W, C).
///
/// # Errors
///
/// Fails with [`ResampleError::ShapeMismatch`] if the images differ in shape, and with
/// [`ResampleError::InvalidArgument`] if they are empty.
pub fn psnr<T1, T2, const C: usize>(
    image1: &Image<T1, C>,
    image2: &Image<T2, C>,
) -> Result<f64, ResampleError>
where
    T1: ImageDtype,
    T2: ImageDtype,
{
    check_same_shape(image1, image2)?;
    check_not_empty(image1)?;

    let range = data_range(image1);
    if range == 0.0 {
        return Ok(if all_close(image1, image2) {
            f64::INFINITY
        } else {
            f64::NAN
        });
    }

    let err = mse(image1, image2)?;
    if err == 0.0 {
        return Ok(f64::INFINITY);
    }

    Ok(10.0 * (range * range / err).log10())
}
