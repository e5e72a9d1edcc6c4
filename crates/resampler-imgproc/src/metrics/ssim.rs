use resampler_image::{Image, ImageDtype};

use super::{all_close, check_not_empty, check_same_shape, data_range};
use crate::error::ResampleError;

const K1: f64 = 0.01;
const K2: f64 = 0.03;

/// Side of the square SSIM window for an image whose shorter side is `min_side`.
///
/// The window is 7 wide when it fits, otherwise the largest odd size not above `min_side`.
///
/// # Example
///
/// ```
/// use resampler_imgproc::metrics::ssim_window_size;
///
/// assert_eq!(ssim_window_size(512), 7);
/// assert_eq!(ssim_window_size(6), 5);
/// assert_eq!(ssim_window_size(5), 5);
/// ```
pub fn ssim_window_size(min_side: usize) -> usize {
    if min_side >= 7 {
        7
    } else if min_side % 2 == 1 {
        min_side
    } else {
        min_side.saturating_sub(1)
    }
}

/// Compute the mean structural similarity index (SSIM) between two images.
///
/// Local statistics are gathered with a `win x win` mean filter, `win` given by
/// [`ssim_window_size`], mirroring the image at its borders. Variances use the sample
/// normalization `N / (N - 1)`. With `R = max(I_1) - min(I_1)`, `C1 = (0.01 R)^2` and
/// `C2 = (0.03 R)^2`, the SSIM map
///
/// $ SSIM = \frac{(2 \mu_1 \mu_2 + C_1)(2 \sigma_{12} + C_2)}{(\mu_1^2 + \mu_2^2 + C_1)(\sigma_1^2 + \sigma_2^2 + C_2)} $
///
/// is averaged over all channels after cropping `(win - 1) / 2` samples off every side.
///
/// When the first image is constant (`R = 0`) the result is `1.0` if the images are all-close
/// and `NaN` otherwise.
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
pub fn ssim<T1, T2, const C: usize>(
    image1: &Image<T1, C>,
    image2: &Image<T2, C>,
) -> Result<f64, ResampleError>
where
    T1: ImageDtype,
    T2: ImageDtype,
{
    check_same_shape(image1, image2)?;
    check_not_empty(image1)?;

    let (rows, cols) = (image1.rows(), image1.cols());

    let range = data_range(image1);
    if range == 0.0 {
        return Ok(if all_close(image1, image2) {
            1.0
        } else {
            f64::NAN
        });
    }

    let win = ssim_window_size(rows.min(cols));
    let np = (win * win) as f64;
    let cov_norm = if win > 1 { np / (np - 1.0) } else { 1.0 };
    let c1 = (K1 * range).powi(2);
    let c2 = (K2 * range).powi(2);

    let pad = (win - 1) / 2;
    let mut total = 0.0;
    let mut count = 0usize;

    let channels1 = image1.split_channels()?;
    let channels2 = image2.split_channels()?;
    for (ch1, ch2) in channels1.iter().zip(&channels2) {
        let x = plane_f64(ch1);
        let y = plane_f64(ch2);
        let xx = x.iter().map(|v| v * v).collect::<Vec<_>>();
        let yy = y.iter().map(|v| v * v).collect::<Vec<_>>();
        let xy = x.iter().zip(&y).map(|(a, b)| a * b).collect::<Vec<_>>();

        let ux = uniform_filter(&x, rows, cols, win);
        let uy = uniform_filter(&y, rows, cols, win);
        let uxx = uniform_filter(&xx, rows, cols, win);
        let uyy = uniform_filter(&yy, rows, cols, win);
        let uxy = uniform_filter(&xy, rows, cols, win);

        for r in pad..rows - pad {
            for c in pad..cols - pad {
                let i = r * cols + c;
                let vx = cov_norm * (uxx[i] - ux[i] * ux[i]);
                let vy = cov_norm * (uyy[i] - uy[i] * uy[i]);
                let vxy = cov_norm * (uxy[i] - ux[i] * uy[i]);

                let a1 = 2.0 * ux[i] * uy[i] + c1;
                let a2 = 2.0 * vxy + c2;
                let b1 = ux[i] * ux[i] + uy[i] * uy[i] + c1;
                let b2 = vx + vy + c2;

                total += (a1 * a2) / (b1 * b2);
                count += 1;
            }
        }
    }

    Ok(total / count as f64)
}

/// A single-channel image as a row-major f64 buffer.
fn plane_f64<T: ImageDtype>(plane: &Image<T, 1>) -> Vec<f64> {
    plane.as_slice().iter().map(|v| v.as_f64()).collect()
}

/// Mirror an index into `[0, len)`, repeating the edge sample (`d c b a | a b c d | d c b a`).
fn reflect(index: isize, len: usize) -> usize {
    let n = len as isize;
    let m = index.rem_euclid(2 * n);
    if m < n {
        m as usize
    } else {
        (2 * n - 1 - m) as usize
    }
}

/// Separable `win x win` mean filter over a `rows x cols` buffer with mirrored borders.
fn uniform_filter(src: &[f64], rows: usize, cols: usize, win: usize) -> Vec<f64> {
    let half = (win / 2) as isize;
    let norm = 1.0 / win as f64;

    let mut tmp = vec![0f64; src.len()];
    for r in 0..rows {
        let row = &src[r * cols..(r + 1) * cols];
        for c in 0..cols {
            let sum = (-half..=half)
                .map(|d| row[reflect(c as isize + d, cols)])
                .sum::<f64>();
            tmp[r * cols + c] = sum * norm;
        }
    }

    let mut dst = vec![0f64; src.len()];
    for r in 0..rows {
        for c in 0..cols {
            let sum = (-half..=half)
                .map(|d| tmp[reflect(r as isize + d, rows) * cols + c])
                .sum::<f64>();
            dst[r * cols + c] = sum * norm;
        }
    }

    dst
}
