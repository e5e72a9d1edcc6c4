//! Image quality and similarity metrics.
//!
//! This module compares an original image with a reconstruction of it:
//!
//! - **MSE** (Mean Squared Error): average squared difference between samples
//! - **PSNR** (Peak Signal-to-Noise Ratio): quality in dB, relative to the dynamic range of the
//!   reference image
//! - **SSIM** (Structural Similarity): windowed comparison of local means, variances and
//!   covariances
//!
//! Every metric accepts images of any element kind, computes in f64 and fails with
//! [`ResampleError::ShapeMismatch`] when the two images differ in shape, or with
//! [`ResampleError::InvalidArgument`] when they are empty. PSNR and SSIM use the
//! range `max(a) - min(a)` of the first (reference) image. A constant reference has no range: the
//! score is then perfect if the images are all-close and `NaN` otherwise.
//!
//! # Example
//!
//! ```
//! use resampler_image::{Image, ImageSize};
//! use resampler_imgproc::metrics::{mse, psnr, ssim};
//!
//! let a = Image::<u8, 1>::new(ImageSize { width: 2, height: 2 }, vec![0, 10, 20, 30]).unwrap();
//! let b = Image::<f32, 1>::new(ImageSize { width: 2, height: 2 }, vec![0.0, 10.0, 20.0, 32.0]).unwrap();
//!
//! assert_eq!(mse(&a, &b).unwrap(), 1.0);
//! assert!(psnr(&a, &b).unwrap() > 29.0);
//! assert_eq!(ssim(&a, &a).unwrap(), 1.0);
//! ```

mod mse;
mod ssim;

pub use mse::{mse, psnr};
pub use ssim::{ssim, ssim_window_size};

use resampler_image::{Image, ImageDtype};

use crate::error::ResampleError;

/// Fail with [`ResampleError::ShapeMismatch`] unless both images have the same shape.
pub(crate) fn check_same_shape<T1, T2, const C: usize>(
    a: &Image<T1, C>,
    b: &Image<T2, C>,
) -> Result<(), ResampleError> {
    if a.shape != b.shape {
        return Err(ResampleError::ShapeMismatch(a.shape, b.shape));
    }
    Ok(())
}

/// Fail with [`ResampleError::InvalidArgument`] if the image has no samples.
pub(crate) fn check_not_empty<T, const C: usize>(
    image: &Image<T, C>,
) -> Result<(), ResampleError> {
    if image.rows() == 0 || image.cols() == 0 || C == 0 {
        return Err(ResampleError::invalid(format!(
            "cannot compare empty images, got {}",
            image.size()
        )));
    }
    Ok(())
}

/// The dynamic range `max - min` of an image.
pub(crate) fn data_range<T: ImageDtype, const C: usize>(image: &Image<T, C>) -> f64 {
    let (min, max) = image
        .as_slice()
        .iter()
        .map(|v| v.as_f64())
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
    max - min
}

/// Whether every pair of samples satisfies `|a - b| <= 1e-8 + 1e-5 * |b|`.
pub(crate) fn all_close<T1, T2, const C: usize>(a: &Image<T1, C>, b: &Image<T2, C>) -> bool
where
    T1: ImageDtype,
    T2: ImageDtype,
{
    const RTOL: f64 = 1e-5;
    const ATOL: f64 = 1e-8;

    a.as_slice().iter().zip(b.as_slice()).all(|(x, y)| {
        let (x, y) = (x.as_f64(), y.as_f64());
        (x - y).abs() <= ATOL + RTOL * y.abs()
    })
}

#[cfg(test)]
mod tests {
    use super::{all_close, check_not_empty, check_same_shape, data_range};
    use crate::error::ResampleError;
    use resampler_image::Image;

    #[test]
    fn helpers() -> Result<(), ResampleError> {
        let a = Image::<i8, 1>::new([3, 1].into(), vec![-5, 0, 7])?;
        let b = Image::<f64, 1>::new([3, 1].into(), vec![-5.0, 0.0, 7.00001])?;
        let c = Image::<f64, 1>::new([1, 3].into(), vec![0.0; 3])?;
        let d = Image::<u8, 1>::new([3, 1].into(), vec![0, 0, 7])?;

        assert_eq!(data_range(&a), 12.0);
        assert!(all_close(&a, &b));
        assert!(!all_close(&a, &d));
        assert!(check_same_shape(&a, &b).is_ok());
        assert_eq!(
            check_same_shape(&a, &c),
            Err(ResampleError::ShapeMismatch([1, 3, 1], [3, 1, 1]))
        );

        let empty = Image::<u8, 1>::new([3, 0].into(), vec![])?;
        assert!(check_not_empty(&a).is_ok());
        assert!(matches!(
            check_not_empty(&empty),
            Err(ResampleError::InvalidArgument(_))
        ));
        Ok(())
    }
}
