use resampler_image::{Image, ImageDtype, ImageSize};

use super::check_grid;
use crate::error::ResampleError;

/// Downscale an image by an integer factor, averaging each `factor x factor` block.
///
/// Trailing rows and columns that do not fill a whole block are dropped. The block means are
/// computed in f64 and stored in the input element kind.
///
/// # Errors
///
/// Fails with [`ResampleError::InvalidArgument`] if `factor` is zero or larger than a side of
/// the image.
///
/// # Example
///
/// ```
/// use resampler_image::{Image, ImageSize};
/// use resampler_imgproc::resize::downscale_area;
///
/// let image = Image::<f32, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![1.0, 2.0, 3.0, 4.0],
/// )
/// .unwrap();
///
/// let small = downscale_area(&image, 2).unwrap();
/// assert_eq!(small.as_slice(), &[2.5]);
/// ```
pub fn downscale_area<T, const C: usize>(
    src: &Image<T, C>,
    factor: usize,
) -> Result<Image<T, C>, ResampleError>
where
    T: ImageDtype,
{
    check_grid(src)?;

    if factor == 0 || factor > src.rows() || factor > src.cols() {
        return Err(ResampleError::invalid(format!(
            "cannot downscale a {} image by a factor of {factor}",
            src.size()
        )));
    }

    let dst_size = ImageSize {
        width: src.cols() / factor,
        height: src.rows() / factor,
    };
    let norm = 1.0 / (factor * factor) as f64;

    let mut data = Vec::with_capacity(dst_size.width * dst_size.height * C);
    let mut acc = [0f64; C];
    for r in 0..dst_size.height {
        for c in 0..dst_size.width {
            acc.fill(0.0);
            for dr in 0..factor {
                for dc in 0..factor {
                    let pixel = src.pixel(r * factor + dr, c * factor + dc);
                    for (a, v) in acc.iter_mut().zip(pixel) {
                        *a += v.as_f64();
                    }
                }
            }
            data.extend(acc.iter().map(|a| T::from_f64(a * norm)));
        }
    }

    Ok(Image::new(dst_size, data)?)
}

#[cfg(test)]
mod tests {
    use super::downscale_area;
    use crate::error::ResampleError;
    use resampler_image::{Image, ImageSize};

    #[test]
    fn area_means() -> Result<(), ResampleError> {
        #[rustfmt::skip]
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 4,
                height: 2,
            },
            vec![
                0, 2, 10, 10,
                4, 6, 20, 21,
            ],
        )?;
        let small = downscale_area(&image, 2)?;
        assert_eq!(small.size(), ImageSize::from([2, 1]));
        // 15.25 truncates to 15
        assert_eq!(small.as_slice(), &[3, 15]);
        Ok(())
    }

    #[test]
    fn area_drops_partial_blocks_and_keeps_channels() -> Result<(), ResampleError> {
        let image = Image::<f64, 2>::from_size_fn([5, 3].into(), |r, c, k| {
            if k == 0 {
                (r * 5 + c) as f64
            } else {
                1.0
            }
        });
        let small = downscale_area(&image, 2)?;
        assert_eq!(small.size(), ImageSize::from([2, 1]));
        // blocks {0, 1, 5, 6} and {2, 3, 7, 8}
        assert_eq!(small.as_slice(), &[3.0, 1.0, 5.0, 1.0]);
        Ok(())
    }

    #[test]
    fn area_invalid_factor() -> Result<(), ResampleError> {
        let image = Image::<u8, 1>::new([3, 3].into(), vec![0; 9])?;
        assert!(matches!(
            downscale_area(&image, 0),
            Err(ResampleError::InvalidArgument(_))
        ));
        assert!(matches!(
            downscale_area(&image, 4),
            Err(ResampleError::InvalidArgument(_))
        ));
        assert_eq!(downscale_area(&image, 1)?, image);
        Ok(())
    }
}
