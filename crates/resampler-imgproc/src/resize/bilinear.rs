use resampler_image::{Image, ImageDtype, ImageSize};

use super::check_grid;
use crate::{
    error::ResampleError,
    interpolation::linear_taps,
    scale::{output_len, Scale},
};

/// Resize an image by a scale factor using bilinear interpolation.
///
/// Each output sample blends the four input samples around its position: first along the
/// columns (`top`, `bottom`), then between the two rows. At the bottom and right borders the
/// second sample is clamped to the last index. The blend is computed in f64 and stored in the
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
/// use resampler_imgproc::resize::resize_bilinear;
///
/// let image = Image::<f32, 1>::new([2, 1].into(), vec![0.0, 10.0]).unwrap();
/// let up = resize_bilinear(&image, (1.0, 2.0)).unwrap();
/// assert_eq!(up.as_slice(), &[0.0, 5.0, 10.0, 10.0]);
/// ```
pub fn resize_bilinear<T, const C: usize>(
    src: &Image<T, C>,
    scale: impl Into<Scale>,
) -> Result<Image<T, C>, ResampleError>
where
    T: ImageDtype,
{
    let (h_scale, w_scale) = scale.into().axes()?;
    check_grid(src)?;

    let dst_size = ImageSize {
        width: output_len(src.cols(), w_scale)?,
        height: output_len(src.rows(), h_scale)?,
    };

    let row_taps = linear_taps(dst_size.height, h_scale, src.rows());
    let col_taps = linear_taps(dst_size.width, w_scale, src.cols());

    let mut data = Vec::with_capacity(dst_size.width * dst_size.height * C);
    for rt in row_taps.iter() {
        let dx = rt.frac;
        for ct in col_taps.iter() {
            let dy = ct.frac;

            let p00 = src.pixel(rt.i0, ct.i0);
            let p01 = src.pixel(rt.i0, ct.i1);
            let p10 = src.pixel(rt.i1, ct.i0);
            let p11 = src.pixel(rt.i1, ct.i1);

            for k in 0..C {
                let top = (1.0 - dy) * p00[k].as_f64() + dy * p01[k].as_f64();
                let bottom = (1.0 - dy) * p10[k].as_f64() + dy * p11[k].as_f64();
                data.push(T::from_f64((1.0 - dx) * top + dx * bottom));
            }
        }
    }

    Ok(Image::new(dst_size, data)?)
}

#[cfg(test)]
mod tests {
    use super::resize_bilinear;
    use crate::error::ResampleError;
    use approx::assert_relative_eq;
    use resampler_image::{Image, ImageSize};

    #[test]
    fn bilinear_row() -> Result<(), ResampleError> {
        let image = Image::<f64, 1>::new([2, 1].into(), vec![0.0, 10.0])?;
        let up = resize_bilinear(&image, 2.0)?;
        assert_eq!(up.size(), ImageSize::from([4, 2]));
        assert_eq!(up.as_slice(), &[0.0, 5.0, 10.0, 10.0, 0.0, 5.0, 10.0, 10.0]);
        Ok(())
    }

    #[test]
    fn bilinear_truncates_integer_kinds() -> Result<(), ResampleError> {
        let image = Image::<u8, 1>::new([2, 1].into(), vec![0, 3])?;
        let up = resize_bilinear(&image, (1.0, 2.0))?;
        assert_eq!(up.as_slice(), &[0, 1, 3, 3]);
        Ok(())
    }

    #[test]
    fn bilinear_center_of_square() -> Result<(), ResampleError> {
        let image = Image::<f32, 2>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![0.0, 1.0, 2.0, 1.0, 4.0, 1.0, 6.0, 1.0],
        )?;
        let up = resize_bilinear(&image, 2.0)?;
        assert_eq!(up.size(), ImageSize::from([4, 4]));
        // (0.5, 0.5) averages the four corners, second channel stays constant
        assert_relative_eq!(up.pixel(1, 1)[0], 3.0);
        assert_relative_eq!(up.pixel(1, 1)[1], 1.0);
        // bottom-right border replicates the last sample
        assert_eq!(up.pixel(3, 3), &[6.0, 1.0]);
        Ok(())
    }

    #[test]
    fn bilinear_identity() -> Result<(), ResampleError> {
        let image = Image::<u16, 1>::from_size_fn([5, 3].into(), |r, c, _| (r * 1000 + c) as u16);
        assert_eq!(resize_bilinear(&image, 1.0)?, image);
        Ok(())
    }

    #[test]
    fn bilinear_fractional_scale() -> Result<(), ResampleError> {
        let image = Image::<f64, 1>::from_size_fn([3, 3].into(), |r, c, _| (r + c) as f64);
        let up = resize_bilinear(&image, 2.5)?;
        assert_eq!(up.size(), ImageSize::from([8, 8]));
        // position (0.4, 0.8) of the plane r + c
        assert_relative_eq!(up.pixel(1, 2)[0], 1.2, epsilon = 1e-12);
        Ok(())
    }
}
