mod area;
mod bilinear;
mod nearest;
mod piecewise;
mod spectral;

pub use area::downscale_area;
pub use bilinear::resize_bilinear;
pub use nearest::resize_nearest;
pub use piecewise::resize_piecewise_linear;
pub use spectral::resize_l2_optimal;

use std::str::FromStr;

use num_traits::AsPrimitive;
use resampler_image::{Image, ImageDtype, ImageSize};

use crate::{clip::cast_clipped, error::ResampleError, scale::Scale};

/// Resampling method selector.
///
/// Parses from the long method names (`nearest`, `bilinear`, `piecewise_linear`,
/// `l2_optimal`) and the short ones (`nn`, `bl`, `pw`, `l2`).
///
/// # Example
///
/// ```
/// use resampler_imgproc::ResampleMethod;
///
/// assert_eq!("bl".parse::<ResampleMethod>().unwrap(), ResampleMethod::Bilinear);
/// assert_eq!(ResampleMethod::L2Optimal.to_string(), "l2_optimal");
/// assert!("bicubic".parse::<ResampleMethod>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResampleMethod {
    /// Copy the closest input sample.
    Nearest,
    /// Blend the four surrounding input samples.
    Bilinear,
    /// Two separable 1-D linear passes, rows first.
    PiecewiseLinear,
    /// Bandlimited reconstruction by zero-padding the spectrum.
    L2Optimal,
}

impl ResampleMethod {
    /// Every method, in benchmark order.
    pub const ALL: [ResampleMethod; 4] = [
        ResampleMethod::Nearest,
        ResampleMethod::Bilinear,
        ResampleMethod::PiecewiseLinear,
        ResampleMethod::L2Optimal,
    ];

    /// The long name of the method.
    pub fn name(&self) -> &'static str {
        match self {
            ResampleMethod::Nearest => "nearest",
            ResampleMethod::Bilinear => "bilinear",
            ResampleMethod::PiecewiseLinear => "piecewise_linear",
            ResampleMethod::L2Optimal => "l2_optimal",
        }
    }

    /// The short name of the method.
    pub fn short_name(&self) -> &'static str {
        match self {
            ResampleMethod::Nearest => "nn",
            ResampleMethod::Bilinear => "bl",
            ResampleMethod::PiecewiseLinear => "pw",
            ResampleMethod::L2Optimal => "l2",
        }
    }

    /// A human readable label, as printed in benchmark reports.
    pub fn label(&self) -> &'static str {
        match self {
            ResampleMethod::Nearest => "Nearest Neighbor",
            ResampleMethod::Bilinear => "Bilinear",
            ResampleMethod::PiecewiseLinear => "Piecewise Linear",
            ResampleMethod::L2Optimal => "L2 Optimal",
        }
    }
}

impl std::fmt::Display for ResampleMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ResampleMethod {
    type Err = ResampleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ResampleMethod::ALL
            .into_iter()
            .find(|m| m.name() == s || m.short_name() == s)
            .ok_or_else(|| {
                ResampleError::invalid(format!(
                    "unknown resampling method '{s}', expected one of: nn, bl, pw, l2"
                ))
            })
    }
}

/// Options of the [`resample`] dispatcher.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResampleOptions {
    /// Clamp nearest-neighbor output to the range of the input kind.
    pub clip: bool,
}

/// The output of [`resample`], whose element kind depends on the method.
#[derive(Clone, Debug, PartialEq)]
pub enum ResampledImage<T, const C: usize> {
    /// Output in the input element kind.
    Native(Image<T, C>),
    /// Floating point output of the spectral method.
    Float(Image<f64, C>),
}

impl<T: ImageDtype, const C: usize> ResampledImage<T, C> {
    /// The size of the output image.
    pub fn size(&self) -> ImageSize {
        match self {
            ResampledImage::Native(img) => img.size(),
            ResampledImage::Float(img) => img.size(),
        }
    }

    /// Whether the output is floating point regardless of the input kind.
    pub fn is_float(&self) -> bool {
        matches!(self, ResampledImage::Float(_))
    }

    /// Convert the output to f64 samples.
    pub fn into_f64(self) -> Result<Image<f64, C>, ResampleError> {
        match self {
            ResampledImage::Native(img) => cast_clipped(&img),
            ResampledImage::Float(img) => Ok(img),
        }
    }

    /// Convert the output back to the input kind, clipping floating results into its range.
    pub fn into_kind(self) -> Result<Image<T, C>, ResampleError> {
        match self {
            ResampledImage::Native(img) => Ok(img),
            ResampledImage::Float(img) => cast_clipped(&img),
        }
    }
}

/// Resample an image with the selected method.
///
/// # Arguments
///
/// * `src` - The input image.
/// * `method` - The resampling method.
/// * `scale` - A single factor or a `(rows, cols)` pair.
/// * `options` - Method options.
///
/// # Returns
///
/// The resampled image, tagged with its element kind.
///
/// # Example
///
/// ```
/// use resampler_image::{Image, ImageSize};
/// use resampler_imgproc::{resample, ResampleMethod, ResampleOptions};
///
/// let image = Image::<u8, 1>::new(
///     ImageSize { width: 2, height: 2 },
///     vec![0, 1, 2, 3],
/// )
/// .unwrap();
///
/// let out = resample(&image, ResampleMethod::Nearest, 2.0, &ResampleOptions::default()).unwrap();
/// assert_eq!(out.size(), ImageSize { width: 4, height: 4 });
/// assert!(!out.is_float());
/// ```
pub fn resample<T, const C: usize>(
    src: &Image<T, C>,
    method: ResampleMethod,
    scale: impl Into<Scale>,
    options: &ResampleOptions,
) -> Result<ResampledImage<T, C>, ResampleError>
where
    T: ImageDtype + AsPrimitive<T>,
{
    let scale = scale.into();
    log::debug!(
        "resampling {} {}x{}x{} image with {method} at scale {scale}",
        T::name(),
        src.rows(),
        src.cols(),
        C,
    );

    let out = match method {
        ResampleMethod::Nearest => {
            ResampledImage::Native(resize_nearest(src, scale, options.clip)?)
        }
        ResampleMethod::Bilinear => ResampledImage::Native(resize_bilinear(src, scale)?),
        ResampleMethod::PiecewiseLinear => {
            ResampledImage::Native(resize_piecewise_linear(src, scale)?)
        }
        ResampleMethod::L2Optimal => ResampledImage::Float(resize_l2_optimal(src, scale)?),
    };

    log::debug!("{method} output: {}", out.size());

    Ok(out)
}

/// Reject grids with no rows, columns or channels.
pub(crate) fn check_grid<T, const C: usize>(src: &Image<T, C>) -> Result<(), ResampleError> {
    if src.rows() == 0 || src.cols() == 0 || C == 0 {
        return Err(ResampleError::invalid(format!(
            "cannot resample an empty grid of shape {:?}",
            src.shape
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{resample, ResampleMethod, ResampleOptions, ResampledImage};
    use crate::error::ResampleError;
    use approx::assert_relative_eq;
    use resampler_image::{Image, ImageSize};

    fn ramp(width: usize, height: usize) -> Result<Image<u8, 3>, ResampleError> {
        let data = (0..width * height * 3).map(|i| (i * 7 % 256) as u8).collect();
        Ok(Image::new(ImageSize { width, height }, data)?)
    }

    #[test]
    fn parse_methods() -> Result<(), ResampleError> {
        for method in ResampleMethod::ALL {
            assert_eq!(method.name().parse::<ResampleMethod>()?, method);
            assert_eq!(method.short_name().parse::<ResampleMethod>()?, method);
        }
        assert_eq!(ResampleMethod::PiecewiseLinear.label(), "Piecewise Linear");

        let err = "lanczos".parse::<ResampleMethod>();
        assert!(matches!(err, Err(ResampleError::InvalidArgument(msg)) if msg.contains("lanczos")));
        Ok(())
    }

    #[test]
    fn identity_for_every_method() -> Result<(), ResampleError> {
        let image = ramp(5, 4)?;
        for method in ResampleMethod::ALL {
            let out = resample(&image, method, 1.0, &ResampleOptions::default())?;
            match out {
                ResampledImage::Native(out) => assert_eq!(out, image, "{method}"),
                ResampledImage::Float(out) => {
                    for (a, b) in out.as_slice().iter().zip(image.as_slice()) {
                        assert_relative_eq!(*a, *b as f64, epsilon = 1e-9);
                    }
                }
            }
        }
        Ok(())
    }

    #[test]
    fn shape_law() -> Result<(), ResampleError> {
        let image = ramp(3, 3)?;
        let tiny = ramp(1, 1)?;
        for method in ResampleMethod::ALL {
            let out = resample(&image, method, 2.0, &ResampleOptions::default())?;
            assert_eq!(out.size(), ImageSize::from([6, 6]));

            let out = resample(&image, method, (3.0, 1.0), &ResampleOptions::default())?;
            assert_eq!(
                out.size(),
                ImageSize {
                    width: 3,
                    height: 9
                }
            );

            let out = resample(&tiny, method, 3.0, &ResampleOptions::default())?;
            assert_eq!(out.size(), ImageSize::from([3, 3]));
        }

        for method in [
            ResampleMethod::Nearest,
            ResampleMethod::Bilinear,
            ResampleMethod::PiecewiseLinear,
        ] {
            let out = resample(&image, method, 2.5, &ResampleOptions::default())?;
            assert_eq!(out.size(), ImageSize::from([8, 8]));
        }
        Ok(())
    }

    #[test]
    fn dtype_law() -> Result<(), ResampleError> {
        let image = ramp(2, 2)?;
        for method in ResampleMethod::ALL {
            let out = resample(&image, method, 2.0, &ResampleOptions::default())?;
            assert_eq!(out.is_float(), method == ResampleMethod::L2Optimal);
        }
        Ok(())
    }

    #[test]
    fn spectral_needs_integer_scale() -> Result<(), ResampleError> {
        let image = Image::<f32, 1>::from_size_val([2, 2].into(), 1.0)?;
        assert!(matches!(
            resample(&image, ResampleMethod::L2Optimal, 2.5, &ResampleOptions::default()),
            Err(ResampleError::InvalidArgument(_))
        ));
        for scale in [2.0, 3.0] {
            let out = resample(
                &image,
                ResampleMethod::L2Optimal,
                scale,
                &ResampleOptions::default(),
            )?;
            assert!(out.is_float());
        }
        Ok(())
    }

    #[test]
    fn normalize_output() -> Result<(), ResampleError> {
        let image = Image::<u8, 1>::new([2, 1].into(), vec![0, 255])?;
        let out = resample(
            &image,
            ResampleMethod::L2Optimal,
            2.0,
            &ResampleOptions::default(),
        )?;
        let back = out.clone().into_kind()?;
        assert_eq!(back.size(), ImageSize::from([4, 2]));

        // the spectral reconstructions ring to -76.7 and 331.7 in the last column
        for (samples, expected) in [
            ([0, 250, 10], [163, 173, 0]),
            ([255, 5, 245], [91, 81, 255]),
        ] {
            let row = Image::<u8, 1>::new([3, 1].into(), samples.to_vec())?;
            let up = resample(
                &row,
                ResampleMethod::L2Optimal,
                2.0,
                &ResampleOptions::default(),
            )?
            .into_kind()?;
            assert_eq!(up.size(), ImageSize::from([6, 2]));
            for r in 0..2 {
                let got = [up.pixel(r, 1)[0], up.pixel(r, 3)[0], up.pixel(r, 5)[0]];
                assert_eq!(got, expected);
            }
        }

        let float = out.into_f64()?;
        assert_relative_eq!(float.as_slice()[0], 0.0, epsilon = 1e-9);

        let nearest = resample(&image, ResampleMethod::Nearest, 1.0, &Default::default())?;
        assert_eq!(nearest.into_f64()?.as_slice(), &[0.0, 255.0]);
        Ok(())
    }

    #[test]
    fn rejects_bad_scale_and_empty_grid() -> Result<(), ResampleError> {
        let image = ramp(2, 2)?;
        for method in ResampleMethod::ALL {
            assert!(matches!(
                resample(&image, method, (0.0, 2.0), &ResampleOptions::default()),
                Err(ResampleError::InvalidArgument(_))
            ));
        }

        let empty = Image::<u8, 1>::new([0, 3].into(), vec![])?;
        for method in ResampleMethod::ALL {
            assert!(matches!(
                resample(&empty, method, 2.0, &ResampleOptions::default()),
                Err(ResampleError::InvalidArgument(_))
            ));
        }
        Ok(())
    }
}
