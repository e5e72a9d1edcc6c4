use std::time::{Duration, Instant};

use num_traits::AsPrimitive;
use resampler::{
    image::{Image, ImageDtype, ImageSize},
    imgproc::{
        metrics::{mse, psnr, ssim},
        resample,
        resize::downscale_area,
        ResampleError, ResampleMethod, ResampleOptions, ResampledImage, Scale,
    },
};

/// Scores of one method in a benchmark run.
#[derive(Debug)]
pub struct BenchmarkRow {
    pub method: ResampleMethod,
    pub elapsed: Duration,
    pub psnr: f64,
    pub ssim: f64,
    pub mse: f64,
}

impl std::fmt::Display for BenchmarkRow {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: time={:.3}s, PSNR={:.2}, SSIM={:.3}, MSE={:.2}",
            self.method.label(),
            self.elapsed.as_secs_f64(),
            self.psnr,
            self.ssim,
            self.mse
        )
    }
}

/// Crop an image to the largest multiple of `factor` along both sides.
fn crop_to_multiple<T: ImageDtype, const C: usize>(
    image: &Image<T, C>,
    factor: usize,
) -> Result<Image<T, C>, ResampleError> {
    let size = ImageSize {
        width: image.cols() / factor * factor,
        height: image.rows() / factor * factor,
    };
    if size.width == 0 || size.height == 0 {
        return Err(ResampleError::InvalidArgument(format!(
            "a {} image is too small to benchmark at scale {factor}",
            image.size()
        )));
    }
    Ok(Image::from_size_fn(size, |r, c, k| image.pixel(r, c)[k]))
}

/// Downscale an image by area averaging, upscale it back with every method and score each
/// reconstruction against the original.
///
/// The original is first cropped to a multiple of `scale` so that every reconstruction has its
/// exact shape.
pub fn run_benchmark<T, const C: usize>(
    original: &Image<T, C>,
    scale: f64,
) -> Result<Vec<BenchmarkRow>, ResampleError>
where
    T: ImageDtype + AsPrimitive<T>,
{
    let (factor, _) = Scale::from((scale, scale)).integer_axes()?;

    let original = crop_to_multiple(original, factor)?;
    let low_res = downscale_area(&original, factor)?;
    log::debug!("benchmark: {} -> {}", original.size(), low_res.size());

    let mut rows = Vec::with_capacity(ResampleMethod::ALL.len());
    for method in ResampleMethod::ALL {
        let start = Instant::now();
        let upscaled = resample(&low_res, method, scale, &ResampleOptions::default())?;
        let elapsed = start.elapsed();

        let (p, s, m) = match &upscaled {
            ResampledImage::Native(img) => (
                psnr(&original, img)?,
                ssim(&original, img)?,
                mse(&original, img)?,
            ),
            ResampledImage::Float(img) => (
                psnr(&original, img)?,
                ssim(&original, img)?,
                mse(&original, img)?,
            ),
        };

        rows.push(BenchmarkRow {
            method,
            elapsed,
            psnr: p,
            ssim: s,
            mse: m,
        });
    }

    Ok(rows)
}
