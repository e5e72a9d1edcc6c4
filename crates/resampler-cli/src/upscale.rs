use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use num_traits::AsPrimitive;
use resampler::{
    image::{Image, ImageDtype},
    imgproc::{resample, ResampleMethod, ResampleOptions, ResampledImage},
    io::{write_image_any, GenericImage},
};

/// `<stem>_<method>_x<scale>.png`, next to the input file.
pub fn default_output_path(input: &Path, method: ResampleMethod, scale: f64) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "image".to_string());
    input.with_file_name(format!("{stem}_{}_x{scale}.png", method.short_name()))
}

/// Upscale an image and optionally save the result in the input element kind.
pub fn upscale<T, const C: usize>(
    image: &Image<T, C>,
    method: ResampleMethod,
    scale: f64,
    output: Option<&Path>,
) -> Result<ResampledImage<T, C>, Box<dyn std::error::Error>>
where
    T: ImageDtype + AsPrimitive<T>,
    Image<T, C>: Into<GenericImage>,
{
    let start = Instant::now();
    let upscaled = resample(image, method, scale, &ResampleOptions::default())?;
    let elapsed = start.elapsed();

    log::info!(
        "{} x{scale}: {} -> {} ({}) in {:.3}s",
        method.label(),
        image.size(),
        upscaled.size(),
        if upscaled.is_float() { "f64" } else { T::name() },
        elapsed.as_secs_f64()
    );

    if let Some(path) = output {
        let native: GenericImage = upscaled.clone().into_kind()?.into();
        write_image_any(path, &native)?;
        log::info!("saved {}", path.display());
    }

    Ok(upscaled)
}

#[cfg(test)]
mod tests {
    use super::{default_output_path, upscale};
    use resampler::{
        image::{Image, ImageSize},
        imgproc::ResampleMethod,
        io::{read_image_any, GenericImage},
    };
    use std::path::Path;

    #[test]
    fn output_path_naming() {
        let path = default_output_path(Path::new("data/dog.jpeg"), ResampleMethod::Nearest, 2.0);
        assert_eq!(path, Path::new("data/dog_nn_x2.png"));

        let path = default_output_path(Path::new("cat.png"), ResampleMethod::L2Optimal, 2.5);
        assert_eq!(path, Path::new("cat_l2_x2.5.png"));
    }

    #[test]
    fn upscale_and_save() -> Result<(), Box<dyn std::error::Error>> {
        let tmp_dir = tempfile::tempdir()?;
        let image = Image::<u8, 1>::from_size_fn(
            ImageSize {
                width: 4,
                height: 3,
            },
            |r, c, _| (r * 60 + c * 20) as u8,
        );

        for method in ResampleMethod::ALL {
            let path = tmp_dir.path().join(format!("out_{}.png", method.short_name()));
            let out = upscale(&image, method, 2.0, Some(&path))?;
            assert_eq!(out.size(), ImageSize::from([8, 6]));

            match read_image_any(&path)? {
                GenericImage::L8(saved) => assert_eq!(saved.size(), out.size()),
                other => panic!("unexpected layout {:?}", other.dtype_name()),
            }
        }
        Ok(())
    }
}
