use std::path::PathBuf;

use argh::FromArgs;
use num_traits::AsPrimitive;
use resampler::{
    image::{Image, ImageDtype},
    imgproc::ResampleMethod,
    io::{read_image_any, GenericImage},
};

mod benchmark;
mod upscale;

/// Upscale an image by a scale factor, or benchmark every resampling method on it
#[derive(Debug, FromArgs)]
struct Args {
    /// path to the input image
    #[argh(positional)]
    input: PathBuf,

    /// resampling method: nn, bl, pw or l2
    #[argh(
        option,
        short = 'm',
        default = "ResampleMethod::Bilinear",
        from_str_fn(to_resample_method)
    )]
    method: ResampleMethod,

    /// scale factor
    #[argh(option, short = 's', default = "2.0")]
    scale: f64,

    /// print debug information
    #[argh(switch, short = 'v')]
    verbose: bool,

    /// save the upscaled image
    #[argh(switch)]
    save: bool,

    /// where to save the upscaled image, implies --save
    #[argh(option, short = 'o')]
    output: Option<PathBuf>,

    /// downscale the image, upscale it back with every method and report the metrics
    #[argh(switch)]
    benchmark: bool,
}

fn to_resample_method(value: &str) -> Result<ResampleMethod, String> {
    value.parse().map_err(|e| format!("{e}"))
}

fn run<T, const C: usize>(
    image: &Image<T, C>,
    args: &Args,
) -> Result<(), Box<dyn std::error::Error>>
where
    T: ImageDtype + AsPrimitive<T>,
    Image<T, C>: Into<GenericImage>,
{
    if args.benchmark {
        for row in benchmark::run_benchmark(image, args.scale)? {
            println!("{row}");
        }
        return Ok(());
    }

    let output = match (&args.output, args.save) {
        (Some(path), _) => Some(path.clone()),
        (None, true) => Some(upscale::default_output_path(
            &args.input,
            args.method,
            args.scale,
        )),
        (None, false) => None,
    };

    upscale::upscale(image, args.method, args.scale, output.as_deref())?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    let level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let image = read_image_any(&args.input)?;
    log::info!(
        "loaded {}: {} {} x{}",
        args.input.display(),
        image.size(),
        image.dtype_name(),
        image.num_channels()
    );

    match &image {
        GenericImage::L8(img) => run(img, &args),
        GenericImage::La8(img) => run(img, &args),
        GenericImage::Rgb8(img) => run(img, &args),
        GenericImage::Rgba8(img) => run(img, &args),
        GenericImage::L16(img) => run(img, &args),
        GenericImage::La16(img) => run(img, &args),
        GenericImage::Rgb16(img) => run(img, &args),
        GenericImage::Rgba16(img) => run(img, &args),
        GenericImage::Rgb32F(img) => run(img, &args),
        GenericImage::Rgba32F(img) => run(img, &args),
    }
}
