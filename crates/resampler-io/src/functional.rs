use std::{
    io::{BufRead, Cursor, Seek},
    path::Path,
};

use image::error::{ParameterError, ParameterErrorKind};
use resampler_image::{Image, ImageSize};

use crate::error::IoError;

/// A generic image type that can be any of the supported image formats.
#[derive(Clone, Debug, PartialEq)]
pub enum GenericImage {
    /// 8-bit grayscale image
    L8(Image<u8, 1>),
    /// 8-bit grayscale image with alpha channel
    La8(Image<u8, 2>),
    /// 8-bit RGB image
    Rgb8(Image<u8, 3>),
    /// 8-bit RGB image with alpha channel
    Rgba8(Image<u8, 4>),
    /// 16-bit grayscale image
    L16(Image<u16, 1>),
    /// 16-bit grayscale image with alpha channel
    La16(Image<u16, 2>),
    /// 16-bit RGB image
    Rgb16(Image<u16, 3>),
    /// 16-bit RGB image with alpha channel
    Rgba16(Image<u16, 4>),
    /// 32-bit float RGB image
    Rgb32F(Image<f32, 3>),
    /// 32-bit float RGB image with alpha channel
    Rgba32F(Image<f32, 4>),
}

macro_rules! impl_from_image {
    ($($variant:ident => $t:ty, $c:literal),* $(,)?) => {
        $(
            impl From<Image<$t, $c>> for GenericImage {
                fn from(image: Image<$t, $c>) -> Self {
                    GenericImage::$variant(image)
                }
            }
        )*
    };
}

impl_from_image!(
    L8 => u8, 1,
    La8 => u8, 2,
    Rgb8 => u8, 3,
    Rgba8 => u8, 4,
    L16 => u16, 1,
    La16 => u16, 2,
    Rgb16 => u16, 3,
    Rgba16 => u16, 4,
    Rgb32F => f32, 3,
    Rgba32F => f32, 4,
);

/// Apply an expression to the image held by any variant.
macro_rules! with_image {
    ($generic:expr, $img:ident => $body:expr) => {
        match $generic {
            GenericImage::L8($img) => $body,
            GenericImage::La8($img) => $body,
            GenericImage::Rgb8($img) => $body,
            GenericImage::Rgba8($img) => $body,
            GenericImage::L16($img) => $body,
            GenericImage::La16($img) => $body,
            GenericImage::Rgb16($img) => $body,
            GenericImage::Rgba16($img) => $body,
            GenericImage::Rgb32F($img) => $body,
            GenericImage::Rgba32F($img) => $body,
        }
    };
}

impl GenericImage {
    /// The size of the image in pixels.
    pub fn size(&self) -> ImageSize {
        with_image!(self, img => img.size())
    }

    /// The number of channels of the image.
    pub fn num_channels(&self) -> usize {
        with_image!(self, img => img.num_channels())
    }

    /// The name of the element kind, e.g. `u8`.
    pub fn dtype_name(&self) -> &'static str {
        match self {
            GenericImage::L8(_)
            | GenericImage::La8(_)
            | GenericImage::Rgb8(_)
            | GenericImage::Rgba8(_) => "u8",
            GenericImage::L16(_)
            | GenericImage::La16(_)
            | GenericImage::Rgb16(_)
            | GenericImage::Rgba16(_) => "u16",
            GenericImage::Rgb32F(_) | GenericImage::Rgba32F(_) => "f32",
        }
    }
}

/// Reads an image from the given file path.
///
/// The file is mapped to memory and decoded with any format supported by the image crate; the
/// format is guessed from the file contents.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An image containing the image data, in its native pixel layout.
///
/// # Errors
///
/// Fails with [`IoError::FileDoesNotExist`] for a missing file and with
/// [`IoError::DecodeFailure`] when the contents are not a decodable image.
pub fn read_image_any(file_path: impl AsRef<Path>) -> Result<GenericImage, IoError> {
    let file_path = file_path.as_ref().to_owned();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    // open the file and map it to memory
    let file = std::fs::File::open(&file_path)?;
    let mmap = unsafe { memmap2::Mmap::map(&file)? };

    log::debug!("decoding {} ({} bytes)", file_path.display(), mmap.len());

    decode_image_bytes(&mmap)
}

/// Decodes an image held in memory.
///
/// # Example
///
/// ```
/// use resampler_io::{decode_image_bytes, IoError};
///
/// let res = decode_image_bytes(b"definitely not an image");
/// assert!(matches!(res, Err(IoError::DecodeFailure(_))));
/// ```
pub fn decode_image_bytes(bytes: &[u8]) -> Result<GenericImage, IoError> {
    decode_image_reader(Cursor::new(bytes))
}

/// Decodes an image from an open byte stream.
///
/// The stream is read from its current position to the end of the image.
pub fn decode_image_reader(reader: impl BufRead + Seek) -> Result<GenericImage, IoError> {
    let img = image::ImageReader::new(reader)
        .with_guessed_format()?
        .decode()
        .map_err(IoError::DecodeFailure)?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let decoded = match img.color() {
        image::ColorType::L8 => {
            Image::<u8, 1>::new(size, img.into_luma8().into_raw())?.into()
        }
        image::ColorType::La8 => {
            Image::<u8, 2>::new(size, img.into_luma_alpha8().into_raw())?.into()
        }
        image::ColorType::Rgb8 => {
            Image::<u8, 3>::new(size, img.into_rgb8().into_raw())?.into()
        }
        image::ColorType::Rgba8 => {
            Image::<u8, 4>::new(size, img.into_rgba8().into_raw())?.into()
        }
        image::ColorType::L16 => {
            Image::<u16, 1>::new(size, img.into_luma16().into_raw())?.into()
        }
        image::ColorType::La16 => {
            Image::<u16, 2>::new(size, img.into_luma_alpha16().into_raw())?.into()
        }
        image::ColorType::Rgb16 => {
            Image::<u16, 3>::new(size, img.into_rgb16().into_raw())?.into()
        }
        image::ColorType::Rgba16 => {
            Image::<u16, 4>::new(size, img.into_rgba16().into_raw())?.into()
        }
        image::ColorType::Rgb32F => {
            Image::<f32, 3>::new(size, img.into_rgb32f().into_raw())?.into()
        }
        image::ColorType::Rgba32F => {
            Image::<f32, 4>::new(size, img.into_rgba32f().into_raw())?.into()
        }
        other => {
            return Err(IoError::UnsupportedImageFormat(format!("{other:?}")));
        }
    };

    Ok(decoded)
}

/// Build an image crate buffer of the given pixel type from an image.
macro_rules! to_dynamic {
    ($img:expr, $pixel:ty, $variant:ident) => {{
        let buf = image::ImageBuffer::<$pixel, _>::from_raw(
            $img.width() as u32,
            $img.height() as u32,
            $img.as_slice().to_vec(),
        )
        .ok_or_else(|| {
            IoError::EncodeFailure(image::ImageError::Parameter(ParameterError::from_kind(
                ParameterErrorKind::DimensionMismatch,
            )))
        })?;
        image::DynamicImage::$variant(buf)
    }};
}

/// Writes an image to the given file path.
///
/// The container format is chosen from the file extension.
///
/// # Arguments
///
/// * `file_path` - The destination path.
/// * `src` - The image to encode.
///
/// # Errors
///
/// Fails with [`IoError::EncodeFailure`] if the extension is unknown or the format cannot hold
/// the pixel layout of the image.
pub fn write_image_any(file_path: impl AsRef<Path>, src: &GenericImage) -> Result<(), IoError> {
    let file_path = file_path.as_ref();

    let dynamic = match src {
        GenericImage::L8(img) => to_dynamic!(img, image::Luma<u8>, ImageLuma8),
        GenericImage::La8(img) => to_dynamic!(img, image::LumaA<u8>, ImageLumaA8),
        GenericImage::Rgb8(img) => to_dynamic!(img, image::Rgb<u8>, ImageRgb8),
        GenericImage::Rgba8(img) => to_dynamic!(img, image::Rgba<u8>, ImageRgba8),
        GenericImage::L16(img) => to_dynamic!(img, image::Luma<u16>, ImageLuma16),
        GenericImage::La16(img) => to_dynamic!(img, image::LumaA<u16>, ImageLumaA16),
        GenericImage::Rgb16(img) => to_dynamic!(img, image::Rgb<u16>, ImageRgb16),
        GenericImage::Rgba16(img) => to_dynamic!(img, image::Rgba<u16>, ImageRgba16),
        GenericImage::Rgb32F(img) => to_dynamic!(img, image::Rgb<f32>, ImageRgb32F),
        GenericImage::Rgba32F(img) => to_dynamic!(img, image::Rgba<f32>, ImageRgba32F),
    };

    log::debug!(
        "encoding {} {} image to {}",
        src.size(),
        src.dtype_name(),
        file_path.display()
    );

    dynamic.save(file_path).map_err(IoError::EncodeFailure)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{decode_image_bytes, decode_image_reader, read_image_any, write_image_any};
    use super::GenericImage;
    use crate::error::IoError;
    use resampler_image::{Image, ImageSize};

    fn gradient_rgb8() -> Result<Image<u8, 3>, IoError> {
        let size = ImageSize {
            width: 5,
            height: 3,
        };
        Ok(Image::from_size_fn(size, |r, c, k| (r * 50 + c * 10 + k) as u8))
    }

    #[test]
    fn read_write_png_rgb8() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");

        let image = gradient_rgb8()?;
        write_image_any(&file_path, &image.clone().into())?;
        assert!(file_path.exists(), "File does not exist: {:?}", file_path);

        let back = read_image_any(&file_path)?;
        assert_eq!(back.size(), image.size());
        assert_eq!(back.num_channels(), 3);
        assert_eq!(back.dtype_name(), "u8");
        assert_eq!(back, GenericImage::Rgb8(image));
        Ok(())
    }

    #[test]
    fn read_write_png_16bit_and_alpha() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;

        let gray16 =
            Image::<u16, 1>::new([3, 2].into(), vec![0, 1000, 20000, 40000, 60000, 65535])?;
        let path16 = tmp_dir.path().join("gray16.png");
        write_image_any(&path16, &gray16.clone().into())?;
        assert_eq!(read_image_any(&path16)?, GenericImage::L16(gray16));

        let la8 = Image::<u8, 2>::new([2, 1].into(), vec![10, 255, 200, 0])?;
        let path_la = tmp_dir.path().join("la8.png");
        write_image_any(&path_la, &la8.clone().into())?;
        assert_eq!(read_image_any(&path_la)?, GenericImage::La8(la8));
        Ok(())
    }

    #[test]
    fn decode_from_bytes_and_stream() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.png");
        let image = gradient_rgb8()?;
        write_image_any(&file_path, &image.clone().into())?;

        let bytes = std::fs::read(&file_path)?;
        assert_eq!(decode_image_bytes(&bytes)?, GenericImage::Rgb8(image.clone()));

        let file = std::io::BufReader::new(std::fs::File::open(&file_path)?);
        assert_eq!(decode_image_reader(file)?, GenericImage::Rgb8(image));
        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let res = read_image_any("this/path/does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn decode_garbage() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("garbage.png");
        std::fs::write(&file_path, b"\x89PNG but not really")?;
        assert!(matches!(
            read_image_any(&file_path),
            Err(IoError::DecodeFailure(_))
        ));
        Ok(())
    }

    #[test]
    fn write_unknown_extension() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("gradient.unknown");
        assert!(matches!(
            write_image_any(&file_path, &gradient_rgb8()?.into()),
            Err(IoError::EncodeFailure(_))
        ));
        Ok(())
    }
}
