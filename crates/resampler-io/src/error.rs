/// An error type for the io module.
#[derive(thiserror::Error, Debug)]
pub enum IoError {
    /// Error when the file does not exist.
    #[error("File does not exist: {0}")]
    FileDoesNotExist(std::path::PathBuf),

    /// Error to open, map or write the file.
    #[error("Failed to manipulate the file. {0}")]
    FileError(#[from] std::io::Error),

    /// The input bytes are not a decodable image.
    #[error("Failed to decode the image. {0}")]
    DecodeFailure(#[source] image::ImageError),

    /// The image could not be encoded to the requested container.
    #[error("Failed to encode the image. {0}")]
    EncodeFailure(#[source] image::ImageError),

    /// The decoded pixel layout has no [`crate::GenericImage`] counterpart.
    #[error("Unsupported image format: {0}")]
    UnsupportedImageFormat(String),

    /// Error to create the image.
    #[error("Failed to create image. {0}")]
    ImageCreationError(#[from] resampler_image::ImageError),
}
