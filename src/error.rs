use image::{ImageError, ImageFormat};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IconError {
    /// The encoder for `format` is not compiled into this build.
    #[error("{format:?} encoding is not available: {source}")]
    MissingCapability {
        format: ImageFormat,
        #[source]
        source: ImageError,
    },
    #[error("{0}")]
    GenericFailure(String),
}

impl IconError {
    pub fn is_missing_capability(&self) -> bool {
        matches!(self, IconError::MissingCapability { .. })
    }

    /// Classify an encoder error for the requested output format.
    pub fn from_encode(format: ImageFormat, e: ImageError) -> Self {
        match e {
            ImageError::Unsupported(_) => IconError::MissingCapability { format, source: e },
            other => IconError::GenericFailure(other.to_string()),
        }
    }
}

impl From<std::io::Error> for IconError {
    fn from(e: std::io::Error) -> Self { IconError::GenericFailure(e.to_string()) }
}

impl From<ImageError> for IconError {
    fn from(e: ImageError) -> Self { IconError::GenericFailure(e.to_string()) }
}
