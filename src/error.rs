//! Error types for applying color matrices to images.

use thiserror::Error;

/// Error type for the transform engine and its image I/O.
#[derive(Error, Debug)]
pub enum Error {
    /// Source image has zero width or height.
    #[error("invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    /// The bulk compositing backend could not allocate or render the output.
    #[error("backend failure: {0}")]
    BackendFailure(String),

    /// Decoding or encoding through the `image` crate failed.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
}

/// Result type for the transform engine.
pub type Result<T> = std::result::Result<T, Error>;

/// Reject images the strategies cannot produce a meaningful result for.
pub(crate) fn check_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 || height == 0 {
        log::warn!("Rejecting {width}x{height} source image");
        return Err(Error::InvalidDimensions { width, height });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_sized_images_are_rejected() {
        assert!(matches!(
            check_dimensions(0, 10),
            Err(Error::InvalidDimensions { width: 0, height: 10 })
        ));
        assert!(matches!(
            check_dimensions(10, 0),
            Err(Error::InvalidDimensions { width: 10, height: 0 })
        ));
        assert!(check_dimensions(1, 1).is_ok());
    }

    #[test]
    fn messages_name_the_dimensions() {
        let err = Error::InvalidDimensions { width: 0, height: 4 };
        assert_eq!(err.to_string(), "invalid dimensions: 0x4");
    }
}
