//! Imaging collaborator seam for the optimization pipeline.
//!
//! The pipeline depends on two primitives it does not implement itself:
//! a decoder (bytes to pixels) and a resize-and-encode step (pixels to
//! WebP bytes at a quality). Both sit behind the [`ImageCodec`] trait so
//! the validation, scaling, and reporting logic stays pure and testable
//! without a real image library; [`WebpCodec`] is the production
//! implementation.

mod webp;

pub use webp::WebpCodec;

use thiserror::Error;

use crate::Dimensions;

/// Errors from parsing input bytes into a raster.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The bytes are not a recognized or supported image format.
    #[error("Invalid or unsupported image format")]
    InvalidFormat,

    /// The image file is corrupted or incomplete.
    #[error("Corrupted or incomplete image file: {0}")]
    CorruptedFile(String),
}

/// Errors from producing encoded output bytes.
#[derive(Debug, Error)]
pub enum EncodeError {
    /// Target width or height is zero.
    #[error("Invalid dimensions: width ({width}) and height ({height}) must be non-zero")]
    InvalidDimensions { width: u32, height: u32 },

    /// The encoder failed to produce output.
    #[error("WebP encoding failed: {0}")]
    EncodingFailed(String),
}

/// A decoded image with RGB pixel data.
///
/// Owned exclusively by the optimize call that produced it; the pipeline
/// never shares or reuses one across invocations.
#[derive(Debug, Clone)]
pub struct Raster {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// RGB pixel data in row-major order (3 bytes per pixel).
    pub pixels: Vec<u8>,
}

impl Raster {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            (width as usize) * (height as usize) * 3,
            "Pixel buffer size mismatch"
        );
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Create a Raster from an image::RgbImage.
    pub fn from_rgb_image(img: image::RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.into_raw();
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Convert to an image::RgbImage for resizing.
    pub fn to_rgb_image(&self) -> Option<image::RgbImage> {
        image::RgbImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    /// Natural dimensions of the decoded image.
    pub fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width, self.height)
    }

    /// Check if this is an empty/invalid raster.
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0 || self.pixels.is_empty()
    }
}

/// Decoder and encoder pair the pipeline is built against.
pub trait ImageCodec {
    /// Decode raw file bytes into an RGB raster, orientation applied.
    fn decode(&self, bytes: &[u8]) -> Result<Raster, DecodeError>;

    /// Resize `raster` to `target` and encode it as lossy WebP at
    /// `quality` (0-100, clamped).
    fn encode_webp(
        &self,
        raster: &Raster,
        target: Dimensions,
        quality: u8,
    ) -> Result<Vec<u8>, EncodeError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(100, 50, vec![0u8; 100 * 50 * 3]);
        assert_eq!(raster.width, 100);
        assert_eq!(raster.height, 50);
        assert_eq!(raster.dimensions(), Dimensions::new(100, 50));
        assert!(!raster.is_empty());
    }

    #[test]
    fn test_raster_empty() {
        let raster = Raster::new(0, 0, vec![]);
        assert!(raster.is_empty());
    }

    #[test]
    fn test_raster_rgb_image_round_trip() {
        let pixels = vec![
            255, 0, 0, // Red
            0, 255, 0, // Green
        ];
        let raster = Raster::new(2, 1, pixels.clone());
        let img = raster.to_rgb_image().unwrap();
        assert_eq!(img.dimensions(), (2, 1));

        let back = Raster::from_rgb_image(img);
        assert_eq!(back.pixels, pixels);
    }

    #[test]
    fn test_decode_error_display() {
        assert_eq!(
            DecodeError::InvalidFormat.to_string(),
            "Invalid or unsupported image format"
        );
        assert_eq!(
            DecodeError::CorruptedFile("truncated".to_string()).to_string(),
            "Corrupted or incomplete image file: truncated"
        );
    }

    #[test]
    fn test_encode_error_display() {
        let err = EncodeError::InvalidDimensions {
            width: 0,
            height: 10,
        };
        assert_eq!(
            err.to_string(),
            "Invalid dimensions: width (0) and height (10) must be non-zero"
        );
    }
}
