//! Production codec: `image` crate decode, lossy WebP encode.
//!
//! Decoding guesses the real format from the bytes (the declared MIME type
//! is not trusted here) and applies EXIF orientation the way browser
//! decoders do before a canvas draw, so reported dimensions match what a
//! user saw. Encoding resizes with bilinear filtering and hands the pixels
//! to libwebp for quality-controlled lossy compression, which the `image`
//! crate itself does not offer.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::{DynamicImage, ImageReader};

use super::{DecodeError, EncodeError, ImageCodec, Raster};
use crate::Dimensions;

/// Default codec backed by the `image` and `webp` crates.
#[derive(Debug, Clone, Copy, Default)]
pub struct WebpCodec;

impl WebpCodec {
    pub fn new() -> Self {
        Self
    }
}

impl ImageCodec for WebpCodec {
    fn decode(&self, bytes: &[u8]) -> Result<Raster, DecodeError> {
        // Orientation must come from the raw bytes before the pixel decode
        let orientation = extract_orientation(bytes);

        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

        let img = reader.decode().map_err(|e| match e {
            image::ImageError::Unsupported(_) => DecodeError::InvalidFormat,
            other => DecodeError::CorruptedFile(other.to_string()),
        })?;

        let oriented = apply_orientation(img, orientation);
        Ok(Raster::from_rgb_image(oriented.into_rgb8()))
    }

    fn encode_webp(
        &self,
        raster: &Raster,
        target: Dimensions,
        quality: u8,
    ) -> Result<Vec<u8>, EncodeError> {
        if target.width == 0 || target.height == 0 {
            return Err(EncodeError::InvalidDimensions {
                width: target.width,
                height: target.height,
            });
        }

        let rgb = raster.to_rgb_image().ok_or_else(|| {
            EncodeError::EncodingFailed("pixel buffer does not match dimensions".to_string())
        })?;

        // Bilinear matches the drawing-surface resize the pipeline models
        let resized = if raster.dimensions() == target {
            rgb
        } else {
            image::imageops::resize(
                &rgb,
                target.width,
                target.height,
                image::imageops::FilterType::Triangle,
            )
        };

        let quality = quality.min(100);
        let encoder = webp::Encoder::from_rgb(resized.as_raw(), target.width, target.height);
        let encoded = encoder
            .encode_simple(false, quality as f32)
            .map_err(|e| EncodeError::EncodingFailed(format!("{:?}", e)))?;

        Ok(encoded.to_vec())
    }
}

/// EXIF orientation values (1-8); anything unrecognized reads as Normal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Orientation {
    #[default]
    Normal,
    FlipHorizontal,
    Rotate180,
    FlipVertical,
    Transpose,
    Rotate90CW,
    Transverse,
    Rotate270CW,
}

impl From<u32> for Orientation {
    fn from(value: u32) -> Self {
        match value {
            2 => Orientation::FlipHorizontal,
            3 => Orientation::Rotate180,
            4 => Orientation::FlipVertical,
            5 => Orientation::Transpose,
            6 => Orientation::Rotate90CW,
            7 => Orientation::Transverse,
            8 => Orientation::Rotate270CW,
            _ => Orientation::Normal,
        }
    }
}

/// Read the EXIF orientation tag; missing or unparsable EXIF means Normal.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);
    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}
