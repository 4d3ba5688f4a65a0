//! Imgprep Core - Image optimization pipeline
//!
//! This crate converts user-supplied raster images into size- and
//! dimension-bounded WebP images suitable for web delivery, including
//! input validation, bounded scaling, re-encoding, and before/after
//! reporting.
//!
//! The pipeline performs no network I/O: callers hand the resulting
//! [`optimize::OptimizedImage`] to whatever upload mechanism they use.

pub mod codec;
pub mod optimize;
pub mod preview;
pub mod scale;
pub mod validate;

pub use codec::{DecodeError, EncodeError, ImageCodec, Raster, WebpCodec};
pub use optimize::{OptimizeError, OptimizedImage, Optimizer};
pub use preview::{data_uri, data_uri_from_reader, ReadError};
pub use scale::{fit_dimensions, Bounds};
pub use validate::{validate, SourceFile, ValidationIssue, ValidationResult};

/// Pixel dimensions of an image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Dimensions {
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
}

impl Dimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height. Zero-height dimensions return 0.0.
    pub fn aspect_ratio(&self) -> f64 {
        if self.height == 0 {
            return 0.0;
        }
        self.width as f64 / self.height as f64
    }

    /// Check whether both axes fit within `bounds`.
    pub fn fits_within(&self, bounds: Bounds) -> bool {
        self.width <= bounds.max_width && self.height <= bounds.max_height
    }
}

/// Summary of a single optimization pass.
///
/// Purely derived from the input and output of one [`Optimizer::optimize`]
/// call; carries no independent state.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct OptimizationReport {
    /// Input size in bytes
    pub original_size: usize,
    /// Output size in bytes
    pub optimized_size: usize,
    /// Percentage reduction, rounded to one decimal place.
    ///
    /// Negative when the encode grew the file; that is reported as-is,
    /// not treated as an error.
    pub compression_ratio: f64,
    /// Natural dimensions of the decoded input
    pub original_dimensions: Dimensions,
    /// Dimensions of the encoded output
    pub target_dimensions: Dimensions,
}

impl OptimizationReport {
    pub fn new(
        original_size: usize,
        optimized_size: usize,
        original_dimensions: Dimensions,
        target_dimensions: Dimensions,
    ) -> Self {
        Self {
            original_size,
            optimized_size,
            compression_ratio: compression_ratio(original_size, optimized_size),
            original_dimensions,
            target_dimensions,
        }
    }
}

/// Percentage reduction from `original` to `optimized` bytes, rounded to
/// one decimal place.
///
/// A zero-byte original reports 0.0 so the value stays finite.
pub fn compression_ratio(original: usize, optimized: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let ratio = (original as f64 - optimized as f64) / original as f64 * 100.0;
    (ratio * 10.0).round() / 10.0
}
