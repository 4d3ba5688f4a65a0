//! The optimization pipeline: decode, fit, re-encode, report.
//!
//! One [`Optimizer::optimize`] call owns everything it touches; nothing is
//! shared across invocations and nothing is retried. Callers validate the
//! file first (see [`crate::validate`]) and decide for themselves what to
//! do when a call fails - typically fall back to uploading the original
//! bytes untouched.

use thiserror::Error;

use crate::codec::{DecodeError, EncodeError, ImageCodec, WebpCodec};
use crate::scale::{fit_dimensions, Bounds};
use crate::validate::SourceFile;
use crate::OptimizationReport;

/// MIME type of the pipeline's output format.
pub const WEBP_MIME: &str = "image/webp";

/// Default WebP encode quality.
pub const DEFAULT_QUALITY: u8 = 85;

/// Errors from a single optimize call. Each failure surfaces exactly once.
#[derive(Debug, Error)]
pub enum OptimizeError {
    #[error(transparent)]
    Decode(#[from] DecodeError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

/// Result of one optimize call; ownership passes to the caller.
#[derive(Debug, Clone)]
pub struct OptimizedImage {
    /// Encoded WebP bytes (or the unchanged input for WebP sources)
    pub bytes: Vec<u8>,
    /// Original filename with its extension replaced by `.webp`
    pub filename: String,
    /// Always [`WEBP_MIME`]
    pub content_type: String,
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// Before/after metrics for this call
    pub report: OptimizationReport,
}

/// The image optimization pipeline.
///
/// Generic over [`ImageCodec`] so the scaling and reporting logic can be
/// exercised without a real image library; [`Optimizer::new`] wires in the
/// production [`WebpCodec`].
#[derive(Debug, Clone)]
pub struct Optimizer<C: ImageCodec = WebpCodec> {
    codec: C,
    bounds: Bounds,
    quality: u8,
}

impl Optimizer<WebpCodec> {
    /// Pipeline with the production codec, 1920x1080 bounds, quality 85.
    pub fn new() -> Self {
        Self::with_codec(WebpCodec::new())
    }
}

impl Default for Optimizer<WebpCodec> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ImageCodec> Optimizer<C> {
    /// Pipeline with a caller-supplied codec and default bounds/quality.
    pub fn with_codec(codec: C) -> Self {
        Self {
            codec,
            bounds: Bounds::default(),
            quality: DEFAULT_QUALITY,
        }
    }

    /// Set the WebP encode quality (0-100; clamped by the codec).
    pub fn with_quality(mut self, quality: u8) -> Self {
        self.quality = quality;
        self
    }

    /// Set the maximum output dimensions.
    pub fn with_bounds(mut self, bounds: Bounds) -> Self {
        self.bounds = bounds;
        self
    }

    /// Convert `file` into a bounded WebP image and report the transformation.
    ///
    /// Already-WebP input skips re-encoding: the original bytes pass
    /// through unchanged and only the natural dimensions are read, so the
    /// report shows a compression ratio of zero.
    ///
    /// # Errors
    ///
    /// [`OptimizeError::Decode`] when the bytes cannot be parsed as a
    /// supported image, [`OptimizeError::Encode`] when WebP output cannot
    /// be produced. No retries either way.
    pub fn optimize(&self, file: &SourceFile) -> Result<OptimizedImage, OptimizeError> {
        let raster = self.codec.decode(&file.bytes)?;
        let natural = raster.dimensions();

        if file.content_type == WEBP_MIME {
            return Ok(OptimizedImage {
                bytes: file.bytes.clone(),
                filename: replace_extension(&file.name),
                content_type: WEBP_MIME.to_string(),
                width: natural.width,
                height: natural.height,
                report: OptimizationReport::new(file.size(), file.size(), natural, natural),
            });
        }

        let target = fit_dimensions(natural, self.bounds);
        let bytes = self.codec.encode_webp(&raster, target, self.quality)?;
        let report = OptimizationReport::new(file.size(), bytes.len(), natural, target);

        Ok(OptimizedImage {
            bytes,
            filename: replace_extension(&file.name),
            content_type: WEBP_MIME.to_string(),
            width: target.width,
            height: target.height,
            report,
        })
    }
}

/// Replace `name`'s extension with `.webp`, preserving the base name.
///
/// The original extension's case does not matter; names without an
/// extension get `.webp` appended.
fn replace_extension(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => format!("{}.webp", stem),
        _ => format!("{}.webp", name),
    }
}
