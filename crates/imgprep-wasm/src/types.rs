//! WASM-compatible wrapper types for pipeline results.
//!
//! This module provides JavaScript-friendly types that wrap the core
//! imgprep types, handling the conversion between Rust and JavaScript
//! data representations.

use imgprep_core::OptimizedImage;
use wasm_bindgen::prelude::*;

/// An optimized image wrapper for JavaScript.
///
/// Wraps the core `OptimizedImage` and exposes its fields as getters.
/// The encoded bytes live in WASM memory; `bytes()` copies them out as a
/// `Uint8Array` for handing to `new Blob([...])` or an upload request.
#[wasm_bindgen]
pub struct JsOptimizedImage {
    inner: OptimizedImage,
}

#[wasm_bindgen]
impl JsOptimizedImage {
    /// Get the encoded WebP bytes.
    ///
    /// Note: This creates a copy of the data into JavaScript memory.
    pub fn bytes(&self) -> Vec<u8> {
        self.inner.bytes.clone()
    }

    /// Output filename (original name with a `.webp` extension)
    #[wasm_bindgen(getter)]
    pub fn filename(&self) -> String {
        self.inner.filename.clone()
    }

    /// Output MIME type, always `image/webp`
    #[wasm_bindgen(getter)]
    pub fn content_type(&self) -> String {
        self.inner.content_type.clone()
    }

    /// Output width in pixels
    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 {
        self.inner.width
    }

    /// Output height in pixels
    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 {
        self.inner.height
    }

    /// Size of the encoded output in bytes
    #[wasm_bindgen(getter)]
    pub fn byte_length(&self) -> usize {
        self.inner.bytes.len()
    }

    /// Before/after metrics as a plain JavaScript object:
    /// `{ original_size, optimized_size, compression_ratio,
    ///    original_dimensions, target_dimensions }`.
    pub fn report(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.inner.report)
            .map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Explicitly free WASM memory.
    ///
    /// Optional - wasm-bindgen's finalizer handles cleanup automatically.
    pub fn free(self) {
        // Dropping self releases the memory
    }
}

impl JsOptimizedImage {
    /// Create a wrapper from a core result.
    ///
    /// Internal constructor used by the optimize binding.
    pub(crate) fn from_optimized(inner: OptimizedImage) -> Self {
        Self { inner }
    }
}
