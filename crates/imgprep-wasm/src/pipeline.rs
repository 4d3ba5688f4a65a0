//! Pipeline WASM bindings: validate, optimize, preview.
//!
//! These functions expose the imgprep-core pipeline to JavaScript. The
//! expected flow mirrors a browser upload form: `validate_file` on the
//! selected `File`'s metadata, `optimize` on its bytes, then hand the
//! result to the upload request and `preview_data_uri` to an `<img>` tag.
//!
//! # Example
//!
//! ```typescript
//! import { validate_file, optimize, preview_data_uri } from '@imgprep/wasm';
//!
//! const check = validate_file(file.type, file.size);
//! if (check.issues.length > 0) { showErrors(check.issues); return; }
//!
//! const bytes = new Uint8Array(await file.arrayBuffer());
//! const result = optimize(file.name, file.type, bytes);
//! img.src = preview_data_uri(result.content_type, result.bytes());
//! ```

use imgprep_core::{preview, validate, Optimizer};
use wasm_bindgen::prelude::*;

use crate::types::JsOptimizedImage;

/// Check a file's declared MIME type and size against the 5 MiB default
/// limit.
///
/// Returns a plain object `{ issues: [...] }`; an empty `issues` array
/// means the file is acceptable. Validation failures are data, not thrown
/// errors, so the caller can render field-level messages directly.
#[wasm_bindgen]
pub fn validate_file(content_type: &str, size: usize) -> Result<JsValue, JsValue> {
    let result = validate::validate_default(content_type, size);
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// [`validate_file`] with a caller-supplied size limit in bytes.
#[wasm_bindgen]
pub fn validate_file_with_limit(
    content_type: &str,
    size: usize,
    max_file_size: usize,
) -> Result<JsValue, JsValue> {
    let result = validate::validate(content_type, size, max_file_size);
    serde_wasm_bindgen::to_value(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Optimize a user-selected image into a bounded WebP.
///
/// # Arguments
///
/// * `name` - Original filename (the output name swaps its extension for `.webp`)
/// * `content_type` - Declared MIME type; `image/webp` input passes through unchanged
/// * `bytes` - Raw file content as a `Uint8Array`
/// * `quality` - WebP quality 0-100 (optional, default 85)
///
/// # Errors
///
/// Returns a string error when the bytes cannot be decoded as a supported
/// image or when WebP encoding fails. No retry is attempted; falling back
/// to uploading the original file is the caller's decision.
#[wasm_bindgen]
pub fn optimize(
    name: &str,
    content_type: &str,
    bytes: &[u8],
    quality: Option<u8>,
) -> Result<JsOptimizedImage, JsValue> {
    let mut optimizer = Optimizer::new();
    if let Some(quality) = quality {
        optimizer = optimizer.with_quality(quality);
    }

    let file = validate::SourceFile::new(name, content_type, bytes.to_vec());
    optimizer
        .optimize(&file)
        .map(JsOptimizedImage::from_optimized)
        .map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Build a `data:` URI preview for any image bytes (original or optimized).
#[wasm_bindgen]
pub fn preview_data_uri(content_type: &str, bytes: &[u8]) -> String {
    preview::data_uri(content_type, bytes)
}

/// Tests for the pipeline bindings.
///
/// Functions returning `Result<T, JsValue>` can only be exercised fully on
/// wasm32 targets; host tests below go through the core APIs the bindings
/// delegate to, and the `wasm_tests` module covers the JsValue surface.
#[cfg(test)]
mod tests {
    use imgprep_core::validate::validate_default;

    #[test]
    fn test_validate_delegation_matches_core() {
        let result = validate_default("image/png", 1024);
        assert!(result.is_valid());

        let result = validate_default("text/plain", 1024);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_preview_data_uri_host() {
        let uri = super::preview_data_uri("image/png", b"abc");
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }
}
