//! Imgprep WASM - WebAssembly bindings for imgprep
//!
//! This crate exposes the imgprep-core image optimization pipeline to
//! JavaScript/TypeScript applications, for running the optimize step
//! client-side before upload.
//!
//! # Module Structure
//!
//! - `pipeline` - Validate, optimize, and preview bindings
//! - `types` - WASM-compatible wrapper types for pipeline results
//!
//! # Usage
//!
//! ```typescript
//! import init, { validate_file, optimize } from '@imgprep/wasm';
//!
//! // Initialize WASM module (must call first)
//! await init();
//!
//! const check = validate_file(file.type, file.size);
//! if (check.issues.length === 0) {
//!   const bytes = new Uint8Array(await file.arrayBuffer());
//!   const result = optimize(file.name, file.type, bytes);
//!   console.log(`Saved ${result.report().compression_ratio}%`);
//! }
//! ```

use wasm_bindgen::prelude::*;

mod pipeline;
mod types;

// Re-export public types
pub use pipeline::{optimize, preview_data_uri, validate_file, validate_file_with_limit};
pub use types::JsOptimizedImage;

/// Initialize the WASM module (called automatically on load)
#[wasm_bindgen(start)]
pub fn init() {
    // Future: Set up panic hook for better error messages in browser console
    // when console_error_panic_hook feature is added
}

/// Get the version of the WASM module
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!version().is_empty());
    }
}
