//! Input admission checks for user-supplied files.
//!
//! Validation runs before any decoding work so oversized or wrong-typed
//! uploads are rejected cheaply. Failures are returned as structured
//! values, never as errors: the caller renders them as user-facing
//! messages without a catch path.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// MIME types accepted by the pipeline.
pub const ALLOWED_TYPES: [&str; 5] = [
    "image/jpeg",
    "image/jpg",
    "image/png",
    "image/gif",
    "image/webp",
];

/// Default upload size limit: 5 MiB.
pub const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;

/// A user-selected file: name, declared MIME type, and raw content.
///
/// This is the pipeline's input boundary. The declared type is trusted for
/// validation and for the already-WebP fast path; decoding still guesses
/// the real format from the bytes.
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// Original filename, extension included
    pub name: String,
    /// Declared MIME type (e.g., "image/png")
    pub content_type: String,
    /// Raw file content
    pub bytes: Vec<u8>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, content_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            bytes,
        }
    }

    /// File size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }
}

/// A single admission failure.
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
pub enum ValidationIssue {
    /// The declared MIME type is not in the allow-list.
    #[error("Invalid file type: {content_type}. Allowed types are JPEG, PNG, GIF, and WebP")]
    InvalidType { content_type: String },

    /// The file exceeds the size limit. The limit is reported in MB,
    /// rounded to one decimal so non-MiB-multiple limits stay honest.
    #[error("File is too large: maximum size is {limit_mb} MB")]
    TooLarge { limit_mb: f64 },
}

/// Outcome of [`validate`]: valid when the issue list is empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// All failed checks; empty on success
    pub issues: Vec<ValidationIssue>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Human-readable messages for each issue, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.issues.iter().map(|i| i.to_string()).collect()
    }
}

/// Check a file's declared type and size against the allow-list and
/// `max_file_size`.
///
/// Pure and deterministic: the same `(content_type, size, max_file_size)`
/// always yields the same result. Both checks run, so a file can report
/// both issues at once. A size exactly at the limit passes.
pub fn validate(content_type: &str, size: usize, max_file_size: usize) -> ValidationResult {
    let mut issues = Vec::new();

    if !ALLOWED_TYPES.contains(&content_type) {
        issues.push(ValidationIssue::InvalidType {
            content_type: content_type.to_string(),
        });
    }

    if size > max_file_size {
        let limit_mb = max_file_size as f64 / (1024.0 * 1024.0);
        issues.push(ValidationIssue::TooLarge {
            limit_mb: (limit_mb * 10.0).round() / 10.0,
        });
    }

    ValidationResult { issues }
}

/// [`validate`] against the 5 MiB default limit.
pub fn validate_default(content_type: &str, size: usize) -> ValidationResult {
    validate(content_type, size, DEFAULT_MAX_FILE_SIZE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_allowed_types_pass() {
        for content_type in ALLOWED_TYPES {
            let result = validate_default(content_type, 1024);
            assert!(result.is_valid(), "{} should be allowed", content_type);
            assert!(result.issues.is_empty());
        }
    }

    #[test]
    fn test_disallowed_types_rejected() {
        for content_type in [
            "image/svg+xml",
            "image/tiff",
            "image/bmp",
            "application/pdf",
            "text/plain",
            "",
        ] {
            let result = validate_default(content_type, 1024);
            assert!(!result.is_valid(), "{} should be rejected", content_type);
            assert!(matches!(
                result.issues[0],
                ValidationIssue::InvalidType { .. }
            ));
        }
    }

    #[test]
    fn test_size_at_limit_passes() {
        let result = validate("image/png", DEFAULT_MAX_FILE_SIZE, DEFAULT_MAX_FILE_SIZE);
        assert!(result.is_valid());
    }

    #[test]
    fn test_size_over_limit_rejected() {
        let result = validate(
            "image/png",
            DEFAULT_MAX_FILE_SIZE + 1,
            DEFAULT_MAX_FILE_SIZE,
        );
        assert!(!result.is_valid());
        assert_eq!(
            result.issues[0],
            ValidationIssue::TooLarge { limit_mb: 5.0 }
        );
    }

    #[test]
    fn test_size_message_names_limit_in_mb() {
        let result = validate("image/png", 3 * 1024 * 1024, 2 * 1024 * 1024);
        assert_eq!(
            result.messages(),
            vec!["File is too large: maximum size is 2 MB".to_string()]
        );
    }

    #[test]
    fn test_fractional_limit_not_truncated() {
        // A 1.5 MiB limit must not render as "1 MB"
        let limit = 3 * 1024 * 1024 / 2;
        let result = validate("image/png", limit + 1, limit);
        assert_eq!(
            result.messages(),
            vec!["File is too large: maximum size is 1.5 MB".to_string()]
        );
    }

    #[test]
    fn test_both_issues_reported() {
        let result = validate("text/html", DEFAULT_MAX_FILE_SIZE + 1, DEFAULT_MAX_FILE_SIZE);
        assert_eq!(result.issues.len(), 2);
        assert!(!result.is_valid());
    }

    #[test]
    fn test_validate_is_pure() {
        let a = validate("image/gif", 100, 200);
        let b = validate("image/gif", 100, 200);
        assert_eq!(a, b);
    }

    #[test]
    fn test_source_file_size() {
        let file = SourceFile::new("a.png", "image/png", vec![0u8; 123]);
        assert_eq!(file.size(), 123);
        assert_eq!(file.name, "a.png");
        assert_eq!(file.content_type, "image/png");
    }
}

// ============================================================================
// Property-Based Tests
// ============================================================================
