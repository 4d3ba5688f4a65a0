//! Displayable previews as base64 data URIs.
//!
//! Independent of the optimize pass: works on original or optimized bytes
//! alike. This is a pure read of the content, not an encode.

use std::io::Read;

use base64::{engine::general_purpose, Engine as _};
use thiserror::Error;

/// Error reading preview content from a source.
#[derive(Debug, Error)]
pub enum ReadError {
    #[error("Failed to read preview content: {0}")]
    Io(#[from] std::io::Error),
}

/// Build a `data:<mime>;base64,...` URI from in-memory bytes.
pub fn data_uri(content_type: &str, bytes: &[u8]) -> String {
    format!(
        "data:{};base64,{}",
        content_type,
        general_purpose::STANDARD.encode(bytes)
    )
}

/// Build a data URI by reading `source` to the end.
///
/// # Errors
///
/// [`ReadError::Io`] when the source fails mid-read (e.g., the underlying
/// file handle is no longer valid).
pub fn data_uri_from_reader<R: Read>(
    content_type: &str,
    mut source: R,
) -> Result<String, ReadError> {
    let mut bytes = Vec::new();
    source.read_to_end(&mut bytes)?;
    Ok(data_uri(content_type, &bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_data_uri_format() {
        let uri = data_uri("image/png", b"abc");
        assert_eq!(uri, "data:image/png;base64,YWJj");
    }

    #[test]
    fn test_data_uri_empty_payload() {
        assert_eq!(data_uri("image/webp", b""), "data:image/webp;base64,");
    }

    #[test]
    fn test_data_uri_from_reader() {
        let uri = data_uri_from_reader("image/jpeg", &b"abc"[..]).unwrap();
        assert_eq!(uri, "data:image/jpeg;base64,YWJj");
    }

    #[test]
    fn test_data_uri_from_failing_reader() {
        struct Broken;
        impl Read for Broken {
            fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::new(io::ErrorKind::Other, "handle gone"))
            }
        }

        let result = data_uri_from_reader("image/png", Broken);
        assert!(matches!(result, Err(ReadError::Io(_))));
    }

    #[test]
    fn test_data_uri_round_trips_through_base64() {
        let payload: Vec<u8> = (0u8..=255).collect();
        let uri = data_uri("image/webp", &payload);

        let b64 = uri.strip_prefix("data:image/webp;base64,").unwrap();
        let decoded = general_purpose::STANDARD.decode(b64).unwrap();
        assert_eq!(decoded, payload);
    }
}
