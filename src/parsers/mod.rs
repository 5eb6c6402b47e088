//! API document parsers.
//!
//! Reads OpenAPI 3.x and Swagger 2.0 documents, in JSON or YAML, into the
//! normalized [`ApiSpec`] model.
//!
//! ## Format Detection
//!
//! Syntax is guessed from the first significant character; the format and
//! version come from the document's `openapi` or `swagger` field.
//!
//! ## Usage
//!
//! ```no_run
//! use oas_delta::parsers::{detect, parse_spec};
//! use std::path::Path;
//!
//! let spec = parse_spec(Path::new("openapi.yaml")).unwrap();
//!
//! let content = std::fs::read_to_string("openapi.yaml").unwrap();
//! let detection = detect(&content).unwrap();
//! println!("{} {}", detection.format.name(), detection.version);
//! ```

mod detection;
mod openapi;
mod refs;

pub use detection::{detect, detect_format, detect_syntax, load_document, DetectionResult, Syntax};
pub use openapi::OpenApiParser;

use crate::error::{OasDeltaError, Result};
use crate::model::ApiSpec;
use std::path::Path;

/// Maximum document size (64 MB).
const MAX_SPEC_FILE_SIZE: u64 = 64 * 1024 * 1024;

/// Read and parse a document from disk.
///
/// Files larger than [`MAX_SPEC_FILE_SIZE`] are rejected before reading.
pub fn parse_spec(path: &Path) -> Result<ApiSpec> {
    let metadata = std::fs::metadata(path).map_err(|e| OasDeltaError::io(path, e))?;
    if metadata.len() > MAX_SPEC_FILE_SIZE {
        return Err(OasDeltaError::validation(format!(
            "{} is {} MB, exceeding the {} MB limit",
            path.display(),
            metadata.len() / (1024 * 1024),
            MAX_SPEC_FILE_SIZE / (1024 * 1024),
        )));
    }
    let content = std::fs::read_to_string(path).map_err(|e| OasDeltaError::io(path, e))?;
    parse_spec_str(&content)
}

/// Parse a document from string content.
pub fn parse_spec_str(content: &str) -> Result<ApiSpec> {
    OpenApiParser::new().parse_str(content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_spec_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "openapi: 3.0.0\npaths:\n  /a:\n    get:\n      responses: {{}}").unwrap();

        let spec = parse_spec(file.path()).unwrap();
        assert_eq!(spec.endpoint_count(), 1);
    }

    #[test]
    fn test_parse_spec_missing_file() {
        let err = parse_spec(Path::new("/nonexistent/openapi.yaml")).unwrap_err();
        assert!(matches!(err, OasDeltaError::Io { .. }));
    }

    #[test]
    fn test_parse_spec_str_rejects_unknown_documents() {
        assert!(parse_spec_str("{\"asyncapi\": \"2.6.0\"}").is_err());
        assert!(parse_spec_str("not: [valid").is_err());
    }
}
