//! Format detection for API documents.
//!
//! Detection happens in two steps: the surface syntax (JSON or YAML) is
//! guessed from the first significant character, then the loaded document
//! is inspected for its `openapi` or `swagger` version field.

use crate::error::{OasDeltaError, ParseErrorKind, Result};
use crate::model::SpecFormat;
use serde_json::Value;

/// Versions accepted for each format, used in error messages.
const SUPPORTED_OPENAPI: &str = "3.0, 3.1";
const SUPPORTED_SWAGGER: &str = "2.0";

/// Surface syntax of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    Json,
    Yaml,
}

impl Syntax {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Json => "JSON",
            Self::Yaml => "YAML",
        }
    }
}

/// Result of format detection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectionResult {
    pub format: SpecFormat,
    pub syntax: Syntax,
    /// Raw version string, e.g. `3.0.3`
    pub version: String,
}

/// Guess the syntax from the first non-whitespace character.
///
/// YAML is a superset of JSON, so anything that does not open with a brace
/// is handed to the YAML loader.
pub fn detect_syntax(content: &str) -> Syntax {
    match content.trim_start_matches('\u{feff}').trim_start().chars().next() {
        Some('{') => Syntax::Json,
        _ => Syntax::Yaml,
    }
}

/// Load raw content into a JSON value tree using the detected syntax.
pub fn load_document(content: &str) -> Result<(Value, Syntax)> {
    let syntax = detect_syntax(content);
    let value = match syntax {
        Syntax::Json => serde_json::from_str(content)?,
        Syntax::Yaml => serde_yaml::from_str(content)?,
    };
    Ok((value, syntax))
}

/// Identify the document format from its version field.
pub fn detect_format(doc: &Value) -> Result<(SpecFormat, String)> {
    if !doc.is_object() {
        return Err(OasDeltaError::unknown_format("document root"));
    }

    if let Some(version) = doc.get("openapi").and_then(version_string) {
        if version.starts_with("3.") {
            return Ok((SpecFormat::OpenApi3, version));
        }
        return Err(unsupported(version, SUPPORTED_OPENAPI));
    }

    if let Some(version) = doc.get("swagger").and_then(version_string) {
        if version == "2.0" || version == "2" {
            return Ok((SpecFormat::Swagger2, version));
        }
        return Err(unsupported(version, SUPPORTED_SWAGGER));
    }

    Err(OasDeltaError::unknown_format("document root"))
}

/// Detect both syntax and format of raw content.
pub fn detect(content: &str) -> Result<DetectionResult> {
    let (doc, syntax) = load_document(content)?;
    let (format, version) = detect_format(&doc)?;
    Ok(DetectionResult {
        format,
        syntax,
        version,
    })
}

/// Version fields are usually strings, but unquoted YAML turns `2.0` into a number.
fn version_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn unsupported(version: String, supported: &str) -> OasDeltaError {
    OasDeltaError::parse(
        "checking format version",
        ParseErrorKind::UnsupportedVersion {
            version,
            supported: supported.to_string(),
        },
    )
}
