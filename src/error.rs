//! Unified error types for oas-delta.
//!
//! The scoring engine itself is total and never fails; these errors cover
//! loading documents, building the diff record and rendering reports.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for oas-delta operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum OasDeltaError {
    /// Errors while reading an API document
    #[error("Failed to parse API document: {context}")]
    Parse {
        context: String,
        #[source]
        source: ParseErrorKind,
    },

    /// Errors while building the diff record
    #[error("Diff computation failed: {context}")]
    Diff {
        context: String,
        #[source]
        source: DiffErrorKind,
    },

    /// Errors during report generation
    #[error("Report generation failed: {context}")]
    Report {
        context: String,
        #[source]
        source: ReportErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific parse error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ParseErrorKind {
    #[error("Unknown document format - expected an `openapi` or `swagger` version field")]
    UnknownFormat,

    #[error("Unsupported format version: {version} (supported: {supported})")]
    UnsupportedVersion { version: String, supported: String },

    #[error("Invalid JSON structure: {0}")]
    InvalidJson(String),

    #[error("Invalid YAML structure: {0}")]
    InvalidYaml(String),

    #[error("Missing required field: {field} in {context}")]
    MissingField { field: String, context: String },

    #[error("Invalid field value for '{field}': {message}")]
    InvalidValue { field: String, message: String },

    #[error("Unresolved reference: {reference}")]
    UnresolvedRef { reference: String },
}

/// Specific diff error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DiffErrorKind {
    #[error("Invalid path filter '{pattern}': {message}")]
    InvalidPathFilter { pattern: String, message: String },
}

/// Specific report error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum ReportErrorKind {
    #[error("JSON serialization failed: {0}")]
    JsonSerializationError(String),

    #[error("YAML serialization failed: {0}")]
    YamlSerializationError(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for oas-delta operations
pub type Result<T> = std::result::Result<T, OasDeltaError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl OasDeltaError {
    /// Create a parse error with context
    pub fn parse(context: impl Into<String>, source: ParseErrorKind) -> Self {
        Self::Parse {
            context: context.into(),
            source,
        }
    }

    /// Create a parse error for an unrecognized document
    pub fn unknown_format(origin: impl Into<String>) -> Self {
        Self::parse(format!("at {}", origin.into()), ParseErrorKind::UnknownFormat)
    }

    /// Create a parse error for missing field
    pub fn missing_field(field: impl Into<String>, context: impl Into<String>) -> Self {
        Self::parse(
            "missing required field",
            ParseErrorKind::MissingField {
                field: field.into(),
                context: context.into(),
            },
        )
    }

    /// Create a parse error for a `$ref` that cannot be followed
    pub fn unresolved_ref(reference: impl Into<String>) -> Self {
        Self::parse(
            "resolving reference",
            ParseErrorKind::UnresolvedRef {
                reference: reference.into(),
            },
        )
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a diff error
    pub fn diff(context: impl Into<String>, source: DiffErrorKind) -> Self {
        Self::Diff {
            context: context.into(),
            source,
        }
    }

    /// Create a report error
    pub fn report(context: impl Into<String>, source: ReportErrorKind) -> Self {
        Self::Report {
            context: context.into(),
            source,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for OasDeltaError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for OasDeltaError {
    fn from(err: serde_json::Error) -> Self {
        Self::parse(
            "JSON deserialization",
            ParseErrorKind::InvalidJson(err.to_string()),
        )
    }
}

impl From<serde_yaml::Error> for OasDeltaError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::parse(
            "YAML deserialization",
            ParseErrorKind::InvalidYaml(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context strings chain, so an error raised deep inside the parser reads
/// like `loading base document: resolving parameter: resolving reference`.
///
/// # Example
///
/// ```ignore
/// use oas_delta::error::ErrorContext;
///
/// fn load(path: &Path) -> Result<ApiSpec> {
///     let content = std::fs::read_to_string(path).context("reading API document")?;
///     parse_spec_str(&content).with_context(|| format!("parsing {}", path.display()))
/// }
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    ///
    /// The context string is prepended to the error's existing context.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, only evaluated on the error path.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<OasDeltaError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: OasDeltaError, new_ctx: &str) -> OasDeltaError {
    match err {
        OasDeltaError::Parse {
            context: existing,
            source,
        } => OasDeltaError::Parse {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OasDeltaError::Diff {
            context: existing,
            source,
        } => OasDeltaError::Diff {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OasDeltaError::Report {
            context: existing,
            source,
        } => OasDeltaError::Report {
            context: chain_context(new_ctx, &existing),
            source,
        },
        OasDeltaError::Io {
            path,
            message,
            source,
        } => OasDeltaError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        OasDeltaError::Config(msg) => OasDeltaError::Config(chain_context(new_ctx, &msg)),
        OasDeltaError::Validation(msg) => OasDeltaError::Validation(chain_context(new_ctx, &msg)),
    }
}

/// Chain two context strings together as "`new`: `existing`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
