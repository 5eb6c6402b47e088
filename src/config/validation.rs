//! Configuration validation for oas-delta.
//!
//! Provides validation traits and implementations for all configuration types.

use super::types::{
    AppConfig, BehaviorConfig, DeltaCommandConfig, DeltaConfig, MatchingConfig, OutputConfig,
};
use regex::Regex;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.delta.validate());
        errors.extend(self.matching.validate());
        errors.extend(self.output.validate());
        errors.extend(self.behavior.validate());
        errors
    }
}

impl Validatable for DeltaConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        if self.parallel_threshold == 0 {
            errors.push(ConfigError::new(
                "delta.parallel_threshold",
                "Parallel threshold must be at least 1",
            ));
        }
        errors
    }
}

impl Validatable for MatchingConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref pattern) = self.match_path {
            if let Err(e) = Regex::new(pattern) {
                errors.push(ConfigError::new(
                    "matching.match_path",
                    format!("Invalid regular expression '{pattern}': {e}"),
                ));
            }
        }

        for (field, prefix) in [
            ("matching.strip_prefix_base", &self.strip_prefix_base),
            ("matching.strip_prefix_revision", &self.strip_prefix_revision),
        ] {
            if let Some(prefix) = prefix {
                if !prefix.starts_with('/') {
                    errors.push(ConfigError::new(
                        field,
                        format!("Path prefix must start with '/', got '{prefix}'"),
                    ));
                }
            }
        }

        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate output file path if specified
        if let Some(parent) = self.file.as_deref().and_then(std::path::Path::parent) {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                errors.push(ConfigError::new(
                    "output.file",
                    format!("Parent directory does not exist: {}", parent.display()),
                ));
            }
        }

        errors
    }
}

impl Validatable for BehaviorConfig {
    fn validate(&self) -> Vec<ConfigError> {
        // BehaviorConfig contains only boolean flags that don't need validation
        Vec::new()
    }
}

impl Validatable for DeltaCommandConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        // Validate paths exist
        if !self.paths.base.exists() {
            errors.push(ConfigError::new(
                "paths.base",
                format!("File not found: {}", self.paths.base.display()),
            ));
        }
        if !self.paths.revision.exists() {
            errors.push(ConfigError::new(
                "paths.revision",
                format!("File not found: {}", self.paths.revision.display()),
            ));
        }

        errors.extend(self.delta.validate());
        errors.extend(self.matching.validate());
        errors.extend(self.output.validate());
        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_invalid_regex() {
        let config = AppConfig::builder().match_path(Some("([".into())).build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "matching.match_path");
    }

    #[test]
    fn test_prefix_without_slash() {
        let config = AppConfig::builder()
            .strip_prefixes(Some("api".into()), Some("/api".into()))
            .build();
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("matching.strip_prefix_base:"));
    }

    #[test]
    fn test_zero_parallel_threshold() {
        let config = AppConfig::builder().parallel_threshold(0).build();
        assert!(!config.is_valid());
    }

    #[test]
    fn test_output_file_parent_must_exist() {
        let config = AppConfig::builder()
            .output_file(Some(PathBuf::from("/nonexistent/dir/out.json")))
            .build();
        assert_eq!(config.validate()[0].field, "output.file");

        let config = AppConfig::builder()
            .output_file(Some(PathBuf::from("out.json")))
            .build();
        assert!(config.is_valid());
    }

    #[test]
    fn test_command_config_missing_files() {
        let config = DeltaCommandConfig::from_app_config(
            AppConfig::default(),
            "/nonexistent/base.yaml".into(),
            "/nonexistent/revision.yaml".into(),
        );
        let fields: Vec<String> = config.validate().into_iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["paths.base", "paths.revision"]);
    }
}
