//! Configuration types for oas-delta operations.

use crate::delta::{DeltaScorer, DEFAULT_PARALLEL_THRESHOLD};
use crate::diff::DiffOptions;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// Presets are layered over file settings with [`AppConfig::merge`], and
/// command-line flags over both with [`AppConfig::apply_overrides`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Scoring configuration
    pub delta: DeltaConfig,
    /// Endpoint pairing configuration
    pub matching: MatchingConfig,
    /// Output configuration (format, file)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Score in asymmetric mode.
    pub const fn asymmetric(mut self, asymmetric: bool) -> Self {
        self.config.delta.asymmetric = asymmetric;
        self
    }

    /// Set the parallel scoring threshold.
    pub const fn parallel_threshold(mut self, threshold: usize) -> Self {
        self.config.delta.parallel_threshold = threshold;
        self
    }

    /// Only compare paths matching a regular expression.
    pub fn match_path(mut self, pattern: Option<String>) -> Self {
        self.config.matching.match_path = pattern;
        self
    }

    /// Set the prefixes stripped from base and revision paths.
    pub fn strip_prefixes(mut self, base: Option<String>, revision: Option<String>) -> Self {
        self.config.matching.strip_prefix_base = base;
        self.config.matching.strip_prefix_revision = revision;
        self
    }

    /// Enable or disable path template normalization.
    pub const fn normalize_path_params(mut self, normalize: bool) -> Self {
        self.config.matching.normalize_path_params = normalize;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Include the per-endpoint breakdown.
    pub const fn explain(mut self, explain: bool) -> Self {
        self.config.output.explain = explain;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the `AppConfig`.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Command-line Overrides
// ============================================================================

/// Settings given on the command line.
///
/// `None` leaves the file or preset value in place. `Some` always wins, even
/// when it equals the default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub asymmetric: Option<bool>,
    pub parallel_threshold: Option<usize>,
    pub match_path: Option<String>,
    pub strip_prefix_base: Option<String>,
    pub strip_prefix_revision: Option<String>,
    pub normalize_path_params: Option<bool>,
    pub format: Option<ReportFormat>,
    pub output_file: Option<PathBuf>,
    pub explain: Option<bool>,
    pub quiet: Option<bool>,
}

// ============================================================================
// Section Configurations
// ============================================================================

/// Scoring configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DeltaConfig {
    /// Ignore additions and charge modifications at half rate
    pub asymmetric: bool,
    /// Modified-endpoint count at which scoring runs in parallel
    pub parallel_threshold: usize,
}

impl Default for DeltaConfig {
    fn default() -> Self {
        Self {
            asymmetric: false,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl DeltaConfig {
    /// Scorer configured from these settings.
    #[must_use]
    pub fn scorer(&self) -> DeltaScorer {
        DeltaScorer::new()
            .asymmetric(self.asymmetric)
            .parallel_threshold(self.parallel_threshold)
    }
}

/// Endpoint pairing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct MatchingConfig {
    /// Only compare paths matching this regular expression
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_path: Option<String>,
    /// Prefix removed from base paths before pairing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_prefix_base: Option<String>,
    /// Prefix removed from revision paths before pairing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strip_prefix_revision: Option<String>,
    /// Pair `/users/{id}` with `/users/{userId}`
    pub normalize_path_params: bool,
}

impl Default for MatchingConfig {
    fn default() -> Self {
        Self {
            match_path: None,
            strip_prefix_base: None,
            strip_prefix_revision: None,
            normalize_path_params: true,
        }
    }
}

impl MatchingConfig {
    /// Differencer options for these settings.
    #[must_use]
    pub fn diff_options(&self) -> DiffOptions {
        DiffOptions {
            match_path: self.match_path.clone(),
            strip_prefix_base: self.strip_prefix_base.clone(),
            strip_prefix_revision: self.strip_prefix_revision.clone(),
            normalize_path_params: self.normalize_path_params,
        }
    }
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Include the per-endpoint breakdown
    pub explain: bool,
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress progress messages
    pub quiet: bool,
}

// ============================================================================
// Command Configuration
// ============================================================================

/// Configuration for one `delta` invocation.
#[derive(Debug, Clone)]
pub struct DeltaCommandConfig {
    /// Documents to compare
    pub paths: DeltaPaths,
    pub delta: DeltaConfig,
    pub matching: MatchingConfig,
    pub output: OutputConfig,
    pub behavior: BehaviorConfig,
}

/// Paths for a delta operation
#[derive(Debug, Clone)]
pub struct DeltaPaths {
    /// Path to the base document
    pub base: PathBuf,
    /// Path to the revision document
    pub revision: PathBuf,
}

impl DeltaCommandConfig {
    /// Combine resolved application settings with the documents to compare.
    #[must_use]
    pub fn from_app_config(config: AppConfig, base: PathBuf, revision: PathBuf) -> Self {
        Self {
            paths: DeltaPaths { base, revision },
            delta: config.delta,
            matching: config.matching,
            output: config.output,
            behavior: config.behavior,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert!(!config.delta.asymmetric);
        assert_eq!(config.delta.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(config.matching.normalize_path_params);
        assert_eq!(config.output.format, ReportFormat::Text);
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::builder()
            .asymmetric(true)
            .match_path(Some("^/pets".into()))
            .output_format(ReportFormat::Json)
            .explain(true)
            .build();

        assert!(config.delta.asymmetric);
        assert!(config.output.explain);
        assert_eq!(config.matching.diff_options().match_path.as_deref(), Some("^/pets"));
        assert!(config.delta.scorer().is_asymmetric());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config: AppConfig = serde_yaml::from_str("delta:\n  asymmetric: true\n").unwrap();
        assert!(config.delta.asymmetric);
        assert_eq!(config.delta.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
        assert!(config.matching.normalize_path_params);
    }

    #[test]
    fn test_command_config_from_app_config() {
        let app = AppConfig::builder().quiet(true).build();
        let config =
            DeltaCommandConfig::from_app_config(app, "a.yaml".into(), "b.yaml".into());
        assert!(config.behavior.quiet);
        assert_eq!(config.paths.revision, PathBuf::from("b.yaml"));
    }
}
