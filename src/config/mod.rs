//! Configuration module for oas-delta.
//!
//! This module provides a unified configuration system with:
//! - Type-safe configuration structures
//! - Validation for all configuration values
//! - Named presets for common use cases
//! - YAML config file loading and discovery
//! - CLI argument merging
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use oas_delta::config::{AppConfig, ConfigPreset};
//!
//! let config = AppConfig::default();
//! let config = AppConfig::from_preset(ConfigPreset::Breaking);
//! let config = AppConfig::builder()
//!     .asymmetric(true)
//!     .match_path(Some("^/api/".into()))
//!     .build();
//!
//! use oas_delta::config::file::load_or_default;
//! let (config, loaded_from) = load_or_default(None);
//! ```
//!
//! # Configuration File
//!
//! Place a `.oas-delta.yaml` file in your project root or `~/.config/oas-delta/`:
//!
//! ```yaml
//! delta:
//!   asymmetric: true
//! matching:
//!   strip_prefix_base: /api/v1
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

// Re-export main types
pub use defaults::ConfigPreset;
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ConfigOverrides, DeltaCommandConfig, DeltaConfig,
    DeltaPaths, MatchingConfig, OutputConfig,
};
pub use validation::{ConfigError, Validatable};

// Re-export file utilities
pub use file::{
    discover_config_file, generate_example_config, generate_full_example_config, load_config_file,
    load_or_default, ConfigFileError,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
///
/// This schema documents all configuration options that can be set in
/// `.oas-delta.yaml` config files. It can be used by editors for
/// validation and autocompletion.
pub fn generate_json_schema() -> serde_json::Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
