//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".oas-delta.yaml",
    ".oas-delta.yml",
    "oas-delta.yaml",
    "oas-delta.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/oas-delta/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    // 1. Use explicit path if provided
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    // 2. Search current directory
    if let Some(path) = std::env::current_dir()
        .ok()
        .and_then(|cwd| find_config_in_dir(&cwd))
    {
        return Some(path);
    }

    // 3. Search git root (if in a repo)
    if let Some(path) = find_git_root().and_then(|root| find_config_in_dir(&root)) {
        return Some(path);
    }

    // 4. Search user config directory
    if let Some(path) =
        dirs::config_dir().and_then(|dir| find_config_in_dir(&dir.join("oas-delta")))
    {
        return Some(path);
    }

    // 5. Search home directory
    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    // an empty file is a valid, all-defaults config
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values that differ from the defaults override, so a preset
    /// leaves file settings it does not change in place.
    pub fn merge(&mut self, other: &Self) {
        let defaults = Self::default();

        // Delta config
        if other.delta.asymmetric {
            self.delta.asymmetric = true;
        }
        if other.delta.parallel_threshold != defaults.delta.parallel_threshold {
            self.delta.parallel_threshold = other.delta.parallel_threshold;
        }

        // Matching config
        if other.matching.match_path.is_some() {
            self.matching.match_path.clone_from(&other.matching.match_path);
        }
        if other.matching.strip_prefix_base.is_some() {
            self.matching
                .strip_prefix_base
                .clone_from(&other.matching.strip_prefix_base);
        }
        if other.matching.strip_prefix_revision.is_some() {
            self.matching
                .strip_prefix_revision
                .clone_from(&other.matching.strip_prefix_revision);
        }
        if !other.matching.normalize_path_params {
            self.matching.normalize_path_params = false;
        }

        // Output config - only override if explicitly set
        if other.output.format != defaults.output.format {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if other.output.explain {
            self.output.explain = true;
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Apply command-line overrides. Every value that was given wins.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(asymmetric) = overrides.asymmetric {
            self.delta.asymmetric = asymmetric;
        }
        if let Some(threshold) = overrides.parallel_threshold {
            self.delta.parallel_threshold = threshold;
        }

        if overrides.match_path.is_some() {
            self.matching.match_path.clone_from(&overrides.match_path);
        }
        if overrides.strip_prefix_base.is_some() {
            self.matching
                .strip_prefix_base
                .clone_from(&overrides.strip_prefix_base);
        }
        if overrides.strip_prefix_revision.is_some() {
            self.matching
                .strip_prefix_revision
                .clone_from(&overrides.strip_prefix_revision);
        }
        if let Some(normalize) = overrides.normalize_path_params {
            self.matching.normalize_path_params = normalize;
        }

        if let Some(format) = overrides.format {
            self.output.format = format;
        }
        if overrides.output_file.is_some() {
            self.output.file.clone_from(&overrides.output_file);
        }
        if let Some(explain) = overrides.explain {
            self.output.explain = explain;
        }

        if let Some(quiet) = overrides.quiet {
            self.behavior.quiet = quiet;
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# oas-delta configuration
# Place this file at .oas-delta.yaml in your project root or ~/.config/oas-delta/

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

/// Generate a commented example config with all options.
#[must_use]
pub fn generate_full_example_config() -> String {
    r"# oas-delta Configuration File
# ============================
#
# Place it at:
#   - .oas-delta.yaml in your project root
#   - ~/.config/oas-delta/oas-delta.yaml for global config
#
# CLI arguments always override file settings.

# Scoring
delta:
  # Ignore additions and charge modifications at half rate
  asymmetric: false
  # Score modified endpoints in parallel from this many on
  parallel_threshold: 256

# Endpoint pairing
matching:
  # Only compare paths matching this regular expression
  # match_path: ^/api/
  # Prefixes removed before pairing endpoints
  # strip_prefix_base: /api/v1
  # strip_prefix_revision: /api/v2
  # Pair /users/{id} with /users/{userId}
  normalize_path_params: true

# Output
output:
  # Format: text, json, yaml
  format: text
  # Output file path (omit for stdout)
  # file: delta.json
  # Include the per-endpoint breakdown
  explain: false

# Behavior flags
behavior:
  # Suppress progress messages
  quiet: false
"
    .to_string()
}

// ============================================================================
// Tests
// ============================================================================
