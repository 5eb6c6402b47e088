//! Named configuration presets.

use super::types::{AppConfig, BehaviorConfig, DeltaConfig, OutputConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Symmetric score, bare value on stdout
    Default,
    /// Asymmetric score: only what the base lost or had changed counts
    Breaking,
    /// CI/CD: JSON report with breakdown, quiet
    CiCd,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Breaking => "breaking",
            Self::CiCd => "ci-cd",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" | "symmetric" => Some(Self::Default),
            "breaking" | "asymmetric" => Some(Self::Breaking),
            "ci-cd" | "ci" | "pipeline" => Some(Self::CiCd),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Symmetric distance printed as a bare number",
            Self::Breaking => "Asymmetric distance that ignores additions",
            Self::CiCd => "JSON report with a per-endpoint breakdown for pipelines",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Breaking, Self::CiCd]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// ============================================================================
// Preset Implementations
// ============================================================================

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Breaking => Self::breaking_preset(),
            ConfigPreset::CiCd => Self::ci_cd_preset(),
        }
    }

    /// Asymmetric scoring preset.
    #[must_use]
    pub fn breaking_preset() -> Self {
        Self {
            delta: DeltaConfig {
                asymmetric: true,
                ..DeltaConfig::default()
            },
            ..Self::default()
        }
    }

    /// CI/CD pipeline preset.
    ///
    /// - JSON output for machine parsing
    /// - Breakdown included
    /// - Quiet mode to reduce noise
    #[must_use]
    pub fn ci_cd_preset() -> Self {
        Self {
            output: OutputConfig {
                format: ReportFormat::Json,
                file: None,
                explain: true,
            },
            behavior: BehaviorConfig { quiet: true },
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Validatable;

    #[test]
    fn test_preset_names_round_trip() {
        for preset in ConfigPreset::all() {
            assert_eq!(ConfigPreset::from_name(preset.name()), Some(*preset));
        }
        assert_eq!(ConfigPreset::from_name("asymmetric"), Some(ConfigPreset::Breaking));
        assert_eq!(ConfigPreset::from_name("unknown"), None);
    }

    #[test]
    fn test_presets_are_valid() {
        for preset in ConfigPreset::all() {
            assert!(AppConfig::from_preset(*preset).is_valid(), "{preset} is invalid");
        }
    }

    #[test]
    fn test_ci_cd_preset() {
        let config = AppConfig::from_preset(ConfigPreset::CiCd);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.explain);
        assert!(config.behavior.quiet);
        assert!(!config.delta.asymmetric);
    }
}
