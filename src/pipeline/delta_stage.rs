//! Diff and scoring stage.

use super::ParsedSpec;
use crate::config::DeltaCommandConfig;
use crate::delta::DeltaBreakdown;
use crate::diff::DiffEngine;
use crate::reports::{DeltaReport, DocumentInfo};
use anyhow::{Context, Result};

/// Score and optional explanation for one comparison
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaOutcome {
    pub delta: f64,
    pub breakdown: Option<DeltaBreakdown>,
}

/// Diff two parsed documents and score the result.
pub fn compute_delta(
    config: &DeltaCommandConfig,
    base: &ParsedSpec,
    revision: &ParsedSpec,
) -> Result<DeltaOutcome> {
    let quiet = config.behavior.quiet;

    let engine = DiffEngine::with_options(config.matching.diff_options())
        .context("Failed to configure the differencer")?;

    if !quiet {
        tracing::info!("Computing delta...");
    }
    let diff = engine
        .diff(base.spec(), revision.spec())
        .context("Failed to compute diff")?;

    let scorer = config.delta.scorer();
    let outcome = if config.output.explain {
        let (delta, breakdown) = scorer.explain(&diff);
        DeltaOutcome {
            delta,
            breakdown: Some(breakdown),
        }
    } else {
        DeltaOutcome {
            delta: scorer.score(&diff),
            breakdown: None,
        }
    };

    tracing::debug!(
        "Delta ({}): {}",
        if scorer.is_asymmetric() { "asymmetric" } else { "symmetric" },
        outcome.delta
    );
    Ok(outcome)
}

/// Assemble the report for an outcome.
pub fn build_report(
    config: &DeltaCommandConfig,
    base: &ParsedSpec,
    revision: &ParsedSpec,
    outcome: DeltaOutcome,
) -> DeltaReport {
    let report = DeltaReport::new(
        outcome.delta,
        config.delta.asymmetric,
        DocumentInfo::from_spec(base.spec(), Some(base.display_path())),
        DocumentInfo::from_spec(revision.spec(), Some(revision.display_path())),
    );
    match outcome.breakdown {
        Some(breakdown) => report.with_breakdown(breakdown),
        None => report,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::model::{ApiSpec, EndpointKey, HttpMethod, Operation};

    fn parsed(paths: &[&str], name: &str) -> ParsedSpec {
        let spec = paths.iter().fold(ApiSpec::new(), |spec, path| {
            spec.with_endpoint(EndpointKey::new(HttpMethod::Get, *path), Operation::default())
        });
        ParsedSpec {
            spec,
            path: name.into(),
        }
    }

    fn config(app: AppConfig) -> DeltaCommandConfig {
        DeltaCommandConfig::from_app_config(app, "base.yaml".into(), "revision.yaml".into())
    }

    #[test]
    fn test_compute_delta() {
        let base = parsed(&["/a"], "base.yaml");
        let revision = parsed(&["/a", "/e"], "revision.yaml");

        let outcome = compute_delta(&config(AppConfig::default()), &base, &revision).unwrap();
        assert_eq!(outcome.delta, 0.5);
        assert!(outcome.breakdown.is_none());

        let asymmetric = config(AppConfig::builder().asymmetric(true).explain(true).build());
        let outcome = compute_delta(&asymmetric, &base, &revision).unwrap();
        assert_eq!(outcome.delta, 0.0);
        assert_eq!(outcome.breakdown.unwrap().added, vec!["GET /e"]);
    }

    #[test]
    fn test_invalid_path_filter_is_an_error() {
        let base = parsed(&["/a"], "base.yaml");
        let bad = config(AppConfig::builder().match_path(Some("([".into())).build());
        assert!(compute_delta(&bad, &base, &base).is_err());
    }

    #[test]
    fn test_build_report() {
        let base = parsed(&["/a"], "base.yaml");
        let revision = parsed(&["/b"], "revision.yaml");
        let config = config(AppConfig::default());

        let outcome = compute_delta(&config, &base, &revision).unwrap();
        let report = build_report(&config, &base, &revision, outcome);
        assert_eq!(report.delta, 1.0);
        assert_eq!(report.base.path.as_deref(), Some("base.yaml"));
        assert_eq!(report.revision.endpoint_count, 1);
    }
}
