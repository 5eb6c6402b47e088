//! Integration tests for oas-delta
//!
//! These tests verify end-to-end functionality of document parsing,
//! the diff engine, and delta scoring against fixture documents.

use oas_delta::{
    delta::{self, DeltaScorer},
    diff::{DiffEngine, DiffNode, DiffOptions},
    parsers::parse_spec,
    ApiSpec, ChangeCounts, SpecFormat,
};
use std::path::Path;

// ============================================================================
// Test Fixtures
// ============================================================================

const FIXTURES_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures");

fn fixture_path(name: &str) -> std::path::PathBuf {
    Path::new(FIXTURES_DIR).join(name)
}

fn fixture(name: &str) -> ApiSpec {
    parse_spec(&fixture_path(name)).expect("Failed to parse fixture")
}

/// Symmetric and asymmetric delta of `base` against `revision`.
fn deltas(base: &str, revision: &str) -> (f64, f64) {
    deltas_with(DiffEngine::new(), base, revision)
}

fn deltas_with(engine: DiffEngine, base: &str, revision: &str) -> (f64, f64) {
    let diff = engine
        .diff(&fixture(base), &fixture(revision))
        .expect("diff should succeed");
    (delta::get(false, &diff), delta::get(true, &diff))
}

// ============================================================================
// Parser Tests
// ============================================================================

mod parser_tests {
    use super::*;
    use oas_delta::model::{EndpointKey, HttpMethod, ParameterLocation};

    #[test]
    fn test_parse_openapi3_with_refs() {
        let spec = fixture("petstore-v1.yaml");

        assert_eq!(spec.info.format, SpecFormat::OpenApi3);
        assert_eq!(spec.info.title.as_deref(), Some("Petstore"));
        assert_eq!(spec.endpoint_count(), 4);

        let show = spec
            .operation(&EndpointKey::new(HttpMethod::Get, "/pets/{petId}"))
            .expect("GET /pets/{petId} should exist");
        let pet_id = show
            .parameter(ParameterLocation::Path, "petId")
            .expect("path-level parameter should be inherited");
        assert!(pet_id.required);
        assert_eq!(
            show.responses["404"].description.as_deref(),
            Some("Not found")
        );
        assert_eq!(
            show.responses["200"].content["application/json"]
                .schema_type
                .as_deref(),
            Some("object")
        );
    }

    #[test]
    fn test_parse_swagger2() {
        let spec = fixture("petstore-v1.swagger.json");

        assert_eq!(spec.info.format, SpecFormat::Swagger2);
        assert_eq!(spec.endpoint_count(), 4);

        // body parameters are payloads, not parameters
        let create = spec
            .operation(&EndpointKey::new(HttpMethod::Post, "/pets"))
            .unwrap();
        assert!(create.parameters.is_empty());
    }

    #[test]
    fn test_parse_openapi31() {
        let spec = fixture("users.yaml");
        assert_eq!(spec.info.spec_version, "3.1.0");
        assert_eq!(spec.paths(), vec!["/users"]);
    }

    #[test]
    fn test_rejects_unknown_documents() {
        assert!(parse_spec(&fixture_path("not-an-api.yaml")).is_err());
        assert!(parse_spec(&fixture_path("unsupported-version.json")).is_err());
        assert!(parse_spec(&fixture_path("does-not-exist.yaml")).is_err());
    }

    #[test]
    fn test_rejects_dangling_reference() {
        let err = parse_spec(&fixture_path("broken-ref.yaml")).unwrap_err();
        assert!(err.to_string().contains("/pets"));
    }
}

// ============================================================================
// Diff Engine Tests
// ============================================================================

mod diff_tests {
    use super::*;

    #[test]
    fn test_diff_identical_files() {
        let spec = fixture("petstore-v1.yaml");
        let diff = DiffEngine::new().diff(&spec, &spec).unwrap();

        // same bytes: the content hash matches and nothing is compared
        assert!(diff.is_empty());
        assert_eq!(diff.counts(), ChangeCounts::default());
    }

    #[test]
    fn test_diff_across_formats() {
        let diff = DiffEngine::new()
            .diff(
                &fixture("petstore-v1.yaml"),
                &fixture("petstore-v1.swagger.json"),
            )
            .unwrap();
        assert!(!diff.has_changes(), "unexpected changes: {diff:?}");
        // different bytes, so every endpoint is paired and compared
        assert_eq!(diff.counts(), ChangeCounts::new(0, 0, 0, 4));
    }

    #[test]
    fn test_diff_modified_parameter() {
        let diff = DiffEngine::new()
            .diff(
                &fixture("petstore-v1.yaml"),
                &fixture("petstore-v2-modified.yaml"),
            )
            .unwrap();

        assert_eq!(diff.counts(), ChangeCounts::new(0, 0, 1, 3));
        let method = diff.endpoints.modified.values().next().unwrap();
        assert_eq!(method.parameters.counts(), ChangeCounts::new(0, 0, 1, 0));
        assert_eq!(method.responses.counts(), ChangeCounts::new(0, 0, 0, 2));
    }

    #[test]
    fn test_match_path_filter() {
        let engine = DiffEngine::new().match_path("^/pets$").unwrap();
        let diff = engine
            .diff(
                &fixture("petstore-v1.yaml"),
                &fixture("petstore-v2-added.yaml"),
            )
            .unwrap();
        assert_eq!(diff.counts(), ChangeCounts::new(0, 0, 0, 2));
    }
}

// ============================================================================
// Delta Scenarios
// ============================================================================

mod delta_tests {
    use super::*;

    #[test]
    fn test_identity_scores_zero() {
        for name in ["petstore-v1.yaml", "petstore-v1.swagger.json", "items-base.yaml"] {
            assert_eq!(deltas(name, name), (0.0, 0.0), "{name}");
        }
    }

    #[test]
    fn test_added_endpoint() {
        // one of five endpoints added
        assert_eq!(deltas("petstore-v1.yaml", "petstore-v2-added.yaml"), (0.2, 0.0));
        // seen the other way round it is a deletion
        assert_eq!(deltas("petstore-v2-added.yaml", "petstore-v1.yaml"), (0.2, 0.2));
    }

    #[test]
    fn test_disjoint_documents() {
        let (symmetric, asymmetric) = deltas("petstore-v1.yaml", "users.yaml");
        assert_eq!(symmetric, 1.0);
        assert!((asymmetric - 0.8).abs() < 1e-12);

        let (_, reverse) = deltas("users.yaml", "petstore-v1.yaml");
        assert!((reverse - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_single_modified_parameter() {
        // one endpoint whose only parameter changed type, no responses: (0.5 + 0) / 2, halved
        assert_eq!(deltas("items-base.yaml", "items-revision.yaml"), (0.125, 0.0625));
        assert_eq!(deltas("items-revision.yaml", "items-base.yaml"), (0.125, 0.0625));
    }

    #[test]
    fn test_modified_endpoint_among_unchanged() {
        // endpoint delta (0.5 + 0) / 2, halved, spread over four endpoints
        assert_eq!(
            deltas("petstore-v1.yaml", "petstore-v2-modified.yaml"),
            (0.031_25, 0.015_625)
        );
    }

    #[test]
    fn test_asymmetric_directions_sum_to_symmetric() {
        let pairs = [
            ("petstore-v1.yaml", "petstore-v2-added.yaml"),
            ("petstore-v1.yaml", "petstore-v2-modified.yaml"),
            ("petstore-v1.yaml", "users.yaml"),
            ("items-base.yaml", "items-revision.yaml"),
            ("petstore-v2-added.yaml", "petstore-v1.swagger.json"),
        ];
        for (a, b) in pairs {
            let (symmetric, forward) = deltas(a, b);
            let (reverse_symmetric, backward) = deltas(b, a);
            assert!(
                (forward + backward - symmetric).abs() < 1e-12,
                "{a} vs {b}: {forward} + {backward} != {symmetric}"
            );
            assert!((symmetric - reverse_symmetric).abs() < 1e-12, "{a} vs {b}");
        }
    }

    #[test]
    fn test_stripped_prefixes_and_renamed_path_parameters() {
        let (symmetric, _) = deltas("petstore-v1.yaml", "petstore-v2-prefixed.yaml");
        assert_eq!(symmetric, 1.0);

        let engine = DiffEngine::new().strip_prefixes(None, Some("/v2".to_string()));
        let (symmetric, asymmetric) =
            deltas_with(engine, "petstore-v1.yaml", "petstore-v2-prefixed.yaml");
        assert_eq!((symmetric, asymmetric), (0.0, 0.0));
    }

    #[test]
    fn test_literal_templates_do_not_pair() {
        let options = DiffOptions {
            strip_prefix_revision: Some("/v2".to_string()),
            normalize_path_params: false,
            ..DiffOptions::default()
        };
        let engine = DiffEngine::with_options(options).unwrap();
        let (symmetric, _) = deltas_with(engine, "petstore-v1.yaml", "petstore-v2-prefixed.yaml");

        // /pets pairs, /pets/{petId} and /pets/{id} do not: 2 deleted, 2 added, 2 unchanged
        assert!((symmetric - 4.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn test_scorer_explain_matches_score() {
        let diff = DiffEngine::new()
            .diff(
                &fixture("petstore-v1.yaml"),
                &fixture("petstore-v2-modified.yaml"),
            )
            .unwrap();

        let (score, breakdown) = DeltaScorer::new().explain(&diff);
        assert_eq!(score, 0.031_25);
        assert_eq!(breakdown.modified_score, 0.125);
        assert_eq!(breakdown.modified.len(), 1);
        assert_eq!(breakdown.modified[0].endpoint, "GET /pets");
        assert_eq!(breakdown.modified[0].parameter_changes[0].name, "limit");
    }
}
