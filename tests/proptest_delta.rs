//! Property-based tests for delta scoring.
//!
//! Generates pairs of small documents over a shared pool of paths,
//! parameters and responses, and checks the laws every score obeys.

use oas_delta::delta;
use oas_delta::diff::DiffEngine;
use oas_delta::model::{
    ApiSpec, EndpointKey, HttpMethod, Operation, Parameter, ParameterLocation, Response, Schema,
};
use proptest::prelude::*;

const PATHS: [&str; 4] = ["/pets", "/pets/{id}", "/stores", "/users/{id}/orders"];
const METHODS: [HttpMethod; 2] = [HttpMethod::Get, HttpMethod::Post];
const TYPES: [&str; 3] = ["integer", "string", "boolean"];
const DESCRIPTIONS: [&str; 2] = ["OK", "Success"];

const EPSILON: f64 = 1e-9;

#[derive(Debug, Clone)]
struct OperationShape {
    query: Option<usize>,
    header: Option<usize>,
    required_header: bool,
    ok: Option<usize>,
    ok_type: usize,
    not_found: bool,
}

fn operation_shape() -> impl Strategy<Value = OperationShape> {
    (
        prop::option::of(0..TYPES.len()),
        prop::option::of(0..TYPES.len()),
        any::<bool>(),
        prop::option::of(0..DESCRIPTIONS.len()),
        0..TYPES.len(),
        any::<bool>(),
    )
        .prop_map(
            |(query, header, required_header, ok, ok_type, not_found)| OperationShape {
                query,
                header,
                required_header,
                ok,
                ok_type,
                not_found,
            },
        )
}

fn build_operation(path: &str, shape: &OperationShape) -> Operation {
    let mut operation = Operation::default();
    if path.contains("{id}") {
        operation = operation.with_parameter(
            Parameter::new("id", ParameterLocation::Path).with_schema(Schema::of_type("string")),
        );
    }
    if let Some(t) = shape.query {
        operation = operation.with_parameter(
            Parameter::new("limit", ParameterLocation::Query).with_schema(Schema::of_type(TYPES[t])),
        );
    }
    if let Some(t) = shape.header {
        operation = operation.with_parameter(
            Parameter::new("X-Trace", ParameterLocation::Header)
                .with_schema(Schema::of_type(TYPES[t]))
                .required(shape.required_header),
        );
    }
    if let Some(d) = shape.ok {
        operation = operation.with_response(
            "200",
            Response::new(DESCRIPTIONS[d])
                .with_content("application/json", Schema::of_type(TYPES[shape.ok_type])),
        );
    }
    if shape.not_found {
        operation = operation.with_response("404", Response::new("Not found"));
    }
    operation
}

fn api_spec() -> impl Strategy<Value = ApiSpec> {
    prop::collection::vec(
        prop::option::of(operation_shape()),
        PATHS.len() * METHODS.len(),
    )
    .prop_map(|slots| {
        let mut spec = ApiSpec::new();
        for (i, slot) in slots.iter().enumerate() {
            let Some(shape) = slot else { continue };
            let path = PATHS[i / METHODS.len()];
            let method = METHODS[i % METHODS.len()];
            spec.add_endpoint(EndpointKey::new(method, path), build_operation(path, shape));
        }
        spec
    })
}

fn score(asymmetric: bool, base: &ApiSpec, revision: &ApiSpec) -> f64 {
    let diff = DiffEngine::new()
        .diff(base, revision)
        .expect("in-memory diff never fails");
    delta::get(asymmetric, &diff)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn identical_documents_score_zero(spec in api_spec()) {
        prop_assert_eq!(score(false, &spec, &spec), 0.0);
        prop_assert_eq!(score(true, &spec, &spec), 0.0);
    }

    #[test]
    fn score_is_bounded(base in api_spec(), revision in api_spec()) {
        for asymmetric in [false, true] {
            let value = score(asymmetric, &base, &revision);
            prop_assert!((0.0..=1.0).contains(&value), "{} out of range", value);
        }
    }

    #[test]
    fn symmetric_score_ignores_direction(base in api_spec(), revision in api_spec()) {
        let forward = score(false, &base, &revision);
        let backward = score(false, &revision, &base);
        prop_assert!((forward - backward).abs() < EPSILON, "{} != {}", forward, backward);
    }

    #[test]
    fn asymmetric_directions_sum_to_symmetric(base in api_spec(), revision in api_spec()) {
        let symmetric = score(false, &base, &revision);
        let forward = score(true, &base, &revision);
        let backward = score(true, &revision, &base);
        prop_assert!(
            (forward + backward - symmetric).abs() < EPSILON,
            "{} + {} != {}", forward, backward, symmetric
        );
    }

    #[test]
    fn asymmetric_never_exceeds_symmetric(base in api_spec(), revision in api_spec()) {
        prop_assert!(score(true, &base, &revision) <= score(false, &base, &revision) + EPSILON);
    }
}
