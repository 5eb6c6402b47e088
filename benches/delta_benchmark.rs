//! Benchmarks for diffing and scoring large documents.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use oas_delta::delta::DeltaScorer;
use oas_delta::diff::DiffEngine;
use oas_delta::model::{
    ApiSpec, EndpointKey, HttpMethod, Operation, Parameter, ParameterLocation, Response, Schema,
};
use std::hint::black_box;

/// A document with `size` resources, two operations each.
///
/// With `drift` set, every third resource changes a parameter type and
/// every fifth gains a response, so a diff against the undrifted document
/// has a large modified set.
fn generate_spec(size: usize, drift: bool) -> ApiSpec {
    let mut spec = ApiSpec::new();
    for i in 0..size {
        let path = format!("/resources{i}/{{id}}");
        let id_type = if drift && i % 3 == 0 { "integer" } else { "string" };

        let mut get = Operation::default()
            .with_parameter(
                Parameter::new("id", ParameterLocation::Path).with_schema(Schema::of_type(id_type)),
            )
            .with_parameter(
                Parameter::new("expand", ParameterLocation::Query)
                    .with_schema(Schema::of_type("boolean")),
            )
            .with_response(
                "200",
                Response::new("OK").with_content("application/json", Schema::of_type("object")),
            )
            .with_response("404", Response::new("Not found"));
        if drift && i % 5 == 0 {
            get = get.with_response("429", Response::new("Too many requests"));
        }

        let delete = Operation::default()
            .with_parameter(
                Parameter::new("id", ParameterLocation::Path).with_schema(Schema::of_type("string")),
            )
            .with_response("204", Response::new("Deleted"));

        spec.add_endpoint(EndpointKey::new(HttpMethod::Get, path.clone()), get);
        spec.add_endpoint(EndpointKey::new(HttpMethod::Delete, path), delete);
    }
    spec
}

fn benchmark_diff(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff");
    let engine = DiffEngine::new();

    for size in [100, 1_000, 5_000] {
        let base = generate_spec(size, false);
        let revision = generate_spec(size, true);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| engine.diff(black_box(&base), black_box(&revision)));
        });
    }
    group.finish();
}

fn benchmark_score(c: &mut Criterion) {
    let mut group = c.benchmark_group("score");

    for size in [1_000, 10_000] {
        let diff = DiffEngine::new()
            .diff(&generate_spec(size, false), &generate_spec(size, true))
            .expect("in-memory diff");

        let sequential = DeltaScorer::new().parallel_threshold(usize::MAX);
        let parallel = DeltaScorer::new().parallel_threshold(1);

        group.bench_with_input(BenchmarkId::new("sequential", size), &diff, |b, diff| {
            b.iter(|| sequential.score(black_box(diff)));
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), &diff, |b, diff| {
            b.iter(|| parallel.score(black_box(diff)));
        });
    }
    group.finish();
}

criterion_group!(benches, benchmark_diff, benchmark_score);
criterion_main!(benches);
