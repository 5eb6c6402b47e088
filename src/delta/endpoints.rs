//! Endpoint and endpoints deltas.

use super::parameters::parameters_delta;
use super::ratio::{ratio, COEFFICIENT_MODIFIED};
use super::responses::responses_delta;
use super::weighted::{weighted_average, WeightedDelta};
use crate::diff::{DiffNode, EndpointsDiff, MethodDiff};
use rayon::prelude::*;

/// Delta of one modified endpoint.
///
/// Plain average of the parameter and response deltas: both terms weigh 1,
/// so an endpoint without parameters still averages over two terms.
#[must_use]
pub fn endpoint_delta(asymmetric: bool, diff: &MethodDiff) -> f64 {
    let parameters = WeightedDelta::new(parameters_delta(asymmetric, &diff.parameters), 1);
    let responses = WeightedDelta::new(responses_delta(asymmetric, &diff.responses).score, 1);
    weighted_average(&[parameters, responses])
}

/// Score of every modified endpoint, in key order.
///
/// Scored in parallel once there are at least `parallel_threshold` entries.
/// The output order is the same either way.
pub(crate) fn modified_scores(
    asymmetric: bool,
    diff: &EndpointsDiff,
    parallel_threshold: usize,
) -> Vec<WeightedDelta> {
    if diff.modified.len() >= parallel_threshold {
        tracing::debug!("Scoring {} modified endpoints in parallel", diff.modified.len());
        diff.modified
            .par_iter()
            .map(|(_, method)| WeightedDelta::new(endpoint_delta(asymmetric, method), 1))
            .collect()
    } else {
        diff.modified
            .values()
            .map(|method| WeightedDelta::new(endpoint_delta(asymmetric, method), 1))
            .collect()
    }
}

/// Combine endpoint counts with the average modified-endpoint score.
#[must_use]
pub fn endpoints_delta(asymmetric: bool, diff: &EndpointsDiff) -> f64 {
    endpoints_delta_with(asymmetric, diff, usize::MAX)
}

pub(crate) fn endpoints_delta_with(
    asymmetric: bool,
    diff: &EndpointsDiff,
    parallel_threshold: usize,
) -> f64 {
    if diff.is_empty() {
        return 0.0;
    }

    let counts = diff.counts();
    let scores = modified_scores(asymmetric, diff, parallel_threshold);
    let modified_score = COEFFICIENT_MODIFIED * weighted_average(&scores);

    ratio(
        asymmetric,
        counts.added,
        counts.deleted,
        modified_score,
        counts.total(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::{ParameterDiff, ResponseDiff, SpecDiff, ValueDiff};
    use crate::model::{EndpointKey, HttpMethod, ParameterLocation};

    fn method_with_modified_param() -> MethodDiff {
        let mut method = MethodDiff::default();
        method
            .parameters
            .modified
            .entry(ParameterLocation::Query)
            .or_default()
            .insert(
                "q".into(),
                ParameterDiff {
                    required: ValueDiff::compare(false, true),
                    schema: None,
                },
            );
        method
    }

    #[test]
    fn test_empty_response_record_still_counts() {
        let method = method_with_modified_param();
        // (0.5 + 0) / 2
        assert_eq!(endpoint_delta(false, &method), 0.25);
        assert_eq!(endpoint_delta(true, &method), 0.125);
    }

    #[test]
    fn test_endpoint_without_parameters() {
        let mut method = MethodDiff::default();
        method.responses.modified.insert("200".into(), ResponseDiff::default());
        // (0 + 0.5) / 2
        assert_eq!(endpoint_delta(false, &method), 0.25);
        assert_eq!(endpoint_delta(true, &method), 0.125);

        let mut diff = SpecDiff::new();
        diff.endpoints
            .modified
            .insert(EndpointKey::new(HttpMethod::Get, "/pets"), method);
        assert_eq!(crate::delta::get(false, &diff), 0.125);
        assert_eq!(crate::delta::get(true, &diff), 0.0625);
    }

    #[test]
    fn test_flat_weights_for_present_subrecords() {
        let mut method = method_with_modified_param();
        method.responses.unchanged = vec!["200".into(), "400".into(), "500".into()];
        // (0.5 + 0.0) / 2, the response count does not change the weight
        assert_eq!(endpoint_delta(false, &method), 0.25);
    }

    #[test]
    fn test_metadata_only_change_scores_zero() {
        let method = MethodDiff {
            summary: ValueDiff::compare(None, Some("List pets".into())),
            ..MethodDiff::default()
        };
        assert_eq!(endpoint_delta(false, &method), 0.0);
    }

    #[test]
    fn test_endpoints_delta_mixes_counts_and_modified_score() {
        let mut diff = EndpointsDiff {
            added: vec![EndpointKey::new(HttpMethod::Post, "/pets")],
            unchanged: vec![EndpointKey::new(HttpMethod::Get, "/health")],
            ..EndpointsDiff::default()
        };
        let mut method = MethodDiff::default();
        method.responses.modified.insert("200".into(), ResponseDiff::default());
        diff.modified
            .insert(EndpointKey::new(HttpMethod::Get, "/pets"), method);

        // endpoint: (0 + 0.5) / 2 = 0.25; modified score 0.125
        // sym: (1 + 0 + 0.125) / 3
        let sym = endpoints_delta(false, &diff);
        assert!((sym - 1.125 / 3.0).abs() < 1e-12);
        // asym: (0 + 0 + 0.0625) / 3
        let asym = endpoints_delta(true, &diff);
        assert!((asym - 0.0625 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_parallel_and_sequential_agree() {
        let mut diff = EndpointsDiff::default();
        for i in 0..64 {
            let mut method = method_with_modified_param();
            if i % 3 == 0 {
                method.responses.added.push("201".into());
            }
            diff.modified
                .insert(EndpointKey::new(HttpMethod::Get, format!("/r{i}")), method);
        }

        for asymmetric in [false, true] {
            let sequential = endpoints_delta_with(asymmetric, &diff, usize::MAX);
            let parallel = endpoints_delta_with(asymmetric, &diff, 1);
            assert_eq!(sequential.to_bits(), parallel.to_bits());
        }
    }

    #[test]
    fn test_empty_endpoints() {
        assert_eq!(endpoints_delta(false, &EndpointsDiff::default()), 0.0);
    }
}
