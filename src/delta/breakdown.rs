//! Per-endpoint explanation of a score.
//!
//! Built alongside the score for `--explain`; reading it never changes the
//! score itself.

use super::endpoints::endpoint_delta;
use super::parameters::parameters_delta;
use super::ratio::COEFFICIENT_MODIFIED;
use super::responses::responses_delta;
use super::schema::schema_delta;
use super::weighted::{weighted_average, WeightedDelta};
use crate::diff::{ChangeCounts, DiffNode, MethodDiff, SpecDiff};
use crate::model::ParameterLocation;
use serde::{Deserialize, Serialize};

/// Explanation of one score.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeltaBreakdown {
    /// Endpoint counts at the top level
    pub endpoints: ChangeCounts,
    /// Coefficient-weighted average of the modified endpoints' deltas
    pub modified_score: f64,
    pub added: Vec<String>,
    pub deleted: Vec<String>,
    pub modified: Vec<EndpointBreakdown>,
}

/// Explanation of one modified endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EndpointBreakdown {
    pub endpoint: String,
    pub delta: f64,
    pub parameters: WeightedDelta,
    /// Weight here is the endpoint's response count
    pub responses: WeightedDelta,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub parameter_changes: Vec<ParameterBreakdown>,
}

/// One modified parameter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterBreakdown {
    pub location: ParameterLocation,
    pub name: String,
    pub required_changed: bool,
    /// Informational: not folded into the parameter delta
    pub schema_delta: f64,
}

impl DeltaBreakdown {
    /// Explain how `diff` scores in the given mode.
    pub fn build(asymmetric: bool, diff: &SpecDiff) -> Self {
        let endpoints = &diff.endpoints;
        let modified: Vec<EndpointBreakdown> = endpoints
            .modified
            .iter()
            .map(|(key, method)| explain_endpoint(asymmetric, key.to_string(), method))
            .collect();

        let scores: Vec<WeightedDelta> = modified
            .iter()
            .map(|e| WeightedDelta::new(e.delta, 1))
            .collect();

        Self {
            endpoints: endpoints.counts(),
            modified_score: COEFFICIENT_MODIFIED * weighted_average(&scores),
            added: endpoints.added.iter().map(ToString::to_string).collect(),
            deleted: endpoints.deleted.iter().map(ToString::to_string).collect(),
            modified,
        }
    }
}

fn explain_endpoint(asymmetric: bool, endpoint: String, method: &MethodDiff) -> EndpointBreakdown {
    let parameter_changes = method
        .parameters
        .modified_iter()
        .map(|(location, name, param)| ParameterBreakdown {
            location,
            name: name.to_string(),
            required_changed: param.required.is_some(),
            schema_delta: param
                .schema
                .as_ref()
                .map_or(0.0, |schema| schema_delta(asymmetric, schema)),
        })
        .collect();

    EndpointBreakdown {
        endpoint,
        delta: endpoint_delta(asymmetric, method),
        parameters: WeightedDelta::new(parameters_delta(asymmetric, &method.parameters), 1),
        responses: responses_delta(asymmetric, &method.responses),
        parameter_changes,
    }
}
