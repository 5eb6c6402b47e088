//! OpenAPI 3.x and Swagger 2.0 reader.
//!
//! Walks the loaded value tree and builds an [`ApiSpec`]. Both formats share
//! one walker; the differences (where parameter types live, how response
//! payloads are declared, how nullability is spelled) are handled inline.

use super::detection::{detect_format, load_document};
use super::refs::RefResolver;
use crate::error::{ErrorContext, OasDeltaError, ParseErrorKind, Result};
use crate::model::{
    ApiSpec, EndpointKey, HttpMethod, Operation, Parameter, ParameterLocation, Response, Schema,
    SpecFormat, SpecInfo,
};
use crate::utils::content_hash;
use indexmap::IndexMap;
use serde_json::{Map, Value};

/// Media type assumed for Swagger 2 payloads when `produces` is absent.
const DEFAULT_MEDIA_TYPE: &str = "application/json";

/// Parser for OpenAPI 3.x and Swagger 2.0 documents in JSON or YAML.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenApiParser;

impl OpenApiParser {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse raw document content.
    pub fn parse_str(&self, content: &str) -> Result<ApiSpec> {
        let (doc, syntax) = load_document(content)?;
        tracing::debug!("Loaded {} document ({} bytes)", syntax.name(), content.len());
        let mut spec = self.parse_value(&doc)?;
        spec.content_hash = content_hash(content.as_bytes());
        Ok(spec)
    }

    /// Parse an already-loaded document tree.
    pub fn parse_value(&self, doc: &Value) -> Result<ApiSpec> {
        let (format, spec_version) = detect_format(doc)?;
        let walker = Walker {
            resolver: RefResolver::new(doc),
            format,
            produces: media_types(doc.get("produces")),
        };

        let info = doc.get("info");
        let mut spec = ApiSpec {
            info: SpecInfo {
                title: info.and_then(|i| string_field(i, "title")),
                version: info.and_then(|i| string_field(i, "version")),
                spec_version,
                format,
            },
            ..ApiSpec::default()
        };

        let Some(paths) = doc.get("paths") else {
            return Ok(spec);
        };
        let paths = paths.as_object().ok_or_else(|| invalid("paths", "expected a mapping"))?;

        for (path, item) in paths {
            walker
                .walk_path_item(path, item, &mut spec)
                .with_context(|| format!("reading path {path}"))?;
        }

        tracing::debug!(
            "Parsed {} {} document with {} endpoints",
            format.name(),
            spec.info.spec_version,
            spec.endpoint_count()
        );
        Ok(spec)
    }
}

struct Walker<'a> {
    resolver: RefResolver<'a>,
    format: SpecFormat,
    /// Document-level `produces` (Swagger 2 only)
    produces: Vec<String>,
}

impl<'a> Walker<'a> {
    fn walk_path_item(&self, path: &str, item: &'a Value, spec: &mut ApiSpec) -> Result<()> {
        let item = self.resolver.resolve(item)?;
        let Some(item) = item.as_object() else {
            return Err(invalid(path, "path item must be a mapping"));
        };

        let shared = match item.get("parameters") {
            Some(params) => self.parameters(params)?,
            None => Vec::new(),
        };

        for (key, operation) in item {
            let Some(method) = HttpMethod::parse(key) else {
                continue;
            };
            let operation = self
                .operation(operation, &shared)
                .with_context(|| format!("reading {method} operation"))?;
            spec.add_endpoint(EndpointKey::new(method, path), operation);
        }
        Ok(())
    }

    fn operation(&self, value: &'a Value, shared: &[Parameter]) -> Result<Operation> {
        let Some(obj) = value.as_object() else {
            return Err(invalid("operation", "expected a mapping"));
        };

        let mut operation = Operation {
            operation_id: obj.get("operationId").and_then(Value::as_str).map(str::to_string),
            summary: obj.get("summary").and_then(Value::as_str).map(str::to_string),
            deprecated: obj.get("deprecated").and_then(Value::as_bool).unwrap_or(false),
            parameters: shared.to_vec(),
            responses: IndexMap::new(),
        };

        if let Some(params) = obj.get("parameters") {
            for parameter in self.parameters(params)? {
                operation.upsert_parameter(parameter);
            }
        }

        if let Some(responses) = obj.get("responses") {
            let produces = match media_types(obj.get("produces")) {
                local if !local.is_empty() => local,
                _ => self.produces.clone(),
            };
            operation.responses = self.responses(responses, &produces)?;
        }

        Ok(operation)
    }

    fn parameters(&self, value: &'a Value) -> Result<Vec<Parameter>> {
        let Some(list) = value.as_array() else {
            return Err(invalid("parameters", "expected a list"));
        };

        let mut parameters = Vec::with_capacity(list.len());
        for entry in list {
            let entry = self.resolver.resolve(entry).context("resolving parameter")?;
            if let Some(parameter) = self.parameter(entry)? {
                parameters.push(parameter);
            }
        }
        Ok(parameters)
    }

    fn parameter(&self, value: &'a Value) -> Result<Option<Parameter>> {
        let location = value
            .get("in")
            .and_then(Value::as_str)
            .ok_or_else(|| OasDeltaError::missing_field("in", "parameter"))?;
        // body and formData carry payloads, not parameters
        let Some(location) = ParameterLocation::parse(location) else {
            return Ok(None);
        };
        let name = value
            .get("name")
            .and_then(Value::as_str)
            .ok_or_else(|| OasDeltaError::missing_field("name", "parameter"))?;

        let schema = match (value.get("schema"), value.get("content")) {
            (Some(schema), _) => Some(self.schema(schema)?),
            (None, Some(content)) => self.first_content_schema(content)?,
            (None, None) if self.format == SpecFormat::Swagger2 => Some(self.schema(value)?),
            (None, None) => None,
        };

        let mut parameter = Parameter::new(name, location);
        if let Some(required) = value.get("required").and_then(Value::as_bool) {
            parameter.required = required;
        }
        parameter.schema = schema;
        Ok(Some(parameter))
    }

    fn responses(&self, value: &'a Value, produces: &[String]) -> Result<IndexMap<String, Response>> {
        let Some(map) = value.as_object() else {
            return Err(invalid("responses", "expected a mapping"));
        };

        let mut responses = IndexMap::with_capacity(map.len());
        for (status, response) in map {
            // specification extensions are not responses
            if status.starts_with("x-") {
                continue;
            }
            let response = self
                .resolver
                .resolve(response)
                .with_context(|| format!("resolving response {status}"))?;
            responses.insert(status.clone(), self.response(response, produces)?);
        }
        Ok(responses)
    }

    fn response(&self, value: &'a Value, produces: &[String]) -> Result<Response> {
        let mut response = Response {
            description: value.get("description").and_then(Value::as_str).map(str::to_string),
            content: IndexMap::new(),
        };

        match self.format {
            SpecFormat::OpenApi3 => {
                if let Some(content) = value.get("content").and_then(Value::as_object) {
                    for (media_type, media) in content {
                        let schema = match media.get("schema") {
                            Some(schema) => self.schema(schema)?,
                            None => Schema::default(),
                        };
                        response.content.insert(media_type.clone(), schema);
                    }
                }
            }
            SpecFormat::Swagger2 => {
                if let Some(schema) = value.get("schema") {
                    let schema = self.schema(schema)?;
                    if produces.is_empty() {
                        response.content.insert(DEFAULT_MEDIA_TYPE.to_string(), schema);
                    } else {
                        for media_type in produces {
                            response.content.insert(media_type.clone(), schema.clone());
                        }
                    }
                }
            }
        }
        Ok(response)
    }

    fn first_content_schema(&self, content: &'a Value) -> Result<Option<Schema>> {
        let Some(schema) = content
            .as_object()
            .and_then(|c| c.values().next())
            .and_then(|media| media.get("schema"))
        else {
            return Ok(None);
        };
        self.schema(schema).map(Some)
    }

    fn schema(&self, value: &'a Value) -> Result<Schema> {
        let value = self.resolver.resolve(value).context("resolving schema")?;
        let Some(obj) = value.as_object() else {
            // `true` / `false` schemas (3.1) constrain nothing we compare
            return Ok(Schema::default());
        };

        let (schema_type, null_in_type) = schema_type(obj);
        let nullable = null_in_type
            || obj.get("nullable").and_then(Value::as_bool).unwrap_or(false)
            || obj.get("x-nullable").and_then(Value::as_bool).unwrap_or(false);

        let enum_values = obj
            .get("enum")
            .and_then(Value::as_array)
            .map(|values| values.iter().map(Value::to_string).collect())
            .unwrap_or_default();

        Ok(Schema {
            schema_type,
            format: string_field(value, "format"),
            nullable,
            pattern: string_field(value, "pattern"),
            enum_values,
        })
    }
}

/// Read `type`, which OpenAPI 3.1 allows to be a list such as `[string, "null"]`.
fn schema_type(obj: &Map<String, Value>) -> (Option<String>, bool) {
    match obj.get("type") {
        Some(Value::String(t)) => (Some(t.clone()), false),
        Some(Value::Array(types)) => {
            let names: Vec<&str> = types.iter().filter_map(Value::as_str).collect();
            let has_null = names.contains(&"null");
            let primary = names.into_iter().find(|t| *t != "null").map(str::to_string);
            (primary, has_null)
        }
        _ => (None, false),
    }
}

fn media_types(value: Option<&Value>) -> Vec<String> {
    value
        .and_then(Value::as_array)
        .map(|list| {
            list.iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn string_field(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(str::to_string)
}

fn invalid(field: &str, message: &str) -> OasDeltaError {
    OasDeltaError::parse(
        "reading document structure",
        ParseErrorKind::InvalidValue {
            field: field.to_string(),
            message: message.to_string(),
        },
    )
}
