//! Local `$ref` resolution.

use crate::error::{OasDeltaError, Result};
use serde_json::Value;

/// Maximum number of chained references followed before giving up.
const MAX_REF_DEPTH: usize = 32;

/// Follows local JSON-pointer references (`#/components/...`) within one document.
///
/// Remote references (`other.yaml#/...`) are not supported.
#[derive(Debug, Clone, Copy)]
pub(crate) struct RefResolver<'a> {
    root: &'a Value,
}

impl<'a> RefResolver<'a> {
    pub(crate) const fn new(root: &'a Value) -> Self {
        Self { root }
    }

    /// Return the value a node points to, following chained references.
    pub(crate) fn resolve(&self, mut value: &'a Value) -> Result<&'a Value> {
        for _ in 0..MAX_REF_DEPTH {
            match value.get("$ref").and_then(Value::as_str) {
                Some(reference) => value = self.lookup(reference)?,
                None => return Ok(value),
            }
        }
        let reference = value
            .get("$ref")
            .and_then(Value::as_str)
            .unwrap_or_default();
        Err(OasDeltaError::unresolved_ref(format!(
            "{reference} (reference chain deeper than {MAX_REF_DEPTH})"
        )))
    }

    fn lookup(&self, reference: &str) -> Result<&'a Value> {
        let pointer = reference
            .strip_prefix('#')
            .ok_or_else(|| OasDeltaError::unresolved_ref(reference))?;
        self.root
            .pointer(pointer)
            .ok_or_else(|| OasDeltaError::unresolved_ref(reference))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolves_chained_references() {
        let root = json!({
            "components": {
                "schemas": {
                    "Id": {"$ref": "#/components/schemas/Uuid"},
                    "Uuid": {"type": "string", "format": "uuid"}
                }
            }
        });
        let node = json!({"$ref": "#/components/schemas/Id"});

        let resolved = RefResolver::new(&root).resolve(&node).unwrap();
        assert_eq!(resolved["format"], "uuid");
    }

    #[test]
    fn test_plain_value_is_returned_as_is() {
        let root = json!({});
        let node = json!({"type": "integer"});
        assert_eq!(RefResolver::new(&root).resolve(&node).unwrap(), &node);
    }

    #[test]
    fn test_missing_and_remote_references_fail() {
        let root = json!({"components": {}});
        let missing = json!({"$ref": "#/components/schemas/Nope"});
        let remote = json!({"$ref": "common.yaml#/Pet"});

        assert!(RefResolver::new(&root).resolve(&missing).is_err());
        assert!(RefResolver::new(&root).resolve(&remote).is_err());
    }

    #[test]
    fn test_reference_cycle_is_reported() {
        let root = json!({
            "definitions": {
                "A": {"$ref": "#/definitions/B"},
                "B": {"$ref": "#/definitions/A"}
            }
        });
        let node = json!({"$ref": "#/definitions/A"});
        let err = RefResolver::new(&root).resolve(&node).unwrap_err();
        assert!(err.to_string().contains("reference"));
    }
}
