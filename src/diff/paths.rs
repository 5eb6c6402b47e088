//! Path template handling used when pairing endpoints.

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static PATH_PARAM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{([^}/]*)\}").expect("static regex"));

/// Replace every `{name}` segment with `{}`.
///
/// `/users/{id}` and `/users/{userId}` normalize to the same template.
#[must_use]
pub fn normalize_template(path: &str) -> String {
    PATH_PARAM.replace_all(path, "{}").into_owned()
}

/// Names of path parameters in template order.
#[must_use]
pub fn template_params(path: &str) -> Vec<&str> {
    PATH_PARAM
        .captures_iter(path)
        .filter_map(|c| c.get(1).map(|m| m.as_str()))
        .collect()
}

/// Map revision parameter names to base names by template position.
///
/// Only differing names are included; an empty map means the two templates
/// use the same names.
#[must_use]
pub fn param_renames(base_path: &str, revision_path: &str) -> HashMap<String, String> {
    template_params(revision_path)
        .into_iter()
        .zip(template_params(base_path))
        .filter(|(revision, base)| revision != base)
        .map(|(revision, base)| (revision.to_string(), base.to_string()))
        .collect()
}

/// Remove `prefix` from the start of `path`, keeping a leading slash.
#[must_use]
pub fn strip_prefix<'a>(path: &'a str, prefix: Option<&str>) -> std::borrow::Cow<'a, str> {
    let Some(prefix) = prefix.filter(|p| !p.is_empty()) else {
        return path.into();
    };
    match path.strip_prefix(prefix.trim_end_matches('/')) {
        Some("") => "/".into(),
        Some(rest) if rest.starts_with('/') => rest.into(),
        _ => path.into(),
    }
}
