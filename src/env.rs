//! Environment-variable [`Source`], answering to the `env` tag name.
//!
//! Variables are snapshotted at construction. Takes an iterator so tests can
//! pass synthetic data instead of `std::env::vars()`.

use std::collections::HashMap;

use crate::meta::FieldMeta;
use crate::source::Source;

/// [`Source`] backed by a snapshot of environment variables.
///
/// An optional prefix namespaces lookups: with prefix `MYAPP`, a field tagged
/// `"env" => "HOST"` reads `MYAPP_HOST`. Empty-valued variables count as
/// absent, so `default`/`required` behave the same whether a variable is
/// unset or set to nothing.
#[derive(Debug, Clone)]
pub struct EnvSource {
    prefix: Option<String>,
    vars: HashMap<String, String>,
}

impl EnvSource {
    /// Snapshot the process environment.
    pub fn new() -> Self {
        Self::from_vars(std::env::vars())
    }

    /// Build from explicit variable pairs.
    pub fn from_vars(vars: impl IntoIterator<Item = (String, String)>) -> Self {
        EnvSource {
            prefix: None,
            vars: vars.into_iter().collect(),
        }
    }

    /// Namespace all lookups under `{PREFIX}_`.
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.prefix = Some(prefix.to_string());
        self
    }
}

impl Default for EnvSource {
    fn default() -> Self {
        Self::new()
    }
}

impl Source for EnvSource {
    fn tag_name(&self) -> &str {
        "env"
    }

    fn get(&self, key: &str, _meta: &FieldMeta) -> Option<String> {
        let full = match &self.prefix {
            Some(prefix) => format!("{prefix}_{key}"),
            None => key.to_string(),
        };
        self.vars.get(&full).filter(|v| !v.is_empty()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static META: FieldMeta = FieldMeta {
        name: "host",
        type_name: "String",
        tags: &[("env", "HOST")],
    };

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn answers_to_the_env_tag() {
        assert_eq!(EnvSource::from_vars(vars(&[])).tag_name(), "env");
    }

    #[test]
    fn reads_snapshotted_vars() {
        let source = EnvSource::from_vars(vars(&[("HOST", "0.0.0.0")]));
        assert_eq!(source.get("HOST", &META), Some("0.0.0.0".to_string()));
    }

    #[test]
    fn missing_var_is_absent() {
        let source = EnvSource::from_vars(vars(&[]));
        assert_eq!(source.get("HOST", &META), None);
    }

    #[test]
    fn empty_var_counts_as_absent() {
        let source = EnvSource::from_vars(vars(&[("HOST", "")]));
        assert_eq!(source.get("HOST", &META), None);
    }

    #[test]
    fn prefix_namespaces_lookups() {
        let source =
            EnvSource::from_vars(vars(&[("MYAPP_HOST", "a"), ("HOST", "b")])).with_prefix("MYAPP");
        assert_eq!(source.get("HOST", &META), Some("a".to_string()));
    }

    #[test]
    fn prefixed_lookup_misses_unprefixed_vars() {
        let source = EnvSource::from_vars(vars(&[("HOST", "b")])).with_prefix("MYAPP");
        assert_eq!(source.get("HOST", &META), None);
    }
}
