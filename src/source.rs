//! The value source and sink capabilities, plus map-backed collaborators.
//!
//! The engine performs no I/O of its own: every lookup and every set is a
//! synchronous delegation to one of these traits. Implementations backed by
//! shared mutable state must supply their own locking — the engine issues
//! calls without synchronization.

use std::collections::BTreeMap;

use toml::Value;

use crate::error::BoxError;
use crate::meta::FieldMeta;

/// External collaborator supplying string values during inbound population.
pub trait Source {
    /// The annotation name fields are expected to carry their lookup key
    /// under (e.g. `"env"`, `"consul"`).
    fn tag_name(&self) -> &str;

    /// Look up `key`. `None` means absent; the full field metadata is passed
    /// so the source can inspect co-located annotations.
    fn get(&self, key: &str, meta: &FieldMeta) -> Option<String>;
}

/// External collaborator accepting field values during outbound population.
pub trait Sink {
    /// The annotation name keys are resolved under, as for [`Source`].
    fn tag_name(&self) -> &str;

    /// Store `value` under `key`. Errors propagate verbatim out of
    /// [`populate_external_source`](crate::populate_external_source).
    fn set(&mut self, key: &str, value: Value, meta: &FieldMeta) -> Result<(), BoxError>;
}

/// In-memory [`Source`] with a configurable tag name.
///
/// The staging collaborator for tests and for callers that assemble values
/// programmatically before populating a record.
#[derive(Debug, Default, Clone)]
pub struct MapSource {
    tag: String,
    values: BTreeMap<String, String>,
}

impl MapSource {
    pub fn new(tag: &str) -> Self {
        MapSource {
            tag: tag.to_string(),
            values: BTreeMap::new(),
        }
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: &str) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

impl Source for MapSource {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn get(&self, key: &str, _meta: &FieldMeta) -> Option<String> {
        self.values.get(key).cloned()
    }
}

/// In-memory [`Sink`] with a configurable tag name. Records every `set` call
/// in order, alongside a key-indexed view.
#[derive(Debug, Default)]
pub struct MapSink {
    tag: String,
    values: BTreeMap<String, Value>,
    calls: Vec<String>,
}

impl MapSink {
    pub fn new(tag: &str) -> Self {
        MapSink {
            tag: tag.to_string(),
            values: BTreeMap::new(),
            calls: Vec::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key)
    }

    /// All stored key-value pairs.
    pub fn values(&self) -> &BTreeMap<String, Value> {
        &self.values
    }

    /// Keys in the order `set` was called, including repeats.
    pub fn calls(&self) -> &[String] {
        &self.calls
    }
}

impl Sink for MapSink {
    fn tag_name(&self) -> &str {
        &self.tag
    }

    fn set(&mut self, key: &str, value: Value, _meta: &FieldMeta) -> Result<(), BoxError> {
        self.calls.push(key.to_string());
        self.values.insert(key.to_string(), value);
        Ok(())
    }
}
