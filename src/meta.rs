//! Per-field metadata: the annotation set attached at type-definition time
//! and the lookup helpers the engine reads it through.

/// Annotation holding a fallback literal, applied when the source has no value.
pub const DEFAULT_TAG: &str = "default";

/// Annotation marking a field as mandatory (`"true"` sentinel).
pub const REQUIRED_TAG: &str = "required";

/// Annotation excluding a field from processing entirely (`"true"` sentinel).
pub const IGNORED_TAG: &str = "ignored";

/// Static metadata for one described field of a [`Record`](crate::Record).
///
/// Built by the [`record!`](crate::record) macro (one `static` per field) and
/// handed to sources and sinks alongside every `get`/`set` call, so they can
/// inspect co-located annotations.
#[derive(Debug)]
pub struct FieldMeta {
    /// Field name as declared on the struct.
    pub name: &'static str,
    /// Declared type, as written (e.g. `"u16"`, `"Vec<String>"`). Used in
    /// conversion error messages.
    pub type_name: &'static str,
    /// Annotation set: `(tag name, tag value)` pairs in declaration order.
    pub tags: &'static [(&'static str, &'static str)],
}

impl FieldMeta {
    /// Raw annotation value under `name`, if present.
    pub fn tag(&self, name: &str) -> Option<&'static str> {
        self.tags
            .iter()
            .find(|(tag, _)| *tag == name)
            .map(|(_, value)| *value)
    }

    /// Resolve the lookup key for a source/sink whose tag name is `tag_name`.
    ///
    /// An absent or empty annotation means the field has no key and is
    /// skipped by the engine.
    pub fn lookup_key(&self, tag_name: &str) -> Option<&'static str> {
        self.tag(tag_name).filter(|key| !key.is_empty())
    }

    /// The `default` annotation, if present and non-empty.
    pub fn default_value(&self) -> Option<&'static str> {
        self.tag(DEFAULT_TAG).filter(|value| !value.is_empty())
    }

    /// Whether the `required` annotation carries the `"true"` sentinel.
    pub fn is_required(&self) -> bool {
        self.tag(REQUIRED_TAG) == Some("true")
    }

    /// Whether the `ignored` annotation carries the `"true"` sentinel.
    pub fn is_ignored(&self) -> bool {
        self.tag(IGNORED_TAG) == Some("true")
    }
}
