//! The traversal engine: inbound population from a [`Source`], outbound
//! propagation to a [`Sink`].
//!
//! Both directions walk the record's descriptor list in declaration order,
//! recursing into embedded sub-records with the same collaborator. The
//! engine holds no state between calls and performs no I/O of its own, so
//! independent invocations on distinct records may run concurrently.

use crate::coerce::DecodeError;
use crate::error::TagfigError;
use crate::policy::{self, Resolution};
use crate::record::{Record, Target, TargetRef};
use crate::source::{Sink, Source};

/// Populate `record` from `source`.
///
/// For each described field: skip it if `ignored:"true"`; recurse if it is
/// an embedded sub-record; otherwise resolve the lookup key from the
/// annotation matching `source.tag_name()` (no key ⇒ silent skip), ask the
/// source, apply default/required policy, and decode the result in place.
///
/// Fails fast on the first error; fields already populated stay populated.
/// Conversion failures are wrapped with the field name, declared type, and
/// offending value — custom decoder failures pass through verbatim.
///
/// Only types implementing [`Record`] can be processed; there is no runtime
/// "not a struct" error to handle:
///
/// ```compile_fail
/// let source = tagfig::MapSource::new("env");
/// let mut not_a_record = 42u32;
/// tagfig::process(&source, &mut not_a_record).unwrap();
/// ```
pub fn process<S, R>(source: &S, record: &mut R) -> Result<(), TagfigError>
where
    S: Source + ?Sized,
    R: Record + ?Sized,
{
    let tag_name = source.tag_name();
    for field in record.fields_mut() {
        if field.meta.is_ignored() {
            continue;
        }
        match field.target {
            Target::Record(embedded) => process(source, embedded)?,
            Target::Value(slot) => {
                let Some(key) = field.meta.lookup_key(tag_name) else {
                    continue;
                };
                let resolved = source.get(key, field.meta);
                let decision = policy::resolve(
                    resolved,
                    field.meta.default_value(),
                    field.meta.is_required(),
                );
                match decision {
                    Resolution::Assign(value) => {
                        slot.decode(&value).map_err(|err| match err {
                            DecodeError::Custom(inner) => TagfigError::Decoder(inner),
                            other => TagfigError::Coerce {
                                field: field.meta.name,
                                type_name: field.meta.type_name,
                                value,
                                source: other,
                            },
                        })?;
                    }
                    Resolution::MissingRequired => {
                        return Err(TagfigError::MissingRequired {
                            key: key.to_string(),
                        });
                    }
                    Resolution::Skip => {}
                }
            }
        }
    }
    Ok(())
}

/// [`process`], panicking on error. For callers that treat misconfiguration
/// as fatal at startup.
pub fn must_process<S, R>(source: &S, record: &mut R)
where
    S: Source + ?Sized,
    R: Record + ?Sized,
{
    if let Err(err) = process(source, record) {
        panic!("{err}");
    }
}

/// Propagate `record`'s current field values out to `sink`.
///
/// Mirror traversal with no default/required logic: embedded sub-records are
/// recursed into; every other described field with a non-empty lookup key
/// and a present value produces one `set(key, value, meta)` call, the value
/// boxed as a `toml::Value`. The first sink error propagates verbatim.
pub fn populate_external_source<S, R>(sink: &mut S, record: &R) -> Result<(), TagfigError>
where
    S: Sink + ?Sized,
    R: Record + ?Sized,
{
    let tag_name = sink.tag_name().to_owned();
    for field in record.fields() {
        match field.target {
            TargetRef::Record(embedded) => populate_external_source(sink, embedded)?,
            TargetRef::Value(slot) => {
                let Some(key) = field.meta.lookup_key(&tag_name) else {
                    continue;
                };
                let Some(value) = slot.encode() else {
                    continue;
                };
                sink.set(key, value, field.meta)
                    .map_err(TagfigError::Sink)?;
            }
        }
    }
    Ok(())
}
