//! Tag-driven struct population from pluggable key-value sources. Describe
//! a struct's fields with tags, hand the engine any source, and go.
//!
//! ```
//! tagfig::record! {
//!     #[derive(Debug, Default)]
//!     pub struct ServerConfig {
//!         pub value host: String ["env" => "HOST", "default" => "localhost"],
//!         pub value port: u16 ["env" => "PORT", "required" => "true"],
//!         pub value peers: Vec<String> ["env" => "PEERS"],
//!     }
//! }
//!
//! let source = tagfig::MapSource::new("env")
//!     .with("PORT", "8080")
//!     .with("PEERS", "alpha,beta");
//!
//! let mut config = ServerConfig::default();
//! tagfig::process(&source, &mut config)?;
//!
//! assert_eq!(config.host, "localhost");
//! assert_eq!(config.port, 8080);
//! assert_eq!(config.peers, ["alpha", "beta"]);
//! # Ok::<(), tagfig::TagfigError>(())
//! ```
//!
//! # Why tagfig
//!
//! Environment-variable config crates hardwire where values come from. The
//! useful part — walking a struct, resolving per-field keys, applying
//! default/required rules, coercing text into native types — is independent
//! of any particular store. Tagfig keeps only that part and treats the
//! stores as collaborators: anything implementing [`Source`] can populate a
//! record, whether it reads the process environment ([`EnvSource`]), an
//! in-memory map ([`MapSource`]), or a remote key-value service you wire up
//! yourself. The inverse direction works too:
//! [`populate_external_source`] walks a populated record and pushes each
//! tagged field's value out to a [`Sink`].
//!
//! # Design: descriptors instead of reflection
//!
//! A type participates by implementing [`Record`]: an ordered list of field
//! descriptors, each pairing static metadata (name, declared type,
//! annotation set) with an accessor into the live value. The [`record!`]
//! macro generates the struct and the impl together; hand-written impls
//! work the same way for types you don't own. Because participation is a
//! trait bound, "passed something that isn't a struct" is a compile error,
//! not a runtime one.
//!
//! Fields come in three kinds:
//!
//! - **`value`** — a leaf, coerced through [`Decode`] and boxed back out
//!   through [`Encode`].
//! - **`record`** — an embedded sub-record, always recursed into with the
//!   same source or sink. A lookup key tagged directly on it is never
//!   consulted.
//! - **`skip`** — declared on the struct, invisible to the engine.
//!
//! # Annotations
//!
//! Whatever tag name the source answers to (`source.tag_name()`) supplies
//! the lookup key; a field without that tag is skipped silently. Three more
//! annotations are recognized engine-side:
//!
//! | Annotation | Effect |
//! |---|---|
//! | `default` | Fallback literal, substituted before coercion when the source has nothing |
//! | `required` | `"true"` makes an unresolved field an error instead of a skip |
//! | `ignored` | `"true"` excludes the field from inbound processing entirely |
//!
//! Everything else in a field's tag list is passed through to the source
//! untouched — `get` receives the full [`FieldMeta`], so a source can honor
//! annotations of its own.
//!
//! # Coercion
//!
//! Built-in [`Decode`] impls cover strings, signed and unsigned integers
//! (base-detected: `0x`/`0o`/`0b` prefixes), bools (`true/false/1/0/t/f`
//! and friends), floats, [`Duration`](std::time::Duration) literals
//! (`"5s"`, `"1h30m"`), comma-split `Vec<T>`, and `Option<T>` (the inner
//! value is materialized, then decoded). Any other field type opts in by
//! implementing `Decode` itself; its errors surface verbatim, unwrapped.
//!
//! # Concurrency
//!
//! The engine is synchronous and holds no state between calls. Independent
//! calls on distinct records need no coordination; a source or sink shared
//! across threads must bring its own locking, as the engine issues calls
//! without synchronization.

pub mod coerce;
pub mod encode;
pub mod error;

mod env;
mod macros;
mod meta;
mod policy;
mod process;
mod record;
mod source;

#[cfg(test)]
mod fixtures;

pub use coerce::{Decode, DecodeError};
pub use encode::Encode;
pub use env::EnvSource;
pub use error::{BoxError, TagfigError};
pub use meta::{DEFAULT_TAG, FieldMeta, IGNORED_TAG, REQUIRED_TAG};
pub use process::{must_process, populate_external_source, process};
pub use record::{FieldMut, FieldRef, Record, Target, TargetRef};
pub use source::{MapSink, MapSource, Sink, Source};
