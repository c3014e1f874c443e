//! Value-to-sink boxing: the `Encode` capability and rendering helpers.
//!
//! Outbound traversal hands each field's current content to the sink as a
//! `toml::Value`. `None` (an unset `Option` field) means there is nothing to
//! export and the sink is not called for that field.

use std::time::Duration;

use serde::Serialize;
use toml::Value;

/// Box a field's current value for a [`Sink`](crate::Sink).
pub trait Encode {
    fn encode(&self) -> Option<Value>;
}

impl Encode for String {
    fn encode(&self) -> Option<Value> {
        Some(Value::String(self.clone()))
    }
}

impl Encode for bool {
    fn encode(&self) -> Option<Value> {
        Some(Value::Boolean(*self))
    }
}

macro_rules! impl_encode_int {
    ($($ty:ty),* $(,)?) => {$(
        impl Encode for $ty {
            fn encode(&self) -> Option<Value> {
                Some(Value::Integer(i64::from(*self)))
            }
        }
    )*};
}

impl_encode_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! impl_encode_wide_int {
    ($($ty:ty),* $(,)?) => {$(
        // TOML integers are i64; values that don't fit fall back to a
        // string rendition.
        impl Encode for $ty {
            fn encode(&self) -> Option<Value> {
                match i64::try_from(*self) {
                    Ok(v) => Some(Value::Integer(v)),
                    Err(_) => Some(Value::String(self.to_string())),
                }
            }
        }
    )*};
}

impl_encode_wide_int!(u64, usize, isize);

impl Encode for f32 {
    fn encode(&self) -> Option<Value> {
        Some(Value::Float(f64::from(*self)))
    }
}

impl Encode for f64 {
    fn encode(&self) -> Option<Value> {
        Some(Value::Float(*self))
    }
}

impl Encode for Duration {
    fn encode(&self) -> Option<Value> {
        Some(Value::String(format_duration(*self)))
    }
}

impl<T: Encode> Encode for Vec<T> {
    fn encode(&self) -> Option<Value> {
        Some(Value::Array(
            self.iter().filter_map(Encode::encode).collect(),
        ))
    }
}

impl<T: Encode> Encode for Option<T> {
    fn encode(&self) -> Option<Value> {
        self.as_ref().and_then(Encode::encode)
    }
}

/// Build a `toml::Value` from any `Serialize` type.
///
/// Lets custom field types implement [`Encode`] in one line:
///
/// ```
/// use tagfig::{Encode, encode::to_value};
///
/// #[derive(serde::Serialize)]
/// struct Endpoint { host: String, port: u16 }
///
/// impl Encode for Endpoint {
///     fn encode(&self) -> Option<toml::Value> {
///         to_value(self)
///     }
/// }
/// ```
pub fn to_value<T: Serialize>(value: &T) -> Option<Value> {
    Value::try_from(value).ok()
}

/// Render a boxed value for string-keyed sinks. Strings come out unquoted;
/// arrays and tables fall back to their TOML rendition.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Integer(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Boolean(b) => b.to_string(),
        Value::Array(a) => toml::to_string(&a).unwrap_or_else(|_| format!("{a:?}")),
        Value::Table(t) => toml::to_string(&t).unwrap_or_else(|_| format!("{t:?}")),
        _ => format!("{value:?}"),
    }
}

/// Render a `Duration` as a literal [`parse_duration`](crate::coerce) accepts
/// back: `h`/`m` components plus a (possibly fractional) seconds component.
pub(crate) fn format_duration(d: Duration) -> String {
    use std::fmt::Write;

    let secs = d.as_secs();
    let nanos = d.subsec_nanos();
    let (h, m, s) = (secs / 3600, secs % 3600 / 60, secs % 60);

    let mut out = String::new();
    if h > 0 {
        let _ = write!(out, "{h}h");
    }
    if m > 0 {
        let _ = write!(out, "{m}m");
    }
    if nanos == 0 {
        if s > 0 || out.is_empty() {
            let _ = write!(out, "{s}s");
        }
    } else {
        let frac = format!("{nanos:09}");
        let _ = write!(out, "{s}.{}s", frac.trim_end_matches('0'));
    }
    out
}
