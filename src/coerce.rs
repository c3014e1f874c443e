//! String-to-value coercion: the `Decode` capability and its built-in impls.
//!
//! Primitives, `Duration`, `Vec<T>`, and `Option<T>` decode out of the box.
//! Any other field type opts in by implementing [`Decode`] itself — its
//! impl fully replaces built-in coercion for fields of that type, and errors
//! built with [`DecodeError::custom`] pass through the traversal unwrapped.

use std::time::Duration;

use thiserror::Error;

use crate::error::BoxError;

/// Why a raw string could not be coerced into a field's type.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("invalid integer literal")]
    Int(#[from] std::num::ParseIntError),

    #[error("invalid float literal")]
    Float(#[from] std::num::ParseFloatError),

    #[error("invalid boolean literal '{0}'")]
    Bool(String),

    #[error("invalid duration literal '{0}'")]
    Duration(String),

    #[error("value '{value}' out of range for {type_name}")]
    OutOfRange {
        value: String,
        type_name: &'static str,
    },

    /// Failure from a user-provided [`Decode`] impl. Propagated verbatim.
    #[error("{0}")]
    Custom(BoxError),
}

impl DecodeError {
    /// Wrap an arbitrary error from a custom [`Decode`] impl.
    ///
    /// The traversal surfaces these verbatim instead of wrapping them in a
    /// per-field conversion error.
    pub fn custom(err: impl Into<BoxError>) -> Self {
        DecodeError::Custom(err.into())
    }
}

/// In-place coercion from a raw string value.
///
/// Decoding either replaces the current value entirely or, on error, leaves
/// it untouched — there is no partial assignment.
pub trait Decode {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError>;
}

impl Decode for String {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        raw.clone_into(self);
        Ok(())
    }
}

impl Decode for bool {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        *self = match raw {
            "1" | "t" | "T" | "true" | "TRUE" | "True" => true,
            "0" | "f" | "F" | "false" | "FALSE" | "False" => false,
            other => return Err(DecodeError::Bool(other.to_string())),
        };
        Ok(())
    }
}

macro_rules! impl_decode_signed {
    ($($ty:ty),* $(,)?) => {$(
        impl Decode for $ty {
            fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
                let wide = parse_i64(raw)?;
                *self = <$ty>::try_from(wide).map_err(|_| DecodeError::OutOfRange {
                    value: raw.to_string(),
                    type_name: stringify!($ty),
                })?;
                Ok(())
            }
        }
    )*};
}

macro_rules! impl_decode_unsigned {
    ($($ty:ty),* $(,)?) => {$(
        impl Decode for $ty {
            fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
                let wide = parse_u64(raw)?;
                *self = <$ty>::try_from(wide).map_err(|_| DecodeError::OutOfRange {
                    value: raw.to_string(),
                    type_name: stringify!($ty),
                })?;
                Ok(())
            }
        }
    )*};
}

impl_decode_signed!(i8, i16, i32, i64, isize);
impl_decode_unsigned!(u8, u16, u32, u64, usize);

impl Decode for f32 {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        *self = raw.parse::<f32>()?;
        Ok(())
    }
}

impl Decode for f64 {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        *self = raw.parse::<f64>()?;
        Ok(())
    }
}

impl Decode for Duration {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        *self = parse_duration(raw)?;
        Ok(())
    }
}

/// Comma-separated list decode. Split on `,` with no escaping; each piece is
/// decoded as one element. All-or-nothing: an element failure leaves the
/// existing value in place.
impl<T: Decode + Default> Decode for Vec<T> {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        let mut items = Vec::new();
        for piece in raw.split(',') {
            let mut item = T::default();
            item.decode(piece)?;
            items.push(item);
        }
        *self = items;
        Ok(())
    }
}

/// A default inner value is materialized if absent, then decoded in place.
impl<T: Decode + Default> Decode for Option<T> {
    fn decode(&mut self, raw: &str) -> Result<(), DecodeError> {
        self.get_or_insert_with(T::default).decode(raw)
    }
}

/// Split off an integer radix prefix (`0x`/`0o`/`0b`, any case).
fn split_radix(s: &str) -> (u32, &str) {
    if let Some(rest) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        (16, rest)
    } else if let Some(rest) = s.strip_prefix("0o").or_else(|| s.strip_prefix("0O")) {
        (8, rest)
    } else if let Some(rest) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        (2, rest)
    } else {
        (10, s)
    }
}

/// Base-detected signed integer parse: optional sign, then an optional
/// radix prefix, then digits.
pub(crate) fn parse_i64(raw: &str) -> Result<i64, std::num::ParseIntError> {
    let (sign, body) = match raw.as_bytes().first() {
        Some(b'-') => ("-", &raw[1..]),
        Some(b'+') => ("", &raw[1..]),
        _ => ("", raw),
    };
    let (radix, digits) = split_radix(body);
    i64::from_str_radix(&format!("{sign}{digits}"), radix)
}

/// Base-detected unsigned integer parse. A leading `-` fails naturally.
pub(crate) fn parse_u64(raw: &str) -> Result<u64, std::num::ParseIntError> {
    let body = raw.strip_prefix('+').unwrap_or(raw);
    let (radix, digits) = split_radix(body);
    u64::from_str_radix(digits, radix)
}

/// Parse a duration literal: one or more `<number><unit>` components where
/// unit is `ns`, `us`/`µs`, `ms`, `s`, `m`, or `h` and number may carry a
/// decimal fraction (`"5s"`, `"1h30m"`, `"1.5s"`, `"250ms"`). A bare `"0"`
/// is accepted. Negative durations are rejected.
pub(crate) fn parse_duration(raw: &str) -> Result<Duration, DecodeError> {
    let err = || DecodeError::Duration(raw.to_string());

    let s = raw.strip_prefix('+').unwrap_or(raw);
    if s.starts_with('-') {
        return Err(err());
    }
    if s == "0" {
        return Ok(Duration::ZERO);
    }
    if s.is_empty() {
        return Err(err());
    }

    let mut rest = s;
    let mut total = Duration::ZERO;
    while !rest.is_empty() {
        let number_end = rest
            .find(|c: char| !c.is_ascii_digit() && c != '.')
            .unwrap_or(rest.len());
        if number_end == 0 {
            return Err(err());
        }
        let number: f64 = rest[..number_end].parse().map_err(|_| err())?;
        rest = &rest[number_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit())
            .unwrap_or(rest.len());
        let unit = &rest[..unit_end];
        rest = &rest[unit_end..];

        let unit_secs = match unit {
            "ns" => 1e-9,
            "us" | "µs" => 1e-6,
            "ms" => 1e-3,
            "s" => 1.0,
            "m" => 60.0,
            "h" => 3600.0,
            _ => return Err(err()),
        };
        let component = Duration::try_from_secs_f64(number * unit_secs).map_err(|_| err())?;
        total = total.checked_add(component).ok_or_else(err)?;
    }
    Ok(total)
}
