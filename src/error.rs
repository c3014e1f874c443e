use thiserror::Error;

use crate::coerce::DecodeError;

/// Boxed error type for sink rejections and custom decoder failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
pub enum TagfigError {
    /// A `required:"true"` field resolved to nothing and had no default.
    #[error("required key '{key}' missing value")]
    MissingRequired { key: String },

    /// A resolved value could not be coerced into the field's type.
    #[error("assigning to {field}: converting '{value}' to type {type_name}")]
    Coerce {
        field: &'static str,
        type_name: &'static str,
        value: String,
        #[source]
        source: DecodeError,
    },

    /// A custom `Decode` impl failed. Carried verbatim, never wrapped.
    #[error("{0}")]
    Decoder(BoxError),

    /// The sink rejected a `set` call. Carried verbatim.
    #[error("{0}")]
    Sink(BoxError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_required_names_the_key() {
        let err = TagfigError::MissingRequired {
            key: "DB_URL".into(),
        };
        assert_eq!(err.to_string(), "required key 'DB_URL' missing value");
    }

    #[test]
    fn coerce_names_field_type_and_value() {
        let err = TagfigError::Coerce {
            field: "port",
            type_name: "u16",
            value: "eighty".into(),
            source: DecodeError::Bool("eighty".into()),
        };
        let msg = err.to_string();
        assert!(msg.contains("port"));
        assert!(msg.contains("u16"));
        assert!(msg.contains("eighty"));
    }

    #[test]
    fn decoder_error_displays_verbatim() {
        let err = TagfigError::Decoder("endpoint must contain ':'".into());
        assert_eq!(err.to_string(), "endpoint must contain ':'");
    }
}
