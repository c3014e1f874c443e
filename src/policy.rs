//! Default/required policy: what to do with the value a source resolved.
//!
//! | resolved value | default   | required | outcome                  |
//! |----------------|-----------|----------|--------------------------|
//! | non-empty      | —         | —        | use resolved value       |
//! | empty          | non-empty | —        | use default value        |
//! | empty          | empty     | `true`   | fail: missing required   |
//! | empty          | empty     | not true | skip field, no error     |

/// Outcome of applying the policy to one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Resolution {
    /// Coerce and assign this value.
    Assign(String),
    /// Leave the field untouched and continue.
    Skip,
    /// Abort the traversal: the key was required, nothing resolved.
    MissingRequired,
}

/// Decide what to do with a resolved value. Pure over its three inputs.
///
/// `Some("")` counts as absent — sources that can only report empty strings
/// for missing keys behave identically to ones that report `None`.
pub(crate) fn resolve(value: Option<String>, default: Option<&str>, required: bool) -> Resolution {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        return Resolution::Assign(value);
    }
    match default {
        Some(default) if !default.is_empty() => Resolution::Assign(default.to_string()),
        _ if required => Resolution::MissingRequired,
        _ => Resolution::Skip,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolved_value_wins() {
        let got = resolve(Some("8080".into()), Some("3000"), true);
        assert_eq!(got, Resolution::Assign("8080".into()));
    }

    #[test]
    fn empty_value_falls_back_to_default() {
        let got = resolve(None, Some("3000"), false);
        assert_eq!(got, Resolution::Assign("3000".into()));
    }

    #[test]
    fn default_satisfies_required() {
        let got = resolve(None, Some("3000"), true);
        assert_eq!(got, Resolution::Assign("3000".into()));
    }

    #[test]
    fn missing_required_fails() {
        assert_eq!(resolve(None, None, true), Resolution::MissingRequired);
    }

    #[test]
    fn missing_optional_skips() {
        assert_eq!(resolve(None, None, false), Resolution::Skip);
    }

    #[test]
    fn empty_string_counts_as_absent() {
        assert_eq!(resolve(Some(String::new()), None, false), Resolution::Skip);
        assert_eq!(
            resolve(Some(String::new()), None, true),
            Resolution::MissingRequired
        );
    }

    #[test]
    fn empty_default_counts_as_absent() {
        assert_eq!(resolve(None, Some(""), true), Resolution::MissingRequired);
    }
}
