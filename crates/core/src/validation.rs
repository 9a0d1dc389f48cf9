//! Request validation helpers.
//!
//! Request DTOs derive [`validator::Validate`]; handlers call
//! [`validate_request`] to turn any failure into a single
//! [`CoreError::Validation`] message.

use validator::{Validate, ValidationErrors};

use crate::error::CoreError;

/// Minimum password length for local accounts.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Run the derived validation rules of `input`.
pub fn validate_request<T: Validate>(input: &T) -> Result<(), CoreError> {
    input
        .validate()
        .map_err(|errors| CoreError::Validation(describe(&errors)))
}

/// Reject empty or whitespace-only text.
pub fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Flatten field errors into `field: message` pairs, sorted by field name
/// so the output is stable.
fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .map(|(field, errs)| {
            let reason = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect::<Vec<_>>()
                .join(", ");
            format!("{field}: {reason}")
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use validator::Validate;

    use super::*;

    #[derive(Validate)]
    struct Signup {
        #[validate(email(message = "must be a valid email"))]
        email: String,
        #[validate(length(min = 8))]
        password: String,
    }

    #[test]
    fn valid_input_passes() {
        let input = Signup {
            email: "ana@example.org".into(),
            password: "long-enough".into(),
        };
        assert!(validate_request(&input).is_ok());
    }

    #[test]
    fn failures_are_reported_per_field() {
        let input = Signup {
            email: "not-an-email".into(),
            password: "short".into(),
        };
        let err = validate_request(&input).unwrap_err();
        assert_matches!(&err, CoreError::Validation(msg)
            if msg == "email: must be a valid email; password: length");
    }

    #[test]
    fn blank_text_is_rejected() {
        assert_matches!(
            require_non_blank("nombre", "   "),
            Err(CoreError::Validation(msg)) if msg == "nombre is required"
        );
        assert!(require_non_blank("nombre", "Universidad").is_ok());
    }
}
