use once_cell::sync::Lazy;
use regex::Regex;

use crate::config::MIN_MESSAGE_LEN;

pub const SUCCESS_MARK: &str = "✓";

// Permissive shape check, not RFC 5322.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"));

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Company,
    Service,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Company,
        FieldName::Service,
        FieldName::Message,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Company => "company",
            FieldName::Service => "service",
            FieldName::Message => "message",
        }
    }

    /// DOM id of the input backing this field.
    pub fn element_id(&self) -> &'static str {
        match self {
            FieldName::Name => "field-name",
            FieldName::Email => "field-email",
            FieldName::Company => "field-company",
            FieldName::Service => "field-service",
            FieldName::Message => "field-message",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldStatus {
    Success,
    Error(String),
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, FieldStatus::Success)
    }

    /// Class added to the surrounding `.form-group`.
    pub fn css_class(&self) -> &'static str {
        match self {
            FieldStatus::Success => "success",
            FieldStatus::Error(_) => "error",
        }
    }

    pub fn message(&self) -> &str {
        match self {
            FieldStatus::Success => SUCCESS_MARK,
            FieldStatus::Error(message) => message,
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_RE.is_match(value)
}

pub fn validate_field(field: FieldName, raw: &str) -> FieldStatus {
    let value = raw.trim();
    match field {
        FieldName::Name if value.is_empty() => FieldStatus::Error("Nombre requerido".to_string()),
        FieldName::Email if value.is_empty() || !is_valid_email(value) => {
            FieldStatus::Error("Email inválido".to_string())
        }
        FieldName::Message if value.is_empty() => {
            FieldStatus::Error("Mensaje requerido".to_string())
        }
        FieldName::Message => {
            let len = value.chars().count();
            if len < MIN_MESSAGE_LEN {
                FieldStatus::Error(format!(
                    "Mínimo {} caracteres (llevas {})",
                    MIN_MESSAGE_LEN, len
                ))
            } else {
                FieldStatus::Success
            }
        }
        _ => FieldStatus::Success,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_requires_non_blank_value() {
        assert_eq!(
            validate_field(FieldName::Name, ""),
            FieldStatus::Error("Nombre requerido".to_string())
        );
        assert_eq!(
            validate_field(FieldName::Name, "   \t"),
            FieldStatus::Error("Nombre requerido".to_string())
        );
        assert!(validate_field(FieldName::Name, " Ana ").is_valid());
    }

    #[test]
    fn email_shape() {
        assert!(validate_field(FieldName::Email, "a@b.co").is_valid());
        assert!(validate_field(FieldName::Email, "  a@b.co  ").is_valid());
        for bad in ["a@b", "ab.co", "", "a b@c.de", "a@@b.co"] {
            assert!(
                !validate_field(FieldName::Email, bad).is_valid(),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn message_reports_length_below_minimum() {
        let short = "x".repeat(MIN_MESSAGE_LEN - 1);
        match validate_field(FieldName::Message, &short) {
            FieldStatus::Error(text) => assert!(text.contains(&(MIN_MESSAGE_LEN - 1).to_string())),
            FieldStatus::Success => panic!("short message accepted"),
        }
        assert_eq!(
            validate_field(FieldName::Message, "short"),
            FieldStatus::Error("Mínimo 20 caracteres (llevas 5)".to_string())
        );
        assert_eq!(
            validate_field(FieldName::Message, "  "),
            FieldStatus::Error("Mensaje requerido".to_string())
        );
        assert!(validate_field(FieldName::Message, &"x".repeat(MIN_MESSAGE_LEN)).is_valid());
    }

    #[test]
    fn message_length_ignores_surrounding_whitespace() {
        let padded = format!("   {}   ", "y".repeat(MIN_MESSAGE_LEN - 1));
        assert!(!validate_field(FieldName::Message, &padded).is_valid());
    }

    #[test]
    fn unchecked_fields_are_always_valid() {
        assert!(validate_field(FieldName::Company, "").is_valid());
        assert!(validate_field(FieldName::Service, "").is_valid());
    }

    #[test]
    fn status_decorations() {
        assert_eq!(FieldStatus::Success.message(), SUCCESS_MARK);
        assert_eq!(FieldStatus::Success.css_class(), "success");
        let err = FieldStatus::Error("Email inválido".to_string());
        assert_eq!(err.css_class(), "error");
        assert_eq!(err.message(), "Email inválido");
    }
}
