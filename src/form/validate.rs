use std::{fmt, str::FromStr};

/// Minimum trimmed message length, in UTF-16 code units.
pub const MIN_MESSAGE_CHARS: usize = 10;

/// Input fields of the contact form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    /// Sender name.
    Name,
    /// Sender email address.
    Email,
    /// Free-form message body.
    Message,
}

impl FormField {
    /// All fields in display order.
    pub const ALL: [Self; 3] = [Self::Name, Self::Email, Self::Message];

    /// Wire name used by input events.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "email" => Ok(Self::Email),
            "message" => Ok(Self::Message),
            other => Err(format!("unknown form field '{other}'")),
        }
    }
}

/// Why a field was rejected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationKind {
    /// Empty or whitespace-only.
    Required,
    /// Not shaped like an email address.
    InvalidFormat,
    /// Shorter than [`MIN_MESSAGE_CHARS`] after trimming.
    TooShort,
}

/// A rejected field. Stays inside the form as user-visible state; never fatal.
#[derive(thiserror::Error, Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
#[error("{}", self.message())]
pub struct FormValidationError {
    /// Offending field.
    pub field: FormField,
    /// Failure kind.
    pub kind: ValidationKind,
}

impl FormValidationError {
    /// Message shown under the field.
    pub fn message(&self) -> &'static str {
        match (self.field, self.kind) {
            (FormField::Name, _) => "Name is required",
            (FormField::Email, ValidationKind::InvalidFormat) => "Invalid email format",
            (FormField::Email, _) => "Email is required",
            (FormField::Message, ValidationKind::TooShort) => {
                "Message must be at least 10 characters"
            }
            (FormField::Message, _) => "Message is required",
        }
    }
}

/// Whitespace as matched by `\s` and stripped by `trim` in browsers: `\t \n \v \f \r`, the
/// space separators (Zs), U+2028, U+2029 and U+FEFF. U+0085 is not included.
pub fn is_js_space(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{0b}'
            | '\u{0c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}

/// Loose email shape check: `^[^\s@]+@[^\s@]+\.[^\s@]+$`.
///
/// Exactly one `@`, no whitespace anywhere, and a `.` in the domain with at least one character
/// on each side. Not RFC 5322.
pub fn is_valid_email(s: &str) -> bool {
    if s.chars().any(is_js_space) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Validate one field value.
pub fn validate_field(field: FormField, value: &str) -> Option<FormValidationError> {
    let trimmed = value.trim_matches(is_js_space);
    let kind = match field {
        FormField::Name if trimmed.is_empty() => Some(ValidationKind::Required),
        FormField::Name => None,
        FormField::Email if trimmed.is_empty() => Some(ValidationKind::Required),
        FormField::Email if !is_valid_email(value) => Some(ValidationKind::InvalidFormat),
        FormField::Email => None,
        FormField::Message if trimmed.is_empty() => Some(ValidationKind::Required),
        FormField::Message if trimmed.encode_utf16().count() < MIN_MESSAGE_CHARS => {
            Some(ValidationKind::TooShort)
        }
        FormField::Message => None,
    };
    kind.map(|kind| FormValidationError { field, kind })
}

#[cfg(test)]
#[path = "../../tests/unit/form/validate.rs"]
mod tests;
