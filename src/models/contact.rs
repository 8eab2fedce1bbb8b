use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

const MIN_NAME_LEN: usize = 2;
const MIN_MESSAGE_LEN: usize = 10;

/// Raw contact form values as typed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// A draft that passed validation, with surrounding whitespace removed.
#[derive(Debug, Clone, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 3] = [ContactField::Name, ContactField::Email, ContactField::Message];

    /// Id of the element that displays this field's error.
    pub fn error_slot(self) -> &'static str {
        match self {
            ContactField::Name => "name-error",
            ContactField::Email => "email-error",
            ContactField::Message => "message-error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name must be at least 2 characters long")]
    NameTooShort,
    #[error("Please enter a valid email address")]
    InvalidEmail,
    #[error("Message must be at least 10 characters long")]
    MessageTooShort,
}

impl FieldError {
    pub fn field(&self) -> ContactField {
        match self {
            FieldError::NameTooShort => ContactField::Name,
            FieldError::InvalidEmail => ContactField::Email,
            FieldError::MessageTooShort => ContactField::Message,
        }
    }
}

/// Outcome of one validation pass: at most one error per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub message: Option<FieldError>,
}

impl ValidationErrors {
    pub fn get(&self, field: ContactField) -> Option<&FieldError> {
        match field {
            ContactField::Name => self.name.as_ref(),
            ContactField::Email => self.email.as_ref(),
            ContactField::Message => self.message.as_ref(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.iter().next().is_none()
    }

    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        ContactField::ALL.into_iter().filter_map(|field| self.get(field))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.iter().map(ToString::to_string).collect();
        f.write_str(&messages.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Length as the browser measures it, in UTF-16 code units.
fn js_length(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Strip what the browser's `trim()` strips: whitespace and the byte order mark.
fn js_trim(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

impl ContactDraft {
    /// Check every field. All failures are reported together, never just the
    /// first one.
    pub fn validate(&self) -> Result<ContactMessage, ValidationErrors> {
        let name = js_trim(&self.name);
        let email = js_trim(&self.email);
        let message = js_trim(&self.message);

        let errors = ValidationErrors {
            name: (js_length(name) < MIN_NAME_LEN).then_some(FieldError::NameTooShort),
            email: (!is_valid_email(email)).then_some(FieldError::InvalidEmail),
            message: (js_length(message) < MIN_MESSAGE_LEN).then_some(FieldError::MessageTooShort),
        };

        if !errors.is_empty() {
            return Err(errors);
        }
        Ok(ContactMessage {
            name: name.to_string(),
            email: email.to_string(),
            message: message.to_string(),
        })
    }
}
