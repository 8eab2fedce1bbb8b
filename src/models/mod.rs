mod contact;

pub use contact::{
    is_valid_email, ContactDraft, ContactField, ContactMessage, FieldError, ValidationErrors,
};
