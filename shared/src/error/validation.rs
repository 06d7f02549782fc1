//! Form validation errors

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Editable fields of the product edit/create forms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FormField {
    Title,
    Price,
    Description,
}

impl FormField {
    /// Get the string name for this field
    pub fn name(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Price => "price",
            Self::Description => "description",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A single violated constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: FormField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: FormField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Client-side form constraint violation
///
/// Collects every failing field so the form can flag all of them at once.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", summarize(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    /// All violations, in form order
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Fields that should be marked invalid
    pub fn fields(&self) -> Vec<FormField> {
        self.errors.iter().map(|e| e.field).collect()
    }

    pub fn has_field(&self, field: FormField) -> bool {
        self.errors.iter().any(|e| e.field == field)
    }
}

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_name() {
        assert_eq!(FormField::Title.name(), "title");
        assert_eq!(FormField::Price.name(), "price");
        assert_eq!(FormField::Description.name(), "description");
    }

    #[test]
    fn test_field_serialize() {
        let json = serde_json::to_string(&FormField::Description).unwrap();
        assert_eq!(json, "\"description\"");
    }

    #[test]
    fn test_error_lists_fields() {
        let err = ValidationError::new(vec![
            FieldError::new(FormField::Title, "title must be at least 3 characters"),
            FieldError::new(FormField::Price, "price must be a positive number"),
        ]);

        assert_eq!(err.fields(), vec![FormField::Title, FormField::Price]);
        assert!(err.has_field(FormField::Title));
        assert!(!err.has_field(FormField::Description));
        assert_eq!(
            err.to_string(),
            "Validation failed: title must be at least 3 characters; price must be a positive number"
        );
    }
}
