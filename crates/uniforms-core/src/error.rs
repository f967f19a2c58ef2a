//! Error types for forms.

use indexmap::IndexMap;
use thiserror::Error;

/// Form-specific errors.
#[derive(Debug, Error)]
pub enum FormError {
    /// The declaration is not valid JSON, or a value has the wrong JSON type.
    #[error("failed to decode form declaration: {0}")]
    Json(#[from] serde_json::Error),

    /// The declaration is valid JSON but structurally unusable.
    #[error("invalid form declaration: {0}")]
    InvalidDeclaration(String),

    /// Validation failed with errors.
    #[error("validation errors: {0}")]
    Validation(ValidationErrors),
}

/// Failures reported by a [`Validator`](crate::Validator), grouped by field.
///
/// Fields appear in the order they first failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(IndexMap<String, Vec<String>>);

impl ValidationErrors {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a failure for a field.
    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.0
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Returns whether nothing failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns every `(field, message)` pair, grouped by field.
    #[must_use]
    pub fn all_errors(&self) -> Vec<(&str, &str)> {
        self.0
            .iter()
            .flat_map(|(field, messages)| {
                messages.iter().map(move |m| (field.as_str(), m.as_str()))
            })
            .collect()
    }

    /// Converts into a `Result`, failing when any error was recorded.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Validation`] if the collection is not empty.
    pub fn into_result(self) -> Result<()> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(FormError::Validation(self))
        }
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, message) in self.all_errors() {
            writeln!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

/// Result type alias for form operations.
pub type Result<T> = std::result::Result<T, FormError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_keep_field_order() {
        let mut errors = ValidationErrors::new();
        errors.add("name", "This field is required.");
        errors.add("email", "Enter a valid email address.");
        errors.add("name", "Too short.");

        assert_eq!(
            errors.all_errors(),
            vec![
                ("name", "This field is required."),
                ("name", "Too short."),
                ("email", "Enter a valid email address."),
            ]
        );
    }

    #[test]
    fn test_into_result() {
        assert!(ValidationErrors::new().into_result().is_ok());

        let mut errors = ValidationErrors::new();
        errors.add("email", "bad");
        let err = errors.into_result().unwrap_err();
        assert!(matches!(err, FormError::Validation(ref e) if e.all_errors().len() == 1));
        assert_eq!(err.to_string(), "validation errors: email: bad\n");
    }
}
