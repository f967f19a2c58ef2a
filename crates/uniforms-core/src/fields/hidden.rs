//! Hidden field type.

use crate::field::Field;

/// Creates a hidden field.
#[must_use]
pub fn hidden_field(name: &str, initial: Option<&str>) -> Field {
    let field = Field::new(name, "hidden");
    match initial {
        Some(value) => field.with_value(value),
        None => field,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_hidden_field() {
        let field = hidden_field("csrf_token", Some("abc123"));
        assert_eq!(field.name(), "csrf_token");
        assert_eq!(field.value(), &json!("abc123"));
    }
}
