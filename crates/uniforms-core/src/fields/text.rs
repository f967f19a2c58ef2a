//! Text field types.

use crate::field::Field;

/// Creates a text field with a maximum length.
#[must_use]
pub fn text_field(name: &str, max_length: usize, required: bool) -> Field {
    let field = Field::new(name, "text").rule("max", max_length);
    if required {
        field.required()
    } else {
        field
    }
}

/// Creates a multi-line text field.
#[must_use]
pub fn textarea_field(name: &str, rows: usize, required: bool) -> Field {
    let field = Field::new(name, "textarea").attr("rows", rows);
    if required {
        field.required()
    } else {
        field
    }
}

/// Creates an email field.
#[must_use]
pub fn email_field(name: &str, required: bool) -> Field {
    let field = Field::new(name, "email").rule("email", true);
    if required {
        field.required()
    } else {
        field
    }
}

/// Creates a password field. Passwords are always required.
#[must_use]
pub fn password_field(name: &str, min_length: Option<usize>) -> Field {
    let field = Field::new(name, "password").required();
    match min_length {
        Some(min) => field.rule("min", min),
        None => field,
    }
}

/// Creates a URL field.
#[must_use]
pub fn url_field(name: &str, required: bool) -> Field {
    let field = Field::new(name, "url")
        .rule("url", true)
        .attr("placeholder", "https://");
    if required {
        field.required()
    } else {
        field
    }
}
