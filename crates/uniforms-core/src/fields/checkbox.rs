//! Checkbox field type.

use crate::field::Field;

/// Creates a checkbox field, optionally rendered as a switch.
#[must_use]
pub fn checkbox_field(name: &str, is_switch: bool) -> Field {
    let field = Field::new(name, "checkbox");
    if is_switch {
        field.attr("switch", true)
    } else {
        field
    }
}
