//! Select field types.

use serde_json::{json, Value};

use crate::field::Field;

fn choices_data(choices: &[(&str, &str)]) -> Value {
    Value::Array(
        choices
            .iter()
            .map(|(value, label)| json!({"value": value, "label": label}))
            .collect(),
    )
}

fn choice_values(choices: &[(&str, &str)]) -> Value {
    Value::Array(
        choices
            .iter()
            .map(|(value, _)| Value::String((*value).to_string()))
            .collect(),
    )
}

/// Creates a choice field (select/dropdown).
///
/// The choices are kept as declaration data and declared as an `in` rule.
#[must_use]
pub fn select_field(name: &str, choices: &[(&str, &str)], required: bool) -> Field {
    let field = Field::new(name, "select")
        .attr("choices", choices_data(choices))
        .rule("in", choice_values(choices));
    if required {
        field.required()
    } else {
        field
    }
}

/// Creates a multiple choice field (multi-select).
#[must_use]
pub fn multiple_select_field(name: &str, choices: &[(&str, &str)], required: bool) -> Field {
    select_field(name, choices, required).attr("multiple", true)
}
