#![allow(dead_code)]

use serde_json::Value;
use uniforms_core::{Field, Form};

pub const CONTACT_FORM: &str = r#"{
    "id": "contact",
    "method": "POST",
    "action": "/contact",
    "fields": [
        {"name": "email", "type": "email", "value": "", "rules": {"required": true, "email": true}},
        {"name": "name", "type": "text", "value": "", "placeholder": "Your name"},
        {"name": "message", "type": "textarea", "value": "", "rows": 6, "rules": "required|max:2000"}
    ]
}"#;

pub fn form(json: &str) -> Form {
    Form::from_json(json).unwrap_or_else(|e| panic!("Failed to decode: {json}\nError: {e:?}"))
}

pub fn contact_form() -> Form {
    form(CONTACT_FORM)
}

pub fn field_names(form: &Form) -> Vec<String> {
    form.iter().map(|f| f.name().to_string()).collect()
}

pub fn record_field_names(record: &Value) -> Vec<String> {
    record["fields"]
        .as_array()
        .expect("fields array")
        .iter()
        .map(|f| f["name"].as_str().expect("field name").to_string())
        .collect()
}

pub fn text(name: &str) -> Field {
    Field::new(name, "text")
}
