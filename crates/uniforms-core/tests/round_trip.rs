//! Tests for decoding and re-encoding forms.

mod common;
use common::*;

use serde_json::json;
use uniforms_core::{Form, FormError, FormOptions};

#[test]
fn round_trip_preserves_values_and_attributes() {
    let mut original = contact_form();
    original.populate(&json!({"email": "a@b.com", "name": "Ada", "message": "Hello"}));

    let decoded = form(&original.to_json().unwrap());

    assert_eq!(decoded.values(), original.values());
    assert_eq!(decoded.id(), "contact");
    assert_eq!(decoded.method(), "POST");
    assert_eq!(decoded.action(), "/contact");
    assert_eq!(field_names(&decoded), field_names(&original));
}

#[test]
fn round_trip_preserves_rules_and_declaration_data() {
    let original = contact_form();
    let decoded = form(&original.to_json().unwrap());

    assert_eq!(decoded.rules(), original.rules());
    assert_eq!(decoded, original);
    assert_eq!(
        decoded.field("message").unwrap().rules().get("max"),
        Some(&json!(["2000"]))
    );
    assert_eq!(
        decoded.field("name").unwrap().data().get("placeholder"),
        Some(&json!("Your name"))
    );
}

#[test]
fn output_shape_has_only_the_attribute_triple() {
    let decoded = form(r#"{"id":"x","attributes":{"class":"wide"},"fields":[]}"#);
    let record = decoded.to_record();

    assert_eq!(
        record,
        json!({"id": "x", "method": "POST", "action": "", "fields": []})
    );
    assert_eq!(decoded.attribute("class"), Some("wide"));
}

#[test]
fn preserve_attributes_closes_the_gap() {
    let mut decoded = form(r#"{"id":"x","attributes":{"class":"wide"},"fields":[]}"#);
    decoded.set_options(FormOptions::new().preserve_attributes(true));

    let again = form(&decoded.to_json().unwrap());
    assert_eq!(again.attribute("class"), Some("wide"));
    assert_eq!(again.attributes(), decoded.attributes());
}

#[test]
fn field_record_order() {
    let record = contact_form().to_record();
    let message = serde_json::to_string(&record["fields"][2]).unwrap();
    assert_eq!(
        message,
        r#"{"name":"message","type":"textarea","value":"","rows":6,"rules":{"required":true,"max":["2000"]}}"#
    );
}

#[test]
fn from_value_matches_from_json() {
    let from_value = Form::from_value(serde_json::from_str(CONTACT_FORM).unwrap()).unwrap();
    assert_eq!(from_value, contact_form());
}

#[test]
fn malformed_declarations() {
    assert!(matches!(Form::from_json("not json"), Err(FormError::Json(_))));
    assert!(matches!(
        Form::from_json(r#"{"id": 5, "fields": []}"#),
        Err(FormError::Json(_))
    ));
    assert!(matches!(
        Form::from_json(r#"{"fields": [{"name": "a", "type": "text", "rules": 7}]}"#),
        Err(FormError::InvalidDeclaration(_))
    ));
}

#[test]
fn unserialize_keeps_existing_fields() {
    let mut existing = Form::new();
    existing.add_field(text("kept"));
    existing
        .unserialize(r#"{"id":"next","fields":[{"name":"added","type":"text"}]}"#)
        .unwrap();

    assert_eq!(field_names(&existing), vec!["kept", "added"]);
    assert_eq!(existing.id(), "next");
}
