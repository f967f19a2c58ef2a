//! A single form field: declaration, bound value and rules.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::warn;

use crate::error::{FormError, Result};
use crate::rules::RuleSet;

/// Keys of a field record that are not free-form declaration data.
const RESERVED_KEYS: [&str; 4] = ["name", "type", "value", "rules"];

/// A named, typed field.
///
/// The record form of a field is
/// `{ "name", "type", "value", ...declaration data, "rules" }`.
/// Declaration data keeps the order it was declared in.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    name: String,
    kind: String,
    value: Value,
    data: Map<String, Value>,
    rules: RuleSet,
}

impl Field {
    /// Creates a field with an empty value and no rules.
    ///
    /// Any `kind` string is accepted.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            value: empty_value(),
            data: Map::new(),
            rules: RuleSet::new(),
        }
    }

    /// Creates a field from a name, a type tag and a declaration record.
    ///
    /// `value` and `rules` are read from the declaration; `name` and `type`
    /// entries in the declaration are ignored in favour of the arguments.
    /// Every other key is kept as declaration data. A `null` declaration is
    /// treated as an empty one.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidDeclaration`] if the declaration is not an
    /// object or its `rules` entry cannot be read.
    pub fn from_declaration(
        name: impl Into<String>,
        kind: impl Into<String>,
        declaration: &Value,
    ) -> Result<Self> {
        let mut field = Self::new(name, kind);
        match declaration {
            Value::Null => {}
            Value::Object(entries) => {
                for (key, value) in entries {
                    match key.as_str() {
                        "name" | "type" => {}
                        "value" => field.set_value(value.clone()),
                        "rules" => field.rules = RuleSet::from_declaration(value)?,
                        _ => {
                            field.data.insert(key.clone(), value.clone());
                        }
                    }
                }
            }
            other => {
                return Err(FormError::InvalidDeclaration(format!(
                    "declaration of field {:?} must be an object, got {other}",
                    field.name
                )));
            }
        }
        Ok(field)
    }

    /// Creates a field from a full record carrying its own `name` and `type`.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidDeclaration`] if `name` or `type` is
    /// missing or not a string, or if the rest of the record is invalid.
    pub fn from_record(record: &Value) -> Result<Self> {
        let name = record_str(record, "name")?;
        let kind = record_str(record, "type")?;
        Self::from_declaration(name, kind, record)
    }

    /// Sets the initial value.
    #[must_use]
    pub fn with_value(mut self, value: impl Into<Value>) -> Self {
        self.set_value(value);
        self
    }

    /// Replaces the rule set.
    #[must_use]
    pub fn with_rules(mut self, rules: RuleSet) -> Self {
        self.rules = rules;
        self
    }

    /// Declares one rule.
    #[must_use]
    pub fn rule(mut self, name: impl Into<String>, params: impl Into<Value>) -> Self {
        self.rules.insert(name, params);
        self
    }

    /// Declares a rule without parameters.
    #[must_use]
    pub fn required(self) -> Self {
        self.rule("required", true)
    }

    /// Sets a declaration data entry such as a placeholder or choices.
    ///
    /// Reserved record keys are ignored; use the dedicated setters instead.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if RESERVED_KEYS.contains(&key.as_str()) {
            warn!(field = %self.name, key = %key, "ignoring reserved key as declaration data");
        } else {
            self.data.insert(key, value.into());
        }
        self
    }

    /// The field name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field type tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// The bound value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Binds a value. `null` clears it.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = match value.into() {
            Value::Null => empty_value(),
            value => value,
        };
    }

    /// Resets the value to the empty string.
    pub fn clear_value(&mut self) {
        self.value = empty_value();
    }

    /// Declaration data other than name, type, value and rules.
    #[must_use]
    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    /// The declared rules.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Returns the plain record of this field.
    #[must_use]
    pub fn to_record(&self) -> Value {
        let mut record = Map::with_capacity(self.data.len() + 4);
        record.insert("name".to_string(), Value::String(self.name.clone()));
        record.insert("type".to_string(), Value::String(self.kind.clone()));
        record.insert("value".to_string(), self.value.clone());
        for (key, value) in &self.data {
            record.insert(key.clone(), value.clone());
        }
        record.insert("rules".to_string(), Value::Object(self.rules.as_map().clone()));
        Value::Object(record)
    }

    /// Returns the record of this field encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Json`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }
}

impl Serialize for Field {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Field {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let record = Value::deserialize(deserializer)?;
        Self::from_record(&record).map_err(serde::de::Error::custom)
    }
}

pub(crate) fn empty_value() -> Value {
    Value::String(String::new())
}

fn record_str<'a>(record: &'a Value, key: &str) -> Result<&'a str> {
    record.get(key).and_then(Value::as_str).ok_or_else(|| {
        FormError::InvalidDeclaration(format!(
            "field record without a string {key:?}: {record}"
        ))
    })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_new_field_defaults() {
        let field = Field::new("title", "text");
        assert_eq!(field.name(), "title");
        assert_eq!(field.kind(), "text");
        assert_eq!(field.value(), &json!(""));
        assert!(field.rules().is_empty());
        assert!(field.data().is_empty());
    }

    #[test]
    fn test_from_declaration() {
        let field = Field::from_declaration(
            "email",
            "email",
            &json!({
                "name": "ignored",
                "type": "ignored",
                "value": "a@b.com",
                "placeholder": "you@example.com",
                "rules": "required|email",
                "label": "Email",
            }),
        )
        .unwrap();

        assert_eq!(field.name(), "email");
        assert_eq!(field.kind(), "email");
        assert_eq!(field.value(), &json!("a@b.com"));
        assert!(field.rules().contains("required"));
        assert!(field.rules().contains("email"));
        let keys: Vec<&str> = field.data().keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["placeholder", "label"]);
    }

    #[test]
    fn test_any_type_is_accepted() {
        let field = Field::from_declaration("rating", "star-rating", &Value::Null).unwrap();
        assert_eq!(field.kind(), "star-rating");
    }

    #[test]
    fn test_non_object_declaration_fails() {
        let err = Field::from_declaration("age", "number", &json!([1, 2])).unwrap_err();
        assert!(matches!(err, FormError::InvalidDeclaration(_)));
    }

    #[test]
    fn test_record_shape_and_order() {
        let field = Field::new("bio", "textarea")
            .with_value("hello")
            .attr("rows", 4)
            .required();

        assert_eq!(
            field.to_json().unwrap(),
            r#"{"name":"bio","type":"textarea","value":"hello","rows":4,"rules":{"required":true}}"#
        );
    }

    #[test]
    fn test_attr_ignores_reserved_keys() {
        let field = Field::new("bio", "textarea").attr("value", "x").attr("rules", 1);
        assert!(field.data().is_empty());
        assert_eq!(field.value(), &json!(""));
        assert!(field.rules().is_empty());
    }

    #[test]
    fn test_null_value_clears() {
        let mut field = Field::new("age", "number").with_value(30);
        assert_eq!(field.value(), &json!(30));
        field.set_value(Value::Null);
        assert_eq!(field.value(), &json!(""));
    }

    #[test]
    fn test_from_record_requires_name_and_type() {
        assert!(Field::from_record(&json!({"type": "text"})).is_err());
        assert!(Field::from_record(&json!({"name": "a", "type": 3})).is_err());

        let field: Field = serde_json::from_value(json!({"name": "a", "type": "text"})).unwrap();
        assert_eq!(field.name(), "a");
    }

    #[test]
    fn test_record_reconstructs_field() {
        let field = Field::new("choice", "select")
            .with_value("b")
            .attr("choices", json!(["a", "b"]))
            .rule("in", json!(["a", "b"]));

        let rebuilt = Field::from_record(&field.to_record()).unwrap();
        assert_eq!(rebuilt, field);
    }
}
