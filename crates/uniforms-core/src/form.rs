//! The form: ordered fields plus form-level attributes.

use std::collections::{BTreeMap, HashMap};
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::{FormError, Result};
use crate::field::Field;
use crate::options::FormOptions;
use crate::rules::{RuleSet, Validator};

/// Default `method` attribute.
pub const DEFAULT_METHOD: &str = "POST";

/// A form declaration: JSON text or an already decoded value.
#[derive(Debug, Clone, PartialEq)]
pub enum Declaration {
    /// JSON text.
    Json(String),
    /// A decoded JSON value.
    Value(Value),
}

impl From<&str> for Declaration {
    fn from(json: &str) -> Self {
        Self::Json(json.to_string())
    }
}

impl From<String> for Declaration {
    fn from(json: String) -> Self {
        Self::Json(json)
    }
}

impl From<Value> for Declaration {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}

/// Submitted values that can populate a form, looked up by field name.
pub trait Input {
    /// Returns the submitted value for a field, if any.
    fn value_of(&self, name: &str) -> Option<Value>;
}

impl Input for Map<String, Value> {
    fn value_of(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl Input for Value {
    fn value_of(&self, name: &str) -> Option<Value> {
        self.get(name).cloned()
    }
}

impl<V, S> Input for HashMap<String, V, S>
where
    V: Clone + Into<Value>,
    S: std::hash::BuildHasher,
{
    fn value_of(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

impl<V> Input for BTreeMap<String, V>
where
    V: Clone + Into<Value>,
{
    fn value_of(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

impl<V, S> Input for IndexMap<String, V, S>
where
    V: Clone + Into<Value>,
    S: std::hash::BuildHasher,
{
    fn value_of(&self, name: &str) -> Option<Value> {
        self.get(name).cloned().map(Into::into)
    }
}

/// Decode target of a form declaration.
///
/// `null` counts as absent for every key.
#[derive(Debug, Deserialize)]
struct FormDeclaration {
    id: Option<String>,
    method: Option<String>,
    action: Option<String>,
    attributes: Option<Map<String, Value>>,
    fields: Option<Vec<Value>>,
}

impl FormDeclaration {
    /// Reads a declaration from a decoded value.
    ///
    /// Only objects are accepted, never a positional array.
    fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Object(entries) => Ok(serde_json::from_value(Value::Object(entries))?),
            other => Err(FormError::InvalidDeclaration(format!(
                "form declaration must be a JSON object, got {}",
                json_type(&other)
            ))),
        }
    }
}

/// An ordered, name-keyed collection of fields plus form attributes.
///
/// Fields keep insertion order. Adding a field whose name is already present
/// replaces it at its original position.
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    attributes: IndexMap<String, String>,
    fields: IndexMap<String, Field>,
    options: FormOptions,
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}

impl Form {
    /// Creates an empty form with `id = ""`, `method = "POST"` and
    /// `action = ""`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            attributes: default_attributes(),
            fields: IndexMap::new(),
            options: FormOptions::default(),
        }
    }

    /// Decodes a form from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Json`] for malformed JSON and
    /// [`FormError::InvalidDeclaration`] for unusable field records.
    pub fn from_json(json: &str) -> Result<Self> {
        let mut form = Self::new();
        form.unserialize(json)?;
        Ok(form)
    }

    /// Decodes a form from a JSON value.
    ///
    /// # Errors
    ///
    /// Same as [`Form::from_json`].
    pub fn from_value(value: Value) -> Result<Self> {
        let mut form = Self::new();
        form.unserialize_value(value)?;
        Ok(form)
    }

    /// Builds a form from an optional declaration, then populates it from an
    /// optional input.
    ///
    /// # Errors
    ///
    /// Same as [`Form::from_json`].
    pub fn build(declaration: Option<Declaration>, input: Option<&dyn Input>) -> Result<Self> {
        let mut form = Self::new();
        match declaration {
            Some(Declaration::Json(json)) => form.unserialize(&json)?,
            Some(Declaration::Value(value)) => form.unserialize_value(value)?,
            None => {}
        }
        if let Some(input) = input {
            form.populate(input);
        }
        Ok(form)
    }

    /// Sets the serialization options.
    #[must_use]
    pub fn with_options(mut self, options: FormOptions) -> Self {
        self.options = options;
        self
    }

    /// Returns the serialization options.
    #[must_use]
    pub fn options(&self) -> FormOptions {
        self.options
    }

    /// Replaces the serialization options.
    pub fn set_options(&mut self, options: FormOptions) {
        self.options = options;
    }

    /// Decodes JSON text and applies it to this form.
    ///
    /// Attributes are replaced. Fields are added in declaration order on top
    /// of the existing ones.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Json`] for malformed JSON and
    /// [`FormError::InvalidDeclaration`] when the top level is not an object
    /// or a field record is unusable.
    pub fn unserialize(&mut self, data: &str) -> Result<()> {
        let value: Value = serde_json::from_str(data)?;
        self.apply(FormDeclaration::from_value(value)?)
    }

    /// Applies an already decoded declaration to this form.
    ///
    /// # Errors
    ///
    /// Same as [`Form::unserialize`].
    pub fn unserialize_value(&mut self, value: Value) -> Result<()> {
        self.apply(FormDeclaration::from_value(value)?)
    }

    fn apply(&mut self, declaration: FormDeclaration) -> Result<()> {
        let mut attributes: IndexMap<String, String> = declaration
            .attributes
            .unwrap_or_default()
            .into_iter()
            .map(|(key, value)| (key, attribute_text(value)))
            .collect();
        attributes.insert("id".to_string(), declaration.id.unwrap_or_default());
        attributes.insert(
            "method".to_string(),
            declaration
                .method
                .unwrap_or_else(|| DEFAULT_METHOD.to_string()),
        );
        attributes.insert("action".to_string(), declaration.action.unwrap_or_default());
        self.attributes = attributes;

        let records = declaration.fields.unwrap_or_default();
        debug!(
            id = %self.id(),
            method = %self.method(),
            fields = records.len(),
            "unserializing form"
        );

        for record in &records {
            self.add_field(Field::from_record(record)?);
        }
        Ok(())
    }

    /// Returns an attribute.
    #[must_use]
    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Sets an attribute, keeping the position of an existing key.
    pub fn set_attribute(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> &mut Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// All attributes, `id`, `method` and `action` included.
    #[must_use]
    pub fn attributes(&self) -> &IndexMap<String, String> {
        &self.attributes
    }

    /// The `id` attribute.
    #[must_use]
    pub fn id(&self) -> &str {
        self.attribute("id").unwrap_or_default()
    }

    /// The `method` attribute.
    #[must_use]
    pub fn method(&self) -> &str {
        self.attribute("method").unwrap_or(DEFAULT_METHOD)
    }

    /// The `action` attribute.
    #[must_use]
    pub fn action(&self) -> &str {
        self.attribute("action").unwrap_or_default()
    }

    /// Inserts a field keyed by its own name.
    pub fn add_field(&mut self, field: Field) -> &mut Self {
        let name = field.name().to_string();
        if let Some(previous) = self.fields.insert(name, field) {
            debug!(field = %previous.name(), "replaced field in place");
        }
        self
    }

    /// Constructs a field from a declaration and inserts it.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidDeclaration`] if the declaration is not an
    /// object or declares unreadable rules.
    pub fn add_declared_field(
        &mut self,
        name: impl Into<String>,
        kind: impl Into<String>,
        declaration: &Value,
    ) -> Result<&mut Self> {
        let field = Field::from_declaration(name, kind, declaration)?;
        Ok(self.add_field(field))
    }

    /// Removes a field if present. Other fields keep their order.
    pub fn remove_field(&mut self, name: &str) -> &mut Self {
        if self.fields.shift_remove(name).is_some() {
            debug!(field = %name, "removed field");
        }
        self
    }

    /// Binds input values to every field.
    ///
    /// Each field takes `input[name]`; fields absent from the input, or
    /// given `null`, are reset to the empty string.
    pub fn populate(&mut self, input: &(impl Input + ?Sized)) -> &mut Self {
        debug!(fields = self.fields.len(), "populating form");
        for field in self.iter_mut() {
            match input.value_of(field.name()) {
                Some(value) => {
                    trace!(field = %field.name(), "binding value");
                    field.set_value(value);
                }
                None => {
                    trace!(field = %field.name(), "clearing value");
                    field.clear_value();
                }
            }
        }
        self
    }

    /// Returns each field's value keyed by name, in field order.
    #[must_use]
    pub fn values(&self) -> IndexMap<String, Value> {
        self.iter()
            .map(|field| (field.name().to_string(), field.value().clone()))
            .collect()
    }

    /// Returns each field's rules keyed by name, in field order.
    #[must_use]
    pub fn rules(&self) -> IndexMap<String, RuleSet> {
        self.iter()
            .map(|field| (field.name().to_string(), field.rules().clone()))
            .collect()
    }

    /// Runs an external validator over the current values and rules.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Validation`] carrying every reported failure.
    pub fn validate_with(&self, validator: &(impl Validator + ?Sized)) -> Result<()> {
        validator
            .validate(&self.values(), &self.rules())
            .into_result()
    }

    /// Iterates fields in insertion order.
    pub fn iter(&self) -> indexmap::map::Values<'_, String, Field> {
        self.fields.values()
    }

    /// Iterates fields mutably in insertion order.
    pub fn iter_mut(&mut self) -> indexmap::map::ValuesMut<'_, String, Field> {
        self.fields.values_mut()
    }

    /// Returns a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.get(name)
    }

    /// Returns a field by name, mutably.
    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.get_mut(name)
    }

    /// Returns whether a field with this name exists.
    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns whether the form has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Returns the plain record of this form.
    ///
    /// Only `id`, `method` and `action` are written at the top level unless
    /// [`FormOptions::preserve_attributes`] is set.
    #[must_use]
    pub fn to_record(&self) -> Value {
        let mut record = Map::new();
        record.insert("id".to_string(), Value::String(self.id().to_string()));
        record.insert("method".to_string(), Value::String(self.method().to_string()));
        record.insert("action".to_string(), Value::String(self.action().to_string()));
        record.insert(
            "fields".to_string(),
            Value::Array(self.iter().map(Field::to_record).collect()),
        );
        if self.options.preserve_attributes {
            let attributes = self
                .attributes
                .iter()
                .map(|(key, value)| (key.clone(), Value::String(value.clone())))
                .collect();
            record.insert("attributes".to_string(), Value::Object(attributes));
        }
        Value::Object(record)
    }

    /// Returns the record of this form encoded as JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Json`] if encoding fails.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_record())?)
    }

    /// Returns the record of this form encoded as indented JSON.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::Json`] if encoding fails.
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_record())?)
    }
}

impl fmt::Display for Form {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = self.to_json().map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}

impl Serialize for Form {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Form {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        let mut form = Self::new();
        FormDeclaration::from_value(value)
            .and_then(|declaration| form.apply(declaration))
            .map_err(serde::de::Error::custom)?;
        Ok(form)
    }
}

impl<'a> IntoIterator for &'a Form {
    type Item = &'a Field;
    type IntoIter = indexmap::map::Values<'a, String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> IntoIterator for &'a mut Form {
    type Item = &'a mut Field;
    type IntoIter = indexmap::map::ValuesMut<'a, String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl IntoIterator for Form {
    type Item = Field;
    type IntoIter = indexmap::map::IntoValues<String, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_values()
    }
}

impl Extend<Field> for Form {
    fn extend<I: IntoIterator<Item = Field>>(&mut self, iter: I) {
        for field in iter {
            self.add_field(field);
        }
    }
}

/// A builder for creating forms programmatically.
#[derive(Debug, Default)]
pub struct FormBuilder {
    form: Form,
}

impl FormBuilder {
    /// Creates a new form builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attribute("id", id)
    }

    /// Sets the `method` attribute.
    #[must_use]
    pub fn method(self, method: impl Into<String>) -> Self {
        self.attribute("method", method)
    }

    /// Sets the `action` attribute.
    #[must_use]
    pub fn action(self, action: impl Into<String>) -> Self {
        self.attribute("action", action)
    }

    /// Sets any attribute.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.form.set_attribute(key, value);
        self
    }

    /// Adds a field to the form.
    #[must_use]
    pub fn field(mut self, field: Field) -> Self {
        self.form.add_field(field);
        self
    }

    /// Sets the serialization options.
    #[must_use]
    pub fn options(mut self, options: FormOptions) -> Self {
        self.form.set_options(options);
        self
    }

    /// Returns the finished form.
    #[must_use]
    pub fn build(self) -> Form {
        self.form
    }
}

fn default_attributes() -> IndexMap<String, String> {
    IndexMap::from([
        ("id".to_string(), String::new()),
        ("method".to_string(), DEFAULT_METHOD.to_string()),
        ("action".to_string(), String::new()),
    ])
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn attribute_text(value: Value) -> String {
    match value {
        Value::String(s) => s,
        other => other.to_string(),
    }
}
