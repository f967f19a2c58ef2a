//! Rule declarations and the validator seam.
//!
//! A field's rules are a declaration only: an ordered mapping from rule name
//! to rule parameters. Evaluating them is the job of a [`Validator`]
//! supplied by the caller.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::error::{FormError, Result, ValidationErrors};

/// Separator between rules in the compact string syntax.
const RULE_SEPARATOR: char = '|';
/// Separator between a rule name and its parameters.
const PARAMS_SEPARATOR: char = ':';

/// Ordered mapping of rule name to rule parameters.
///
/// Accepts three declaration forms:
/// - an object: `{"required": true, "max": 255}`
/// - an array of rule strings: `["required", "max:255"]`
/// - a pipe-delimited string: `"required|max:255"`
///
/// In the string forms a bare rule maps to `true` and `name:a,b` maps to
/// `["a", "b"]`. A rule set always serializes as an object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RuleSet(Map<String, Value>);

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule with parameters.
    #[must_use]
    pub fn rule(mut self, name: impl Into<String>, params: impl Into<Value>) -> Self {
        self.insert(name, params);
        self
    }

    /// Adds a rule without parameters.
    #[must_use]
    pub fn flag(self, name: impl Into<String>) -> Self {
        self.rule(name, true)
    }

    /// Inserts or replaces a rule, keeping the position of an existing one.
    pub fn insert(&mut self, name: impl Into<String>, params: impl Into<Value>) {
        self.0.insert(name.into(), params.into());
    }

    /// Returns the parameters declared for a rule.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name)
    }

    /// Returns whether a rule is declared.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Returns the number of declared rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether no rules are declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates rules in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(name, params)| (name.as_str(), params))
    }

    /// Returns the rules as a JSON object.
    #[must_use]
    pub fn as_map(&self) -> &Map<String, Value> {
        &self.0
    }

    /// Parses the pipe-delimited string syntax.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidDeclaration`] for a rule with an empty name.
    pub fn parse(declaration: &str) -> Result<Self> {
        let mut rules = Self::new();
        for segment in declaration.split(RULE_SEPARATOR) {
            rules.push_segment(segment)?;
        }
        Ok(rules)
    }

    /// Builds a rule set from any supported declaration form.
    ///
    /// `null` yields an empty set.
    ///
    /// # Errors
    ///
    /// Returns [`FormError::InvalidDeclaration`] for numbers, booleans,
    /// non-string array items and empty rule names.
    pub fn from_declaration(declaration: &Value) -> Result<Self> {
        match declaration {
            Value::Null => Ok(Self::new()),
            Value::Object(map) => Ok(Self(map.clone())),
            Value::String(s) => Self::parse(s),
            Value::Array(items) => {
                let mut rules = Self::new();
                for item in items {
                    let Value::String(s) = item else {
                        return Err(FormError::InvalidDeclaration(format!(
                            "rule list items must be strings, got {item}"
                        )));
                    };
                    for segment in s.split(RULE_SEPARATOR) {
                        rules.push_segment(segment)?;
                    }
                }
                Ok(rules)
            }
            other => Err(FormError::InvalidDeclaration(format!(
                "rules must be an object, array or string, got {other}"
            ))),
        }
    }

    fn push_segment(&mut self, segment: &str) -> Result<()> {
        let segment = segment.trim();
        if segment.is_empty() {
            return Ok(());
        }

        let (name, params) = match segment.split_once(PARAMS_SEPARATOR) {
            Some((name, params)) => {
                let params = params
                    .split(',')
                    .map(|p| Value::String(p.trim().to_string()))
                    .collect::<Vec<_>>();
                (name.trim(), Value::Array(params))
            }
            None => (segment, Value::Bool(true)),
        };

        if name.is_empty() {
            return Err(FormError::InvalidDeclaration(format!(
                "rule without a name: {segment:?}"
            )));
        }

        self.insert(name, params);
        Ok(())
    }
}

impl<'de> Deserialize<'de> for RuleSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Self::from_declaration(&value).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = (&'a String, &'a Value);
    type IntoIter = serde_json::map::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// An external rule evaluator.
///
/// The form only declares rules; implementors decide what each rule means.
/// Values and rules arrive keyed by field name, in field order.
pub trait Validator {
    /// Checks the values against the rules and reports every failure.
    fn validate(
        &self,
        values: &IndexMap<String, Value>,
        rules: &IndexMap<String, RuleSet>,
    ) -> ValidationErrors;
}
