//! # uniforms-core
//!
//! Declarative forms that round-trip through JSON.
//!
//! This crate provides:
//! - [`Form`]: an ordered, name-keyed collection of fields plus `id`,
//!   `method` and `action` attributes
//! - [`Field`]: a typed field carrying its declaration, value and rules
//! - [`RuleSet`]: rule declarations, handed to an external [`Validator`]
//! - Helpers for common field kinds in [`fields`]
//!
//! ## Quick Start
//!
//! ```rust
//! use uniforms_core::Form;
//! use serde_json::json;
//!
//! let mut form = Form::from_json(r#"{
//!     "id": "signup",
//!     "action": "/signup",
//!     "fields": [
//!         {"name": "email", "type": "email", "rules": "required|email"},
//!         {"name": "name", "type": "text"}
//!     ]
//! }"#).unwrap();
//!
//! assert_eq!(form.method(), "POST");
//!
//! form.populate(&json!({"email": "a@b.com"}));
//! let values = form.values();
//! assert_eq!(values["email"], json!("a@b.com"));
//! assert_eq!(values["name"], json!(""));
//! ```
//!
//! ## Building Forms in Code
//!
//! ```rust
//! use uniforms_core::FormBuilder;
//! use uniforms_core::fields::{email_field, password_field, select_field};
//!
//! let form = FormBuilder::new()
//!     .id("login")
//!     .action("/login")
//!     .field(email_field("email", true))
//!     .field(password_field("password", Some(8)))
//!     .field(select_field("role", &[("user", "User"), ("admin", "Admin")], false))
//!     .build();
//!
//! let json = form.to_json().unwrap();
//! assert!(json.starts_with(r#"{"id":"login","method":"POST","action":"/login""#));
//! ```
//!
//! ## Validation
//!
//! Rules are declarations only. Evaluating them is left to an implementation
//! of [`Validator`]:
//!
//! ```rust
//! use indexmap::IndexMap;
//! use serde_json::{json, Value};
//! use uniforms_core::{Field, Form, RuleSet, ValidationErrors, Validator};
//!
//! struct Required;
//!
//! impl Validator for Required {
//!     fn validate(
//!         &self,
//!         values: &IndexMap<String, Value>,
//!         rules: &IndexMap<String, RuleSet>,
//!     ) -> ValidationErrors {
//!         let mut errors = ValidationErrors::new();
//!         for (name, rules) in rules {
//!             if rules.contains("required") && values[name] == json!("") {
//!                 errors.add(name, "This field is required.");
//!             }
//!         }
//!         errors
//!     }
//! }
//!
//! let mut form = Form::new();
//! form.add_field(Field::new("email", "email").required());
//! assert!(form.validate_with(&Required).is_err());
//! ```

mod error;
mod field;
pub mod fields;
mod form;
mod options;
mod rules;

pub use error::{FormError, Result, ValidationErrors};
pub use field::Field;
pub use form::{Declaration, Form, FormBuilder, Input, DEFAULT_METHOD};
pub use options::FormOptions;
pub use rules::{RuleSet, Validator};
