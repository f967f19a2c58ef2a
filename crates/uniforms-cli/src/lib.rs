//! Command-line front end for `uniforms-core`.
//!
//! Loads a form declaration from disk, optionally binds input values from a
//! second JSON file, and prints the normalized form, its values, its rules
//! or a field listing.
//!
//! # CLI Usage
//!
//! ```bash
//! # Print the normalized declaration
//! uniforms show contact.json --pretty
//!
//! # Bind submitted values and print them
//! uniforms values contact.json --input submitted.json
//!
//! # Print every field's rules
//! uniforms rules contact.json
//!
//! # List fields
//! uniforms fields contact.json
//! ```

pub mod commands;
pub mod error;

pub use commands::{load_form, render_fields, render_form, render_rules, render_values};
pub use error::{CliError, Result};
