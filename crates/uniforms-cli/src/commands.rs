//! Loading and printing forms.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};
use tracing::{debug, info};
use uniforms_core::{Form, FormOptions};

use crate::error::{CliError, Result};

fn read(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_path_buf(),
        source,
    })
}

/// Loads a form declaration and, if given, populates it from an input file.
///
/// # Errors
///
/// Fails if either file cannot be read or decoded.
pub fn load_form(declaration: &Path, input: Option<&Path>, options: FormOptions) -> Result<Form> {
    let json = read(declaration)?;
    let form = Form::from_json(&json)
        .map_err(|source| CliError::Declaration {
            path: declaration.to_path_buf(),
            source,
        })?
        .with_options(options);
    info!(
        "Loaded form '{}' with {} field(s) from {}",
        form.id(),
        form.len(),
        declaration.display()
    );

    let Some(input) = input else {
        return Ok(form);
    };

    let values: Map<String, Value> =
        serde_json::from_str(&read(input)?).map_err(|source| CliError::Input {
            path: input.to_path_buf(),
            source,
        })?;
    debug!("Binding {} input value(s) from {}", values.len(), input.display());

    let mut form = form;
    form.populate(&values);
    Ok(form)
}

/// Renders the form record as JSON.
///
/// # Errors
///
/// Fails if encoding fails.
pub fn render_form(form: &Form, pretty: bool) -> Result<String> {
    let json = if pretty {
        form.to_json_pretty()?
    } else {
        form.to_json()?
    };
    Ok(json)
}

/// Renders the field values as indented JSON.
///
/// # Errors
///
/// Fails if encoding fails.
pub fn render_values(form: &Form) -> Result<String> {
    Ok(serde_json::to_string_pretty(&form.values())?)
}

/// Renders the field rules as indented JSON.
///
/// # Errors
///
/// Fails if encoding fails.
pub fn render_rules(form: &Form) -> Result<String> {
    Ok(serde_json::to_string_pretty(&form.rules())?)
}

/// Renders one `name<TAB>type` line per field.
#[must_use]
pub fn render_fields(form: &Form) -> String {
    form.iter()
        .map(|field| format!("{}\t{}\n", field.name(), field.kind()))
        .collect()
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use uniforms_core::{Field, FormBuilder};

    use super::*;

    fn sample() -> Form {
        FormBuilder::new()
            .id("search")
            .method("GET")
            .field(Field::new("q", "search").required().with_value("rust"))
            .field(Field::new("page", "number"))
            .build()
    }

    #[test]
    fn test_render_fields() {
        assert_eq!(render_fields(&sample()), "q\tsearch\npage\tnumber\n");
        assert_eq!(render_fields(&Form::new()), "");
    }

    #[test]
    fn test_render_values() {
        let rendered: Value = serde_json::from_str(&render_values(&sample()).unwrap()).unwrap();
        assert_eq!(rendered, json!({"q": "rust", "page": ""}));
    }

    #[test]
    fn test_render_rules() {
        let rendered = render_rules(&sample()).unwrap();
        let parsed: Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, json!({"q": {"required": true}, "page": {}}));
    }

    #[test]
    fn test_render_form_compact_and_pretty() {
        let form = sample();
        let compact = render_form(&form, false).unwrap();
        let pretty = render_form(&form, true).unwrap();
        assert!(!compact.contains('\n'));
        assert!(pretty.contains('\n'));
        assert_eq!(
            serde_json::from_str::<Value>(&compact).unwrap(),
            serde_json::from_str::<Value>(&pretty).unwrap()
        );
    }
}
