//! Example: Contact Form
//!
//! Builds a contact form in code, sends it through JSON, binds a submission
//! and prints the bound values and declared rules.
//!
//! Run with: cargo run --example contact_form -p uniforms-core

use serde_json::json;
use uniforms_core::fields::{email_field, select_field, text_field, textarea_field};
use uniforms_core::{Form, FormBuilder};

fn main() -> uniforms_core::Result<()> {
    let form = FormBuilder::new()
        .id("contact")
        .action("/contact")
        .field(text_field("name", 100, true))
        .field(email_field("email", true))
        .field(select_field(
            "topic",
            &[("sales", "Sales"), ("support", "Support")],
            true,
        ))
        .field(textarea_field("message", 6, true).rule("max", 2000))
        .build();

    let declaration = form.to_json_pretty()?;
    println!("Declaration:\n{declaration}\n");

    // The declaration travels as JSON and comes back as an equal form
    let mut received = Form::from_json(&declaration)?;
    assert_eq!(received, form);

    received.populate(&json!({
        "name": "Ada",
        "email": "ada@example.com",
        "topic": "support",
    }));

    println!("Values:\n{}\n", serde_json::to_string_pretty(&received.values())?);
    println!("Rules:\n{}", serde_json::to_string_pretty(&received.rules())?);

    Ok(())
}
