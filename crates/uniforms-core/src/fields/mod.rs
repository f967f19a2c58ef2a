//! Helper constructors for common field kinds.
//!
//! Each helper sets the `type` tag, the conventional rules and any
//! type-specific declaration data. The result is a plain [`Field`](crate::Field)
//! and can be refined further with its builder methods.

mod checkbox;
mod hidden;
mod select;
mod text;

pub use checkbox::checkbox_field;
pub use hidden::hidden_field;
pub use select::{multiple_select_field, select_field};
pub use text::{email_field, password_field, text_field, textarea_field, url_field};
