//! Serialization options.

use serde::{Deserialize, Serialize};

/// Options controlling how a [`Form`](crate::Form) serializes itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormOptions {
    /// Emit the full attribute mapping under an `attributes` key.
    ///
    /// Off by default: only `id`, `method` and `action` are written, and any
    /// other attribute is dropped from the output.
    pub preserve_attributes: bool,
}

impl FormOptions {
    /// Creates the default options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enables or disables emitting the full attribute mapping.
    #[must_use]
    pub const fn preserve_attributes(mut self, preserve: bool) -> Self {
        self.preserve_attributes = preserve;
        self
    }
}
