//! Validated input text.

use crate::error::{Error, Result};

/// Non-empty source text, validated once per edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextContent {
    value: String,
}

impl TextContent {
    /// Validate `value`, rejecting the empty string.
    pub fn new(value: impl Into<String>) -> Result<Self> {
        let value = value.into();
        if value.is_empty() {
            return Err(Error::EmptyContent);
        }
        Ok(Self { value })
    }

    /// Get the text.
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Consume the wrapper and return the text.
    pub fn into_inner(self) -> String {
        self.value
    }
}

impl TryFrom<&str> for TextContent {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self> {
        Self::new(value)
    }
}

impl TryFrom<String> for TextContent {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(value)
    }
}

impl AsRef<str> for TextContent {
    fn as_ref(&self) -> &str {
        &self.value
    }
}
