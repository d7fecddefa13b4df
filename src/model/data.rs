use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationError};

/// A name/value pair carried by items, queries and templates.
///
/// `name` and `value` are always written, even when empty, so a template
/// can advertise a blank field. `prompt` is only written when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Data {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prompt: String,
}

impl Data {
    /// Creates a new Data entry without a prompt.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            prompt: String::new(),
        }
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

impl Validate for Data {
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }
}
