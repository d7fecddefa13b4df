use serde::{Deserialize, Serialize};

use crate::validation::{Validate, ValidationError};

/// A hyperlink relation.
///
/// `rel` and `href` are required. `name`, `prompt` and `render` are only
/// written when set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub prompt: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub render: String,
}

impl Link {
    /// Creates a link with only its required fields set.
    pub fn new(rel: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            rel: rel.into(),
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }

    /// Sets the rendering hint, `"link"` or `"image"` in practice.
    pub fn with_render(mut self, render: impl Into<String>) -> Self {
        self.render = render.into();
        self
    }
}

impl Validate for Link {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.rel.is_empty() {
            return Err(ValidationError::EmptyRel);
        }
        if self.href.is_empty() {
            return Err(ValidationError::EmptyHref);
        }
        Ok(())
    }
}
