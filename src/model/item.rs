use serde::{Deserialize, Serialize};

use super::{Data, Link};
use crate::validation::{validate_each, Validate, ValidationError};

/// One member of the collection.
///
/// An item owns its data and links by value. Only `href` is required, but
/// every embedded link must be valid on its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub data: Vec<Data>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub links: Vec<Link>,
}

impl Item {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            ..Self::default()
        }
    }

    pub fn with_data(mut self, data: Vec<Data>) -> Self {
        self.data = data;
        self
    }

    pub fn with_links(mut self, links: Vec<Link>) -> Self {
        self.links = links;
        self
    }
}

impl Validate for Item {
    fn validate(&self) -> Result<(), ValidationError> {
        if self.href.is_empty() {
            return Err(ValidationError::EmptyHref);
        }
        validate_each(&self.links, ValidationError::link)
    }
}
