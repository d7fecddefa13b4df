use serde::{Deserialize, Serialize};
use tracing::trace;

use super::{ErrorObject, Item, Link, Query, Template};
use crate::validation::{validate_each, Validate, ValidationError};

/// The body of a Collection+JSON document.
///
/// Optional parts stay `None` until first populated and are then left off
/// the wire. Sequence order is insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Link>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<Item>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<Query>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<Template>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorObject>,
}

impl Collection {
    /// Creates an empty body at `href` with the supported version.
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            version: crate::VERSION.to_string(),
            href: href.into(),
            ..Self::default()
        }
    }
}

impl Validate for Collection {
    fn validate(&self) -> Result<(), ValidationError> {
        trace!(href = %self.href, "Validating collection");
        if self.version.is_empty() {
            return Err(ValidationError::MissingVersion);
        }
        if self.version != crate::VERSION {
            return Err(ValidationError::WrongVersion {
                found: self.version.clone(),
            });
        }
        if self.href.is_empty() {
            return Err(ValidationError::MissingHref);
        }
        if let Some(links) = &self.links {
            validate_each(links, ValidationError::link)?;
        }
        if let Some(items) = &self.items {
            validate_each(items, ValidationError::item)?;
        }
        if let Some(queries) = &self.queries {
            validate_each(queries, ValidationError::query)?;
        }
        if let Some(template) = &self.template {
            template
                .validate()
                .map_err(|e| ValidationError::Template { source: Box::new(e) })?;
        }
        if let Some(error) = &self.error {
            error
                .validate()
                .map_err(|e| ValidationError::Error { source: Box::new(e) })?;
        }
        Ok(())
    }
}

/// Wire envelope: the body under its single `collection` key.
#[derive(Serialize)]
pub(crate) struct DocumentRef<'a> {
    pub collection: &'a Collection,
}

#[derive(Deserialize)]
pub(crate) struct Document {
    pub collection: Collection,
}
