//! The top-level document and its thread-safe mutation surface.
//!
//! A [`Resource`] wraps a [`Collection`] in an instance-scoped mutex. Every
//! Add/Set validates its argument before taking the lock and commits under
//! it; [`Resource::validate`] and [`Resource::marshal`] hold the lock for the
//! whole traversal, so a reader never sees a half-applied mutation.

pub mod error;

pub use error::*;

use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::model::collection::{Document, DocumentRef};
use crate::model::{Collection, ErrorObject, Item, Link, Query, Template};
use crate::validation::{Validate, ValidationError};

/// A Collection+JSON document under construction.
///
/// Share it between producers with `Arc<Resource>`; all methods take `&self`.
#[derive(Debug)]
pub struct Resource {
    collection: Mutex<Collection>,
}

impl Resource {
    /// Creates a resource at `root`, normally the URL of the API root.
    ///
    /// The version is fixed to [`VERSION`](crate::VERSION). Nothing is
    /// validated here; an empty `root` is reported by [`validate`](Self::validate).
    pub fn new(root: impl Into<String>) -> Self {
        Self::from(Collection::new(root))
    }

    /// Decodes a wire document and checks that it is valid.
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ResourceError> {
        let document: Document = serde_json::from_slice(bytes)?;
        document.collection.validate()?;
        debug!(href = %document.collection.href, "Decoded resource");
        Ok(Self::from(document.collection))
    }

    pub fn add_link(&self, link: Link) -> Result<(), ResourceError> {
        let link = checked("link", link)?;
        let mut collection = self.collection.lock();
        let links = collection.links.get_or_insert_with(Vec::new);
        links.push(link);
        debug!(kind = "link", size = links.len(), "Added");
        Ok(())
    }

    /// Appends an item once it and every link it carries are valid.
    pub fn add_item(&self, item: Item) -> Result<(), ResourceError> {
        let item = checked("item", item)?;
        let mut collection = self.collection.lock();
        let items = collection.items.get_or_insert_with(Vec::new);
        items.push(item);
        debug!(kind = "item", size = items.len(), "Added");
        Ok(())
    }

    pub fn add_query(&self, query: Query) -> Result<(), ResourceError> {
        let query = checked("query", query)?;
        let mut collection = self.collection.lock();
        let queries = collection.queries.get_or_insert_with(Vec::new);
        queries.push(query);
        debug!(kind = "query", size = queries.len(), "Added");
        Ok(())
    }

    /// Replaces the write template.
    pub fn set_template(&self, template: Template) -> Result<(), ResourceError> {
        let template = checked("template", template)?;
        let fields = template.data.len();
        self.collection.lock().template = Some(template);
        debug!(kind = "template", fields, "Set");
        Ok(())
    }

    /// Replaces the document error.
    pub fn set_error(&self, error: ErrorObject) -> Result<(), ResourceError> {
        let error = checked("error", error)?;
        debug!(kind = "error", code = %error.code, "Set");
        self.collection.lock().error = Some(error);
        Ok(())
    }

    /// Checks the whole document, returning the first violation found.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.collection.lock().validate()
    }

    /// Validates the document and encodes it as compact JSON.
    ///
    /// No bytes are produced when validation fails.
    pub fn marshal(&self) -> Result<Vec<u8>, ResourceError> {
        self.encode(|document| serde_json::to_vec(document))
    }

    /// Like [`marshal`](Self::marshal), with indented output.
    pub fn marshal_pretty(&self) -> Result<Vec<u8>, ResourceError> {
        self.encode(|document| serde_json::to_vec_pretty(document))
    }

    fn encode<F>(&self, to_vec: F) -> Result<Vec<u8>, ResourceError>
    where
        F: FnOnce(&DocumentRef<'_>) -> serde_json::Result<Vec<u8>>,
    {
        let collection = self.collection.lock();
        if let Err(e) = collection.validate() {
            warn!(href = %collection.href, error = %e, "Marshal refused");
            return Err(e.into());
        }
        let bytes = to_vec(&DocumentRef {
            collection: &*collection,
        })?;
        trace!(href = %collection.href, size = bytes.len(), "Marshalled");
        Ok(bytes)
    }

    /// Returns a copy of the current document body.
    pub fn snapshot(&self) -> Collection {
        self.collection.lock().clone()
    }

    pub fn into_collection(self) -> Collection {
        self.collection.into_inner()
    }

    /// Edits the body directly, bypassing Add/Set validation.
    ///
    /// Whatever is done here is caught by the next [`validate`](Self::validate)
    /// or [`marshal`](Self::marshal).
    pub fn modify<R>(&self, f: impl FnOnce(&mut Collection) -> R) -> R {
        f(&mut self.collection.lock())
    }

    pub fn version(&self) -> String {
        self.collection.lock().version.clone()
    }

    pub fn href(&self) -> String {
        self.collection.lock().href.clone()
    }

    pub fn links_len(&self) -> usize {
        self.collection.lock().links.as_ref().map_or(0, Vec::len)
    }

    pub fn items_len(&self) -> usize {
        self.collection.lock().items.as_ref().map_or(0, Vec::len)
    }

    pub fn queries_len(&self) -> usize {
        self.collection.lock().queries.as_ref().map_or(0, Vec::len)
    }
}

impl From<Collection> for Resource {
    fn from(collection: Collection) -> Self {
        Self {
            collection: Mutex::new(collection),
        }
    }
}

fn checked<T: Validate>(kind: &'static str, part: T) -> Result<T, ResourceError> {
    match part.validate() {
        Ok(()) => Ok(part),
        Err(source) => {
            warn!(kind, error = %source, "Rejected");
            Err(ResourceError::Rejected { kind, source })
        }
    }
}
