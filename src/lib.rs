//! # Collection+JSON
//!
//! > **Build, validate and serialize Collection+JSON documents.**
//!
//! [Collection+JSON](http://amundsen.com/media-types/collection/format/) is a
//! JSON hypermedia format for collections of items, links, queries, a write
//! template and an optional error. This crate lets a producer build such a
//! document step by step and guarantees it is valid before any bytes leave
//! the process.
//!
//! ## 🏗️ Design
//!
//! ### Typed document, checked twice
//! The document body is a plain typed struct ([`Collection`]). Each part
//! implements [`Validate`], and the same rules run in two places:
//! - when a part is added ([`Resource::add_item`] and friends), before the
//!   document is touched;
//! - over the whole document in [`Resource::validate`], which
//!   [`Resource::marshal`] always runs first.
//!
//! The second pass catches anything written through [`Resource::modify`].
//!
//! ### Concurrency
//! A [`Resource`] guards its body with its own mutex. Producers can share it
//! through an `Arc` and add parts from several threads; a concurrent
//! `marshal` never observes a half-applied mutation.
//!
//! ### Observability
//! Accepted and rejected mutations are reported through `tracing`. The crate
//! never installs a subscriber; that is left to the application.
//!
//! ## 🚀 Quick Start
//!
//! ```
//! use collection_json::{Data, ErrorObject, Item, Link, Resource, Template};
//!
//! let resource = Resource::new("/api/");
//! resource.add_link(Link::new("home", "/api/").with_name("home"))?;
//! resource.add_item(
//!     Item::new("/api/bob")
//!         .with_data(vec![Data::new("bob", "bob").with_prompt("bob's name")])
//!         .with_links(vec![Link::new("user", "/api/user/bob")]),
//! )?;
//! resource.set_template(Template::new(vec![
//!     Data::new("email", "").with_prompt("Someone's email"),
//! ]))?;
//! resource.set_error(ErrorObject::new("273841", "something went wrong"))?;
//!
//! // Ready to be written as an HTTP response body with CONTENT_TYPE.
//! let body = resource.marshal()?;
//! assert!(body.starts_with(br#"{"collection":{"version":"1.0""#));
//! # Ok::<(), collection_json::ResourceError>(())
//! ```

pub mod model;
pub mod resource;
pub mod validation;

pub use model::{Collection, Data, ErrorObject, Item, Link, Query, Template};
pub use resource::{Resource, ResourceError};
pub use validation::{Validate, ValidationError};

/// Media type to send in the `Content-Type` header of Collection+JSON responses.
pub const CONTENT_TYPE: &str = "application/vnd.collection+json";

/// The only Collection+JSON version this crate produces and accepts.
pub const VERSION: &str = "1.0";
