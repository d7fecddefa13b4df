//! Typed parts of a Collection+JSON document.
//!
//! Every part serializes with the lower-case field names of the wire format
//! and omits optional fields that were never populated.

pub mod collection;
pub mod data;
pub mod error;
pub mod item;
pub mod link;
pub mod query;
pub mod template;

pub use collection::*;
pub use data::*;
pub use error::*;
pub use item::*;
pub use link::*;
pub use query::*;
pub use template::*;
