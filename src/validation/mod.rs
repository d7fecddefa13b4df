//! Structural validation shared by every document part.
//!
//! Each child kind implements [`Validate`], so the Add/Set paths on
//! [`Resource`](crate::Resource) and the whole-document pass in
//! [`Resource::validate`](crate::Resource::validate) run the exact same rules.

pub mod error;

pub use error::*;

/// A document part that can check its own required fields.
///
/// Implementations are pure functions of the value's own fields. Parts that
/// contain other parts (an [`Item`](crate::Item) holding links, a
/// [`Template`](crate::Template) holding data) validate their children in
/// order and stop at the first failure.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Validates every element of `parts`, wrapping the first failure with its index.
pub(crate) fn validate_each<T, F>(parts: &[T], wrap: F) -> Result<(), ValidationError>
where
    T: Validate,
    F: Fn(usize, ValidationError) -> ValidationError,
{
    parts
        .iter()
        .enumerate()
        .try_for_each(|(index, part)| part.validate().map_err(|e| wrap(index, e)))
}
