//! Error types for child composition.
//!
//! Composition fails loudly: hosts surface structural misuse to the caller
//! instead of silently dropping or reordering children.

use thiserror::Error;

use crate::types::TypeTag;

/// Composition error type.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CompositionError {
    /// More than one child matched a slot declared `Cardinality::Single`.
    #[error("only one {tag} child is allowed here, found {count}")]
    CardinalityViolation { tag: TypeTag, count: usize },

    /// A host that announces itself to assistive technology has neither
    /// selectable content nor a description to announce.
    #[error("{host} with no Option children requires a non-empty description")]
    MissingDescription { host: &'static str },
}

/// Result type for composition operations.
pub type Result<T, E = CompositionError> = std::result::Result<T, E>;
