//! Boundary assignment - first and last of the composed sequence.
//!
//! Home/End style navigation needs to know where a host's repeatable
//! content begins and ends. Assignment is pure identification: it clones
//! the boundary nodes out of the sequence and changes no state. What a
//! caller does with them (typically: ask the embedder to focus one) is
//! its own business.

use crate::node::Node;

// =============================================================================
// Boundary
// =============================================================================

/// The first and last nodes of a composed sequence.
///
/// Handles are clones valid for the build pass that produced them; they
/// carry no identity beyond the author's optional `key` prop. A
/// single-node sequence is its own first and last. An empty sequence has
/// neither.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Boundary {
    pub first: Option<Node>,
    pub last: Option<Node>,
}

impl Boundary {
    /// Check if the sequence had no nodes to bound.
    pub fn is_empty(&self) -> bool {
        self.first.is_none()
    }
}

/// Identify the boundary of a composed sequence.
pub fn assign_boundary(sequence: &[Node]) -> Boundary {
    Boundary {
        first: sequence.first().cloned(),
        last: sequence.last().cloned(),
    }
}

// =============================================================================
// Tests
// =============================================================================
