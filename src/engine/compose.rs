//! Recomposition - merge the remainder back into one authored sequence.
//!
//! After extraction, the repeatable buckets and the "other" bucket still
//! carry their original indices. Composition merges them into a single
//! sequence sorted by those indices, so interleavings the author wrote
//! (option, divider, option) come back out exactly as written.
//!
//! On the way through, hosts may rewrite nodes per tag with injectors:
//! pure functions from a node and its composed position to a replacement
//! node. The usual injector clones the node with computed defaults
//! underneath its own props, so author values always win.

use indexmap::IndexMap;

use crate::engine::classify::Partition;
use crate::node::Node;
use crate::types::TypeTag;

// =============================================================================
// InjectContext
// =============================================================================

/// Position of a node within the composed sequence, handed to injectors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InjectContext {
    /// Index in the composed sequence (not the original child list).
    pub index: usize,
    /// Length of the composed sequence.
    pub len: usize,
}

impl InjectContext {
    /// Check if this is the first node of the sequence.
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Check if this is the last node of the sequence.
    pub fn is_last(&self) -> bool {
        self.index + 1 == self.len
    }
}

// =============================================================================
// Injectors
// =============================================================================

/// Per-tag node rewriters applied during composition.
type InjectFn = Box<dyn Fn(&Node, &InjectContext) -> Node>;

/// A tag-keyed set of injectors.
///
/// At most one injector per tag; nodes whose tag has no injector pass
/// through composition untouched.
#[derive(Default)]
pub struct Injectors {
    map: IndexMap<TypeTag, InjectFn>,
}

impl Injectors {
    /// Create an empty injector set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an injector for a tag. Chainable; registering the same
    /// tag twice keeps only the later injector.
    pub fn on(
        mut self,
        tag: TypeTag,
        inject: impl Fn(&Node, &InjectContext) -> Node + 'static,
    ) -> Self {
        self.map.insert(tag, Box::new(inject));
        self
    }

    /// Look up the injector for a tag.
    pub fn get(&self, tag: TypeTag) -> Option<&InjectFn> {
        self.map.get(&tag)
    }

    /// Check if no injectors are registered.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// =============================================================================
// compose
// =============================================================================

/// Merge a remainder partition into one sequence in original author
/// order, applying injectors along the way.
///
/// The output always has exactly as many nodes as the remainder held:
/// injectors replace nodes one-for-one, never add or drop them.
pub fn compose(remainder: Partition, injectors: &Injectors) -> Vec<Node> {
    let matches = remainder.into_matches();
    let len = matches.len();

    matches
        .into_iter()
        .enumerate()
        .map(|(index, m)| {
            let ctx = InjectContext { index, len };
            match injectors.get(m.node.tag) {
                Some(inject) => inject(&m.node, &ctx),
                None => m.node,
            }
        })
        .collect()
}

// =============================================================================
// Tests
// =============================================================================
