//! Singleton slot extraction with cardinality enforcement.
//!
//! Hosts declare which tags they accept and whether each tag may appear
//! once (`Single`) or any number of times (`Many`). Extraction pulls the
//! single-occupancy slots out of a partition so the host can place them
//! at fixed structural positions; everything else stays behind as the
//! repeatable remainder.
//!
//! An absent singleton is not an error, the slot is simply empty. Two or
//! more matches for a singleton abort the whole composition: no partial
//! tree is ever produced.

use indexmap::IndexMap;

use crate::engine::classify::Partition;
use crate::error::{CompositionError, Result};
use crate::node::Node;
use crate::types::{Cardinality, TypeTag};

// =============================================================================
// SlotDeclarations
// =============================================================================

/// The slots a host declares, in declaration order.
///
/// Declaration order is meaningful twice over: it fixes bucket order in
/// the partition and decides which violation is reported first when
/// several slots are overfilled.
#[derive(Debug, Clone, Default)]
pub struct SlotDeclarations {
    decls: IndexMap<TypeTag, Cardinality>,
}

impl SlotDeclarations {
    /// Create an empty declaration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a slot. Chainable; redeclaring a tag replaces its
    /// cardinality but keeps its position.
    pub fn declare(mut self, tag: TypeTag, cardinality: Cardinality) -> Self {
        self.decls.insert(tag, cardinality);
        self
    }

    /// Declare a single-occupancy slot. Chainable.
    pub fn single(self, tag: TypeTag) -> Self {
        self.declare(tag, Cardinality::Single)
    }

    /// Declare a repeatable slot. Chainable.
    pub fn many(self, tag: TypeTag) -> Self {
        self.declare(tag, Cardinality::Many)
    }

    /// Cardinality of a declared tag.
    pub fn cardinality(&self, tag: TypeTag) -> Option<Cardinality> {
        self.decls.get(&tag).copied()
    }

    /// Declared tags in declaration order. This is the recognized set a
    /// host feeds to classification.
    pub fn recognized(&self) -> Vec<TypeTag> {
        self.decls.keys().copied().collect()
    }

    /// Iterate declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (TypeTag, Cardinality)> + '_ {
        self.decls.iter().map(|(tag, card)| (*tag, *card))
    }

    /// Number of declared slots.
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Check if no slots are declared.
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

// =============================================================================
// Singletons
// =============================================================================

/// Extracted single-occupancy slot contents, keyed by tag.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Singletons {
    map: IndexMap<TypeTag, Node>,
}

impl Singletons {
    /// The node filling a slot, if the author supplied one.
    pub fn get(&self, tag: TypeTag) -> Option<&Node> {
        self.map.get(&tag)
    }

    /// Move a slot's node out, leaving the slot empty.
    pub fn take(&mut self, tag: TypeTag) -> Option<Node> {
        self.map.shift_remove(&tag)
    }

    /// Check if a slot was filled.
    pub fn contains(&self, tag: TypeTag) -> bool {
        self.map.contains_key(&tag)
    }

    /// Number of filled slots.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Check if no slots were filled.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// =============================================================================
// extract
// =============================================================================

/// Pull singleton slots out of `partition`.
///
/// Returns the extracted singletons and the remainder partition, which
/// keeps every `Many` bucket and the "other" bucket untouched. Fails with
/// [`CompositionError::CardinalityViolation`] if any `Single` slot
/// matched more than once; slots are checked in declaration order and
/// the first violation wins.
pub fn extract(
    mut partition: Partition,
    decls: &SlotDeclarations,
) -> Result<(Singletons, Partition)> {
    let mut singletons = Singletons::default();

    for (tag, cardinality) in decls.iter() {
        if !cardinality.is_single() {
            continue;
        }
        let mut matches = partition.take_bucket(tag);
        match matches.len() {
            // Absent slot: legal, host-level rules decide what it means.
            0 => {}
            1 => {
                singletons.map.insert(tag, matches.remove(0).node);
            }
            count => {
                return Err(CompositionError::CardinalityViolation { tag, count });
            }
        }
    }

    Ok((singletons, partition))
}

// =============================================================================
// Tests
// =============================================================================
