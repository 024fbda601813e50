//! Child classification - partition children by recognized type tags.
//!
//! Classification is the first pipeline stage. It walks a host's direct
//! children once, routing each node into the bucket for its tag (when the
//! host recognizes that tag) or into the "other" bucket (when it does
//! not), and records every node's original position so later stages can
//! restore author order exactly.
//!
//! Only direct children are inspected. A recognized child owns its whole
//! subtree; descending into it would let the same node register twice.

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::node::Node;
use crate::types::TypeTag;

/// Per-tag match storage. Hosts see a handful of children per tag, so
/// matches stay inline.
type Bucket = SmallVec<[Match; 4]>;

// =============================================================================
// Match
// =============================================================================

/// One classified child: the node plus its position in the original
/// child list.
///
/// `original_index` is the thread that ties the pipeline together. It is
/// what lets extraction and recomposition shuffle nodes between buckets
/// without ever losing the order the author wrote.
#[derive(Debug, Clone, PartialEq)]
pub struct Match {
    pub node: Node,
    pub original_index: usize,
}

// =============================================================================
// Partition
// =============================================================================

/// The result of classifying a child list.
///
/// Every input node lands in exactly one place: the bucket for its tag,
/// or `other`. Within each bucket, matches keep their relative input
/// order. Buckets exist for every recognized tag even when no child
/// matched, so lookups are total over the declared set.
#[derive(Debug, Default)]
pub struct Partition {
    buckets: IndexMap<TypeTag, Bucket>,
    other: Bucket,
}

impl Partition {
    /// Matches for a recognized tag, in original order.
    ///
    /// Returns an empty slice for tags the host never declared.
    pub fn bucket(&self, tag: TypeTag) -> &[Match] {
        self.buckets.get(&tag).map(|b| b.as_slice()).unwrap_or(&[])
    }

    /// Matches whose tag no bucket recognized, in original order.
    pub fn other(&self) -> &[Match] {
        &self.other
    }

    /// Tags this partition recognizes, in declaration order.
    pub fn recognized(&self) -> impl Iterator<Item = TypeTag> + '_ {
        self.buckets.keys().copied()
    }

    /// Total number of classified matches across all buckets and `other`.
    pub fn len(&self) -> usize {
        self.buckets.values().map(|b| b.len()).sum::<usize>() + self.other.len()
    }

    /// Check if no children were classified.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Remove and return a tag's matches, dropping the bucket.
    ///
    /// Extraction uses this to pull singleton slots out of the partition;
    /// whatever remains is the repeatable remainder.
    pub fn take_bucket(&mut self, tag: TypeTag) -> Vec<Match> {
        self.buckets
            .shift_remove(&tag)
            .map(SmallVec::into_vec)
            .unwrap_or_default()
    }

    /// Consume the partition, merging every match back into one list
    /// sorted by original position.
    pub fn into_matches(self) -> Vec<Match> {
        let mut all: Vec<Match> = self.buckets.into_values().flatten().collect();
        all.extend(self.other);
        all.sort_by_key(|m| m.original_index);
        all
    }
}

// =============================================================================
// classify
// =============================================================================

/// Partition `children` into per-tag buckets plus an "other" bucket.
///
/// One pass, no recursion: each direct child is cloned into the bucket
/// for its tag if `recognized` contains that tag, otherwise into `other`.
/// Duplicate tags in `recognized` collapse into one bucket. The input is
/// never mutated; hosts may classify the same child list any number of
/// times.
pub fn classify(children: &[Node], recognized: &[TypeTag]) -> Partition {
    let mut buckets: IndexMap<TypeTag, Bucket> = IndexMap::with_capacity(recognized.len());
    for &tag in recognized {
        buckets.entry(tag).or_default();
    }

    let mut other = Bucket::new();
    for (original_index, node) in children.iter().enumerate() {
        let matched = Match {
            node: node.clone(),
            original_index,
        };
        match buckets.get_mut(&node.tag) {
            Some(bucket) => bucket.push(matched),
            None => other.push(matched),
        }
    }

    log::trace!(
        "classified {} children into {} buckets ({} unrecognized)",
        children.len(),
        buckets.len(),
        other.len()
    );

    Partition { buckets, other }
}

// =============================================================================
// Tests
// =============================================================================
