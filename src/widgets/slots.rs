//! Slot Widgets - Header, Footer, Option constructors.
//!
//! These tags are what hosts recognize: Header and Footer fill singleton
//! slots (at most one each per host), Option fills the repeatable slot.
//! The constructors only build plainly tagged nodes; cardinality is
//! enforced by the host that receives them.

use crate::node::Node;
use crate::types::TypeTag;

use super::leaves::text;

/// Header slot filler, relocated above the host's main content.
pub fn header(children: impl IntoIterator<Item = Node>) -> Node {
    Node::new(TypeTag::Header).append(children)
}

/// Footer slot filler, relocated below the host's main content.
pub fn footer(children: impl IntoIterator<Item = Node>) -> Node {
    Node::new(TypeTag::Footer).append(children)
}

/// Selectable entry for list-shaped hosts.
///
/// The label becomes a text child; selection identity and `on_click`
/// are author props chained on the returned node.
pub fn option(label: impl Into<String>) -> Node {
    Node::new(TypeTag::Option).child(text(label))
}

// =============================================================================
// Tests
// =============================================================================
