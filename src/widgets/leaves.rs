//! Leaf Widgets - View, Text, Checkbox, Radio constructors.
//!
//! Leaves are plain node constructors with no composition logic of their
//! own. Hosts classify them like any other child: none of these tags is
//! a recognized slot, so they flow through the "other" bucket and render
//! where the author put them.
//!
//! # Example
//!
//! ```
//! use trellis_ui::widgets::{checkbox, view};
//!
//! let form = view([
//!     checkbox("calendar", "Add to calendar").prop("checked", true),
//!     checkbox("reminder", "Set a reminder"),
//! ]);
//! assert_eq!(form.children.len(), 2);
//! ```

use crate::node::Node;
use crate::types::TypeTag;

/// Plain passthrough container.
pub fn view(children: impl IntoIterator<Item = Node>) -> Node {
    Node::new(TypeTag::View).append(children)
}

/// Text leaf carrying a `content` prop.
pub fn text(content: impl Into<String>) -> Node {
    Node::new(TypeTag::Text).prop("content", content.into())
}

/// Checkbox input with its label wrapped in an inline text node.
///
/// `value` identifies the box inside its form group. Check state and
/// `disabled` are author props, chain them on the returned node.
pub fn checkbox(value: impl Into<String>, label: impl Into<String>) -> Node {
    Node::new(TypeTag::Checkbox)
        .prop("value", value.into())
        .child(labelled(label))
}

/// Radio input. Same shape as [`checkbox`], but the value is the one
/// the whole group reports when this entry is selected.
pub fn radio(value: impl Into<String>, label: impl Into<String>) -> Node {
    Node::new(TypeTag::Radio)
        .prop("value", value.into())
        .child(labelled(label))
}

/// Inline label text placed next to an input glyph.
fn labelled(label: impl Into<String>) -> Node {
    text(label).prop("inline", true).prop("margins", true)
}

// =============================================================================
// Tests
// =============================================================================
