//! Node construction and clone-with-overrides.
//!
//! A `Node` is the unit the whole pipeline operates on: hosts receive
//! nodes as children, classify them by tag, and emit new nodes as output.
//! Nodes are plain data with no identity beyond an optional `key` prop;
//! cloning one is cheap enough that composition never mutates its input.

use crate::node::props::{PropValue, Props};
use crate::types::TypeTag;

// =============================================================================
// Node
// =============================================================================

/// A renderable tree node: a type tag, ordered props, ordered children.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Node {
    pub tag: TypeTag,
    pub props: Props,
    pub children: Vec<Node>,
}

impl Node {
    /// Create a node with no props or children.
    pub fn new(tag: TypeTag) -> Self {
        Self {
            tag,
            props: Props::new(),
            children: Vec::new(),
        }
    }

    /// Set a prop, consuming and returning the node for chaining.
    pub fn prop(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.set(key, value);
        self
    }

    /// Set one key inside the node's `style` map, creating the map if
    /// absent. Chainable.
    pub fn style(mut self, key: impl Into<String>, value: impl Into<PropValue>) -> Self {
        let mut style = match self.props.remove("style") {
            Some(PropValue::Style(existing)) => existing,
            _ => Props::new(),
        };
        style.set(key, value);
        self.props.set("style", style);
        self
    }

    /// Append one child. Chainable.
    pub fn child(mut self, node: Node) -> Self {
        self.children.push(node);
        self
    }

    /// Append children in order. Chainable.
    pub fn append(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Look up a prop by key.
    pub fn get(&self, key: &str) -> Option<&PropValue> {
        self.props.get(key)
    }

    /// The node's `style` map, if it carries one.
    pub fn style_map(&self) -> Option<&Props> {
        self.get("style").and_then(PropValue::as_style)
    }

    /// Optional stable identity supplied by the author via a `key` prop.
    pub fn key(&self) -> Option<&str> {
        self.get("key").and_then(PropValue::as_str)
    }

    /// Clone this node with `overrides` winning over its own props.
    ///
    /// Nested style maps merge key-by-key, see [`Props::layered`].
    pub fn with_overrides(&self, overrides: &Props) -> Node {
        Node {
            tag: self.tag,
            props: Props::layered(&[&self.props, overrides]),
            children: self.children.clone(),
        }
    }

    /// Clone this node with `defaults` underneath its own props: anything
    /// the author already set wins, computed defaults fill the gaps.
    ///
    /// This is the injection path hosts use when recomposing children.
    pub fn with_defaults(&self, defaults: &Props) -> Node {
        Node {
            tag: self.tag,
            props: Props::layered(&[defaults, &self.props]),
            children: self.children.clone(),
        }
    }

    /// Clone this node with a different child list.
    pub fn with_children(&self, children: Vec<Node>) -> Node {
        Node {
            tag: self.tag,
            props: self.props.clone(),
            children,
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
