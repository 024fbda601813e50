//! Node Module - The renderable tree hosts consume and produce.
//!
//! - **Node** - Type tag, ordered props, ordered children
//! - **Props** - Insertion-ordered property map with layered merging
//! - **PropValue** - Plain data, nested style maps, opaque handlers
//!
//! Everything here is rendering-agnostic: props are opaque tokens to the
//! library, and a node tree can be fed to any renderer that understands
//! the tags.

mod props;
mod tree;

pub use props::*;
pub use tree::*;
