//! Core types for trellis-ui.
//!
//! These types define the foundation that everything builds on.
//! They flow through the classification pipeline and define what host
//! widgets understand about their children.

use std::fmt;

// =============================================================================
// TypeTag - Component identity
// =============================================================================

/// Stable component identity attached to every node.
///
/// Hosts classify their children by comparing tags against a recognized
/// set. `None` marks nodes the library did not produce (or that carry no
/// identity); classification routes those to the "other" bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum TypeTag {
    #[default]
    None = 0,
    View = 1,
    Text = 2,
    Header = 3,
    Footer = 4,
    Option = 5,
    Checkbox = 6,
    Radio = 7,
    Menu = 8,
    Drawer = 9,
    Table = 10,
}

impl TypeTag {
    /// Human-readable tag name, used in error messages and logs.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::None => "None",
            Self::View => "View",
            Self::Text => "Text",
            Self::Header => "Header",
            Self::Footer => "Footer",
            Self::Option => "Option",
            Self::Checkbox => "Checkbox",
            Self::Radio => "Radio",
            Self::Menu => "Menu",
            Self::Drawer => "Drawer",
            Self::Table => "Table",
        }
    }
}

impl fmt::Display for TypeTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Cardinality - Slot occupancy rules
// =============================================================================

/// How many children may fill a declared slot.
///
/// `Single` slots are extracted out of the composed sequence (at most one
/// match is legal, zero means the slot is absent). `Many` slots stay in
/// the sequence in author order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    Single,
    Many,
}

impl Cardinality {
    /// Check if this slot admits at most one child.
    pub const fn is_single(&self) -> bool {
        matches!(self, Self::Single)
    }
}

// =============================================================================
// Orientation - Drawer anchor edge
// =============================================================================

/// Which edge of its container a drawer is anchored to.
///
/// The anchor edge determines the sliding axis: left/right drawers animate
/// their width, top/bottom drawers their height.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum Orientation {
    #[default]
    Left = 0,
    Right = 1,
    Top = 2,
    Bottom = 3,
}

impl Orientation {
    /// Style key of the dimension that grows and shrinks during
    /// open/close transitions.
    pub const fn slide_dimension(&self) -> &'static str {
        match self {
            Self::Left | Self::Right => "width",
            Self::Top | Self::Bottom => "height",
        }
    }

    /// Human-readable edge name, used as a structural prop value.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Top => "top",
            Self::Bottom => "bottom",
        }
    }
}

// =============================================================================
// DrawerKind - Drawer layout behavior
// =============================================================================

/// How a drawer participates in layout.
///
/// - `Overlay`: floats in front of the page behind a click-to-close
///   backdrop, mounted only while open.
/// - `Push`: shares layout with its siblings, mounted only while open.
/// - `Inline`: always mounted and visible; open/close requests are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[repr(u8)]
pub enum DrawerKind {
    #[default]
    Overlay = 0,
    Push = 1,
    Inline = 2,
}

impl DrawerKind {
    /// Overlay drawers render a backdrop behind the panel.
    pub const fn has_backdrop(&self) -> bool {
        matches!(self, Self::Overlay)
    }

    /// Inline drawers never unmount and ignore open/close toggles.
    pub const fn always_mounted(&self) -> bool {
        matches!(self, Self::Inline)
    }

    /// Structural prop value identifying the kind on rendered trees.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Overlay => "overlay",
            Self::Push => "push",
            Self::Inline => "inline",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // =========================================================================
    // TypeTag tests
    // =========================================================================

    #[test]
    fn test_type_tag_default_is_none() {
        assert_eq!(TypeTag::default(), TypeTag::None);
    }

    #[test]
    fn test_type_tag_display_matches_as_str() {
        let tags = [
            TypeTag::None,
            TypeTag::View,
            TypeTag::Text,
            TypeTag::Header,
            TypeTag::Footer,
            TypeTag::Option,
            TypeTag::Checkbox,
            TypeTag::Radio,
            TypeTag::Menu,
            TypeTag::Drawer,
            TypeTag::Table,
        ];
        for tag in tags {
            assert_eq!(format!("{tag}"), tag.as_str());
        }
    }

    // =========================================================================
    // Cardinality tests
    // =========================================================================

    #[test]
    fn test_cardinality_is_single() {
        assert!(Cardinality::Single.is_single());
        assert!(!Cardinality::Many.is_single());
    }

    // =========================================================================
    // Orientation tests
    // =========================================================================

    #[test]
    fn test_orientation_slide_dimension() {
        assert_eq!(Orientation::Left.slide_dimension(), "width");
        assert_eq!(Orientation::Right.slide_dimension(), "width");
        assert_eq!(Orientation::Top.slide_dimension(), "height");
        assert_eq!(Orientation::Bottom.slide_dimension(), "height");
    }

    #[test]
    fn test_orientation_default_is_left() {
        assert_eq!(Orientation::default(), Orientation::Left);
    }

    // =========================================================================
    // DrawerKind tests
    // =========================================================================

    #[test]
    fn test_drawer_kind_backdrop_only_for_overlay() {
        assert!(DrawerKind::Overlay.has_backdrop());
        assert!(!DrawerKind::Push.has_backdrop());
        assert!(!DrawerKind::Inline.has_backdrop());
    }

    #[test]
    fn test_drawer_kind_inline_always_mounted() {
        assert!(DrawerKind::Inline.always_mounted());
        assert!(!DrawerKind::Overlay.always_mounted());
        assert!(!DrawerKind::Push.always_mounted());
    }
}
