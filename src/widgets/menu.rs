//! Menu Widget - List-shaped host with Header/Footer slots and Options.
//!
//! The menu is the interfacing host other composites build on: anything
//! that needs a labelled list of selectable entries renders one. Children
//! are classified per pass; Header and Footer are singleton slots pulled
//! to fixed positions, Option children stay in author order inside a
//! listbox container, everything else flows through untouched.
//!
//! A menu with no Option children at all operates in application mode:
//! its children render directly and it must carry a non-empty
//! `description`, since the structural role changes and cannot be
//! inferred from the child list.
//!
//! # Example
//!
//! ```
//! use trellis_ui::widgets::{Menu, MenuProps, option};
//!
//! let menu = Menu::new(
//!     MenuProps {
//!         label: "Actions".into(),
//!         ..Default::default()
//!     },
//!     vec![option("Copy"), option("Paste")],
//! );
//!
//! let tree = menu.render().unwrap();
//! assert_eq!(tree.get("label").unwrap().as_str(), Some("Actions"));
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::engine::{
    assign_boundary, classify, compose, extract, Boundary, Injectors, SlotDeclarations,
};
use crate::error::{CompositionError, Result};
use crate::node::{Handler, Node, PropValue, Props};
use crate::state::keyboard;
use crate::types::TypeTag;

use super::Teardown;

// =============================================================================
// Props
// =============================================================================

/// Configuration for [`Menu`].
#[derive(Debug, Clone, Default)]
pub struct MenuProps {
    /// Accessible name. Required.
    pub label: String,
    /// Wrap the option list in a navigation landmark.
    pub navigation: bool,
    /// Descriptive text. Required only in application mode (no options).
    pub description: Option<String>,
    /// Max height passthrough, merged beneath author style.
    pub height: Option<String>,
    /// Max width passthrough, merged beneath author style.
    pub width: Option<String>,
    /// Padding passthrough, merged beneath author style.
    pub padding: Option<String>,
    /// Author style, wins over the computed passthroughs.
    pub style: Props,
    /// Invoked when Escape is pressed while the menu is active.
    pub on_escape: Option<Handler>,
    /// Layered on top of each option's own `on_click`.
    pub on_option_select: Option<Handler>,
}

// =============================================================================
// Menu
// =============================================================================

/// List-shaped host. Recomputes its arrangement on every [`render`].
///
/// [`render`]: Menu::render
pub struct Menu {
    props: MenuProps,
    children: Vec<Node>,
    // Shared with the keyboard scope so Home/End always sees the nodes
    // of the latest render pass.
    boundary: Rc<RefCell<Boundary>>,
    has_options: Cell<bool>,
}

impl Menu {
    /// Create a menu over the given children.
    pub fn new(props: MenuProps, children: Vec<Node>) -> Self {
        Self {
            props,
            children,
            boundary: Rc::new(RefCell::new(Boundary::default())),
            has_options: Cell::new(false),
        }
    }

    /// Replace the child list for the next render pass.
    pub fn set_children(&mut self, children: Vec<Node>) {
        self.children = children;
    }

    fn slots() -> SlotDeclarations {
        SlotDeclarations::new()
            .single(TypeTag::Header)
            .single(TypeTag::Footer)
            .many(TypeTag::Option)
    }

    /// Build the menu tree for this pass.
    ///
    /// Fails with [`CompositionError::MissingDescription`] in application
    /// mode without a description, or with a cardinality violation when a
    /// singleton slot is claimed twice. No partial tree is produced.
    pub fn render(&self) -> Result<Node> {
        let decls = Self::slots();
        let partition = classify(&self.children, &decls.recognized());

        let has_options = !partition.bucket(TypeTag::Option).is_empty();
        self.has_options.set(has_options);

        // Application mode needs the description before anything else is
        // worth checking.
        if !has_options && self.props.description.as_deref().unwrap_or("").is_empty() {
            return Err(CompositionError::MissingDescription { host: "Menu" });
        }

        let (mut singletons, remainder) = extract(partition, &decls)?;
        let mut sequence = compose(remainder, &self.injectors());

        // Boundary markers for Home/End focus routing.
        if let Some(first) = sequence.first_mut() {
            *first = first.with_defaults(&Props::new().with("first", true));
        }
        if let Some(last) = sequence.last_mut() {
            *last = last.with_defaults(&Props::new().with("last", true));
        }
        *self.boundary.borrow_mut() = assign_boundary(&sequence);

        let content = if has_options {
            vec![Node::new(TypeTag::View)
                .prop("role", "listbox")
                .prop("label", self.props.label.as_str())
                .append(sequence)]
        } else {
            sequence
        };
        let content = if self.props.navigation {
            vec![Node::new(TypeTag::View)
                .prop("role", "navigation")
                .append(content)]
        } else {
            content
        };
        let inner = Node::new(TypeTag::View).append(content);

        let mut root = Node::new(TypeTag::Menu).prop("label", self.props.label.as_str());
        if !has_options {
            root = root.prop("role", "application");
        }
        if let Some(ref description) = self.props.description {
            root = root.prop("description", description.as_str());
        }

        let style = self.root_style();
        if !style.is_empty() {
            root = root.prop("style", style);
        }

        if let Some(head) = singletons.take(TypeTag::Header) {
            root = root.child(head);
        }
        root = root.child(inner);
        if let Some(foot) = singletons.take(TypeTag::Footer) {
            root = root.child(foot);
        }

        Ok(root)
    }

    /// Dimension passthroughs first, author style last.
    fn root_style(&self) -> Props {
        let mut computed = Props::new();
        if let Some(ref height) = self.props.height {
            computed.set("height", height.as_str());
        }
        if let Some(ref padding) = self.props.padding {
            computed.set("padding", padding.as_str());
        }
        if let Some(ref width) = self.props.width {
            computed.set("width", width.as_str());
        }
        Props::layered(&[&computed, &self.props.style])
    }

    /// Per-tag injectors for the composed sequence. The host's
    /// `on_option_select` runs after each option's own handler.
    fn injectors(&self) -> Injectors {
        match self.props.on_option_select.clone() {
            Some(select) => Injectors::new().on(TypeTag::Option, move |node, _ctx| {
                let layered = match node.get("on_click").and_then(PropValue::as_handler) {
                    Some(own) => own.then(&select),
                    None => select.clone(),
                };
                node.with_overrides(&Props::new().with("on_click", layered))
            }),
            None => Injectors::new(),
        }
    }

    /// First and last node of the latest composed sequence.
    pub fn boundary(&self) -> Boundary {
        self.boundary.borrow().clone()
    }

    /// Register the menu's keyboard scope.
    ///
    /// Escape routes to `on_escape`; Home and End hand the current
    /// boundary node to `focus`. Only menus with options listen, an
    /// application-mode menu returns a no-op teardown. Call after a
    /// render pass so the boundary is populated.
    pub fn activate(&self, focus: impl Fn(&Node) + 'static) -> Teardown {
        if !self.has_options.get() {
            log::trace!("menu: application mode, no keyboard scope");
            return Box::new(|| {});
        }

        let boundary = Rc::clone(&self.boundary);
        let on_escape = self.props.on_escape.clone();
        let cleanup = keyboard::on_scope(move |event| match event.key.as_str() {
            "Escape" => match on_escape {
                Some(ref handler) => {
                    handler.call();
                    true
                }
                None => false,
            },
            "Home" => {
                // Clone the handle out first: a focus hook may re-render
                // this menu, which rewrites the boundary.
                let first = boundary.borrow().first.clone();
                match first {
                    Some(node) => {
                        focus(&node);
                        true
                    }
                    None => false,
                }
            }
            "End" => {
                let last = boundary.borrow().last.clone();
                match last {
                    Some(node) => {
                        focus(&node);
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        });
        Box::new(cleanup)
    }
}

// =============================================================================
// Tests
// =============================================================================
