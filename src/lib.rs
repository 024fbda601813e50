//! # trellis-ui
//!
//! Slot-based widget composition engine for Rust UI trees.
//!
//! Composite widgets (Menu, Drawer, Table) take an opaque list of child
//! nodes, classify each child by its type tag, enforce slot cardinality,
//! and emit a fresh render tree. Singleton slots (Header, Footer) are
//! relocated to fixed positions; repeatable slots (Option) and anything
//! unrecognized stay exactly where the author put them.
//!
//! ## Architecture
//!
//! Composition is a one-way pipeline, recomputed from scratch on every
//! render pass:
//! ```text
//! children → classify → extract → compose (+inject) → boundary → host tree
//! ```
//!
//! Nothing in the pipeline mutates caller nodes; every transformation
//! clones with overrides. The only stateful pieces live in [`state`]:
//! a process-wide keyboard scope registry and a deterministic timer
//! queue driving the Drawer's two-phase open/close.
//!
//! ## Modules
//!
//! - [`types`] - Core enums (TypeTag, Cardinality, Orientation, DrawerKind)
//! - [`node`] - Node tree, ordered props, style layering, handlers
//! - [`engine`] - Classifier, slot extractor, composer, boundary assignment
//! - [`state`] - Keyboard dispatch and the timer queue
//! - [`widgets`] - Menu, Drawer, Table hosts plus leaf constructors

pub mod engine;
pub mod error;
pub mod node;
pub mod state;
pub mod types;
pub mod widgets;

// Re-export commonly used items
pub use types::*;

pub use error::{CompositionError, Result};

pub use node::{Handler, Node, PropValue, Props};

pub use engine::{
    arrange, assign_boundary, classify, compose, extract, Arrangement, Boundary, InjectContext,
    Injectors, Match, Partition, Singletons, SlotDeclarations,
};

pub use state::{
    keyboard::{dispatch as dispatch_keyboard, last_event, last_key, on_scope},
    CancelToken, KeyEvent, Modifiers, TimerId,
};

pub use widgets::{
    checkbox, footer, header, option, radio, text, view, Drawer, DrawerProps, Menu, MenuProps,
    Table, TableProps, Teardown,
};
