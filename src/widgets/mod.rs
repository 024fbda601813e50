//! Widgets Module - Composite hosts and leaf constructors
//!
//! Hosts own composition: they classify their children, enforce slot
//! cardinality, and emit a fresh tree per render pass.
//!
//! - **Menu** - labelled option list with Header/Footer slots
//! - **Drawer** - edge-anchored panel with two-phase open/close
//! - **Table** - paged rows of text cells
//!
//! Leaves (view, text, checkbox, radio) and slot fillers (header,
//! footer, option) are plain constructors returning tagged nodes.

mod drawer;
mod leaves;
mod menu;
mod slots;
mod table;

pub use drawer::*;
pub use leaves::*;
pub use menu::*;
pub use slots::*;
pub use table::*;

/// Deregistration closure returned by host activation paths. Call it to
/// release whatever the host registered.
pub type Teardown = Box<dyn FnOnce()>;
