//! Composition Engine - Classification, extraction, recomposition.
//!
//! The engine is the shared mechanism every host widget is built on:
//!
//! - **classify** - Partition children by recognized tag, indices kept
//! - **extract** - Pull singleton slots, enforce cardinality
//! - **compose** - Merge the remainder back in author order, inject props
//! - **boundary** - Identify first/last for Home/End navigation
//! - **arrange** - All of the above in one call
//!
//! # Pipeline
//!
//! ```text
//! children → classify → Partition → extract → (Singletons, remainder)
//!                                                      │
//!                                  compose + inject ◄──┘
//!                                        │
//!                              sequence → boundary → Arrangement
//! ```
//!
//! The engine never mutates its input and never caches its output. Hosts
//! re-run it on every build pass; all ordering guarantees flow from the
//! original child indices recorded at classification time.

mod arrange;
mod boundary;
mod classify;
mod compose;
mod extract;

pub use arrange::*;
pub use boundary::*;
pub use classify::*;
pub use compose::*;
pub use extract::*;
