//! State Module - Runtime state shared across host instances
//!
//! This module contains the thread-local systems that power interactivity:
//!
//! - **Keyboard** - Event types, scope registry, most-recent-first dispatch
//! - **Timers** - Deterministic deferred execution for host transitions
//!
//! Both are deliberately namespaced: call sites read as
//! `keyboard::dispatch(..)` and `timers::schedule(..)`.

pub mod keyboard;
pub mod timers;

pub use keyboard::{KeyEvent, Modifiers};
pub use timers::{CancelToken, TimerId};
