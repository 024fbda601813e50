//! Keyboard Module - Process-wide key dispatch for active hosts.
//!
//! Hosts that react to keys (Menu, Drawer) register a handler scope while
//! they are active and deregister it when they deactivate. The embedding
//! application feeds events in through `dispatch`; this module does NOT
//! own any input source.
//!
//! Scopes are ordered by activation recency: the most recently registered
//! scope sees each event first, and a handler returning true consumes the
//! event and stops propagation. When several hosts are active at once the
//! last one registered wins; there is no z-order or stacking discipline
//! beyond that.
//!
//! # Example
//!
//! ```
//! use trellis_ui::state::keyboard::{self, KeyEvent};
//!
//! let cleanup = keyboard::on_scope(|event| {
//!     if event.key == "Escape" {
//!         // react to the key
//!         return true; // consume
//!     }
//!     false
//! });
//!
//! assert!(keyboard::dispatch(KeyEvent::new("Escape")));
//! cleanup();
//! # keyboard::reset_keyboard_state();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

// =============================================================================
// TYPES
// =============================================================================

bitflags::bitflags! {
    /// Modifier keys as a bitfield for cheap storage and comparison.
    ///
    /// Combine with bitwise OR: `Modifiers::CTRL | Modifiers::SHIFT`
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Modifiers: u8 {
        const NONE = 0;
        const CTRL = 1 << 0;
        const ALT = 1 << 1;
        const SHIFT = 1 << 2;
        const META = 1 << 3;
    }
}

/// A keyboard event fed in by the embedding application.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyEvent {
    /// The key that was pressed (e.g., "a", "Enter", "Home").
    pub key: String,
    /// Modifier keys held during the press.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// Create a plain key press event.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::NONE,
        }
    }

    /// Create a key press with modifiers.
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
        }
    }
}

/// Scope handler. Return true to consume the event.
type ScopeHandler = Rc<dyn Fn(&KeyEvent) -> bool>;

// =============================================================================
// SCOPE REGISTRY
// =============================================================================

struct ScopeRegistry {
    /// Scopes in activation order; dispatch walks this back to front.
    scopes: Vec<(usize, ScopeHandler)>,
    next_id: usize,
}

impl ScopeRegistry {
    fn new() -> Self {
        Self {
            scopes: Vec::new(),
            next_id: 0,
        }
    }

    fn next_id(&mut self) -> usize {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

thread_local! {
    static REGISTRY: RefCell<ScopeRegistry> = RefCell::new(ScopeRegistry::new());

    static LAST_EVENT: RefCell<Option<KeyEvent>> = const { RefCell::new(None) };
}

// =============================================================================
// EVENT DISPATCH
// =============================================================================

/// Dispatch a keyboard event through the active scopes, most recent
/// first. Returns true if any scope consumed the event.
///
/// Handlers run outside the registry lock, so a handler may register or
/// deregister scopes. A scope registered during dispatch sees the next
/// event; a scope removed during dispatch may still see the current one.
pub fn dispatch(event: KeyEvent) -> bool {
    LAST_EVENT.with(|last| {
        *last.borrow_mut() = Some(event.clone());
    });

    let snapshot: Vec<ScopeHandler> = REGISTRY.with(|reg| {
        reg.borrow()
            .scopes
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect()
    });

    for handler in snapshot.iter().rev() {
        if handler(&event) {
            log::trace!("key '{}' consumed", event.key);
            return true;
        }
    }
    false
}

/// Get the last dispatched event, consumed or not.
pub fn last_event() -> Option<KeyEvent> {
    LAST_EVENT.with(|last| last.borrow().clone())
}

/// Get the last dispatched key.
pub fn last_key() -> String {
    last_event().map(|e| e.key).unwrap_or_default()
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Register a handler scope at the top of the recency order.
/// Return true from the handler to consume an event.
/// Returns a cleanup function that deregisters the scope.
pub fn on_scope<F>(handler: F) -> impl FnOnce()
where
    F: Fn(&KeyEvent) -> bool + 'static,
{
    let id = REGISTRY.with(|reg| {
        let mut reg = reg.borrow_mut();
        let id = reg.next_id();
        reg.scopes.push((id, Rc::new(handler)));
        log::debug!("keyboard scope {} registered ({} active)", id, reg.scopes.len());
        id
    });

    move || {
        REGISTRY.with(|reg| {
            let mut reg = reg.borrow_mut();
            reg.scopes.retain(|(scope_id, _)| *scope_id != id);
            log::debug!("keyboard scope {} removed ({} active)", id, reg.scopes.len());
        });
    }
}

/// Number of currently active scopes.
pub fn active_scopes() -> usize {
    REGISTRY.with(|reg| reg.borrow().scopes.len())
}

/// Clear all scopes and event state.
pub fn cleanup() {
    REGISTRY.with(|reg| {
        reg.borrow_mut().scopes.clear();
    });
    LAST_EVENT.with(|last| {
        *last.borrow_mut() = None;
    });
}

/// Reset keyboard state (for testing).
pub fn reset_keyboard_state() {
    cleanup();
    REGISTRY.with(|reg| {
        reg.borrow_mut().next_id = 0;
    });
}

// =============================================================================
// TESTS
// =============================================================================
