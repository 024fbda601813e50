//! Timer Module - Deterministic deferred execution for host transitions.
//!
//! Two-phase mount/visibility sequencing needs "run this later". The
//! queue is single-threaded and owns no clock: the embedding application
//! reports elapsed time through `advance`, and due callbacks fire
//! synchronously, in deadline order, on the caller's thread. Tests drive
//! time exactly the way production does.
//!
//! Callbacks outlive the scheduling call, so hosts pair every scheduled
//! mutation with a [`CancelToken`] and check it first. Cancelling a
//! token is the host saying "I am gone, do not touch my state", even if
//! the timer itself already left the queue.
//!
//! # Example
//!
//! ```
//! use trellis_ui::state::timers;
//!
//! let id = timers::schedule(300, || { /* deferred work */ });
//! timers::advance(299); // not yet
//! timers::advance(1);   // fires here
//! assert_eq!(timers::pending(), 0);
//! # let _ = id;
//! # timers::reset_timer_state();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

// =============================================================================
// TYPES
// =============================================================================

/// Identifier of a scheduled timer, usable with [`cancel`].
pub type TimerId = usize;

struct TimerEntry {
    id: TimerId,
    deadline_ms: u64,
    callback: Box<dyn FnOnce()>,
}

struct TimerQueue {
    entries: Vec<TimerEntry>,
    now_ms: u64,
    next_id: usize,
}

impl TimerQueue {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            now_ms: 0,
            next_id: 0,
        }
    }

    /// Index of the next entry due at or before `cutoff`: earliest
    /// deadline, ties broken by schedule order (ids are monotonic).
    fn next_due(&self, cutoff: u64) -> Option<usize> {
        self.entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.deadline_ms <= cutoff)
            .min_by_key(|(_, e)| (e.deadline_ms, e.id))
            .map(|(index, _)| index)
    }
}

thread_local! {
    static QUEUE: RefCell<TimerQueue> = RefCell::new(TimerQueue::new());
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Schedule `callback` to run `delay_ms` after the current queue time.
///
/// Zero-delay callbacks run on the next [`advance`], never synchronously
/// inside `schedule`.
pub fn schedule(delay_ms: u64, callback: impl FnOnce() + 'static) -> TimerId {
    QUEUE.with(|queue| {
        let mut queue = queue.borrow_mut();
        let id = queue.next_id;
        queue.next_id += 1;
        let deadline_ms = queue.now_ms + delay_ms;
        queue.entries.push(TimerEntry {
            id,
            deadline_ms,
            callback: Box::new(callback),
        });
        log::trace!("timer {} scheduled for {}ms (+{}ms)", id, deadline_ms, delay_ms);
        id
    })
}

/// Drop a pending timer. Returns true if it was still in the queue.
///
/// Cancelling an already-fired (or unknown) id is a no-op.
pub fn cancel(id: TimerId) -> bool {
    QUEUE.with(|queue| {
        let mut queue = queue.borrow_mut();
        let before = queue.entries.len();
        queue.entries.retain(|e| e.id != id);
        queue.entries.len() != before
    })
}

/// Advance the queue clock by `elapsed_ms` and fire everything that comes
/// due, in deadline order (ties in schedule order). The clock steps to
/// each entry's deadline as it fires and rests at the full target after
/// the drain, so a callback reads its own fire time from [`now`] and
/// anything it schedules is measured from that moment.
///
/// Callbacks run outside the queue lock, so they may schedule or cancel
/// freely; a callback scheduled inside `advance` still fires in the same
/// call if its deadline falls within the window.
pub fn advance(elapsed_ms: u64) {
    let target = QUEUE.with(|queue| queue.borrow().now_ms + elapsed_ms);

    loop {
        let due = QUEUE.with(|queue| {
            let mut queue = queue.borrow_mut();
            queue.next_due(target).map(|index| {
                let entry = queue.entries.swap_remove(index);
                queue.now_ms = queue.now_ms.max(entry.deadline_ms);
                entry
            })
        });

        match due {
            Some(entry) => {
                log::trace!("timer {} fired at {}ms", entry.id, now());
                (entry.callback)();
            }
            None => break,
        }
    }

    QUEUE.with(|queue| {
        queue.borrow_mut().now_ms = target;
    });
}

/// Current queue time in milliseconds.
pub fn now() -> u64 {
    QUEUE.with(|queue| queue.borrow().now_ms)
}

/// Number of timers waiting to fire.
pub fn pending() -> usize {
    QUEUE.with(|queue| queue.borrow().entries.len())
}

/// Drop all pending timers and rewind the clock (for testing).
pub fn reset_timer_state() {
    QUEUE.with(|queue| {
        *queue.borrow_mut() = TimerQueue::new();
    });
}

// =============================================================================
// CANCEL TOKEN
// =============================================================================

/// A shared liveness flag for deferred mutations.
///
/// Hosts keep one token per instance and move clones into every callback
/// they schedule. Teardown cancels the token; callbacks check it before
/// touching state, so a timer the queue already released can never
/// mutate a dead instance.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Rc<Cell<bool>>);

impl CancelToken {
    /// Create a live token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the instance as gone.
    pub fn cancel(&self) {
        self.0.set(true);
    }

    /// Check if the instance was torn down.
    pub fn is_cancelled(&self) -> bool {
        self.0.get()
    }
}

// =============================================================================
// TESTS
// =============================================================================
