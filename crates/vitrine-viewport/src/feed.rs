#![forbid(unsafe_code)]

//! Shared resize feed: the concrete [`ViewportSource`] for a real host.
//!
//! # Design
//!
//! The hosting event loop pushes every resize notification it receives into
//! the feed via [`ResizeFeed::push_resize`]. The feed tracks the current
//! width in shared, reference-counted storage (`Rc<RefCell<..>>`) and
//! dispatches to watchers **only when their threshold is crossed** — a
//! resize from 120 to 100 columns is silent for a watcher at 80.
//!
//! Cloning a `ResizeFeed` creates a new handle to the **same** inner state;
//! both handles see the same width and share watchers.
//!
//! # Invariants
//!
//! 1. A watcher is fired iff the pushed width puts it on the other side of
//!    its threshold than the last state it was told about (or observed at
//!    registration).
//! 2. Watchers fire in registration order, one at a time, outside any
//!    interior borrow — a handler may freely query the feed.
//! 3. Dead watchers (dropped [`WatchGuard`]s) never fire and are pruned
//!    lazily during dispatch.
//!
//! # Failure Modes
//!
//! - **Re-entrant push**: calling `push_resize` from within a watcher
//!   handler will panic (`RefCell` borrow rules). Re-entrant resizes
//!   indicate a design bug in the hosting loop.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

use crate::source::{ViewportError, ViewportSource, WatchGuard, WatchHandler};

/// One registered threshold watch.
struct Watcher {
    threshold: u16,
    /// Last match-state this watcher was told about (or saw at registration).
    matched: bool,
    handler: Weak<dyn Fn(bool)>,
}

struct FeedInner {
    width: u16,
    /// Watchers stored as weak references. Dead entries are pruned on push.
    watchers: Vec<Watcher>,
}

/// A cloneable handle to the shared resize state of one host viewport.
pub struct ResizeFeed {
    inner: Rc<RefCell<FeedInner>>,
}

// Manual Clone: shares the same Rc.
impl Clone for ResizeFeed {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl std::fmt::Debug for ResizeFeed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("ResizeFeed")
            .field("width", &inner.width)
            .field("watcher_count", &inner.watchers.len())
            .finish()
    }
}

impl ResizeFeed {
    /// Create a feed starting from a known width.
    #[must_use]
    pub fn new(width: u16) -> Self {
        Self {
            inner: Rc::new(RefCell::new(FeedInner {
                width,
                watchers: Vec::new(),
            })),
        }
    }

    /// Create a feed seeded from the host terminal's current width.
    ///
    /// # Errors
    ///
    /// Returns [`ViewportError::HostUnavailable`] when the host has no
    /// queryable terminal (e.g. output is redirected). There is no fallback
    /// width; the caller decides whether to abort.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_terminal() -> Result<Self, ViewportError> {
        let (cols, _rows) = crossterm::terminal::size()
            .map_err(|e| ViewportError::HostUnavailable(e.to_string()))?;
        Ok(Self::new(cols))
    }

    /// Last pushed (or seeded) width, in columns.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.inner.borrow().width
    }

    /// Number of currently registered watchers (including dead ones not
    /// yet pruned).
    #[must_use]
    pub fn watcher_count(&self) -> usize {
        self.inner.borrow().watchers.len()
    }

    /// Deliver a host resize notification.
    ///
    /// Updates the stored width, then fires every live watcher whose
    /// threshold the new width crosses, in registration order, with the
    /// new match-state. Handlers run outside the interior borrow.
    ///
    /// # Panics
    ///
    /// Panics if called re-entrantly from within a watcher handler.
    pub fn push_resize(&self, width: u16) {
        // Decide deliveries under the borrow; call handlers outside it.
        let fired: Vec<(WatchHandler, bool)> = {
            let mut inner = self.inner.borrow_mut();
            inner.width = width;
            inner.watchers.retain(|w| w.handler.strong_count() > 0);
            let mut fired = Vec::new();
            for w in &mut inner.watchers {
                let matched = width <= w.threshold;
                if matched != w.matched {
                    w.matched = matched;
                    if let Some(handler) = w.handler.upgrade() {
                        fired.push((handler, matched));
                    }
                }
            }
            fired
        };
        trace!(width, crossings = fired.len(), "resize");
        for (handler, matched) in fired {
            handler(matched);
        }
    }
}

impl ViewportSource for ResizeFeed {
    fn matches(&self, threshold: u16) -> bool {
        self.inner.borrow().width <= threshold
    }

    fn watch(&self, threshold: u16, handler: WatchHandler) -> WatchGuard {
        let mut inner = self.inner.borrow_mut();
        let matched = inner.width <= threshold;
        inner.watchers.push(Watcher {
            threshold,
            matched,
            handler: Rc::downgrade(&handler),
        });
        drop(inner);
        WatchGuard::new(handler)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
