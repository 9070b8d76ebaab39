#![forbid(unsafe_code)]

//! The platform boundary: a width query plus a crossing-notification stream.
//!
//! [`ViewportSource`] is the only capability the observer consumes. A real
//! host implements it over its resize events ([`crate::ResizeFeed`]); tests
//! implement it with a fake and drive crossings by hand.
//!
//! Subscription mechanics: the source keeps handlers as `Weak` references,
//! while the [`WatchGuard`] handed back to the subscriber holds the only
//! strong one. Dropping the guard unsubscribes immediately — a dead handler
//! can no longer be upgraded, so no delivery reaches it even if the source
//! has already accepted the event that would have fired it.

use std::rc::Rc;

/// Handler invoked with the new match-state on each threshold crossing.
pub type WatchHandler = Rc<dyn Fn(bool)>;

/// A capability exposing viewport width as a query and a change stream.
pub trait ViewportSource {
    /// Is the viewport currently at or below `threshold` columns?
    fn matches(&self, threshold: u16) -> bool;

    /// Register `handler` to be invoked with the new boolean match-state
    /// every time the viewport crosses `threshold` in either direction.
    ///
    /// Crossings only: a resize that stays on the same side of the
    /// threshold must not fire the handler. The handler stays registered
    /// while the returned guard is alive.
    fn watch(&self, threshold: u16, handler: WatchHandler) -> WatchGuard;
}

/// RAII subscription handle for a watched threshold.
///
/// Exclusively owned by the subscriber; dropping it unsubscribes.
pub struct WatchGuard {
    _handler: WatchHandler,
}

impl WatchGuard {
    /// Wrap the strong handler reference a source has just downgraded.
    /// Called by [`ViewportSource`] implementations, including fakes.
    #[must_use]
    pub fn new(handler: WatchHandler) -> Self {
        Self { _handler: handler }
    }
}

impl std::fmt::Debug for WatchGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WatchGuard").finish_non_exhaustive()
    }
}

/// Errors from the platform boundary.
///
/// There is no degraded mode: a source that cannot observe the host
/// viewport fails loudly rather than handing out a flag that silently
/// stops tracking reality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewportError {
    /// The host has no queryable viewport (e.g. stdout is not a terminal).
    HostUnavailable(String),
}

impl std::fmt::Display for ViewportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::HostUnavailable(msg) => {
                write!(f, "viewport unavailable in this host: {msg}")
            }
        }
    }
}

impl std::error::Error for ViewportError {}
