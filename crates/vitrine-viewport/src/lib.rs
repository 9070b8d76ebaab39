#![forbid(unsafe_code)]

//! Viewport breakpoint observation for Vitrine.
//!
//! # Role in Vitrine
//! `vitrine-viewport` is the responsive-layout layer. It answers one question
//! for the hosting UI — "is the viewport currently narrow?" — and keeps the
//! answer current as the host window resizes, without the UI polling.
//!
//! # Primary pieces
//! - [`ViewportSource`]: the platform boundary — a synchronous width query
//!   plus a subscribe/unsubscribe pair for threshold-crossing notifications.
//! - [`ResizeFeed`]: the concrete source. The host event loop pushes resize
//!   notifications in; the feed dispatches match-state changes to watchers
//!   on boundary crossings only.
//! - [`ViewportObserver`]: the unit the UI owns. Reads its initial state
//!   synchronously at construction, subscribes on `activate()`, and exposes
//!   the latest match-state via `is_mobile()`.
//!
//! # How it fits in the system
//! The showcase app (`vitrine-showcase`) creates one observer per mounted
//! view and binds `activate()`/`deactivate()` to its own mount/unmount
//! points. Nothing else in the system depends on this crate.

pub mod feed;
pub mod observer;
pub mod source;

pub use feed::ResizeFeed;
pub use observer::ViewportObserver;
pub use source::{ViewportError, ViewportSource, WatchGuard, WatchHandler};
