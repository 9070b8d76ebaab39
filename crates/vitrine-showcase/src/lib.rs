#![forbid(unsafe_code)]

//! Vitrine showcase library.
//!
//! # Role in Vitrine
//! `vitrine-showcase` is the hosting application: a set of independent demo
//! pages reached through a static route table, with chrome that adapts to
//! the viewport via `vitrine-viewport`.
//!
//! # How it fits in the system
//! The route table ([`router`]) is pure declarative plumbing — path in,
//! screen identifier out, no guards or redirects. The app model ([`app`])
//! owns one [`vitrine_viewport::ViewportObserver`] and binds its
//! activate/deactivate lifecycle to the model's own mount/unmount points.
//! Page internals (game, codecs, audio, drawing, 3D) are independent,
//! swappable collaborators and live outside this crate.

pub mod app;
pub mod router;
