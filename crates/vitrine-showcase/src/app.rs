#![forbid(unsafe_code)]

//! Application model: current screen, viewport-aware chrome, lifecycle.
//!
//! [`AppModel`] is the hosting UI element for the viewport observer: the
//! observer is created (and takes its synchronous initial reading) in
//! [`AppModel::new`], begins observing in [`AppModel::mount`], and stops in
//! [`AppModel::unmount`]. The model never polls — between resizes,
//! [`AppModel::layout_mode`] reads whatever state the observer last
//! processed.

use tracing::debug;
use vitrine_viewport::{ResizeFeed, ViewportObserver};

use crate::router::{self, ScreenId};

/// How the chrome lays itself out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    /// Full titles and paths.
    Wide,
    /// Short tab labels only.
    Compact,
}

/// Top-level model owning navigation state and the viewport observer.
pub struct AppModel {
    feed: ResizeFeed,
    observer: ViewportObserver,
    /// The screen currently routed to.
    pub current_screen: ScreenId,
    mounted: bool,
}

impl AppModel {
    /// Width at or below which the chrome collapses to compact labels.
    pub const COMPACT_THRESHOLD: u16 = 80;

    /// Build the model over a shared resize feed. The observer reads its
    /// initial state here, before anything renders.
    #[must_use]
    pub fn new(feed: ResizeFeed) -> Self {
        let observer =
            ViewportObserver::with_callback(feed.clone(), Self::COMPACT_THRESHOLD, || {
                debug!("layout breakpoint crossed");
            });
        Self {
            feed,
            observer,
            current_screen: ScreenId::Home,
            mounted: false,
        }
    }

    /// Attach: begin viewport observation.
    pub fn mount(&mut self) {
        self.observer.activate();
        self.mounted = true;
    }

    /// Detach: stop viewport observation. The model keeps its last state
    /// but no longer reacts to resizes.
    pub fn unmount(&mut self) {
        self.observer.deactivate();
        self.mounted = false;
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    /// Forward a host resize notification into the shared feed.
    pub fn handle_resize(&mut self, width: u16) {
        self.feed.push_resize(width);
    }

    /// Current chrome layout, derived from the observer's latest state.
    #[must_use]
    pub fn layout_mode(&self) -> LayoutMode {
        if self.observer.is_mobile() {
            LayoutMode::Compact
        } else {
            LayoutMode::Wide
        }
    }

    /// Route to a path. Returns `false` (and stays put) for unknown paths.
    pub fn navigate(&mut self, path: &str) -> bool {
        match router::resolve(path) {
            Some(screen) => {
                debug!(path, ?screen, "navigate");
                self.current_screen = screen;
                true
            }
            None => false,
        }
    }

    /// Cycle forward through the route table.
    pub fn next_screen(&mut self) {
        self.current_screen = self.current_screen.next();
    }

    /// Cycle backward through the route table.
    pub fn prev_screen(&mut self) {
        self.current_screen = self.current_screen.prev();
    }

    /// One-line status chrome for the current screen.
    pub fn status_line(&self) -> String {
        match self.layout_mode() {
            LayoutMode::Wide => format!(
                "{}  [{}]  ({}/{})",
                self.current_screen.title(),
                self.current_screen.path(),
                self.current_screen.index() + 1,
                ScreenId::ALL.len()
            ),
            LayoutMode::Compact => self.current_screen.tab_label().to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
