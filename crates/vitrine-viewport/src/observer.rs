#![forbid(unsafe_code)]

//! The breakpoint observer owned by a hosting view.
//!
//! # Design
//!
//! [`ViewportObserver`] is a single source of truth for "is the viewport
//! currently narrow," with deterministic setup and teardown tied to the
//! owner's own lifecycle:
//!
//! - **Construction** reads the current match-state synchronously, so the
//!   owner's very first render sees a correct value. No subscription exists
//!   yet.
//! - **`activate()`** subscribes to the source. The owner calls it from its
//!   mount point, exactly once per observer.
//! - Each delivered crossing updates `is_mobile` **before** the optional
//!   change callback runs, so code inside the callback always observes the
//!   new value.
//! - **`deactivate()`** drops the subscription guard. The observer is inert
//!   afterwards and not reusable; an owner that remounts creates a new one.
//!
//! The handler trusts the match-state carried by the event rather than
//! re-querying the source, so a burst of resizes cannot race the update.

use std::cell::Cell;
use std::rc::Rc;

use tracing::debug;

use crate::source::{ViewportSource, WatchGuard};

/// Observes whether the viewport is at or below a width threshold.
pub struct ViewportObserver {
    source: Box<dyn ViewportSource>,
    threshold: u16,
    state: Rc<Cell<bool>>,
    on_change: Rc<dyn Fn()>,
    watch: Option<WatchGuard>,
}

impl std::fmt::Debug for ViewportObserver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ViewportObserver")
            .field("threshold", &self.threshold)
            .field("is_mobile", &self.state.get())
            .field("active", &self.watch.is_some())
            .finish_non_exhaustive()
    }
}

impl ViewportObserver {
    /// Default narrow/wide boundary, in viewport width units.
    pub const DEFAULT_THRESHOLD: u16 = 768;

    /// Observer with the default threshold and no change callback.
    #[must_use]
    pub fn new(source: impl ViewportSource + 'static) -> Self {
        Self::with_threshold(source, Self::DEFAULT_THRESHOLD)
    }

    /// Observer with an explicit threshold and no change callback.
    ///
    /// Any threshold is accepted; an extreme value simply pins the observer
    /// to one side of the boundary.
    #[must_use]
    pub fn with_threshold(source: impl ViewportSource + 'static, threshold: u16) -> Self {
        Self::with_callback(source, threshold, || {})
    }

    /// Observer with an explicit threshold and a change callback.
    ///
    /// The callback is a pure side-effect hook, invoked with no arguments
    /// after every processed transition; it reads [`Self::is_mobile`] if it
    /// needs the value. The initial synchronous evaluation happens here,
    /// before the constructor returns.
    #[must_use]
    pub fn with_callback(
        source: impl ViewportSource + 'static,
        threshold: u16,
        on_change: impl Fn() + 'static,
    ) -> Self {
        let state = Rc::new(Cell::new(source.matches(threshold)));
        Self {
            source: Box::new(source),
            threshold,
            state,
            on_change: Rc::new(on_change),
            watch: None,
        }
    }

    /// Latest processed match-state. Safe to read at any time, including
    /// from within the change callback.
    #[must_use]
    pub fn is_mobile(&self) -> bool {
        self.state.get()
    }

    /// The configured boundary width.
    #[must_use]
    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Whether a subscription is currently held.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.watch.is_some()
    }

    /// Begin observation: subscribe to the source's crossing stream.
    ///
    /// Bound to the owner's mount point. Calling it while already active
    /// replaces the previous subscription; the contract assumes one
    /// activation per observer.
    pub fn activate(&mut self) {
        let state = Rc::clone(&self.state);
        let on_change = Rc::clone(&self.on_change);
        let threshold = self.threshold;
        let handler: Rc<dyn Fn(bool)> = Rc::new(move |matched| {
            // State first, callback second.
            state.set(matched);
            debug!(threshold, is_mobile = matched, "viewport crossed threshold");
            on_change();
        });
        self.watch = Some(self.source.watch(threshold, handler));
    }

    /// End observation: release the subscription.
    ///
    /// Bound to the owner's unmount point. After this returns, no further
    /// event reaches the handler, even one the source already accepted.
    pub fn deactivate(&mut self) {
        self.watch = None;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::ResizeFeed;
    use crate::source::{WatchGuard, WatchHandler};
    use std::cell::{Cell, RefCell};
    use std::rc::{Rc, Weak};

    /// A source that delivers whatever match-state it is told to, with no
    /// crossing filter — for exercising the observer against raw event
    /// sequences, including late delivery after unsubscription.
    #[derive(Clone, Default)]
    struct FakeSource {
        width: Rc<Cell<u16>>,
        handlers: Rc<RefCell<Vec<Weak<dyn Fn(bool)>>>>,
    }

    impl FakeSource {
        fn with_width(width: u16) -> Self {
            let source = Self::default();
            source.width.set(width);
            source
        }

        /// Deliver a raw match-state event to every live handler.
        fn emit(&self, matches: bool) {
            let live: Vec<WatchHandler> = self
                .handlers
                .borrow()
                .iter()
                .filter_map(Weak::upgrade)
                .collect();
            for handler in live {
                handler(matches);
            }
        }
    }

    impl ViewportSource for FakeSource {
        fn matches(&self, threshold: u16) -> bool {
            self.width.get() <= threshold
        }

        fn watch(&self, _threshold: u16, handler: WatchHandler) -> WatchGuard {
            self.handlers.borrow_mut().push(Rc::downgrade(&handler));
            WatchGuard::new(handler)
        }
    }

    #[test]
    fn initial_state_is_read_synchronously() {
        let wide = FakeSource::with_width(1024);
        let narrow = FakeSource::with_width(320);

        let a = ViewportObserver::with_threshold(wide, 768);
        let b = ViewportObserver::with_threshold(narrow, 768);

        // Evaluated before any event delivery, no activation needed.
        assert!(!a.is_mobile());
        assert!(b.is_mobile());
    }

    #[test]
    fn default_threshold_is_768() {
        let source = FakeSource::with_width(768);
        let observer = ViewportObserver::new(source);
        assert_eq!(observer.threshold(), 768);
        assert!(observer.is_mobile());
    }

    #[test]
    fn construction_does_not_subscribe() {
        let source = FakeSource::with_width(1024);
        let observer = ViewportObserver::with_threshold(source.clone(), 768);
        assert!(!observer.is_active());
        assert!(source.handlers.borrow().is_empty());

        // An event before activation changes nothing.
        source.emit(true);
        assert!(!observer.is_mobile());
    }

    #[test]
    fn shrink_to_mobile_fires_callback_once() {
        // threshold=768, initial width=1024, then the host shrinks to 500.
        let source = FakeSource::with_width(1024);
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let mut observer =
            ViewportObserver::with_callback(source.clone(), 768, move || {
                counter.set(counter.get() + 1);
            });
        observer.activate();
        assert!(!observer.is_mobile());

        source.emit(true);
        assert!(observer.is_mobile());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn no_events_means_no_callback() {
        let source = FakeSource::with_width(320);
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let mut observer =
            ViewportObserver::with_callback(source, 768, move || {
                counter.set(counter.get() + 1);
            });
        observer.activate();
        observer.deactivate();

        assert_eq!(calls.get(), 0);
        assert!(observer.is_mobile());
    }

    #[test]
    fn state_tracks_each_event_in_order() {
        let source = FakeSource::with_width(500);
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let mut observer =
            ViewportObserver::with_callback(source.clone(), 768, move || {
                counter.set(counter.get() + 1);
            });
        observer.activate();

        source.emit(false);
        assert!(!observer.is_mobile());
        source.emit(true);
        assert!(observer.is_mobile());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn callback_observes_the_new_value() {
        let source = FakeSource::with_width(1024);
        let observed = Rc::new(RefCell::new(Vec::new()));

        // The callback reads `is_mobile` off the observer itself, exactly
        // as a hosting view would during re-layout. The observer handle is
        // filled in after construction.
        type Slot = Rc<RefCell<Option<Rc<RefCell<ViewportObserver>>>>>;
        let slot: Slot = Rc::new(RefCell::new(None));

        let probe = Rc::clone(&slot);
        let log = Rc::clone(&observed);
        let observer = Rc::new(RefCell::new(ViewportObserver::with_callback(
            source.clone(),
            768,
            move || {
                if let Some(obs) = probe.borrow().as_ref() {
                    log.borrow_mut().push(obs.borrow().is_mobile());
                }
            },
        )));
        *slot.borrow_mut() = Some(Rc::clone(&observer));
        observer.borrow_mut().activate();

        source.emit(true);
        source.emit(false);

        // Each invocation saw the already-updated value, never the stale one.
        assert_eq!(*observed.borrow(), vec![true, false]);
        assert!(!observer.borrow().is_mobile());
    }

    #[test]
    fn deactivation_stops_late_delivery() {
        let source = FakeSource::with_width(1024);
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let mut observer =
            ViewportObserver::with_callback(source.clone(), 768, move || {
                counter.set(counter.get() + 1);
            });
        observer.activate();

        source.emit(true);
        assert_eq!(calls.get(), 1);

        observer.deactivate();
        assert!(!observer.is_active());

        // Late events after unsubscription: no state change, no callback.
        source.emit(false);
        source.emit(true);
        assert!(observer.is_mobile());
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn omitted_callback_is_a_noop() {
        let source = FakeSource::with_width(1024);
        let mut observer = ViewportObserver::with_threshold(source.clone(), 768);
        observer.activate();

        source.emit(true);
        assert!(observer.is_mobile());
    }

    #[test]
    fn extreme_thresholds_pin_the_state() {
        let source = FakeSource::with_width(100);
        let always_mobile = ViewportObserver::with_threshold(source.clone(), u16::MAX);
        let never_mobile = ViewportObserver::with_threshold(source, 0);
        assert!(always_mobile.is_mobile());
        assert!(!never_mobile.is_mobile());
    }

    #[test]
    fn works_against_a_real_feed() {
        // End-to-end over the crossing-filtered source: threshold 80,
        // host shrinks from 120 to 60 and back.
        let feed = ResizeFeed::new(120);
        let calls = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&calls);
        let mut observer =
            ViewportObserver::with_callback(feed.clone(), 80, move || {
                counter.set(counter.get() + 1);
            });
        assert!(!observer.is_mobile());

        observer.activate();
        feed.push_resize(60);
        assert!(observer.is_mobile());
        assert_eq!(calls.get(), 1);

        // Same-side resize: silent.
        feed.push_resize(70);
        assert_eq!(calls.get(), 1);

        feed.push_resize(120);
        assert!(!observer.is_mobile());
        assert_eq!(calls.get(), 2);

        observer.deactivate();
        feed.push_resize(40);
        assert!(!observer.is_mobile());
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn debug_format() {
        let observer = ViewportObserver::with_threshold(FakeSource::with_width(10), 80);
        let dbg = format!("{observer:?}");
        assert!(dbg.contains("ViewportObserver"));
        assert!(dbg.contains("80"));
    }
}
