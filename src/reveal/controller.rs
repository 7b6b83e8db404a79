//! One-shot reveal flag per page section.

use std::{cell::Cell, rc::Rc, time::Duration};

use super::viewport::{ElementId, IntersectionEntry, Viewport, WatchId};

/// Threshold every section of the site uses unless configured otherwise.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Reveal state of a section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RevealState {
    #[default]
    Hidden,
    Revealed,
}

/// Shared read side of a section's reveal state.
///
/// Starts `Hidden`, becomes `Revealed` at most once, never goes back.
#[derive(Debug, Clone, Default)]
pub struct RevealFlag(Rc<Cell<RevealState>>);

impl RevealFlag {
    pub fn state(&self) -> RevealState {
        self.0.get()
    }

    pub fn is_revealed(&self) -> bool {
        self.state() == RevealState::Revealed
    }

    /// Apply an intersection entry. Returns `true` only on the transition.
    fn on_intersect(&self, entry: &IntersectionEntry, threshold: f64) -> bool {
        if self.is_revealed() || !entry.meets(threshold) {
            return false;
        }
        self.0.set(RevealState::Revealed);
        true
    }
}

/// Wires sections to a viewport.
///
/// One controller serves every section of a page; each `attach` produces an
/// independent subscription.
#[derive(Clone)]
pub struct RevealController {
    viewport: Rc<dyn Viewport>,
    threshold: f64,
}

impl RevealController {
    pub fn new(viewport: Rc<dyn Viewport>) -> Self {
        Self {
            viewport,
            threshold: DEFAULT_THRESHOLD,
        }
    }

    /// Default threshold for [`attach_default`](Self::attach_default).
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = clamp_threshold(threshold);
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Watch `element` and reveal it once `threshold` of it is visible.
    ///
    /// The watch is held by the returned subscription and released when it
    /// is released or dropped.
    pub fn attach(&self, element: ElementId, threshold: f64) -> RevealSubscription {
        let threshold = clamp_threshold(threshold);
        let flag = RevealFlag::default();

        let target = flag.clone();
        let watch = self.viewport.observe(
            element,
            threshold,
            Rc::new(move |entry: &IntersectionEntry| {
                target.on_intersect(entry, threshold);
            }),
        );

        RevealSubscription {
            element,
            flag,
            viewport: Rc::clone(&self.viewport),
            watch: Some(watch),
        }
    }

    /// [`attach`](Self::attach) with the controller's threshold.
    pub fn attach_default(&self, element: ElementId) -> RevealSubscription {
        self.attach(element, self.threshold)
    }
}

fn clamp_threshold(threshold: f64) -> f64 {
    if threshold.is_nan() {
        DEFAULT_THRESHOLD
    } else {
        threshold.clamp(0.0, 1.0)
    }
}

/// A section's live watch plus its reveal flag.
///
/// Dropping the subscription releases the watch, whether or not the
/// section ever revealed.
pub struct RevealSubscription {
    element: ElementId,
    flag: RevealFlag,
    viewport: Rc<dyn Viewport>,
    watch: Option<WatchId>,
}

impl RevealSubscription {
    pub fn element(&self) -> ElementId {
        self.element
    }

    pub fn state(&self) -> RevealState {
        self.flag.state()
    }

    pub fn is_revealed(&self) -> bool {
        self.flag.is_revealed()
    }

    /// Read handle that outlives the subscription.
    pub fn flag(&self) -> RevealFlag {
        self.flag.clone()
    }

    pub fn is_active(&self) -> bool {
        self.watch.is_some()
    }

    /// Release the watch now. Later calls do nothing.
    pub fn release(&mut self) {
        if let Some(watch) = self.watch.take() {
            self.viewport.unobserve(watch);
        }
    }
}

impl Drop for RevealSubscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for RevealSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealSubscription")
            .field("element", &self.element)
            .field("state", &self.state())
            .field("active", &self.is_active())
            .finish()
    }
}

/// Transition delay of the `index`-th item in a revealed list.
///
/// The catalog staggers cards by `0 + i * 100ms`; product applications by
/// `400ms + i * 100ms`.
pub fn stagger_delay(base: Duration, step: Duration, index: usize) -> Duration {
    let index = u32::try_from(index).unwrap_or(u32::MAX);
    base.saturating_add(step.saturating_mul(index))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reveal::viewport::{IntersectionCallback, Rect, ScrollViewport};
    use std::cell::RefCell;

    const SECTION: ElementId = ElementId(7);

    /// Viewport double that records calls and lets the test fire entries.
    #[derive(Default)]
    struct FakeViewport {
        callbacks: RefCell<Vec<(WatchId, IntersectionCallback)>>,
        unobserved: RefCell<Vec<WatchId>>,
        next: Cell<u64>,
    }

    impl FakeViewport {
        fn fire(&self, ratio: f64) {
            let callbacks: Vec<_> = self
                .callbacks
                .borrow()
                .iter()
                .map(|(_, c)| Rc::clone(c))
                .collect();
            for callback in callbacks {
                callback(&IntersectionEntry {
                    element: SECTION,
                    ratio,
                    is_intersecting: ratio > 0.0,
                });
            }
        }
    }

    impl Viewport for FakeViewport {
        fn observe(
            &self,
            _element: ElementId,
            _threshold: f64,
            callback: IntersectionCallback,
        ) -> WatchId {
            let id = WatchId(self.next.get());
            self.next.set(id.0 + 1);
            self.callbacks.borrow_mut().push((id, callback));
            id
        }

        fn unobserve(&self, watch: WatchId) {
            self.unobserved.borrow_mut().push(watch);
            self.callbacks.borrow_mut().retain(|(id, _)| *id != watch);
        }
    }

    #[test]
    fn test_reveals_once_on_qualifying_event() {
        let fake = Rc::new(FakeViewport::default());
        let controller = RevealController::new(fake.clone());
        let sub = controller.attach(SECTION, 0.1);

        assert_eq!(sub.state(), RevealState::Hidden);

        fake.fire(0.05);
        assert!(!sub.is_revealed());

        fake.fire(0.1);
        assert!(sub.is_revealed());

        fake.fire(0.9);
        fake.fire(0.0);
        assert_eq!(sub.state(), RevealState::Revealed);
    }

    #[test]
    fn test_zero_threshold_needs_intersection() {
        let fake = Rc::new(FakeViewport::default());
        let controller = RevealController::new(fake.clone());
        let sub = controller.attach(SECTION, 0.0);

        fake.fire(0.0);
        assert_eq!(sub.state(), RevealState::Hidden);

        fake.fire(0.01);
        assert_eq!(sub.state(), RevealState::Revealed);
    }

    #[test]
    fn test_transition_happens_exactly_once() {
        let flag = RevealFlag::default();
        let hit = IntersectionEntry {
            element: SECTION,
            ratio: 0.5,
            is_intersecting: true,
        };

        assert!(flag.on_intersect(&hit, 0.1));
        assert!(!flag.on_intersect(&hit, 0.1));
        assert!(!flag.on_intersect(&hit, 0.1));
        assert!(flag.is_revealed());
    }

    #[test]
    fn test_unmount_before_reveal_releases_watch() {
        let fake = Rc::new(FakeViewport::default());
        let controller = RevealController::new(fake.clone());

        let sub = controller.attach(SECTION, 0.1);
        let flag = sub.flag();
        drop(sub);

        assert_eq!(fake.unobserved.borrow().len(), 1);
        fake.fire(1.0);
        assert_eq!(flag.state(), RevealState::Hidden);
    }

    #[test]
    fn test_release_is_idempotent() {
        let fake = Rc::new(FakeViewport::default());
        let controller = RevealController::new(fake.clone());

        let mut sub = controller.attach(SECTION, 0.1);
        fake.fire(0.5);
        sub.release();
        sub.release();
        assert!(!sub.is_active());
        drop(sub);

        assert_eq!(fake.unobserved.borrow().len(), 1);
    }

    #[test]
    fn test_sections_reveal_independently() {
        let viewport = Rc::new(ScrollViewport::new(400.0));
        viewport.stack(&[(ElementId(1), 400.0), (ElementId(2), 400.0), (ElementId(3), 400.0)]);

        let controller = RevealController::new(viewport.clone());
        let subs: Vec<_> = (1..=3)
            .map(|i| controller.attach_default(ElementId(i)))
            .collect();

        assert!(subs[0].is_revealed());
        assert!(!subs[1].is_revealed());

        viewport.scroll_to(100.0);
        assert!(subs[1].is_revealed());
        assert!(!subs[2].is_revealed());

        viewport.scroll_to(0.0);
        assert!(subs[1].is_revealed());

        drop(subs);
        assert_eq!(viewport.active_watches(), 0);
        assert_eq!(viewport.released_count(), 3);
    }

    #[test]
    fn test_threshold_clamped() {
        let viewport = Rc::new(ScrollViewport::new(100.0));
        viewport.place(SECTION, Rect { top: 0.0, height: 100.0 });

        let controller = RevealController::new(viewport).with_threshold(3.0);
        assert_eq!(controller.threshold(), 1.0);
        assert!(controller.attach_default(SECTION).is_revealed());

        let nan = controller.with_threshold(f64::NAN);
        assert_eq!(nan.threshold(), DEFAULT_THRESHOLD);
    }

    #[test]
    fn test_stagger_delay() {
        let step = Duration::from_millis(100);
        assert_eq!(stagger_delay(Duration::ZERO, step, 0), Duration::ZERO);
        assert_eq!(stagger_delay(Duration::ZERO, step, 3), Duration::from_millis(300));
        assert_eq!(
            stagger_delay(Duration::from_millis(400), step, 2),
            Duration::from_millis(600)
        );
    }
}
