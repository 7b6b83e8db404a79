//! Viewport intersection watching.
//!
//! [`Viewport`] is the seam a reveal controller registers with. The
//! [`ScrollViewport`] implementation models a page as a vertical stack of
//! element rectangles and a window scrolled over it.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use rustc_hash::FxHashMap;

/// Identifies a rendered container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub u32);

/// Handle of one registered watch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WatchId(pub(crate) u64);

/// One intersection notification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntersectionEntry {
    pub element: ElementId,
    /// Visible fraction of the element's area, `0.0..=1.0`.
    pub ratio: f64,
    pub is_intersecting: bool,
}

impl IntersectionEntry {
    /// Whether this entry satisfies `threshold`.
    pub fn meets(&self, threshold: f64) -> bool {
        self.is_intersecting && self.ratio >= threshold
    }
}

pub type IntersectionCallback = Rc<dyn Fn(&IntersectionEntry)>;

/// Something that can report when elements scroll into view.
pub trait Viewport {
    /// Start watching `element`; `callback` runs whenever it crosses `threshold`.
    fn observe(&self, element: ElementId, threshold: f64, callback: IntersectionCallback)
    -> WatchId;

    /// Stop a watch. Unknown or already released ids are ignored.
    fn unobserve(&self, watch: WatchId);
}

/// Vertical extent of an element in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub const fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

struct Watch {
    element: ElementId,
    threshold: f64,
    callback: IntersectionCallback,
    /// Whether the last dispatched entry met the threshold.
    met: Option<bool>,
}

/// A scrolling window over a stack of elements.
///
/// Watches are notified on registration and afterwards each time a scroll
/// makes their element cross its threshold, the way browser intersection
/// observers behave.
pub struct ScrollViewport {
    height: f64,
    scroll_y: Cell<f64>,
    elements: RefCell<FxHashMap<ElementId, Rect>>,
    watches: RefCell<FxHashMap<WatchId, Watch>>,
    next_watch: Cell<u64>,
    released: Cell<usize>,
}

impl ScrollViewport {
    pub fn new(height: f64) -> Self {
        Self {
            height: height.max(0.0),
            scroll_y: Cell::new(0.0),
            elements: RefCell::default(),
            watches: RefCell::default(),
            next_watch: Cell::new(0),
            released: Cell::new(0),
        }
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    pub fn scroll_y(&self) -> f64 {
        self.scroll_y.get()
    }

    /// Position an element on the page.
    pub fn place(&self, element: ElementId, rect: Rect) {
        self.elements.borrow_mut().insert(element, rect);
    }

    /// Lay elements out top to bottom; returns the total page height.
    pub fn stack(&self, heights: &[(ElementId, f64)]) -> f64 {
        let mut top = 0.0;
        for &(element, height) in heights {
            self.place(element, Rect { top, height });
            top += height;
        }
        top
    }

    /// Visible fraction of `element` at the current scroll offset.
    pub fn visible_fraction(&self, element: ElementId) -> f64 {
        let Some(rect) = self.elements.borrow().get(&element).copied() else {
            return 0.0;
        };
        if rect.height <= 0.0 {
            return 0.0;
        }
        let window_top = self.scroll_y.get();
        let window_bottom = window_top + self.height;
        let overlap = rect.bottom().min(window_bottom) - rect.top.max(window_top);
        (overlap.max(0.0) / rect.height).clamp(0.0, 1.0)
    }

    /// Scroll to `y` and notify every watch whose threshold state changed.
    pub fn scroll_to(&self, y: f64) {
        self.scroll_y.set(y.max(0.0));
        let ids: Vec<WatchId> = self.watches.borrow().keys().copied().collect();
        for id in ids {
            self.notify(id, false);
        }
    }

    /// Number of watches currently registered.
    pub fn active_watches(&self) -> usize {
        self.watches.borrow().len()
    }

    /// Number of successful `unobserve` calls so far.
    pub fn released_count(&self) -> usize {
        self.released.get()
    }

    /// Build the entry for watch `id` and run its callback if due.
    ///
    /// The registry borrow is released before the callback runs so the
    /// callback may observe or unobserve.
    fn notify(&self, id: WatchId, force: bool) {
        let (callback, entry) = {
            let mut watches = self.watches.borrow_mut();
            let Some(watch) = watches.get_mut(&id) else {
                return;
            };
            let ratio = self.visible_fraction(watch.element);
            let entry = IntersectionEntry {
                element: watch.element,
                ratio,
                is_intersecting: ratio > 0.0,
            };
            let met = entry.meets(watch.threshold);
            if !force && watch.met == Some(met) {
                return;
            }
            watch.met = Some(met);
            (Rc::clone(&watch.callback), entry)
        };
        callback(&entry);
    }
}

impl Viewport for ScrollViewport {
    fn observe(
        &self,
        element: ElementId,
        threshold: f64,
        callback: IntersectionCallback,
    ) -> WatchId {
        let id = WatchId(self.next_watch.get());
        self.next_watch.set(id.0 + 1);
        self.watches.borrow_mut().insert(
            id,
            Watch {
                element,
                threshold,
                callback,
                met: None,
            },
        );
        self.notify(id, true);
        id
    }

    fn unobserve(&self, watch: WatchId) {
        if self.watches.borrow_mut().remove(&watch).is_some() {
            self.released.set(self.released.get() + 1);
        }
    }
}
