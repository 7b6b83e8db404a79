//! Reveal-on-scroll for page sections.
//!
//! Each section attaches to a [`Viewport`] through a [`RevealController`]
//! and flips from hidden to revealed the first time enough of it is visible.
//! The flag never flips back; the watch is released when the section's
//! [`RevealSubscription`] is dropped.

mod controller;
mod viewport;

pub use controller::{
    DEFAULT_THRESHOLD, RevealController, RevealFlag, RevealState, RevealSubscription,
    stagger_delay,
};
pub use viewport::{
    ElementId, IntersectionCallback, IntersectionEntry, Rect, ScrollViewport, Viewport, WatchId,
};
