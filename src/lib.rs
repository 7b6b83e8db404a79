//! chemsite - content, reveal and loader engine for a specialty chemicals site.
//!
//! The core is three independent pieces a page composes:
//!
//! - [`content`]: dotted-path lookups into the site dictionary, with in-band
//!   fallbacks and an atomically swappable active catalog
//! - [`reveal`]: one-way reveal flags driven by viewport intersection
//! - [`loader`]: the eased 0..=100 loading progress with one-shot completion
//!
//! [`pages`] builds serializable view models from them; the remaining modules
//! back the `chemsite` command line.

pub mod animate;
pub mod check;
pub mod cli;
pub mod config;
pub mod content;
pub mod context;
pub mod loader;
pub mod logger;
pub mod pages;
pub mod query;
pub mod reveal;
pub mod scroll;
pub mod watch;
