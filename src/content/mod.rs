//! Site text: the translation dictionary and dotted-path lookups.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐  load   ┌──────────────┐  snapshot  ┌────────────┐
//! │ en.json      │ ──────► │ ContentStore │ ─────────► │  Resolver  │
//! │ (bundled or  │         │ ArcSwap<     │            │ string/seq │
//! │  content.dir)│         │   Catalog>   │            └─────┬──────┘
//! └──────────────┘         └──────────────┘                  │ miss
//!                                                            ▼
//!                                                   ┌────────────────┐
//!                                                   │ DiagnosticSink │
//!                                                   └────────────────┘
//! ```
//!
//! # Paths
//!
//! Keys are joined with `.`: `"hero.title"`, `"footer.contact.email"`.
//! A numeric segment indexes into a list: `"products.items.0.name"`.

mod diagnostics;
mod error;
mod resolver;
mod store;
mod tree;

pub use diagnostics::{ContentMiss, DiagnosticSink, LogSink, MissKind, RecordingSink};
pub use error::ContentError;
pub use resolver::Resolver;
pub use store::{BUNDLED_LOCALE, Catalog, CatalogSource, ContentStore};
pub use tree::ContentTree;
