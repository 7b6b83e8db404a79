//! Dotted-path lookups with in-band fallbacks.
//!
//! | Lookup               | Hit                    | Miss                   |
//! |----------------------|------------------------|------------------------|
//! | `resolve_string`     | the string leaf        | the path, unchanged    |
//! | `resolve_sequence`   | the array, in order    | empty `Vec`            |
//! | `resolve_records<T>` | each entry as `T`      | empty `Vec`            |
//!
//! Every miss is reported to the store's [`DiagnosticSink`]; none is
//! surfaced to the caller.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::diagnostics::{ContentMiss, DiagnosticSink, MissKind};
use super::store::Catalog;
use super::tree::kind_of;

/// Lookups against one catalog snapshot.
///
/// A page built through a single `Resolver` sees a single tree even if the
/// store swaps catalogs halfway through.
#[derive(Clone)]
pub struct Resolver {
    catalog: Arc<Catalog>,
    sink: Arc<dyn DiagnosticSink>,
}

impl Resolver {
    pub fn new(catalog: Arc<Catalog>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self { catalog, sink }
    }

    /// Locale of the snapshot this resolver reads.
    pub fn locale(&self) -> &str {
        self.catalog.locale()
    }

    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }

    /// Resolve `path` to a string, or return `path` itself.
    pub fn resolve_string(&self, path: &str) -> String {
        match self.catalog.tree().walk(path) {
            Ok(Value::String(text)) => text.clone(),
            Ok(other) => {
                self.miss(
                    path,
                    MissKind::WrongLeaf {
                        expected: "string",
                        found: kind_of(other),
                    },
                );
                path.to_owned()
            }
            Err(kind) => {
                self.miss(path, kind);
                path.to_owned()
            }
        }
    }

    /// Resolve `path` to the entries of an array, or nothing.
    pub fn resolve_sequence(&self, path: &str) -> Vec<Value> {
        match self.catalog.tree().walk(path) {
            Ok(Value::Array(items)) => items.clone(),
            Ok(other) => {
                self.miss(
                    path,
                    MissKind::WrongLeaf {
                        expected: "array",
                        found: kind_of(other),
                    },
                );
                Vec::new()
            }
            Err(kind) => {
                self.miss(path, kind);
                Vec::new()
            }
        }
    }

    /// Resolve `path` to an array and decode every entry as `T`.
    ///
    /// Entries that don't decode become `T::default()` so a malformed record
    /// shows up blank instead of disappearing or shifting the others.
    pub fn resolve_records<T>(&self, path: &str) -> Vec<T>
    where
        T: DeserializeOwned + Default,
    {
        self.resolve_sequence(path)
            .into_iter()
            .map(|entry| serde_json::from_value(entry).unwrap_or_default())
            .collect()
    }

    /// Shorthand for `resolve_records::<String>`.
    pub fn resolve_strings(&self, path: &str) -> Vec<String> {
        self.resolve_records(path)
    }

    fn miss(&self, path: &str, kind: MissKind) {
        self.sink.report(ContentMiss::new(path, kind));
    }
}

impl std::fmt::Debug for Resolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Resolver")
            .field("locale", &self.catalog.locale())
            .finish_non_exhaustive()
    }
}
