//! Reporting of lookups that fell back.
//!
//! A miss is never an error for the caller; it is handed to a
//! [`DiagnosticSink`] so it can be logged or collected.

use parking_lot::Mutex;
use thiserror::Error;

use crate::elog;

/// Why a dotted path did not resolve to the requested kind of value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MissKind {
    #[error("empty path")]
    EmptyPath,

    /// The value reached at `at` is a scalar and cannot be walked into.
    #[error("`{at}` is {found}, cannot descend")]
    NotTraversable { at: String, found: &'static str },

    #[error("no key `{key}` under `{at}`")]
    MissingKey { at: String, key: String },

    /// The path exists but the leaf has the wrong shape.
    #[error("expected {expected}, found {found}")]
    WrongLeaf {
        expected: &'static str,
        found: &'static str,
    },
}

/// A failed lookup: the requested path and what went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{path}`: {kind}")]
pub struct ContentMiss {
    pub path: String,
    pub kind: MissKind,
}

impl ContentMiss {
    pub fn new(path: &str, kind: MissKind) -> Self {
        Self {
            path: path.to_owned(),
            kind,
        }
    }
}

/// Receiver for lookup misses.
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, miss: ContentMiss);
}

/// Logs every miss as a warning under the `content` prefix, on stderr.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink;

impl DiagnosticSink for LogSink {
    fn report(&self, miss: ContentMiss) {
        elog!("content"; "warning: translation not found for {miss}");
    }
}

/// Collects misses in memory, in report order.
#[derive(Debug, Default)]
pub struct RecordingSink {
    misses: Mutex<Vec<ContentMiss>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything reported so far.
    pub fn misses(&self) -> Vec<ContentMiss> {
        self.misses.lock().clone()
    }

    /// Drain everything reported so far.
    pub fn take(&self) -> Vec<ContentMiss> {
        std::mem::take(&mut *self.misses.lock())
    }

    pub fn len(&self) -> usize {
        self.misses.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.misses.lock().is_empty()
    }
}

impl DiagnosticSink for RecordingSink {
    fn report(&self, miss: ContentMiss) {
        self.misses.lock().push(miss);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_miss_display() {
        let miss = ContentMiss::new(
            "hero.subtitle",
            MissKind::MissingKey {
                at: "hero".into(),
                key: "subtitle".into(),
            },
        );
        assert_eq!(miss.to_string(), "`hero.subtitle`: no key `subtitle` under `hero`");

        let miss = ContentMiss::new(
            "products.items",
            MissKind::WrongLeaf {
                expected: "string",
                found: "array",
            },
        );
        assert_eq!(miss.to_string(), "`products.items`: expected string, found array");
    }

    #[test]
    fn test_recording_sink_take() {
        let sink = RecordingSink::new();
        assert!(sink.is_empty());

        sink.report(ContentMiss::new("", MissKind::EmptyPath));
        sink.report(ContentMiss::new("a.b", MissKind::EmptyPath));
        assert_eq!(sink.len(), 2);
        assert_eq!(sink.misses()[1].path, "a.b");

        let taken = sink.take();
        assert_eq!(taken.len(), 2);
        assert!(sink.is_empty());
    }
}
