//! Active dictionary with atomic replacement.
//!
//! Uses `arc-swap` for lock-free reads and whole-catalog replacement.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                 ContentStore (ArcSwap<Catalog>)             │
//! │                                                             │
//! │  ┌─────────────┐     ┌─────────────┐     ┌─────────────┐    │
//! │  │  Page A     │     │  Page B     │     │   Writer    │    │
//! │  │             │     │             │     │  (watch)    │    │
//! │  └──────┬──────┘     └──────┬──────┘     └──────┬──────┘    │
//! │         │                   │                   │           │
//! │         ▼                   ▼                   ▼           │
//! │     resolver()          resolver()     set_active/reload()  │
//! │    (snapshot)          (snapshot)       (atomic replace)    │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! A snapshot taken before a swap keeps reading the old catalog until it is
//! dropped; nothing ever observes a partially replaced tree.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::Arc,
};

use arc_swap::ArcSwap;
use serde_json::Value;

use super::diagnostics::{DiagnosticSink, LogSink};
use super::error::ContentError;
use super::resolver::Resolver;
use super::tree::ContentTree;
use crate::config::ContentConfig;

/// Dictionary compiled into the binary.
const BUNDLED_EN: &str = include_str!("../embed/i18n/en.json");

/// Locale of [`BUNDLED_EN`].
pub const BUNDLED_LOCALE: &str = "en";

/// Where a catalog was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    Bundled,
    File(PathBuf),
    /// Built in memory by the caller.
    Inline,
}

/// One locale's tree: the unit that gets swapped.
#[derive(Debug)]
pub struct Catalog {
    locale: String,
    tree: ContentTree,
    source: CatalogSource,
    /// Hash of the raw text the tree was parsed from.
    hash: Option<blake3::Hash>,
}

impl Catalog {
    pub fn new(locale: impl Into<String>, tree: ContentTree) -> Self {
        Self {
            locale: locale.into(),
            tree,
            source: CatalogSource::Inline,
            hash: None,
        }
    }

    /// The dictionary shipped inside the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::parse(BUNDLED_LOCALE, CatalogSource::Bundled, BUNDLED_EN)
    }

    /// Read `<dir>/<locale>.json`.
    pub fn from_file(locale: &str, path: &Path) -> Result<Self, ContentError> {
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(ContentError::UnknownLocale(locale.to_owned()));
            }
            Err(err) => return Err(ContentError::Io(path.to_path_buf(), err)),
        };
        Self::parse(locale, CatalogSource::File(path.to_path_buf()), &text)
    }

    /// Load `locale` from `dir`, or from the bundled dictionary when no
    /// directory is configured.
    pub fn load(dir: Option<&Path>, locale: &str) -> Result<Self, ContentError> {
        match dir {
            Some(dir) => Self::from_file(locale, &dir.join(format!("{locale}.json"))),
            None if locale == BUNDLED_LOCALE => Self::bundled(),
            None => Err(ContentError::UnknownLocale(locale.to_owned())),
        }
    }

    fn parse(locale: &str, source: CatalogSource, text: &str) -> Result<Self, ContentError> {
        let origin = match &source {
            CatalogSource::File(path) => path.display().to_string(),
            _ => format!("bundled:{locale}"),
        };
        let tree = ContentTree::from_json(&origin, text)?;
        Ok(Self {
            locale: locale.to_owned(),
            tree,
            source,
            hash: Some(blake3::hash(text.as_bytes())),
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn tree(&self) -> &ContentTree {
        &self.tree
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }
}

/// Owner of the active catalog.
///
/// Held by the application context and passed to whoever renders; there is
/// no process-wide dictionary.
pub struct ContentStore {
    active: ArcSwap<Catalog>,
    dir: Option<PathBuf>,
    sink: Arc<dyn DiagnosticSink>,
}

impl ContentStore {
    pub fn new(catalog: Catalog, dir: Option<PathBuf>, sink: Arc<dyn DiagnosticSink>) -> Self {
        Self {
            active: ArcSwap::from_pointee(catalog),
            dir,
            sink,
        }
    }

    /// Store over the bundled dictionary, logging misses.
    pub fn bundled() -> Result<Self, ContentError> {
        Ok(Self::new(Catalog::bundled()?, None, Arc::new(LogSink)))
    }

    /// Store for `[content]`, reporting misses to `sink`.
    pub fn from_config(
        config: &ContentConfig,
        sink: Arc<dyn DiagnosticSink>,
    ) -> Result<Self, ContentError> {
        let catalog = Catalog::load(config.dir.as_deref(), &config.locale)?;
        Ok(Self::new(catalog, config.dir.clone(), sink))
    }

    /// Current catalog. Wait-free; the returned `Arc` pins it.
    #[inline]
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.active.load_full()
    }

    /// Resolver bound to the current catalog.
    pub fn resolver(&self) -> Resolver {
        Resolver::new(self.snapshot(), Arc::clone(&self.sink))
    }

    pub fn locale(&self) -> String {
        self.active.load().locale().to_owned()
    }

    /// One-off string lookup against the current catalog.
    pub fn resolve_string(&self, path: &str) -> String {
        self.resolver().resolve_string(path)
    }

    /// One-off sequence lookup against the current catalog.
    pub fn resolve_sequence(&self, path: &str) -> Vec<Value> {
        self.resolver().resolve_sequence(path)
    }

    /// Replace the active catalog, returning the one it replaced.
    pub fn set_active(&self, catalog: Catalog) -> Arc<Catalog> {
        self.active.swap(Arc::new(catalog))
    }

    /// Load `locale` and make it active. On error the active catalog stays.
    pub fn load_locale(&self, locale: &str) -> Result<(), ContentError> {
        let catalog = Catalog::load(self.dir.as_deref(), locale)?;
        self.set_active(catalog);
        Ok(())
    }

    /// Re-read the active catalog's file and swap it in if its content changed.
    ///
    /// Returns `true` if the catalog was replaced. Catalogs that don't come
    /// from a file are never reloaded.
    pub fn reload(&self) -> Result<bool, ContentError> {
        let current = self.snapshot();
        let CatalogSource::File(path) = current.source() else {
            return Ok(false);
        };

        let text =
            fs::read_to_string(path).map_err(|err| ContentError::Io(path.clone(), err))?;
        if current.hash == Some(blake3::hash(text.as_bytes())) {
            return Ok(false);
        }

        let catalog = Catalog::parse(current.locale(), current.source.clone(), &text)?;
        self.set_active(catalog);
        Ok(true)
    }

    /// File backing the active catalog, if any.
    pub fn watched_path(&self) -> Option<PathBuf> {
        match self.active.load().source() {
            CatalogSource::File(path) => Some(path.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::RecordingSink;
    use serde_json::json;

    fn write_dictionary(dir: &Path, locale: &str, value: Value) -> PathBuf {
        let path = dir.join(format!("{locale}.json"));
        fs::write(&path, serde_json::to_string_pretty(&value).unwrap()).unwrap();
        path
    }

    fn store_in(dir: &Path) -> (ContentStore, Arc<RecordingSink>) {
        let sink = Arc::new(RecordingSink::new());
        let config = ContentConfig {
            dir: Some(dir.to_path_buf()),
            locale: "en".into(),
        };
        (ContentStore::from_config(&config, sink.clone()).unwrap(), sink)
    }

    #[test]
    fn test_bundled_dictionary_parses() {
        let catalog = Catalog::bundled().unwrap();
        assert_eq!(catalog.locale(), "en");
        assert_eq!(catalog.source(), &CatalogSource::Bundled);
        assert!(catalog.tree().walk("hero.title").is_ok());
        assert!(catalog.tree().walk("products.items").is_ok());
    }

    #[test]
    fn test_load_unknown_locale_without_dir() {
        let err = Catalog::load(None, "fr").unwrap_err();
        assert!(matches!(err, ContentError::UnknownLocale(ref l) if l == "fr"));
    }

    #[test]
    fn test_from_config_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        write_dictionary(dir.path(), "en", json!({ "hero": { "title": "From disk" } }));

        let (store, sink) = store_in(dir.path());
        assert_eq!(store.resolve_string("hero.title"), "From disk");
        assert!(sink.is_empty());
        assert!(store.watched_path().unwrap().ends_with("en.json"));
    }

    #[test]
    fn test_set_active_swaps_whole_catalog() {
        let store = ContentStore::new(
            Catalog::new("en", ContentTree::from_value("a", json!({ "t": "old" })).unwrap()),
            None,
            Arc::new(RecordingSink::new()),
        );

        let before = store.resolver();
        let previous = store.set_active(Catalog::new(
            "xx",
            ContentTree::from_value("b", json!({ "t": "new" })).unwrap(),
        ));

        assert_eq!(previous.locale(), "en");
        // A resolver taken before the swap keeps its snapshot
        assert_eq!(before.resolve_string("t"), "old");
        assert_eq!(store.resolve_string("t"), "new");
        assert_eq!(store.locale(), "xx");
    }

    #[test]
    fn test_load_locale_failure_keeps_active() {
        let dir = tempfile::tempdir().unwrap();
        write_dictionary(dir.path(), "en", json!({ "t": "english" }));
        fs::write(dir.path().join("de.json"), "{ not json").unwrap();

        let (store, _) = store_in(dir.path());
        assert!(matches!(store.load_locale("fr"), Err(ContentError::UnknownLocale(_))));
        assert!(matches!(store.load_locale("de"), Err(ContentError::Json(..))));
        assert_eq!(store.resolve_string("t"), "english");
        assert_eq!(store.locale(), "en");
    }

    #[test]
    fn test_load_locale_switches() {
        let dir = tempfile::tempdir().unwrap();
        write_dictionary(dir.path(), "en", json!({ "t": "english" }));
        write_dictionary(dir.path(), "de", json!({ "t": "deutsch" }));

        let (store, _) = store_in(dir.path());
        store.load_locale("de").unwrap();
        assert_eq!(store.resolve_string("t"), "deutsch");
        assert_eq!(store.locale(), "de");
    }

    #[test]
    fn test_reload_only_on_change() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_dictionary(dir.path(), "en", json!({ "t": "v1" }));

        let (store, _) = store_in(dir.path());
        assert!(!store.reload().unwrap());

        write_dictionary(dir.path(), "en", json!({ "t": "v2" }));
        assert!(store.reload().unwrap());
        assert_eq!(store.resolve_string("t"), "v2");
        assert!(!store.reload().unwrap());

        fs::write(&path, "{ broken").unwrap();
        assert!(store.reload().is_err());
        assert_eq!(store.resolve_string("t"), "v2");
    }

    #[test]
    fn test_reload_bundled_is_noop() {
        let store = ContentStore::bundled().unwrap();
        assert!(!store.reload().unwrap());
        assert_eq!(store.watched_path(), None);
    }

    #[test]
    fn test_concurrent_readers_see_whole_trees() {
        let store = Arc::new(ContentStore::new(
            Catalog::new("en", ContentTree::from_value("a", json!({ "x": "1", "y": "1" })).unwrap()),
            None,
            Arc::new(RecordingSink::new()),
        ));

        let reader = {
            let store = Arc::clone(&store);
            std::thread::spawn(move || {
                for _ in 0..1000 {
                    let r = store.resolver();
                    assert_eq!(r.resolve_string("x"), r.resolve_string("y"));
                }
            })
        };

        for i in 0..200 {
            let v = i.to_string();
            store.set_active(Catalog::new(
                "en",
                ContentTree::from_value("b", json!({ "x": v, "y": v })).unwrap(),
            ));
        }

        reader.join().unwrap();
    }
}
