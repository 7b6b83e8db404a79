//! Dictionary watcher for live content swaps.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────┐    ┌───────────┐    ┌─────────────────────────────┐
//! │ notify   │───▶│ Debouncer │───▶│ handle_changes()            │
//! │ events   │    │ (300ms)   │    │  ContentStore::reload()     │
//! └──────────┘    └───────────┘    │  → swap if hash changed     │
//!                                  │  → re-check every page      │
//!                                  └─────────────────────────────┘
//! ```
//!
//! The parent directory is watched rather than the file itself so editors
//! that save by rename still trigger a reload.

use crate::{check::collect_misses, context::AppContext, log, logger::WatchStatus};
use anyhow::{Context, Result, bail};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use rustc_hash::FxHashSet;
use std::{
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

const DEBOUNCE_MS: u64 = 300;

/// Check if path is a temp/backup file (editor artifacts).
fn is_temp_file(path: &Path) -> bool {
    let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("");
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

    matches!(ext, "bck" | "bak" | "backup" | "swp" | "swo" | "tmp")
        || name.ends_with('~')
        || name.starts_with('.')
}

// =============================================================================
// Debounce State
// =============================================================================

/// Batches rapid file events for one target file.
struct Debouncer {
    target: PathBuf,
    pending: FxHashSet<PathBuf>,
    last_event: Option<Instant>,
}

impl Debouncer {
    fn new(target: PathBuf) -> Self {
        Self {
            target,
            pending: FxHashSet::default(),
            last_event: None,
        }
    }

    /// Record the event's paths that concern the target.
    fn add(&mut self, event: Event) {
        let mut relevant = false;
        for path in event.paths {
            if !is_temp_file(&path) && path.file_name() == self.target.file_name() {
                self.pending.insert(path);
                relevant = true;
            }
        }
        if relevant {
            self.last_event = Some(Instant::now());
        }
    }

    fn ready(&self) -> bool {
        !self.pending.is_empty()
            && self
                .last_event
                .is_some_and(|t| t.elapsed() >= Duration::from_millis(DEBOUNCE_MS))
    }

    fn take(&mut self) -> Vec<PathBuf> {
        self.last_event = None;
        self.pending.drain().collect()
    }

    fn timeout(&self) -> Duration {
        if self.pending.is_empty() {
            Duration::from_secs(60)
        } else {
            Duration::from_millis(DEBOUNCE_MS)
        }
    }
}

// =============================================================================
// Event Handler
// =============================================================================

/// Outcome of one debounced change.
#[derive(Debug, PartialEq, Eq)]
enum Reload {
    Swapped { misses: usize },
    Unchanged,
    Failed(String),
}

fn handle_changes(ctx: &AppContext) -> Reload {
    match ctx.content.reload() {
        Ok(true) => {
            let misses = collect_misses(ctx.content.snapshot(), &ctx.config);
            for miss in &misses {
                log!("content"; "{miss}");
            }
            Reload::Swapped {
                misses: misses.len(),
            }
        }
        Ok(false) => Reload::Unchanged,
        Err(err) => Reload::Failed(format!("{:#}", anyhow::Error::from(err))),
    }
}

fn report(status: &mut WatchStatus, outcome: &Reload, rel: &str) {
    match outcome {
        Reload::Swapped { misses: 0 } => status.success(&format!("reloaded: {rel}")),
        Reload::Swapped { misses } => {
            status.success(&format!("reloaded: {rel} ({misses} unresolved)"));
        }
        Reload::Unchanged => status.unchanged(rel),
        // the previous catalog stays active
        Reload::Failed(detail) => status.error("reload failed, keeping previous dictionary", detail),
    }
}

const fn is_relevant(event: &Event) -> bool {
    matches!(
        event.kind,
        EventKind::Modify(_) | EventKind::Create(_) | EventKind::Remove(_)
    )
}

// =============================================================================
// Public API
// =============================================================================

/// Watch the active dictionary file and hot-swap it on change. Blocks.
pub fn watch_dictionary(ctx: &AppContext) -> Result<()> {
    let Some(target) = ctx.content.watched_path() else {
        bail!("Nothing to watch: the bundled dictionary is active. Set `[content.dir]` or pass --dir.");
    };
    let dir = target
        .parent()
        .context("Dictionary path has no parent directory")?
        .to_path_buf();

    let (tx, rx) = std::sync::mpsc::channel();
    let mut watcher = notify::recommended_watcher(tx).context("Failed to create file watcher")?;
    watcher
        .watch(&dir, RecursiveMode::NonRecursive)
        .with_context(|| format!("Failed to watch {}", dir.display()))?;

    let rel = target.display().to_string();
    log!("watch"; "{rel} (locale `{}`)", ctx.content.locale());
    eprintln!();

    let mut debouncer = Debouncer::new(target);
    let mut status = WatchStatus::new();

    loop {
        match rx.recv_timeout(debouncer.timeout()) {
            Ok(Ok(event)) if is_relevant(&event) => debouncer.add(event),
            Ok(Err(e)) => log!("watch"; "error: {e}"),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) if debouncer.ready() => {
                debouncer.take();
                report(&mut status, &handle_changes(ctx), &rel);
            }
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
            _ => {}
        }
    }

    Ok(())
}
