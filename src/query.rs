//! `get`, `list` and `page`: print resolved content.
//!
//! Output goes to stdout untouched. Misses are collected while rendering and
//! reported on stderr afterwards.

use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::Value;

use crate::content::{ContentMiss, RecordingSink, Resolver};
use crate::context::AppContext;
use crate::elog;
use crate::pages::{PageView, Route};

/// Print the string at `path`, or `path` itself.
pub fn get(ctx: &AppContext, path: &str) -> Result<()> {
    emit(render(ctx, |r| Ok(r.resolve_string(path)))?)
}

/// Print the list at `path` as JSON; `[]` when there is none.
pub fn list(ctx: &AppContext, path: &str) -> Result<()> {
    emit(render_list(ctx, path)?)
}

/// Print the view model of `route` as JSON.
pub fn page(ctx: &AppContext, route: &str) -> Result<()> {
    emit(render(ctx, |r| {
        to_json(&PageView::build(Route::parse(route), r, &ctx.config))
    })?)
}

/// Stdout text of `list` and the misses behind it.
pub fn render_list(ctx: &AppContext, path: &str) -> Result<(String, Vec<ContentMiss>)> {
    render(ctx, |r| to_json(&Value::Array(r.resolve_sequence(path))))
}

fn render(
    ctx: &AppContext,
    f: impl FnOnce(&Resolver) -> Result<String>,
) -> Result<(String, Vec<ContentMiss>)> {
    let sink = Arc::new(RecordingSink::new());
    let resolver = Resolver::new(ctx.content.snapshot(), sink.clone());
    let out = f(&resolver)?;
    Ok((out, sink.take()))
}

fn emit((out, misses): (String, Vec<ContentMiss>)) -> Result<()> {
    println!("{out}");
    for miss in misses {
        elog!("content"; "warning: translation not found for {miss}");
    }
    Ok(())
}

fn to_json(value: &impl serde::Serialize) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize output")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::content::MissKind;

    fn ctx() -> AppContext {
        AppContext::new(SiteConfig::default(), Arc::new(RecordingSink::new())).unwrap()
    }

    #[test]
    fn test_list_miss_prints_only_empty_array() {
        let (out, misses) = render_list(&ctx(), "x.y").unwrap();
        assert_eq!(out, "[]");
        assert_eq!(misses.len(), 1);
        assert_eq!(misses[0].path, "x.y");
        assert!(matches!(misses[0].kind, MissKind::MissingKey { .. }));
    }

    #[test]
    fn test_list_hit_has_no_misses() {
        let (out, misses) = render_list(&ctx(), "company.paragraphs").unwrap();
        let parsed: Vec<String> = serde_json::from_str(&out).unwrap();
        assert_eq!(parsed.len(), 3);
        assert!(misses.is_empty());
    }

    #[test]
    fn test_get_miss_renders_path() {
        let (out, misses) = render(&ctx(), |r| Ok(r.resolve_string("hero.nope"))).unwrap();
        assert_eq!(out, "hero.nope");
        assert_eq!(misses.len(), 1);
    }
}
