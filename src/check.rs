//! `check`: build every page and report dictionary gaps.

use std::sync::Arc;

use anyhow::{Result, bail};
use rustc_hash::FxHashSet;

use crate::config::SiteConfig;
use crate::content::{Catalog, ContentMiss, RecordingSink, Resolver};
use crate::context::AppContext;
use crate::log;
use crate::pages::{CatalogPage, PageView, Route, product_ids};

/// Every route the site can serve with the given catalog.
pub fn site_routes(resolver: &Resolver, config: &SiteConfig) -> Vec<Route> {
    let step = std::time::Duration::from_millis(config.reveal.stagger_ms);
    let catalog = CatalogPage::build(resolver, step);

    let mut ids: Vec<String> = product_ids().map(str::to_owned).collect();
    for id in catalog.ids() {
        if !ids.iter().any(|known| known == id) {
            ids.push(id.to_owned());
        }
    }

    let mut routes = vec![Route::Home, Route::Products, Route::Contact];
    routes.extend(ids.into_iter().map(Route::ProductDetail));
    routes
}

/// Build every page against `catalog`; returns each distinct miss once.
pub fn collect_misses(catalog: Arc<Catalog>, config: &SiteConfig) -> Vec<ContentMiss> {
    let sink = Arc::new(RecordingSink::new());
    let resolver = Resolver::new(catalog, sink.clone());

    for route in site_routes(&resolver, config) {
        PageView::build(route, &resolver, config);
    }

    let mut seen = FxHashSet::default();
    sink.take()
        .into_iter()
        .filter(|miss| seen.insert(miss.path.clone()))
        .collect()
}

pub fn check_site(ctx: &AppContext) -> Result<()> {
    let catalog = ctx.content.snapshot();
    let locale = catalog.locale().to_owned();
    let misses = collect_misses(catalog, &ctx.config);

    if misses.is_empty() {
        log!("content"; "locale `{locale}`: every page resolved");
        return Ok(());
    }

    for miss in &misses {
        log!("error"; "{miss}");
    }
    bail!("{} unresolved path(s) in locale `{locale}`", misses.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ContentTree, MissKind};
    use serde_json::json;

    #[test]
    fn test_bundled_dictionary_is_complete() {
        let catalog = Arc::new(Catalog::bundled().unwrap());
        let misses = collect_misses(catalog, &SiteConfig::default());
        assert!(misses.is_empty(), "{misses:?}");
    }

    #[test]
    fn test_sparse_dictionary_reports_each_path_once() {
        let tree = ContentTree::from_value(
            "sparse",
            json!({ "navigation": { "brand": { "name": "Novachem" } } }),
        )
        .unwrap();
        let misses = collect_misses(Arc::new(Catalog::new("xx", tree)), &SiteConfig::default());

        let paths: Vec<&str> = misses.iter().map(|m| m.path.as_str()).collect();
        assert!(paths.contains(&"navigation.brand.tagline"));
        assert!(paths.contains(&"productDetail.products.defoamers.name"));
        assert!(!paths.contains(&"navigation.brand.name"));

        // the footer is built on every page but reported once
        let footer = paths.iter().filter(|p| **p == "footer.copyright").count();
        assert_eq!(footer, 1);

        let tagline = misses
            .iter()
            .find(|m| m.path == "navigation.brand.tagline")
            .unwrap();
        assert!(matches!(tagline.kind, MissKind::MissingKey { .. }));
    }

    #[test]
    fn test_routes_cover_catalog_ids() {
        let tree = ContentTree::from_value(
            "extra",
            json!({ "productsListPage": { "products": [{ "id": "solvents" }] } }),
        )
        .unwrap();
        let resolver = Resolver::new(
            Arc::new(Catalog::new("en", tree)),
            Arc::new(RecordingSink::new()),
        );

        let routes = site_routes(&resolver, &SiteConfig::default());
        assert!(routes.contains(&Route::ProductDetail("solvents".into())));
        assert!(routes.contains(&Route::ProductDetail("defoamers".into())));
        assert_eq!(routes.len(), 3 + 6);
    }
}
