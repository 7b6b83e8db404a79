//! Product listing page.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::Resolver;
use crate::reveal::stagger_delay;

use super::assets;
use super::route::Route;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ProductEntry {
    id: String,
    number: String,
    name: String,
    description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogCard {
    pub id: String,
    pub number: String,
    pub name: String,
    pub description: String,
    pub href: String,
    /// Absent for products without imagery.
    pub image: Option<&'static str>,
    /// Transition delay once the grid reveals.
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    pub title: String,
    pub description: String,
    pub explore_button: String,
    pub section_label: String,
    pub products: Vec<CatalogCard>,
}

impl CatalogPage {
    /// Cards stagger by `index * step`.
    pub fn build(r: &Resolver, step: Duration) -> Self {
        let products = r
            .resolve_records::<ProductEntry>("productsListPage.products")
            .into_iter()
            .enumerate()
            .map(|(index, entry)| CatalogCard {
                href: Route::ProductDetail(entry.id.clone()).path(),
                image: assets::product_thumbnail(&entry.id),
                delay_ms: millis(stagger_delay(Duration::ZERO, step, index)),
                id: entry.id,
                number: entry.number,
                name: entry.name,
                description: entry.description,
            })
            .collect();

        Self {
            title: r.resolve_string("productsListPage.hero.title"),
            description: r.resolve_string("productsListPage.hero.description"),
            explore_button: r.resolve_string("productsListPage.hero.exploreButton"),
            section_label: r.resolve_string("productsListPage.sectionLabel"),
            products,
        }
    }

    /// Ids of every listed product.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.products.iter().map(|p| p.id.as_str())
    }
}

pub(super) fn millis(d: Duration) -> u64 {
    u64::try_from(d.as_millis()).unwrap_or(u64::MAX)
}
