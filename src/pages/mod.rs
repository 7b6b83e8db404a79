//! Page view models.
//!
//! Every page is built from one [`Resolver`] snapshot, so a dictionary swap
//! mid-build can't mix old and new text. Missing copy falls back in-band;
//! building a page never fails.

mod assets;
mod catalog;
mod contact;
mod footer;
mod home;
mod navigation;
mod product;
mod route;
mod slug;

use std::time::Duration;

use serde::Serialize;

use crate::config::SiteConfig;
use crate::content::Resolver;

pub use assets::{ProductImages, product_ids, product_images};
pub use catalog::{CatalogCard, CatalogPage};
pub use contact::{ContactForm, ContactPage, ContactSubmission, ContactSubmitter, Field, LogSubmitter};
pub use footer::{Footer, tel_href};
pub use home::HomePage;
pub use navigation::{NavLink, NavState, Navigation};
pub use product::{APPLICATIONS_BASE_DELAY, ProductDetail, ProductPage};
pub use route::Route;
pub use slug::{product_href, slugify};

/// Body of a routed page.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "page", rename_all = "kebab-case")]
pub enum Page {
    Home(Box<HomePage>),
    Products(CatalogPage),
    Product(ProductPage),
    Contact(ContactPage),
    NotFound { path: String },
}

/// A page plus the header and footer around it.
#[derive(Debug, Clone, Serialize)]
pub struct PageView {
    pub route: Route,
    pub locale: String,
    pub navigation: Navigation,
    pub page: Page,
    pub footer: Footer,
}

impl PageView {
    pub fn build(route: Route, r: &Resolver, config: &SiteConfig) -> Self {
        let step = Duration::from_millis(config.reveal.stagger_ms);
        let page = match &route {
            Route::Home => Page::Home(Box::new(HomePage::build(r))),
            Route::Products => Page::Products(CatalogPage::build(r, step)),
            Route::ProductDetail(id) => Page::Product(ProductPage::build(r, id, step)),
            Route::Contact => Page::Contact(ContactPage::build(r)),
            Route::NotFound(path) => Page::NotFound { path: path.clone() },
        };

        Self {
            locale: r.locale().to_owned(),
            navigation: Navigation::build(r),
            footer: Footer::build(r),
            route,
            page,
        }
    }
}

/// A block of a page that reveals as a unit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Section {
    pub name: &'static str,
    /// Approximate rendered height in pixels.
    pub height: f64,
}

const fn section(name: &'static str, height: f64) -> Section {
    Section { name, height }
}

impl Page {
    /// Top-to-bottom section layout, footer included.
    pub fn sections(&self) -> Vec<Section> {
        let mut sections = match self {
            Self::Home(home) => vec![
                section("hero", 820.0),
                section("features", 640.0),
                section("company", 720.0),
                section("products", 180.0 + 96.0 * home.products.items.len() as f64),
                section("services", 480.0),
                section("metrics", 560.0),
            ],
            Self::Products(catalog) => vec![
                section("hero", 560.0),
                section("grid", 120.0 + 220.0 * catalog.products.len().div_ceil(2) as f64),
            ],
            Self::Product(ProductPage::Found(detail)) => vec![
                section("hero", 640.0),
                section("description", 420.0),
                section("why-choose", 360.0),
                section("applications", 140.0 + 160.0 * detail.applications.len() as f64),
                section("gallery", 520.0),
            ],
            Self::Product(ProductPage::NotFound { .. }) | Self::NotFound { .. } => {
                vec![section("message", 480.0)]
            }
            Self::Contact(_) => vec![
                section("hero", 480.0),
                section("info", 360.0),
                section("form", 720.0),
                section("map", 440.0),
            ],
        };
        sections.push(section("footer", 420.0));
        sections
    }
}
