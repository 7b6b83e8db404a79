//! Product detail page.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::Resolver;
use crate::reveal::stagger_delay;

use super::assets::{self, ProductImages};
use super::catalog::millis;
use super::route::Route;

/// Applications start revealing after the intro copy has settled.
pub const APPLICATIONS_BASE_DELAY: Duration = Duration::from_millis(400);

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ApplicationEntry {
    category: String,
    uses: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Application {
    pub category: String,
    pub uses: String,
    pub delay_ms: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductDetail {
    pub id: String,
    pub name: String,
    pub tagline: String,
    pub full_description: String,
    pub why_choose_title: String,
    pub why_choose: String,
    pub section_title: String,
    pub applications: Vec<Application>,
    pub images: ProductImages,
    pub explore_button: String,
    pub contact_button: String,
    pub contact_href: String,
}

/// A product page either shows the product or the not-found message.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "kebab-case")]
pub enum ProductPage {
    Found(Box<ProductDetail>),
    NotFound { message: String, back_href: String },
}

impl ProductPage {
    /// Only ids with imagery are products; anything else is `NotFound`.
    pub fn build(r: &Resolver, id: &str, step: Duration) -> Self {
        let Some(images) = assets::product_images(id) else {
            return Self::NotFound {
                message: r.resolve_string("productDetail.notFound"),
                back_href: Route::Products.path(),
            };
        };

        let prefix = format!("productDetail.products.{id}");
        let field = |name: &str| r.resolve_string(&format!("{prefix}.{name}"));

        let applications = r
            .resolve_records::<ApplicationEntry>(&format!("{prefix}.applications"))
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Application {
                category: entry.category,
                uses: entry.uses,
                delay_ms: millis(stagger_delay(APPLICATIONS_BASE_DELAY, step, index)),
            })
            .collect();

        Self::Found(Box::new(ProductDetail {
            id: id.to_owned(),
            name: field("name"),
            tagline: field("tagline"),
            full_description: field("fullDescription"),
            why_choose_title: r.resolve_string("productDetail.whyChooseTitle"),
            why_choose: field("whyChoose"),
            section_title: r.resolve_string("productDetail.sectionTitle"),
            applications,
            images,
            explore_button: r.resolve_string("productDetail.exploreButton"),
            contact_button: r.resolve_string("productDetail.contactButton"),
            contact_href: Route::Contact.path(),
        }))
    }

    pub const fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}
