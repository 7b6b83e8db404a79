//! Landing page.

use serde::{Deserialize, Serialize};

use crate::content::Resolver;

use super::{assets, slug};

const FEATURES: [&str; 3] = ["innovative", "sustainability", "integrative"];

#[derive(Debug, Clone, Serialize)]
pub struct Hero {
    pub title: String,
    pub title_break: String,
    pub products_button: String,
    pub services_button: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Feature {
    pub key: &'static str,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Features {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<Feature>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Company {
    pub label: String,
    pub title: String,
    pub title_break: String,
    pub paragraphs: Vec<String>,
    pub image_labels: [String; 2],
}

/// Numbered card shared by the product and service lists.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct NumberedItem {
    pub number: String,
    pub name: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductCard {
    #[serde(flatten)]
    pub item: NumberedItem,
    pub href: String,
    /// Absent for products without imagery.
    pub image: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProductsSection {
    pub title: String,
    pub items: Vec<ProductCard>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServicesSection {
    pub title: String,
    pub items: Vec<NumberedItem>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Metric {
    pub value: String,
    pub label: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Metrics {
    pub label: String,
    pub title: [String; 3],
    pub items: Vec<Metric>,
}

#[derive(Debug, Clone, Serialize)]
pub struct HomePage {
    pub hero: Hero,
    pub features: Features,
    pub company: Company,
    pub products: ProductsSection,
    pub services: ServicesSection,
    pub metrics: Metrics,
}

impl HomePage {
    pub fn build(r: &Resolver) -> Self {
        Self {
            hero: Hero {
                title: r.resolve_string("hero.title"),
                title_break: r.resolve_string("hero.titleBreak"),
                products_button: r.resolve_string("hero.buttons.products"),
                services_button: r.resolve_string("hero.buttons.services"),
            },
            features: Features {
                title: r.resolve_string("hero.sectionTitle"),
                subtitle: r.resolve_string("hero.sectionSubtitle"),
                items: FEATURES
                    .iter()
                    .map(|&key| Feature {
                        key,
                        title: r.resolve_string(&format!("hero.features.{key}.title")),
                        description: r.resolve_string(&format!("hero.features.{key}.description")),
                    })
                    .collect(),
            },
            company: Company {
                label: r.resolve_string("company.label"),
                title: r.resolve_string("company.title"),
                title_break: r.resolve_string("company.titleBreak"),
                paragraphs: r.resolve_strings("company.paragraphs"),
                image_labels: [
                    r.resolve_string("company.imageLabels.integrated"),
                    r.resolve_string("company.imageLabels.innovative"),
                ],
            },
            products: ProductsSection {
                title: r.resolve_string("products.title"),
                items: r
                    .resolve_records::<NumberedItem>("products.items")
                    .into_iter()
                    .map(|item| {
                        let id = slug::slugify(&item.name);
                        ProductCard {
                            href: slug::product_href(&item.name),
                            image: assets::product_thumbnail(&id),
                            item,
                        }
                    })
                    .collect(),
            },
            services: ServicesSection {
                title: r.resolve_string("services.title"),
                items: r.resolve_records("services.items"),
            },
            metrics: Metrics {
                label: r.resolve_string("metrics.label"),
                title: [
                    r.resolve_string("metrics.title"),
                    r.resolve_string("metrics.titleLine2"),
                    r.resolve_string("metrics.titleLine3"),
                ],
                items: r.resolve_records("metrics.items"),
            },
        }
    }
}
