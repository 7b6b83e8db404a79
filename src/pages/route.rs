//! Site routes.
//!
//! | Path              | Route                  |
//! |-------------------|------------------------|
//! | `/`               | `Home`                 |
//! | `/products`       | `Products`             |
//! | `/product/<id>`   | `ProductDetail(id)`    |
//! | `/contact`        | `Contact`              |
//! | anything else     | `NotFound(path)`       |

use std::fmt;

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "route", content = "param", rename_all = "kebab-case")]
pub enum Route {
    Home,
    Products,
    ProductDetail(String),
    Contact,
    NotFound(String),
}

impl Route {
    /// Parse a request path. Never fails; unknown paths become `NotFound`.
    ///
    /// Query strings, fragments and trailing slashes are ignored and the
    /// product id is percent-decoded.
    pub fn parse(input: &str) -> Self {
        let path = input
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .trim();

        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => Self::Home,
            ["products"] => Self::Products,
            ["contact"] => Self::Contact,
            ["product", id] => match urlencoding::decode(id) {
                Ok(id) if !id.trim().is_empty() => Self::ProductDetail(id.into_owned()),
                _ => Self::NotFound(path.to_owned()),
            },
            _ => Self::NotFound(path.to_owned()),
        }
    }

    /// Canonical path of this route.
    pub fn path(&self) -> String {
        match self {
            Self::Home => "/".to_owned(),
            Self::Products => "/products".to_owned(),
            Self::ProductDetail(id) => format!("/product/{}", urlencoding::encode(id)),
            Self::Contact => "/contact".to_owned(),
            Self::NotFound(path) => path.clone(),
        }
    }

    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}
