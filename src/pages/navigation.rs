//! Header navigation and chat widget state.

use serde::Serialize;

use crate::config::NavigationConfig;
use crate::content::Resolver;

use super::route::Route;

/// `(dictionary key, href)` for each header link, in display order.
const LINKS: &[(&str, &str)] = &[
    ("home", "/"),
    ("company", "/#company"),
    ("products", "/products"),
    ("services", "/#services"),
    ("news", "/#news"),
    ("contact", "/contact"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

/// Resolved header content.
#[derive(Debug, Clone, Serialize)]
pub struct Navigation {
    pub brand: String,
    pub tagline: String,
    pub links: Vec<NavLink>,
}

impl Navigation {
    pub fn build(r: &Resolver) -> Self {
        let links = LINKS
            .iter()
            .map(|(key, href)| NavLink {
                label: r.resolve_string(&format!("navigation.links.{key}")),
                href: (*href).to_owned(),
            })
            .collect();

        Self {
            brand: r.resolve_string("navigation.brand.name"),
            tagline: r.resolve_string("navigation.brand.tagline"),
            links,
        }
    }
}

/// Interactive header state: mobile menu, scroll style, chat widget.
#[derive(Debug, Clone, Serialize)]
pub struct NavState {
    pub menu_open: bool,
    pub scrolled: bool,
    pub chat_open: bool,
    #[serde(skip)]
    scrolled_offset: f64,
}

impl NavState {
    pub fn new(config: &NavigationConfig) -> Self {
        Self {
            menu_open: false,
            scrolled: false,
            chat_open: false,
            scrolled_offset: config.scrolled_offset,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Follow a header link; the mobile menu closes.
    pub fn follow(&mut self, link: &NavLink) -> Route {
        self.menu_open = false;
        Route::parse(&link.href)
    }

    /// Track the page scroll offset. Returns whether `scrolled` changed.
    pub fn on_scroll(&mut self, scroll_y: f64) -> bool {
        let scrolled = scroll_y > self.scrolled_offset;
        let changed = scrolled != self.scrolled;
        self.scrolled = scrolled;
        changed
    }

    pub fn toggle_chat(&mut self) {
        self.chat_open = !self.chat_open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Catalog, RecordingSink};
    use std::sync::Arc;

    fn state() -> NavState {
        NavState::new(&NavigationConfig::default())
    }

    #[test]
    fn test_scrolled_threshold_is_exclusive() {
        let mut nav = state();

        assert!(!nav.on_scroll(20.0));
        assert!(!nav.scrolled);

        assert!(nav.on_scroll(20.5));
        assert!(nav.scrolled);
        assert!(!nav.on_scroll(400.0));

        assert!(nav.on_scroll(0.0));
        assert!(!nav.scrolled);
    }

    #[test]
    fn test_menu_closes_on_link() {
        let mut nav = state();
        nav.toggle_menu();
        assert!(nav.menu_open);

        let link = NavLink {
            label: "Contact".into(),
            href: "/contact".into(),
        };
        assert_eq!(nav.follow(&link), Route::Contact);
        assert!(!nav.menu_open);

        nav.toggle_menu();
        nav.toggle_menu();
        assert!(!nav.menu_open);
    }

    #[test]
    fn test_chat_toggle() {
        let mut nav = state();
        nav.toggle_chat();
        assert!(nav.chat_open);
        nav.toggle_chat();
        assert!(!nav.chat_open);
    }

    #[test]
    fn test_build_from_bundled() {
        let sink = Arc::new(RecordingSink::new());
        let r = Resolver::new(Arc::new(Catalog::bundled().unwrap()), sink.clone());

        let nav = Navigation::build(&r);
        assert_eq!(nav.links.len(), 6);
        assert_eq!(nav.links[2].href, "/products");
        assert!(sink.is_empty(), "{:?}", sink.misses());
    }
}
