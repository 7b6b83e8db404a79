//! Site footer.

use serde::{Deserialize, Serialize};

use crate::content::Resolver;

/// Footer link as stored in the dictionary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
struct LinkEntry {
    text: String,
    href: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FooterLink {
    pub text: String,
    pub href: String,
    /// Site-relative links route in-app; the rest open as plain anchors.
    pub internal: bool,
}

impl From<LinkEntry> for FooterLink {
    fn from(entry: LinkEntry) -> Self {
        Self {
            internal: entry.href.starts_with('/'),
            text: entry.text,
            href: entry.href,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct LinkGroup {
    pub title: String,
    pub links: Vec<FooterLink>,
}

#[derive(Debug, Clone, Serialize)]
pub struct FooterContact {
    pub title: String,
    pub email: String,
    pub email_href: String,
    pub phone: String,
    pub phone_href: String,
    pub location: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Footer {
    pub description: String,
    pub quick_links: LinkGroup,
    pub product_links: LinkGroup,
    pub contact: FooterContact,
    pub copyright: String,
    pub privacy: String,
    pub terms: String,
}

impl Footer {
    pub fn build(r: &Resolver) -> Self {
        let email = r.resolve_string("footer.contact.email");
        let phone = r.resolve_string("footer.contact.phone");

        Self {
            description: r.resolve_string("footer.description"),
            quick_links: link_group(r, "footer.quickLinks"),
            product_links: link_group(r, "footer.productsLinks"),
            contact: FooterContact {
                title: r.resolve_string("footer.contact.title"),
                email_href: format!("mailto:{email}"),
                email,
                phone_href: tel_href(&phone),
                phone,
                location: r.resolve_string("footer.contact.location"),
            },
            copyright: r.resolve_string("footer.copyright"),
            privacy: r.resolve_string("footer.legal.privacy"),
            terms: r.resolve_string("footer.legal.terms"),
        }
    }
}

fn link_group(r: &Resolver, prefix: &str) -> LinkGroup {
    LinkGroup {
        title: r.resolve_string(&format!("{prefix}.title")),
        links: r
            .resolve_records::<LinkEntry>(&format!("{prefix}.links"))
            .into_iter()
            .map(FooterLink::from)
            .collect(),
    }
}

/// `tel:` URI with whitespace removed.
pub fn tel_href(phone: &str) -> String {
    let digits: String = phone.chars().filter(|c| !c.is_whitespace()).collect();
    format!("tel:{digits}")
}
