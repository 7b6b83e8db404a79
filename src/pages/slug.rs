//! Product names to route slugs.

/// Transliterate to ASCII, lowercase, and join words with `-`.
///
/// `"Wetting Agents"` → `"wetting-agents"`, `"Pré-Treatment"` → `"pre-treatment"`.
pub fn slugify(text: &str) -> String {
    let ascii = deunicode::deunicode(text);
    let mut slug = String::with_capacity(ascii.len());

    for c in ascii.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }
    slug
}

/// Route of a product's detail page.
pub fn product_href(name: &str) -> String {
    format!("/product/{}", slugify(name))
}
