//! Static product imagery.

use serde::Serialize;

/// Images shown for one product. URLs are opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProductImages {
    pub hero: &'static str,
    pub gallery: &'static [&'static str],
    /// Small card image on the landing and catalog pages.
    pub thumbnail: &'static str,
}

const PRODUCT_IMAGES: &[(&str, ProductImages)] = &[
    (
        "preservatives",
        ProductImages {
            hero: "https://images.pexels.com/photos/1188470/pexels-photo-1188470.jpeg?auto=compress&cs=tinysrgb&w=1920",
            gallery: &[
                "https://images.pexels.com/photos/3735218/pexels-photo-3735218.jpeg?auto=compress&cs=tinysrgb&w=800",
                "https://images.pexels.com/photos/2280568/pexels-photo-2280568.jpeg?auto=compress&cs=tinysrgb&w=800",
            ],
            thumbnail: "https://images.pexels.com/photos/1188470/pexels-photo-1188470.jpeg?auto=compress&cs=tinysrgb&w=600",
        },
    ),
    (
        "surfactants",
        ProductImages {
            hero: "https://images.pexels.com/photos/3735218/pexels-photo-3735218.jpeg?auto=compress&cs=tinysrgb&w=1920",
            gallery: &[
                "https://images.pexels.com/photos/2280549/pexels-photo-2280549.jpeg?auto=compress&cs=tinysrgb&w=800",
                "https://images.pexels.com/photos/2280571/pexels-photo-2280571.jpeg?auto=compress&cs=tinysrgb&w=800",
            ],
            thumbnail: "https://images.pexels.com/photos/3735218/pexels-photo-3735218.jpeg?auto=compress&cs=tinysrgb&w=600",
        },
    ),
    (
        "defoamers",
        ProductImages {
            hero: "https://images.pexels.com/photos/6476589/pexels-photo-6476589.jpeg?auto=compress&cs=tinysrgb&w=1920",
            gallery: &[
                "https://images.pexels.com/photos/2280545/pexels-photo-2280545.jpeg?auto=compress&cs=tinysrgb&w=800",
                "https://images.pexels.com/photos/2280567/pexels-photo-2280567.jpeg?auto=compress&cs=tinysrgb&w=800",
            ],
            thumbnail: "https://images.pexels.com/photos/6476589/pexels-photo-6476589.jpeg?auto=compress&cs=tinysrgb&w=600",
        },
    ),
    (
        "wetting-agents",
        ProductImages {
            hero: "https://images.pexels.com/photos/2280568/pexels-photo-2280568.jpeg?auto=compress&cs=tinysrgb&w=1920",
            gallery: &[
                "https://images.pexels.com/photos/2280570/pexels-photo-2280570.jpeg?auto=compress&cs=tinysrgb&w=800",
                "https://images.pexels.com/photos/2280572/pexels-photo-2280572.jpeg?auto=compress&cs=tinysrgb&w=800",
            ],
            thumbnail: "https://images.pexels.com/photos/2280568/pexels-photo-2280568.jpeg?auto=compress&cs=tinysrgb&w=600",
        },
    ),
    (
        "pre-treatment",
        ProductImages {
            hero: "https://images.pexels.com/photos/7615469/pexels-photo-7615469.jpeg?auto=compress&cs=tinysrgb&w=1920",
            gallery: &[
                "https://images.pexels.com/photos/2280543/pexels-photo-2280543.jpeg?auto=compress&cs=tinysrgb&w=800",
                "https://images.pexels.com/photos/2280546/pexels-photo-2280546.jpeg?auto=compress&cs=tinysrgb&w=800",
            ],
            thumbnail: "https://images.pexels.com/photos/7615469/pexels-photo-7615469.jpeg?auto=compress&cs=tinysrgb&w=600",
        },
    ),
];

pub fn product_images(id: &str) -> Option<ProductImages> {
    PRODUCT_IMAGES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, images)| *images)
}

/// Card image for a product id. Products without imagery get none.
pub fn product_thumbnail(id: &str) -> Option<&'static str> {
    product_images(id).map(|images| images.thumbnail)
}

/// Every product id with imagery.
pub fn product_ids() -> impl Iterator<Item = &'static str> {
    PRODUCT_IMAGES.iter().map(|(id, _)| *id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_ids() {
        assert_eq!(product_ids().count(), 5);
        let images = product_images("wetting-agents").unwrap();
        assert!(images.hero.contains("pexels-photo-2280568"));
        assert!(images.hero.ends_with("w=1920"));
        assert_eq!(images.gallery.len(), 2);
    }

    #[test]
    fn test_thumbnail_shares_hero_photo() {
        for id in product_ids() {
            let images = product_images(id).unwrap();
            let photo = |url: &str| url.split('?').next().unwrap_or_default().to_owned();
            assert_eq!(photo(images.thumbnail), photo(images.hero), "{id}");
            assert!(images.thumbnail.ends_with("w=600"));
        }
    }

    #[test]
    fn test_unknown_id_has_no_images() {
        assert!(product_images("solvents").is_none());
        assert_eq!(product_thumbnail("solvents"), None);
    }
}
