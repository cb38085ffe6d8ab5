use std::fmt;

use crate::scraping::extract_images::ImageElement;

/// A card label paired with the image that triggered it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CardMatch {
    pub label: String,
    pub src: String,
}

impl fmt::Display for CardMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.src)
    }
}

/// Matches images against a keyword table.
///
/// Images whose `src` does not start with `http` are skipped. A keyword hits
/// when it is a substring of the lowercased `src` or of the (already
/// lowercased) `alt`. One image yields one record per keyword it hits.
pub fn match_cards(images: &[ImageElement], keywords: &[(&str, &str)]) -> Vec<CardMatch> {
    let mut found_cards = Vec::new();

    for image in images {
        if !image.src.starts_with("http") {
            continue;
        }

        let src_lower = image.src.to_lowercase();
        for (keyword, label) in keywords {
            if src_lower.contains(keyword) || image.alt.contains(keyword) {
                found_cards.push(CardMatch {
                    label: label.to_string(),
                    src: image.src.clone(),
                });
            }
        }
    }

    found_cards
}
