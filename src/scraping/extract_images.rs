use anyhow::{anyhow, Result};
use html5ever::driver::ParseOpts;
use html5ever::tendril::TendrilSink;
use html5ever::tree_builder::TreeBuilderOpts;
use scraper::{Html, Selector};

/// The attributes of an `img` element that matter for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageElement {
    /// Verbatim `src`, empty when absent.
    pub src: String,
    /// Lowercased `alt`, empty when absent.
    pub alt: String,
}

/// Parses a full document with scripting disabled, so `<noscript>` content
/// is built into the tree instead of being kept as raw text.
fn parse_document(html_content: &str) -> Html {
    let opts = ParseOpts {
        tree_builder: TreeBuilderOpts {
            scripting_enabled: false,
            ..Default::default()
        },
        ..Default::default()
    };

    html5ever::parse_document(Html::new_document(), opts).one(html_content)
}

/// Extracts every `img` element from HTML content, in document order,
/// including fallbacks inside `<noscript>`.
pub fn extract_images(html_content: &str) -> Result<Vec<ImageElement>> {
    let document = parse_document(html_content);
    let selector =
        Selector::parse("img").map_err(|e| anyhow!("Failed to parse img selector: {:?}", e))?;

    let images = document
        .select(&selector)
        .map(|element| {
            let element = element.value();
            ImageElement {
                src: element.attr("src").unwrap_or_default().to_string(),
                alt: element.attr("alt").unwrap_or_default().to_lowercase(),
            }
        })
        .collect();

    Ok(images)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_attributes_default_to_empty() {
        let images = extract_images("<html><body><img></body></html>").unwrap();

        assert_eq!(
            images,
            vec![ImageElement {
                src: String::new(),
                alt: String::new(),
            }]
        );
    }

    #[test]
    fn alt_is_lowercased_and_src_kept_verbatim() {
        let html = r#"<img src="https://CDN.example.com/Card.PNG" alt="Citi REWARDS">"#;

        let images = extract_images(html).unwrap();

        assert_eq!(images[0].src, "https://CDN.example.com/Card.PNG");
        assert_eq!(images[0].alt, "citi rewards");
    }

    #[test]
    fn keeps_document_order_and_tolerates_broken_markup() {
        let html = r#"<div><p><img src="a.png"><span><img src="b.png" alt=x</div><img src="c.png">"#;

        let srcs: Vec<_> = extract_images(html)
            .unwrap()
            .into_iter()
            .map(|image| image.src)
            .collect();

        assert_eq!(srcs.first().map(String::as_str), Some("a.png"));
        assert_eq!(srcs.last().map(String::as_str), Some("c.png"));
    }

    #[test]
    fn finds_images_inside_noscript_fallbacks() {
        let html = r#"<html><head>
            <noscript><img src="https://cdn.example.com/head-pixel.gif"></noscript>
            </head><body>
            <img src="data:image/gif;base64,R0lGODlhAQABAAAAACw=" alt="HSBC EveryMile">
            <noscript><img src="https://cdn.example.com/everymile-card.png" alt="HSBC EveryMile"></noscript>
            </body></html>"#;

        let srcs: Vec<_> = extract_images(html)
            .unwrap()
            .into_iter()
            .map(|image| image.src)
            .collect();

        assert!(srcs.contains(&"https://cdn.example.com/head-pixel.gif".to_string()));
        assert!(srcs.contains(&"https://cdn.example.com/everymile-card.png".to_string()));
        assert_eq!(srcs.len(), 3);
    }
}
