//! NASA news release scraper.
//!
//! Reads the first page of the news release listing. Each release is an
//! `a.hds-content-item-heading` anchor wrapping a heading `div`; the teaser
//! paragraph sits somewhere after the anchor in the markup, not inside a
//! common parent, so it is matched by document order.

use crate::fetch::Fetch;
use crate::models::NewsItem;
use crate::utils::truncate_for_log;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use tracing::{debug, info, instrument};

pub const NO_TITLE: &str = "No Title";
pub const NO_DESCRIPTION: &str = "No Description";

static ARTICLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.hds-content-item-heading").unwrap());
static TITLE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.hds-a11y-heading-22").unwrap());
static PARAGRAPH_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("p").unwrap());

/// Teaser paragraphs carry exactly these classes, in this order.
const DESCRIPTION_CLASSES: [&str; 2] = ["margin-top-0", "margin-bottom-1"];

/// Class list compared token by token, so wrapped or padded attributes still match.
fn is_description(element: &ElementRef<'_>) -> bool {
    PARAGRAPH_SELECTOR.matches(element)
        && element
            .value()
            .attr("class")
            .is_some_and(|class| class.split_whitespace().eq(DESCRIPTION_CLASSES))
}

/// Resolve an article `href` against the site origin.
///
/// * `None` stays `None`.
/// * Empty hrefs and hrefs starting with `http` are returned unchanged.
/// * Anything else is appended to `origin` as-is.
pub fn resolve_article_url(href: Option<&str>, origin: &str) -> Option<String> {
    let href = href?;
    if href.is_empty() || href.starts_with("http") {
        Some(href.to_string())
    } else {
        Some(format!("{origin}{href}"))
    }
}

fn element_text(element: ElementRef<'_>) -> String {
    element.text().collect::<String>().trim().to_string()
}

/// Parse the news listing markup into items, in page order.
///
/// A description is the first matching paragraph after the anchor opens,
/// so consecutive anchors with no paragraph between them share the next one.
pub fn parse_news(html: &str, origin: &str) -> Vec<NewsItem> {
    let document = Html::parse_document(html);
    let mut items: Vec<NewsItem> = Vec::new();
    let mut awaiting_description: Vec<usize> = Vec::new();

    for node in document.root_element().descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };

        if ARTICLE_SELECTOR.matches(&element) {
            let title = element
                .select(&TITLE_SELECTOR)
                .next()
                .map(element_text)
                .unwrap_or_else(|| NO_TITLE.to_string());
            let url = resolve_article_url(element.value().attr("href"), origin);
            awaiting_description.push(items.len());
            items.push(NewsItem {
                title,
                description: NO_DESCRIPTION.to_string(),
                url,
            });
        } else if !awaiting_description.is_empty() && is_description(&element) {
            let description = element_text(element);
            for index in awaiting_description.drain(..) {
                items[index].description = description.clone();
            }
        }
    }

    items
}

/// Fetch the news listing and extract its items.
///
/// # Errors
///
/// Returns an error only if the page cannot be fetched. Missing markup
/// pieces fall back to placeholders instead.
#[instrument(level = "info", skip(fetcher))]
pub async fn fetch_news<F: Fetch>(
    fetcher: &F,
    news_url: &str,
    origin: &str,
) -> Result<Vec<NewsItem>, Box<dyn Error>> {
    let html = fetcher.text(news_url).await?;
    let items = parse_news(&html, origin);

    for item in &items {
        debug!(
            title = %item.title,
            host = ?item.host(),
            description = %truncate_for_log(&item.description, 80),
            "Parsed news item"
        );
    }
    info!(count = items.len(), source = news_url, "Indexed news releases");
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::fake::FakeFetcher;

    const ORIGIN: &str = "https://www.nasa.gov";

    const LISTING: &str = r#"<html><body>
        <div class="hds-content-item">
          <a href="/2025/webb-water" class="hds-content-item-heading">
            <div class="hds-a11y-heading-22">  Webb Finds Water  </div>
          </a>
          <p class="margin-top-0 margin-bottom-1">Ice in a young system.</p>
        </div>
        <div class="hds-content-item">
          <a href="https://science.nasa.gov/moon" class="hds-content-item-heading">
            <div class="hds-a11y-heading-22">Artemis Update</div>
          </a>
          <p class="margin-top-0 margin-bottom-1 extra">Wrong class set.</p>
          <p class="margin-top-0 margin-bottom-1">Crew named.</p>
        </div>
        <div class="hds-content-item">
          <a class="hds-content-item-heading"><span>untitled</span></a>
        </div>
    </body></html>"#;

    #[test]
    fn test_resolve_absolute_unchanged() {
        let href = "https://www.nasa.gov/2025/foo?x=1";
        assert_eq!(resolve_article_url(Some(href), ORIGIN), Some(href.to_string()));
    }

    #[test]
    fn test_resolve_root_relative() {
        assert_eq!(
            resolve_article_url(Some("/2025/foo"), ORIGIN),
            Some("https://www.nasa.gov/2025/foo".to_string())
        );
    }

    #[test]
    fn test_resolve_missing_and_empty() {
        assert_eq!(resolve_article_url(None, ORIGIN), None);
        assert_eq!(resolve_article_url(Some(""), ORIGIN), Some(String::new()));
    }

    #[test]
    fn test_parse_news_fields_in_order() {
        let items = parse_news(LISTING, ORIGIN);

        assert_eq!(items.len(), 3);
        assert_eq!(items[0].title, "Webb Finds Water");
        assert_eq!(items[0].description, "Ice in a young system.");
        assert_eq!(items[0].url.as_deref(), Some("https://www.nasa.gov/2025/webb-water"));

        assert_eq!(items[1].title, "Artemis Update");
        assert_eq!(items[1].description, "Crew named.");
        assert_eq!(items[1].url.as_deref(), Some("https://science.nasa.gov/moon"));
    }

    #[test]
    fn test_parse_news_placeholders() {
        let items = parse_news(LISTING, ORIGIN);

        assert_eq!(items[2].title, NO_TITLE);
        assert_eq!(items[2].description, NO_DESCRIPTION);
        assert_eq!(items[2].url, None);
    }

    #[test]
    fn test_parse_news_shared_following_paragraph() {
        let html = r#"<div>
            <a href="/a" class="hds-content-item-heading"><div class="hds-a11y-heading-22">A</div></a>
            <a href="/b" class="hds-content-item-heading"><div class="hds-a11y-heading-22">B</div></a>
            <section><p class="margin-top-0 margin-bottom-1">Shared</p></section>
        </div>"#;

        let items = parse_news(html, ORIGIN);

        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "Shared");
        assert_eq!(items[1].description, "Shared");
    }

    #[test]
    fn test_parse_news_wrapped_class_attribute() {
        let html = "<div>\
            <a href=\"/a\" class=\"hds-content-item-heading\"><div class=\"hds-a11y-heading-22\">A</div></a>\
            <p class=\" margin-top-0\n    margin-bottom-1  \">Wrapped class attr</p>\
        </div>";

        let items = parse_news(html, ORIGIN);

        assert_eq!(items[0].description, "Wrapped class attr");
    }

    #[test]
    fn test_parse_news_class_order_matters() {
        let html = r#"<div>
            <a href="/a" class="hds-content-item-heading"><div class="hds-a11y-heading-22">A</div></a>
            <p class="margin-bottom-1 margin-top-0">Swapped</p>
        </div>"#;

        let items = parse_news(html, ORIGIN);

        assert_eq!(items[0].description, NO_DESCRIPTION);
    }

    #[test]
    fn test_parse_news_ignores_paragraph_before_anchor() {
        let html = r#"<div>
            <p class="margin-top-0 margin-bottom-1">Too early</p>
            <a href="/a" class="hds-content-item-heading"><div class="hds-a11y-heading-22">A</div></a>
        </div>"#;

        let items = parse_news(html, ORIGIN);

        assert_eq!(items[0].description, NO_DESCRIPTION);
    }

    #[tokio::test]
    async fn test_fetch_news_uses_fetcher() {
        let url = "https://www.nasa.gov/2025-news-releases/";
        let fetcher = FakeFetcher::new().serve(url, LISTING);

        let items = fetch_news(&fetcher, url, ORIGIN).await.unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(fetcher.requested(), vec![url.to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_news_propagates_errors() {
        let fetcher = FakeFetcher::new();
        assert!(fetch_news(&fetcher, "https://down.example/", ORIGIN).await.is_err());
    }
}
