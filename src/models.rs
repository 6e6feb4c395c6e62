//! Data models shared between the scrapers and the dashboard.
//!
//! Images need no model of their own: a scraped image is just the
//! [`std::path::PathBuf`] of the file it was saved to.

/// One entry from the news listing page.
///
/// # Fields
///
/// * `title` - Headline text, or a placeholder when the page has none
/// * `description` - Teaser paragraph, or a placeholder when missing
/// * `url` - Absolute article link; `None` when the anchor had no `href`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub description: String,
    pub url: Option<String>,
}

impl NewsItem {
    /// Host part of the article link, e.g. `www.nasa.gov`.
    pub fn host(&self) -> Option<String> {
        self.url
            .as_deref()
            .and_then(|u| url::Url::parse(u).ok())
            .and_then(|u| u.host_str().map(str::to_string))
    }
}
