//! Page scrapers feeding the dashboard.
//!
//! | Page | Module | Produces |
//! |------|--------|----------|
//! | Image gallery | [`gallery`] | `Vec<PathBuf>` of downloaded images |
//! | News releases | [`news`] | `Vec<NewsItem>` |
//!
//! Both take a [`crate::fetch::Fetch`] implementation, parse with `scraper`
//! using selectors compiled once, and propagate fetch errors to the caller.

pub mod gallery;
pub mod news;
