//! Image gallery scraper.
//!
//! Collects every `<img src>` on the gallery page and saves each image as
//! `image_<index>.jpg` inside the download directory.
//!
//! # Caching
//!
//! Files are keyed purely by position. If `image_3.jpg` already exists it is
//! reused without a request, even when the gallery has changed since it was
//! written.

use crate::fetch::Fetch;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info, instrument};

static IMAGE_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img[src]").unwrap());

/// Turn a protocol-relative `//host/path` into `https://host/path`.
///
/// Anything else is returned unchanged, including relative paths.
pub fn normalize_image_url(src: &str) -> String {
    if src.starts_with("//") {
        format!("https:{src}")
    } else {
        src.to_string()
    }
}

/// Extract normalized image URLs from a gallery page, in document order.
pub fn extract_image_urls(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    document
        .select(&IMAGE_SELECTOR)
        .filter_map(|img| img.value().attr("src"))
        .map(normalize_image_url)
        .collect()
}

/// Local path for the image at `index`.
pub fn image_path(download_dir: &Path, index: usize) -> PathBuf {
    download_dir.join(format!("image_{index}.jpg"))
}

/// Scrape the gallery and download every image not already on disk.
///
/// # Returns
///
/// One local path per `<img src>` on the page, in page order.
///
/// # Errors
///
/// Any fetch or filesystem failure aborts the whole run; nothing is retried.
#[instrument(level = "info", skip(fetcher, download_dir), fields(dir = %download_dir.display()))]
pub async fn download_images<F: Fetch>(
    fetcher: &F,
    gallery_url: &str,
    download_dir: &Path,
) -> Result<Vec<PathBuf>, Box<dyn Error>> {
    fs::create_dir_all(download_dir).await?;

    let html = fetcher.text(gallery_url).await?;
    let image_urls = extract_image_urls(&html);
    info!(count = image_urls.len(), source = gallery_url, "Indexed gallery images");

    let mut downloaded = Vec::with_capacity(image_urls.len());
    let mut fetched = 0usize;
    for (index, image_url) in image_urls.iter().enumerate() {
        let path = image_path(download_dir, index);
        if fs::try_exists(&path).await? {
            debug!(index, path = %path.display(), "Image already on disk, skipping");
        } else {
            let bytes = fetcher.bytes(image_url).await?;
            fs::write(&path, &bytes).await?;
            fetched += 1;
            debug!(index, %image_url, bytes = bytes.len(), "Saved image");
        }
        downloaded.push(path);
    }

    info!(
        total = downloaded.len(),
        fetched,
        cached = downloaded.len() - fetched,
        "Gallery images ready"
    );
    Ok(downloaded)
}
