//! # NASA Dashboard
//!
//! Scrapes the NASA Webb telescope gallery for images and the NASA news
//! release listing for headlines, then shows both in a small desktop window.
//!
//! ## Usage
//!
//! ```sh
//! nasa_dashboard
//! nasa_dashboard -c dashboard.yaml -d ./cache
//! ```
//!
//! ## Flow
//!
//! 1. **Images**: fetch the gallery page, download every image not already
//!    in the download directory
//! 2. **News**: fetch the news listing and extract title, teaser and link
//! 3. **Window**: browse images with Previous/Next, click headlines to open
//!    them in the browser
//!
//! All network work finishes before the window opens. A failure in either
//! scrape stops the program; there is no partial mode.

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, error, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod config;
mod dashboard;
mod fetch;
mod models;
mod scrapers;
mod utils;

use cli::Cli;
use config::DashboardConfig;
use fetch::{Fetch, HttpFetcher};
use models::NewsItem;

fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("nasa_dashboard starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let config = match DashboardConfig::load(args.config.as_deref()) {
        Ok(config) => config.apply_cli(&args),
        Err(e) => {
            error!(path = ?args.config, error = %e, "Failed to load configuration");
            return Err(e);
        }
    };
    if let Err(e) = config.validate() {
        error!(error = %e, "Invalid configuration");
        return Err(e);
    }

    // ---- Scrape everything before the window exists ----
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let fetcher = HttpFetcher::new()?;
    let (images, news) = runtime.block_on(scrape_all(&fetcher, &config))?;
    drop(runtime);

    let elapsed = start_time.elapsed();
    info!(
        images = images.len(),
        news = news.len(),
        ?elapsed,
        "Scraping complete; opening dashboard"
    );

    dashboard::run(&config, images, news)?;
    info!("Window closed");
    Ok(())
}

/// Images first, then news; the first error ends the run.
#[instrument(level = "info", skip_all)]
async fn scrape_all<F: Fetch>(
    fetcher: &F,
    config: &DashboardConfig,
) -> Result<(Vec<PathBuf>, Vec<NewsItem>), Box<dyn Error>> {
    let images = match scrapers::gallery::download_images(
        fetcher,
        &config.gallery_url,
        &config.download_dir,
    )
    .await
    {
        Ok(images) => images,
        Err(e) => {
            error!(url = %config.gallery_url, error = %e, "Image scrape failed");
            return Err(e);
        }
    };

    let news = match scrapers::news::fetch_news(fetcher, &config.news_url, &config.news_origin).await {
        Ok(news) => news,
        Err(e) => {
            error!(url = %config.news_url, error = %e, "News scrape failed");
            return Err(e);
        }
    };

    Ok((images, news))
}
