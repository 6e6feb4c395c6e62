//! Command-line interface definitions.
//!
//! Every option is optional. With no flags and no config file the dashboard
//! scrapes the default NASA gallery and news pages into `./nasa_images`.

use clap::Parser;

/// Command-line arguments for the dashboard.
///
/// # Examples
///
/// ```sh
/// # Defaults
/// nasa_dashboard
///
/// # Custom YAML config, different image directory
/// nasa_dashboard -c dashboard.yaml -d /tmp/nasa
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Optional path to a YAML config file
    #[arg(short, long, env = "DASHBOARD_CONFIG")]
    pub config: Option<String>,

    /// Directory downloaded images are stored in
    #[arg(short, long)]
    pub download_dir: Option<String>,

    /// Gallery page scraped for images
    #[arg(long)]
    pub gallery_url: Option<String>,

    /// News listing page scraped for articles
    #[arg(long)]
    pub news_url: Option<String>,
}
