//! Dashboard configuration.
//!
//! Defaults reproduce the stock behavior: the NASA Webb Flickr gallery, the
//! 2025 news releases page, `nasa_images/` for downloads and a 750x500 image
//! frame. A YAML file may override any subset of keys; CLI flags win over
//! both.
//!
//! ```yaml
//! download_dir: /var/cache/nasa
//! frame_width: 1024
//! ```

use crate::cli::Cli;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::PathBuf;
use tracing::{info, instrument};
use url::Url;

pub const DEFAULT_GALLERY_URL: &str = "https://www.flickr.com/photos/nasawebbtelescope/with/54378060725/";
pub const DEFAULT_NEWS_URL: &str = "https://www.nasa.gov/2025-news-releases/";
pub const DEFAULT_NEWS_ORIGIN: &str = "https://www.nasa.gov";
pub const DEFAULT_DOWNLOAD_DIR: &str = "nasa_images";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Page scraped for `<img>` elements.
    pub gallery_url: String,
    /// Page scraped for news release anchors.
    pub news_url: String,
    /// Prefix for article links that are not already absolute.
    pub news_origin: String,
    /// Where `image_<n>.jpg` files are kept between runs.
    pub download_dir: PathBuf,
    pub frame_width: u32,
    pub frame_height: u32,
    pub window_width: u32,
    pub window_height: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            gallery_url: DEFAULT_GALLERY_URL.to_string(),
            news_url: DEFAULT_NEWS_URL.to_string(),
            news_origin: DEFAULT_NEWS_ORIGIN.to_string(),
            download_dir: PathBuf::from(DEFAULT_DOWNLOAD_DIR),
            frame_width: 750,
            frame_height: 500,
            window_width: 800,
            window_height: 800,
        }
    }
}

impl DashboardConfig {
    /// Load from a YAML file, or fall back to defaults when no path is given.
    #[instrument(level = "info")]
    pub fn load(path: Option<&str>) -> Result<Self, Box<dyn Error>> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = fs::read_to_string(path)?;
        let config = Self::from_yaml(&raw)?;
        info!(config_path = path, "Loaded configuration");
        Ok(config)
    }

    pub fn from_yaml(raw: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as null, not as an empty mapping.
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(raw)
    }

    /// Layer command-line overrides on top of the loaded values.
    pub fn apply_cli(mut self, cli: &Cli) -> Self {
        if let Some(dir) = &cli.download_dir {
            self.download_dir = PathBuf::from(dir);
        }
        if let Some(url) = &cli.gallery_url {
            self.gallery_url = url.clone();
        }
        if let Some(url) = &cli.news_url {
            self.news_url = url.clone();
        }
        self
    }

    /// Reject unusable values before any network traffic happens.
    pub fn validate(&self) -> Result<(), Box<dyn Error>> {
        for (key, value) in [
            ("gallery_url", &self.gallery_url),
            ("news_url", &self.news_url),
            ("news_origin", &self.news_origin),
        ] {
            Url::parse(value).map_err(|e| format!("{key}: invalid URL {value:?}: {e}"))?;
        }
        if self.frame_width == 0 || self.frame_height == 0 {
            return Err("frame_width and frame_height must be non-zero".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults_match_stock_pages() {
        let config = DashboardConfig::default();

        assert_eq!(config.gallery_url, DEFAULT_GALLERY_URL);
        assert_eq!(config.news_url, DEFAULT_NEWS_URL);
        assert_eq!(config.news_origin, "https://www.nasa.gov");
        assert_eq!(config.download_dir, PathBuf::from("nasa_images"));
        assert_eq!((config.frame_width, config.frame_height), (750, 500));
        assert_eq!((config.window_width, config.window_height), (800, 800));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_without_path_is_default() {
        assert_eq!(DashboardConfig::load(None).unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = DashboardConfig::from_yaml("download_dir: /tmp/nasa\nframe_width: 1024\n").unwrap();

        assert_eq!(config.download_dir, PathBuf::from("/tmp/nasa"));
        assert_eq!(config.frame_width, 1024);
        assert_eq!(config.frame_height, 500);
        assert_eq!(config.news_url, DEFAULT_NEWS_URL);
    }

    #[test]
    fn test_empty_yaml_is_default() {
        assert_eq!(DashboardConfig::from_yaml("  \n").unwrap(), DashboardConfig::default());
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(DashboardConfig::load(Some("/definitely/not/here.yaml")).is_err());
    }

    #[test]
    fn test_cli_overrides_win() {
        let cli = Cli::parse_from(["nasa_dashboard", "-d", "cache", "--news-url", "https://example.com/news"]);

        let config = DashboardConfig::default().apply_cli(&cli);

        assert_eq!(config.download_dir, PathBuf::from("cache"));
        assert_eq!(config.news_url, "https://example.com/news");
        assert_eq!(config.gallery_url, DEFAULT_GALLERY_URL);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let bad_url = DashboardConfig {
            gallery_url: "not a url".to_string(),
            ..DashboardConfig::default()
        };
        assert!(bad_url.validate().is_err());

        let zero_frame = DashboardConfig {
            frame_height: 0,
            ..DashboardConfig::default()
        };
        assert!(zero_frame.validate().is_err());
    }
}
