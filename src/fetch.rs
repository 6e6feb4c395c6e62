//! HTTP fetching behind a small trait seam.
//!
//! The scrapers never talk to `reqwest` directly. They take anything that
//! implements [`Fetch`], which lets the tests drive them with canned pages
//! instead of the network.

use std::error::Error;
use std::fmt;
use std::time::Instant;
use tracing::{debug, instrument, warn};

/// Browser-like user agent; some gallery hosts serve stripped pages to unknown clients.
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/128.0.0.0 Safari/537.36";

/// Trait for page and asset retrieval.
///
/// Implementors return the body whatever the HTTP status is. Transport
/// failures are errors.
pub trait Fetch {
    /// Fetch `url` and decode the body as text.
    async fn text(&self, url: &str) -> Result<String, Box<dyn Error>>;

    /// Fetch `url` and return the raw body bytes.
    async fn bytes(&self, url: &str) -> Result<Vec<u8>, Box<dyn Error>>;
}

/// [`Fetch`] implementation backed by a shared `reqwest::Client`.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self, Box<dyn Error>> {
        let client = reqwest::Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    async fn get(&self, url: &str) -> Result<reqwest::Response, Box<dyn Error>> {
        let t0 = Instant::now();
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status.is_success() {
            debug!(%url, %status, elapsed = ?t0.elapsed(), "GET ok");
        } else {
            warn!(%url, %status, "GET returned non-success status; using body anyway");
        }
        Ok(response)
    }
}

impl fmt::Debug for HttpFetcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpFetcher").finish_non_exhaustive()
    }
}

impl Fetch for HttpFetcher {
    #[instrument(level = "debug", skip(self))]
    async fn text(&self, url: &str) -> Result<String, Box<dyn Error>> {
        Ok(self.get(url).await?.text().await?)
    }

    #[instrument(level = "debug", skip(self))]
    async fn bytes(&self, url: &str) -> Result<Vec<u8>, Box<dyn Error>> {
        Ok(self.get(url).await?.bytes().await?.to_vec())
    }
}
