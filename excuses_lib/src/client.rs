//! HTTP client for the developer excuses page.

use std::time::Duration;

use reqwest::Url;

use crate::error::FetchError;
use crate::extract::ExcuseOutcome;

/// Page the excuse is scraped from.
pub const DEFAULT_URL: &str = "http://developerexcuses.com/";

/// Issues a single GET against the excuse page.
///
/// The stock client has no timeout and never retries; redirects follow
/// reqwest's default policy.
pub struct ExcuseClient {
    url: Url,
    http: reqwest::Client,
}

impl ExcuseClient {
    /// Creates a client for a custom page URL, optionally with a request timeout.
    pub fn with_url(url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        let url = Url::parse(url).map_err(|e| FetchError::InvalidUrl(e.to_string()))?;
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            url,
            http: builder.build()?,
        })
    }

    /// Fetches the page and scans it for the excuse.
    ///
    /// An empty or anchor-less page is not an error; it comes back as
    /// [`ExcuseOutcome::ExtractionFailed`].
    pub async fn fetch_excuse(&self) -> Result<ExcuseOutcome, FetchError> {
        let html = self.fetch_html().await?;
        let outcome = ExcuseOutcome::from_html(&html);
        tracing::debug!(found = outcome.excuse().is_some(), "scanned page for excuse");
        Ok(outcome)
    }

    /// Fetches the full page body as decoded text.
    pub async fn fetch_html(&self) -> Result<String, FetchError> {
        tracing::debug!(url = %self.url, "requesting excuse page");
        let resp = self
            .http
            .get(self.url.clone())
            .send()
            .await
            .map_err(|e| {
                tracing::error!("Failed to get excuse page: {}", e);
                FetchError::Http(e)
            })?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!("Excuse page returned status {}", status);
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = resp.text().await.map_err(|e| {
            tracing::error!("Failed to read response body: {}", e);
            FetchError::Http(e)
        })?;
        tracing::debug!(bytes = body.len(), "read excuse page body");
        Ok(body)
    }
}
