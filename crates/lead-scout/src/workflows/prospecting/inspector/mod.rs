mod parse;

pub use parse::{extract_email_from_content, summarize_page};

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::{header, Client, Url};
use serde::Deserialize;
use thiserror::Error;

use super::domain::WebsiteSummary;
use crate::config::ScraperConfig;

#[derive(Debug, Error)]
pub enum InspectError {
    #[error("failed to build website client: {0}")]
    Client(#[from] reqwest::Error),

    #[error("invalid proxy URL '{0}'")]
    InvalidProxy(String),

    #[error("website inspection failed for {url}: {message}")]
    Failed { url: String, message: String },
}

/// Fetches a homepage and reduces it to a [`WebsiteSummary`].
#[async_trait]
pub trait WebsiteInspector: Send + Sync {
    async fn inspect(&self, url: &str) -> Result<WebsiteSummary, InspectError>;
}

#[async_trait]
impl<T> WebsiteInspector for Arc<T>
where
    T: WebsiteInspector + ?Sized,
{
    async fn inspect(&self, url: &str) -> Result<WebsiteSummary, InspectError> {
        (**self).inspect(url).await
    }
}

#[derive(Debug, Error)]
enum FetchError {
    #[error("{0}")]
    Http(#[from] reqwest::Error),
    #[error("HTTP {0}")]
    Status(u16),
    #[error("Proxy fetch failed: HTTP {0}")]
    ProxyStatus(u16),
}

/// Single best-effort fetch with one proxy fallback. No retries.
pub struct HttpWebsiteInspector {
    client: Client,
    user_agent: String,
    proxy_url: Url,
}

impl HttpWebsiteInspector {
    pub fn new(config: &ScraperConfig) -> Result<Self, InspectError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;
        let proxy_url = Url::parse(&config.proxy_url)
            .map_err(|_| InspectError::InvalidProxy(config.proxy_url.clone()))?;

        Ok(Self {
            client,
            user_agent: config.user_agent.clone(),
            proxy_url,
        })
    }

    async fn fetch_direct(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(url)
            .header(header::USER_AGENT, &self.user_agent)
            .header(
                header::ACCEPT,
                "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
            )
            .header(header::ACCEPT_LANGUAGE, "en-US,en;q=0.5")
            .header(header::DNT, "1")
            .header(header::UPGRADE_INSECURE_REQUESTS, "1")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }

    async fn fetch_via_proxy(&self, url: &str) -> Result<String, FetchError> {
        let mut proxied = self.proxy_url.clone();
        proxied.query_pairs_mut().append_pair("url", url);

        let response = self.client.get(proxied).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::ProxyStatus(status.as_u16()));
        }
        let payload: ProxyPayload = response.json().await?;
        Ok(payload.contents.unwrap_or_default())
    }
}

#[derive(Debug, Deserialize)]
struct ProxyPayload {
    #[serde(default)]
    contents: Option<String>,
}

#[async_trait]
impl WebsiteInspector for HttpWebsiteInspector {
    /// Never fails on fetch problems; an unreachable site yields an unreachable summary.
    async fn inspect(&self, url: &str) -> Result<WebsiteSummary, InspectError> {
        if !url.starts_with("http") {
            return Ok(WebsiteSummary::default());
        }

        let started = Instant::now();
        let html = match self.fetch_direct(url).await {
            Ok(html) => html,
            Err(direct) => {
                tracing::debug!(%url, error = %direct, "direct fetch failed, trying proxy");
                match self.fetch_via_proxy(url).await {
                    Ok(html) => html,
                    Err(err) => {
                        tracing::warn!(%url, error = %err, "website unreachable");
                        return Ok(WebsiteSummary::unreachable(err.to_string()));
                    }
                }
            }
        };
        let load_time_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        Ok(summarize_page(url, &html, load_time_ms))
    }
}
