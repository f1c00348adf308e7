use async_trait::async_trait;
use nr_core::{Error, Result};
use reqwest::StatusCode;
use std::time::Duration;
use url::Url;

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);
const READ_TIMEOUT: Duration = Duration::from_secs(10);

/// The body-fetching seam of the pipeline.
#[async_trait]
pub trait BodyFetcher: Send + Sync {
    /// Fetches the raw response body for `url`. A `None` URL means there is
    /// nothing to fetch and yields `Ok(None)` rather than an error.
    async fn get(&self, url: Option<&Url>) -> Result<Option<String>>;
}

/// Single-attempt HTTP GET fetcher. No retries; both connect and overall
/// request time are bounded so a dead endpoint cannot pin a worker task.
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(READ_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl BodyFetcher for HttpFetcher {
    async fn get(&self, url: Option<&Url>) -> Result<Option<String>> {
        let url = match url {
            Some(url) => url,
            None => return Ok(None),
        };

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            tracing::error!("{} answered with status {}", url, status);
            return Err(Error::FetchStatus(status.as_u16()));
        }

        let body = response.text().await?;
        Ok(Some(body))
    }
}
