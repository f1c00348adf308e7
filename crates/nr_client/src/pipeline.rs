use crate::extract::extract_feed;
use crate::fetch::BodyFetcher;
use nr_core::{Feed, Result};
use url::Url;

/// Sequential fetch-then-extract composition. Each run owns its own
/// intermediate values; nothing is shared between concurrent runs.
pub struct FetchPipeline {
    fetcher: Box<dyn BodyFetcher>,
}

impl FetchPipeline {
    pub fn new(fetcher: Box<dyn BodyFetcher>) -> Self {
        Self { fetcher }
    }

    /// Runs one load: GET the URL, then extract the article list from the
    /// body. Extraction is only attempted after a successful fetch; any
    /// failure short-circuits and is logged with its originating stage.
    pub async fn run(&self, url: Option<&Url>) -> Result<Feed> {
        let body = match self.fetcher.get(url).await {
            Ok(Some(body)) => body,
            Ok(None) => return Ok(Feed::NoData),
            Err(e) => {
                tracing::error!("load failed in {} stage: {}", e.stage(), e);
                return Err(e);
            }
        };

        extract_feed(&body).map_err(|e| {
            tracing::error!("load failed in {} stage: {}", e.stage(), e);
            e
        })
    }
}
