use clap::Parser;
use nr_client::{build_query_url, FeedLoader, FetchPipeline, HttpFetcher};
use nr_core::{Error, Feed, OrderBy, QueryConfig, Result};
use std::time::Duration;
use tracing::info;
use url::Url;

const DEFAULT_SEARCH_URL: &str =
    "https://content.guardianapis.com/search?show-tags=contributor";
const REACHABILITY_TIMEOUT: Duration = Duration::from_secs(5);

#[derive(Parser, Debug)]
#[command(author, version, about = "Fetch news headlines from the Guardian search API", long_about = None)]
struct Cli {
    /// Free-text search filter; empty fetches the latest of everything
    #[arg(long, default_value = "")]
    query: String,
    /// Result ordering; a non-empty query always ranks by relevance
    #[arg(long, value_enum, default_value_t = OrderArg::Newest)]
    order_by: OrderArg,
    /// Content API key
    #[arg(long, default_value = "test")]
    api_key: String,
    /// Base search endpoint
    #[arg(long, default_value = DEFAULT_SEARCH_URL)]
    base_url: String,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OrderArg {
    Newest,
    Oldest,
    Relevance,
}

impl From<OrderArg> for OrderBy {
    fn from(arg: OrderArg) -> Self {
        match arg {
            OrderArg::Newest => OrderBy::Newest,
            OrderArg::Oldest => OrderBy::Oldest,
            OrderArg::Relevance => OrderBy::Relevance,
        }
    }
}

/// Cheap connectivity probe: can we open a TCP connection to the endpoint
/// host at all? When this fails there is no point starting a load cycle.
async fn is_reachable(url: &Url) -> bool {
    let host = match url.host_str() {
        Some(host) => host,
        None => return false,
    };
    let port = url.port_or_known_default().unwrap_or(443);
    let addr = format!("{}:{}", host, port);

    matches!(
        tokio::time::timeout(REACHABILITY_TIMEOUT, tokio::net::TcpStream::connect(&addr)).await,
        Ok(Ok(_))
    )
}

fn render(feed: &Feed) {
    let articles = feed.articles();
    if articles.is_empty() {
        println!("No news found.");
        return;
    }
    for article in articles {
        let date = article
            .published_at
            .map(|d| d.format("%b %d, %Y %H:%M").to_string())
            .unwrap_or_else(|| "undated".to_string());
        let author = if article.author.is_empty() {
            "unknown author"
        } else {
            article.author.as_str()
        };
        println!(
            "[{}] {} — {} ({})\n    {}",
            article.section, article.title, author, date, article.url
        );
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let mut base = Url::parse(&cli.base_url)
        .map_err(|e| Error::InvalidUrl(format!("{}: {}", cli.base_url, e)))?;
    base.query_pairs_mut().append_pair("api-key", &cli.api_key);

    let config = QueryConfig::new(cli.query, cli.order_by.into());
    let url = build_query_url(base.as_str(), &config)?;

    if !is_reachable(&url).await {
        println!("No internet connection.");
        return Ok(());
    }

    info!("📰 Fetching {}", url);
    let pipeline = FetchPipeline::new(Box::new(HttpFetcher::new()?));
    let (loader, mut rx) = FeedLoader::new(pipeline);
    loader.start(Some(url));

    match rx.recv().await {
        Some(Ok(feed)) => render(&feed),
        Some(Err(e)) => {
            tracing::error!("load failed in {} stage: {}", e.stage(), e);
            println!("No news found.");
        }
        None => {}
    }

    Ok(())
}
