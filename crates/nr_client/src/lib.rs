pub mod extract;
pub mod fetch;
pub mod loader;
pub mod pipeline;
pub mod query;

pub use extract::extract_feed;
pub use fetch::{BodyFetcher, HttpFetcher};
pub use loader::{FeedLoader, LoadState};
pub use pipeline::FetchPipeline;
pub use query::{build_query_url, resolve_order};

pub mod prelude {
    pub use crate::fetch::{BodyFetcher, HttpFetcher};
    pub use crate::loader::{FeedLoader, LoadState};
    pub use crate::pipeline::FetchPipeline;
    pub use nr_core::{Article, Error, Feed, OrderBy, QueryConfig, Result};
}
