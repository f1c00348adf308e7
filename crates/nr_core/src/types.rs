use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A single news item as extracted from the search API.
///
/// `published_at` is `None` when the source omitted the publication date or
/// sent one that does not match the API's date format. `author` can be an
/// empty string when the contributor tag carries no name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    pub title: String,
    pub section: String,
    pub published_at: Option<NaiveDateTime>,
    pub author: String,
    pub url: String,
}

/// What a completed fetch produced, with "nothing to fetch" kept distinct
/// from "fetched an empty result set".
#[derive(Debug, Clone, PartialEq)]
pub enum Feed {
    /// No URL was given or the response body was empty.
    NoData,
    /// The API answered with a (possibly empty) list, in server order.
    Articles(Vec<Article>),
}

impl Feed {
    pub fn articles(&self) -> &[Article] {
        match self {
            Feed::NoData => &[],
            Feed::Articles(articles) => articles,
        }
    }
}

/// Server-side result ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderBy {
    Newest,
    Oldest,
    Relevance,
}

impl OrderBy {
    /// Wire value for the `order-by` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderBy::Newest => "newest",
            OrderBy::Oldest => "oldest",
            OrderBy::Relevance => "relevance",
        }
    }
}

/// Caller-supplied parameters for one fetch. Built fresh from the current
/// settings each time a load starts; never stored by the core.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryConfig {
    /// Free-text filter; empty means "no filter".
    pub search_term: String,
    pub order_by: OrderBy,
}

impl QueryConfig {
    pub fn new(search_term: impl Into<String>, order_by: OrderBy) -> Self {
        Self {
            search_term: search_term.into(),
            order_by,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_by_wire_values() {
        assert_eq!(OrderBy::Newest.as_str(), "newest");
        assert_eq!(OrderBy::Oldest.as_str(), "oldest");
        assert_eq!(OrderBy::Relevance.as_str(), "relevance");
    }

    #[test]
    fn test_feed_distinguishes_no_data_from_empty() {
        assert_ne!(Feed::NoData, Feed::Articles(vec![]));
        assert!(Feed::NoData.articles().is_empty());
        assert!(Feed::Articles(vec![]).articles().is_empty());
    }
}
