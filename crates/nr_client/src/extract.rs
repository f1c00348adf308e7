use chrono::NaiveDateTime;
use nr_core::{Article, Error, Feed, Result};
use serde::Deserialize;

/// Publication dates arrive in this fixed, zone-less format.
const DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

#[derive(Deserialize)]
struct Envelope {
    response: Response,
}

#[derive(Deserialize)]
struct Response {
    results: Vec<RawArticle>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawArticle {
    web_title: String,
    section_name: String,
    web_publication_date: Option<String>,
    web_url: String,
    tags: Vec<RawTag>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTag {
    web_title: String,
}

/// Extracts the article list from a raw search-API response body.
///
/// An empty body is `Feed::NoData`, not an error. A malformed envelope or a
/// record missing a required field voids the whole payload; only an
/// unparsable publication date is tolerated per record.
pub fn extract_feed(raw: &str) -> Result<Feed> {
    if raw.trim().is_empty() {
        return Ok(Feed::NoData);
    }

    let envelope: Envelope = serde_json::from_str(raw)
        .map_err(|e| Error::Parse(format!("malformed response envelope: {}", e)))?;

    let mut articles = Vec::with_capacity(envelope.response.results.len());
    for raw_article in envelope.response.results {
        // The contributor rides in the first tag; a record without one is
        // structurally incomplete.
        let author = match raw_article.tags.into_iter().next() {
            Some(tag) => tag.web_title,
            None => {
                return Err(Error::Parse(format!(
                    "no contributor tag on {:?}",
                    raw_article.web_title
                )))
            }
        };

        let published_at = raw_article
            .web_publication_date
            .as_deref()
            .and_then(parse_publication_date);

        articles.push(Article {
            title: raw_article.web_title,
            section: raw_article.section_name,
            published_at,
            author,
            url: raw_article.web_url,
        });
    }

    Ok(Feed::Articles(articles))
}

fn parse_publication_date(raw: &str) -> Option<NaiveDateTime> {
    match NaiveDateTime::parse_from_str(raw, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::warn!("unparsable publication date {:?}: {}", raw, e);
            None
        }
    }
}
