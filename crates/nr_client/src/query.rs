use nr_core::{Error, OrderBy, QueryConfig, Result};
use url::Url;

/// Resolves the order the API will actually be asked for.
///
/// A relevance ranking only means something when there is a search term, so a
/// non-empty term always wins over the configured order, and a configured
/// relevance order with no term falls back to newest.
pub fn resolve_order(config: &QueryConfig) -> OrderBy {
    if !config.search_term.is_empty() {
        OrderBy::Relevance
    } else if config.order_by == OrderBy::Relevance {
        OrderBy::Newest
    } else {
        config.order_by
    }
}

/// Builds the query URL for one fetch from the base search endpoint and the
/// caller's configuration. Pure; the same inputs always produce the same URL.
pub fn build_query_url(base: &str, config: &QueryConfig) -> Result<Url> {
    let mut url =
        Url::parse(base).map_err(|e| Error::InvalidUrl(format!("{}: {}", base, e)))?;
    {
        let mut pairs = url.query_pairs_mut();
        if !config.search_term.is_empty() {
            pairs.append_pair("q", &config.search_term);
        }
        pairs.append_pair("order-by", resolve_order(config).as_str());
    }
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://content.example.com/search?api-key=test";

    #[test]
    fn test_search_term_forces_relevance() {
        for order in [OrderBy::Newest, OrderBy::Oldest, OrderBy::Relevance] {
            let url = build_query_url(BASE, &QueryConfig::new("debates", order)).unwrap();
            let query = url.query().unwrap();
            assert!(query.contains("q=debates"));
            assert!(query.contains("order-by=relevance"));
        }
    }

    #[test]
    fn test_relevance_without_term_falls_back_to_newest() {
        let url = build_query_url(BASE, &QueryConfig::new("", OrderBy::Relevance)).unwrap();
        let query = url.query().unwrap();
        assert!(!query.contains("q="));
        assert!(query.contains("order-by=newest"));
    }

    #[test]
    fn test_empty_term_keeps_configured_order() {
        let url = build_query_url(BASE, &QueryConfig::new("", OrderBy::Oldest)).unwrap();
        assert!(url.query().unwrap().contains("order-by=oldest"));
    }

    #[test]
    fn test_existing_base_parameters_survive() {
        let url = build_query_url(BASE, &QueryConfig::new("", OrderBy::Newest)).unwrap();
        assert!(url.query().unwrap().contains("api-key=test"));
    }

    #[test]
    fn test_search_term_is_percent_encoded() {
        let url = build_query_url(BASE, &QueryConfig::new("climate change", OrderBy::Newest))
            .unwrap();
        assert!(url.query().unwrap().contains("q=climate+change"));
    }

    #[test]
    fn test_malformed_base_is_invalid_url() {
        let err = build_query_url("not a url", &QueryConfig::new("", OrderBy::Newest))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidUrl(_)));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let config = QueryConfig::new("politics", OrderBy::Oldest);
        assert_eq!(resolve_order(&config), resolve_order(&config));
        assert_eq!(
            build_query_url(BASE, &config).unwrap(),
            build_query_url(BASE, &config).unwrap()
        );
    }
}
