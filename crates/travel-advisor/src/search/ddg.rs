//! DuckDuckGo-Style Search Client
//!
//! Talks to a DDG-compatible text search gateway. The wire format mirrors the
//! upstream service: each raw result carries `title`, `href`, and `body`.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::Deserialize;

use super::{SearchClient, SearchHit};
use crate::error::{Result, TravelError};

/// Search gateway configuration
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Base URL of the search gateway
    pub base_url: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: "https://search.seaexplorer.dev".into(),
            timeout_secs: 10,
        }
    }
}

impl SearchConfig {
    pub fn from_env() -> Self {
        let base_url = std::env::var("SEARCH_API_URL")
            .unwrap_or_else(|_| SearchConfig::default().base_url);
        let timeout_secs = std::env::var("SEARCH_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(10);

        Self {
            base_url,
            timeout_secs,
        }
    }
}

/// Raw result record as returned by the gateway
#[derive(Debug, Deserialize)]
struct RawHit {
    #[serde(default)]
    title: String,
    #[serde(default)]
    href: String,
    #[serde(default)]
    body: String,
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default)]
    results: Vec<RawHit>,
}

/// HTTP search client
pub struct DdgSearchClient {
    http: reqwest::Client,
    base_url: String,
}

impl DdgSearchClient {
    pub fn new(config: SearchConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TravelError::Config(format!("search client init failed: {}", e)))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(SearchConfig::from_env())
    }
}

#[async_trait]
impl SearchClient for DdgSearchClient {
    async fn search(
        &self,
        keywords: &str,
        region: &str,
        max_results: usize,
    ) -> Result<Vec<SearchHit>> {
        let max_results = max_results.max(1);
        let url = format!("{}/search", self.base_url);

        let response = self
            .http
            .get(&url)
            .query(&[
                ("q", keywords),
                ("kl", region),
                ("max_results", &max_results.to_string()),
            ])
            .send()
            .await
            .map_err(classify_transport_error)?;

        match response.status() {
            StatusCode::TOO_MANY_REQUESTS => {
                return Err(TravelError::RateLimited(
                    "Rate limit reached. Please try again later.".into(),
                ));
            }
            status if !status.is_success() => {
                return Err(TravelError::Search(format!(
                    "search request failed with status {}",
                    status.as_u16()
                )));
            }
            _ => {}
        }

        let raw: RawResponse = response.json().await.map_err(|_| {
            TravelError::Search("unexpected response from the search service".into())
        })?;

        Ok(raw
            .results
            .into_iter()
            .take(max_results)
            .map(|r| SearchHit {
                title: r.title,
                url: r.href,
                snippet: r.body,
            })
            .collect())
    }

    fn name(&self) -> &str {
        "DuckDuckGo"
    }
}

/// Collapse transport faults into a user-safe unavailability error.
/// The raw reqwest error text (which may embed URLs) is logged, not surfaced.
fn classify_transport_error(err: reqwest::Error) -> TravelError {
    tracing::debug!(error = %err, "search transport fault");
    if err.is_timeout() {
        TravelError::Unavailable("The search service timed out. Please try again later.".into())
    } else {
        TravelError::Unavailable("The search service is unreachable. Please try again later.".into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = SearchConfig::default();
        assert_eq!(config.timeout_secs, 10);
    }

    #[test]
    fn test_raw_response_parses_ddg_keys() {
        let json = r#"{"results": [{"title": "T", "href": "https://x", "body": "B"}]}"#;
        let raw: RawResponse = serde_json::from_str(json).unwrap();
        assert_eq!(raw.results.len(), 1);
        assert_eq!(raw.results[0].href, "https://x");
    }

    #[test]
    fn test_missing_fields_default_empty() {
        let json = r#"{"results": [{"title": "only title"}]}"#;
        let raw: RawResponse = serde_json::from_str(json).unwrap();
        assert_eq!(raw.results[0].body, "");
    }
}
