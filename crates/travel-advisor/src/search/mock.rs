//! Mock Search Client
//!
//! For testing and demo purposes. Replays canned hits or a configured
//! failure mode.

use async_trait::async_trait;

use super::{SearchClient, SearchHit};
use crate::error::{Result, TravelError};

enum Behavior {
    Hits(Vec<SearchHit>),
    RateLimited,
    Unavailable,
    Faulty,
}

/// Mock search client with scripted behavior
pub struct MockSearchClient {
    behavior: Behavior,
}

impl MockSearchClient {
    /// Always succeed with the given hits
    pub fn with_hits(hits: Vec<SearchHit>) -> Self {
        Self {
            behavior: Behavior::Hits(hits),
        }
    }

    /// Succeed with a small canned result set
    pub fn canned() -> Self {
        Self::with_hits(vec![
            SearchHit {
                title: "Best time to visit Bangkok".into(),
                url: "https://example.com/bangkok-weather".into(),
                snippet: "November to February brings cooler, drier days.".into(),
            },
            SearchHit {
                title: "Bangkok travel guide".into(),
                url: "https://example.com/bangkok-guide".into(),
                snippet: "Temples, markets, and street food in the Thai capital.".into(),
            },
        ])
    }

    /// Always signal throttling
    pub fn rate_limited() -> Self {
        Self {
            behavior: Behavior::RateLimited,
        }
    }

    /// Always fail with a transport fault
    pub fn unavailable() -> Self {
        Self {
            behavior: Behavior::Unavailable,
        }
    }

    /// Always fail with a generic provider fault
    pub fn faulty() -> Self {
        Self {
            behavior: Behavior::Faulty,
        }
    }
}

#[async_trait]
impl SearchClient for MockSearchClient {
    async fn search(
        &self,
        _keywords: &str,
        _region: &str,
        max_results: usize,
    ) -> Result<Vec<SearchHit>> {
        match &self.behavior {
            Behavior::Hits(hits) => Ok(hits.iter().take(max_results.max(1)).cloned().collect()),
            Behavior::RateLimited => Err(TravelError::RateLimited(
                "Rate limit reached. Please try again later.".into(),
            )),
            Behavior::Unavailable => Err(TravelError::Unavailable(
                "The search service is unreachable. Please try again later.".into(),
            )),
            Behavior::Faulty => Err(TravelError::Search(
                "search request failed with status 500".into(),
            )),
        }
    }

    fn name(&self) -> &str {
        "MockSearch"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rate_limit_distinguishable_from_generic_fault() {
        let throttled = MockSearchClient::rate_limited()
            .search("bangkok", "us-en", 5)
            .await
            .unwrap_err();
        let faulty = MockSearchClient::faulty()
            .search("bangkok", "us-en", 5)
            .await
            .unwrap_err();

        assert!(matches!(throttled, TravelError::RateLimited(_)));
        assert!(matches!(faulty, TravelError::Search(_)));
    }

    #[tokio::test]
    async fn test_max_results_bounds_hits() {
        let hits = MockSearchClient::canned()
            .search("bangkok", "us-en", 1)
            .await
            .unwrap();
        assert_eq!(hits.len(), 1);
    }
}
