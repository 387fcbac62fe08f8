//! Web Search Integration
//!
//! Abstraction over the external full-text search capability, plus the HTTP
//! implementation and a mock for tests. Rate limiting is a distinct,
//! retryable failure - the user-facing message differs from a generic fault.

mod ddg;
mod mock;

pub use ddg::{DdgSearchClient, SearchConfig};
pub use mock::MockSearchClient;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default search region (locale code)
pub const DEFAULT_REGION: &str = "us-en";

/// Default number of results requested
pub const DEFAULT_MAX_RESULTS: usize = 5;

/// A single search result record
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// Result title
    pub title: String,

    /// Result URL
    pub url: String,

    /// Snippet of the matching page
    pub snippet: String,
}

/// Search client trait (Strategy pattern)
///
/// `max_results` bounds the result count; implementations clamp it to >= 1
/// and never retry on their own.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Run a text search, returning hits in relevance order
    async fn search(
        &self,
        keywords: &str,
        region: &str,
        max_results: usize,
    ) -> Result<Vec<SearchHit>>;

    /// Client name
    fn name(&self) -> &str;
}
