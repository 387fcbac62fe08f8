//! HTTP Signals Client
//!
//! Queries the remote signals API over HTTPS. Credentials come from process
//! configuration; they are sent as request headers and never appear in any
//! error message or tool output.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Map, Value};

use super::{SignalsClient, scrub_attributes};
use crate::error::{Result, TravelError};

/// Signals API configuration
#[derive(Clone)]
pub struct SignalsConfig {
    /// API endpoint URL
    pub api_url: String,

    /// API key (secret)
    pub api_key: String,

    /// API key identifier
    pub api_key_id: String,

    /// Organization identifier
    pub org_id: String,

    /// Per-request timeout in seconds
    pub timeout_secs: u64,
}

// Manual Debug keeps the key out of logs.
impl std::fmt::Debug for SignalsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SignalsConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &"<redacted>")
            .field("api_key_id", &self.api_key_id)
            .field("org_id", &self.org_id)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl SignalsConfig {
    /// Read configuration from the environment. Missing values are a
    /// startup-time configuration error, not a per-turn failure.
    pub fn from_env() -> Result<Self> {
        let api_url = require_env("SIGNALS_API_URL")?;
        let api_key = require_env("SIGNALS_API_KEY")?;
        let api_key_id = require_env("SIGNALS_API_KEY_ID")?;
        let org_id = require_env("SIGNALS_ORG_ID")?;
        let timeout_secs = std::env::var("SIGNALS_TIMEOUT_SECS")
            .ok()
            .and_then(|t| t.parse().ok())
            .unwrap_or(10);

        Ok(Self {
            api_url,
            api_key,
            api_key_id,
            org_id,
            timeout_secs,
        })
    }
}

fn require_env(name: &str) -> Result<String> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| TravelError::Config(format!("{} is not set", name)))
}

/// HTTP signals client
pub struct HttpSignalsClient {
    http: reqwest::Client,
    config: SignalsConfig,
}

impl HttpSignalsClient {
    pub fn new(config: SignalsConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| TravelError::Config(format!("signals client init failed: {}", e)))?;

        Ok(Self { http, config })
    }

    pub fn from_env() -> Result<Self> {
        Self::new(SignalsConfig::from_env()?)
    }
}

#[async_trait]
impl SignalsClient for HttpSignalsClient {
    async fn service_attributes(
        &self,
        service: &str,
        attribute_key: &str,
        session_id: &str,
    ) -> Result<Map<String, Value>> {
        let url = format!(
            "{}/api/v1/services/{}/attributes",
            self.config.api_url.trim_end_matches('/'),
            service
        );

        let response = self
            .http
            .get(&url)
            .query(&[("attribute_key", attribute_key), ("identifier", session_id)])
            .header("X-Api-Key", &self.config.api_key)
            .header("X-Api-Key-Id", &self.config.api_key_id)
            .header("X-Organization-Id", &self.config.org_id)
            .send()
            .await
            .map_err(|e| {
                tracing::debug!(error = %e, "signals transport fault");
                TravelError::Signals("The signals service could not be reached.".into())
            })?;

        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                return Err(TravelError::Signals(
                    "Authentication with the signals service failed.".into(),
                ));
            }
            status if !status.is_success() => {
                tracing::debug!(status = %status, "signals request failed");
                return Err(TravelError::Signals(
                    "The signals service returned an error.".into(),
                ));
            }
            _ => {}
        }

        let attributes: Map<String, Value> = response.json().await.map_err(|_| {
            TravelError::Signals("Unexpected response from the signals service.".into())
        })?;

        Ok(scrub_attributes(attributes))
    }

    fn name(&self) -> &str {
        "Signals"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_api_key() {
        let config = SignalsConfig {
            api_url: "https://signals.example.com".into(),
            api_key: "super-secret-key".into(),
            api_key_id: "3".into(),
            org_id: "org-1".into(),
            timeout_secs: 10,
        };

        let printed = format!("{:?}", config);
        assert!(!printed.contains("super-secret-key"));
        assert!(printed.contains("<redacted>"));
    }
}
