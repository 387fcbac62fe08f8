//! Behavioral Signals Integration
//!
//! Wraps the remote telemetry service that tracks in-session browsing
//! behavior. Queries are scoped by a session identifier, never a durable
//! user identity, and every payload is scrubbed of identity fields before
//! it reaches the conversation.

mod http;
mod mock;

pub use http::{HttpSignalsClient, SignalsConfig};
pub use mock::MockSignalsClient;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::Result;

/// Service name the travel agent queries
pub const TRAVEL_SERVICE: &str = "travel_service";

/// Attribute key identifying the session dimension
pub const SESSION_ATTRIBUTE_KEY: &str = "domain_sessionid";

/// Durable identity fields that must never surface in tool output
const IDENTITY_FIELDS: &[&str] = &[
    "user_id",
    "domain_userid",
    "network_userid",
    "user_ipaddress",
    "user_fingerprint",
];

/// Signals client trait (Strategy pattern)
#[async_trait]
pub trait SignalsClient: Send + Sync {
    /// Fetch the attribute mapping for one service, scoped to a session
    async fn service_attributes(
        &self,
        service: &str,
        attribute_key: &str,
        session_id: &str,
    ) -> Result<Map<String, Value>>;

    /// Client name
    fn name(&self) -> &str;
}

/// Strip identity fields and null attribute values from a signals payload.
///
/// The tool's purpose is behavioral context, not identity disclosure.
pub fn scrub_attributes(attributes: Map<String, Value>) -> Map<String, Value> {
    attributes
        .into_iter()
        .filter(|(key, value)| !IDENTITY_FIELDS.contains(&key.as_str()) && !value.is_null())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scrub_removes_identity_fields() {
        let mut attrs = Map::new();
        attrs.insert("domain_userid".into(), json!("u-123"));
        attrs.insert("user_ipaddress".into(), json!("10.0.0.1"));
        attrs.insert("pages_viewed".into(), json!(7));
        attrs.insert("last_destination".into(), json!("Bangkok"));

        let scrubbed = scrub_attributes(attrs);
        assert!(scrubbed.get("domain_userid").is_none());
        assert!(scrubbed.get("user_ipaddress").is_none());
        assert_eq!(scrubbed.get("pages_viewed"), Some(&json!(7)));
        assert_eq!(scrubbed.get("last_destination"), Some(&json!("Bangkok")));
    }

    #[test]
    fn test_scrub_drops_null_values() {
        let mut attrs = Map::new();
        attrs.insert("pages_viewed".into(), json!(null));
        attrs.insert("searches".into(), json!(["bali surf"]));

        let scrubbed = scrub_attributes(attrs);
        assert_eq!(scrubbed.len(), 1);
        assert!(scrubbed.get("searches").is_some());
    }
}
