//! Mock Signals Client
//!
//! For testing and demo purposes. Replays a canned attribute payload or a
//! configured fault.

use async_trait::async_trait;
use serde_json::{Map, Value, json};

use super::{SignalsClient, scrub_attributes};
use crate::error::{Result, TravelError};

enum Behavior {
    Attributes(Map<String, Value>),
    Faulty,
}

/// Mock signals client with scripted behavior
pub struct MockSignalsClient {
    behavior: Behavior,
}

impl MockSignalsClient {
    /// Always succeed with the given raw payload (scrubbed on return,
    /// matching the real client)
    pub fn with_attributes(attributes: Map<String, Value>) -> Self {
        Self {
            behavior: Behavior::Attributes(attributes),
        }
    }

    /// Succeed with a small canned behavioral payload
    pub fn canned() -> Self {
        let mut attrs = Map::new();
        attrs.insert("pages_viewed".into(), json!(12));
        attrs.insert("searches".into(), json!(["bali surf", "bangkok food tour"]));
        attrs.insert("last_destination_viewed".into(), json!("Bali"));
        attrs.insert("engagement_minutes".into(), json!(9));
        Self::with_attributes(attrs)
    }

    /// Always fail with a provider fault
    pub fn faulty() -> Self {
        Self {
            behavior: Behavior::Faulty,
        }
    }
}

#[async_trait]
impl SignalsClient for MockSignalsClient {
    async fn service_attributes(
        &self,
        _service: &str,
        _attribute_key: &str,
        _session_id: &str,
    ) -> Result<Map<String, Value>> {
        match &self.behavior {
            Behavior::Attributes(attrs) => Ok(scrub_attributes(attrs.clone())),
            Behavior::Faulty => Err(TravelError::Signals(
                "The signals service could not be reached.".into(),
            )),
        }
    }

    fn name(&self) -> &str {
        "MockSignals"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_canned_payload_is_scrubbed() {
        let mut attrs = Map::new();
        attrs.insert("domain_userid".into(), json!("u-42"));
        attrs.insert("pages_viewed".into(), json!(3));

        let client = MockSignalsClient::with_attributes(attrs);
        let payload = client
            .service_attributes("travel_service", "domain_sessionid", "s-1")
            .await
            .unwrap();

        assert!(payload.get("domain_userid").is_none());
        assert!(payload.get("pages_viewed").is_some());
    }
}
