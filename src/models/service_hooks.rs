//! Service hooks models: subscriptions wiring events to consumers.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{IdentityRef, ResourceList};

/// A service hook subscription.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub publisher_id: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub event_description: Option<String>,
    #[serde(default)]
    pub resource_version: Option<String>,
    #[serde(default)]
    pub consumer_id: Option<String>,
    #[serde(default)]
    pub consumer_action_id: Option<String>,
    #[serde(default)]
    pub action_description: Option<String>,
    #[serde(default)]
    pub publisher_inputs: HashMap<String, String>,
    #[serde(default)]
    pub consumer_inputs: HashMap<String, String>,
    #[serde(default)]
    pub created_by: Option<IdentityRef>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub modified_by: Option<IdentityRef>,
    #[serde(default)]
    pub modified_date: Option<DateTime<Utc>>,
}

/// The subscriptions listing uses the standard collection envelope.
pub type Subscriptions = ResourceList<Subscription>;

/// Body for creating a subscription.
///
/// Publisher and consumer inputs are free-form string maps whose keys are
/// defined by the chosen publisher/consumer pair (e.g. `definitionName` and
/// `buildStatus` for `build.complete`, `url` for web hooks).
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionParams {
    pub publisher_id: String,
    pub event_type: String,
    pub resource_version: String,
    pub consumer_id: String,
    pub consumer_action_id: String,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub publisher_inputs: HashMap<String, String>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub consumer_inputs: HashMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_subscription_params_serialize_to_wire_names() {
        let params = SubscriptionParams {
            publisher_id: "tfs".to_string(),
            event_type: "build.complete".to_string(),
            resource_version: "1.0-preview.1".to_string(),
            consumer_id: "webHooks".to_string(),
            consumer_action_id: "httpRequest".to_string(),
            consumer_inputs: HashMap::from([(
                "url".to_string(),
                "https://example.test/hook".to_string(),
            )]),
            ..Default::default()
        };
        let json = serde_json::to_value(&params).unwrap();
        assert_eq!(json["publisherId"], "tfs");
        assert_eq!(json["consumerActionId"], "httpRequest");
        assert_eq!(json["consumerInputs"]["url"], "https://example.test/hook");
        assert!(json.get("publisherInputs").is_none());
    }
}
