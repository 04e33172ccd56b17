//! Service hooks API facade: subscription management.
//!
//! Subscriptions live at the organization level; no project is involved.

use reqwest::Method;

use crate::api_version;
use crate::apis::require_arg;
use crate::client::AzDevClient;
use crate::error::Result;
use crate::models::{Subscription, SubscriptionParams, Subscriptions};
use crate::request::{QueryParams, ResourceAddress};
use crate::resources::Resource;

/// Facade over the service hooks area.
pub struct ServiceHooksApi<'a> {
    client: &'a AzDevClient,
}

impl<'a> ServiceHooksApi<'a> {
    pub(crate) fn new(client: &'a AzDevClient) -> Self {
        Self { client }
    }

    fn subscriptions(&self) -> ResourceAddress {
        ResourceAddress::new(Resource::ServiceHooks, api_version::SERVICE_HOOKS)
            .area("hooks/subscriptions")
    }

    /// Get a subscription.
    pub async fn get_subscription(&self, subscription_id: &str) -> Result<Subscription> {
        require_arg("subscription_id", subscription_id)?;
        let address = self.subscriptions().id(subscription_id);
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// List the organization's subscriptions.
    pub async fn get_subscriptions(&self) -> Result<Subscriptions> {
        let address = self.subscriptions();
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Create a subscription wiring a publisher event to a consumer action.
    pub async fn create_subscription(&self, params: &SubscriptionParams) -> Result<Subscription> {
        require_arg("publisher_id", &params.publisher_id)?;
        require_arg("event_type", &params.event_type)?;
        require_arg("consumer_id", &params.consumer_id)?;
        let address = self.subscriptions();
        let body = serde_json::to_value(params)?;
        self.client
            .send_json(Method::POST, &address, &QueryParams::new(), Some(body))
            .await
    }

    /// Delete a subscription. The service answers with an empty body.
    pub async fn delete_subscription(&self, subscription_id: &str) -> Result<()> {
        require_arg("subscription_id", subscription_id)?;
        let address = self.subscriptions().id(subscription_id);
        self.client
            .send_no_content(Method::DELETE, &address, &QueryParams::new())
            .await
    }
}
