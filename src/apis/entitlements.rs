//! Member entitlement API facade: user and group licensing.
//!
//! Entitlement endpoints are organization-scoped.

use reqwest::Method;
use serde_json::json;

use crate::api_version;
use crate::apis::require_arg;
use crate::client::AzDevClient;
use crate::error::Result;
use crate::models::{
    AccountLicenseType, GroupEntitlement, GroupEntitlements, GroupType, LicensingSource,
    UserEntitlement, UserEntitlements, UserEntitlementsPatchResponse, UsersSummary,
};
use crate::request::{QueryParams, ResourceAddress};
use crate::resources::Resource;

/// Facade over the member entitlement management area.
pub struct MemberEntitlementApi<'a> {
    client: &'a AzDevClient,
}

impl<'a> MemberEntitlementApi<'a> {
    pub(crate) fn new(client: &'a AzDevClient) -> Self {
        Self { client }
    }

    fn area(&self, area: &str) -> ResourceAddress {
        ResourceAddress::new(Resource::MemberEntitlement, api_version::MEMBER_ENTITLEMENT)
            .area(area.to_string())
    }

    /// List user entitlements.
    pub async fn get_user_entitlements(&self) -> Result<UserEntitlements> {
        let address = self.area("userentitlements");
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Get a user entitlement.
    pub async fn get_user_entitlement(&self, user_id: &str) -> Result<UserEntitlement> {
        require_arg("user_id", user_id)?;
        let address = self.area("userentitlements").id(user_id);
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Add a user entitlement: assign a license and a project group.
    pub async fn add_user_entitlement(
        &self,
        license: AccountLicenseType,
        principal_name: &str,
        group: GroupType,
        project_id: &str,
    ) -> Result<UserEntitlementsPatchResponse> {
        require_arg("principal_name", principal_name)?;
        require_arg("project_id", project_id)?;
        let address = self.area("userentitlements");
        let body = json!({
            "accessLevel": { "accountLicenseType": license },
            "user": {
                "principalName": principal_name,
                "subjectKind": "user",
            },
            "projectEntitlements": [{
                "group": { "groupType": group },
                "projectRef": { "id": project_id },
            }],
        });
        self.client
            .send_json(Method::POST, &address, &QueryParams::new(), Some(body))
            .await
    }

    /// Change the license of an existing user entitlement.
    pub async fn update_user_entitlement(
        &self,
        user_id: &str,
        license: AccountLicenseType,
        source: LicensingSource,
    ) -> Result<UserEntitlementsPatchResponse> {
        require_arg("user_id", user_id)?;
        let address = self.area("userentitlements").id(user_id);
        let body = json!([{
            "from": "",
            "op": "replace",
            "path": "/accessLevel",
            "value": {
                "accountLicenseType": license,
                "licensingSource": source,
            },
        }]);
        self.client
            .send_json(Method::PATCH, &address, &QueryParams::new(), Some(body))
            .await
    }

    /// Remove a user's entitlement.
    pub async fn delete_user_entitlement(&self, user_id: &str) -> Result<()> {
        require_arg("user_id", user_id)?;
        let address = self.area("userentitlements").id(user_id);
        self.client
            .send_no_content(Method::DELETE, &address, &QueryParams::new())
            .await
    }

    /// List group entitlements.
    pub async fn get_group_entitlements(&self) -> Result<GroupEntitlements> {
        let address = self.area("groupentitlements");
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Get a group entitlement.
    pub async fn get_group_entitlement(&self, group_id: &str) -> Result<GroupEntitlement> {
        require_arg("group_id", group_id)?;
        let address = self.area("groupentitlements").id(group_id);
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Get the organization's license summary.
    pub async fn get_user_entitlement_summary(&self) -> Result<UsersSummary> {
        let address = self.area("userentitlementsummary");
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }
}
