//! Member entitlement models: user/group licensing and access levels.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::ResourceList;

/// Account license tiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AccountLicenseType {
    None,
    EarlyAdopter,
    Express,
    Professional,
    Advanced,
    Stakeholder,
}

/// Where a license assignment originates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LicensingSource {
    None,
    Account,
    Msdn,
    Profile,
    Auto,
    Trial,
}

/// Project security groups a user can be entitled into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GroupType {
    ProjectAdministrator,
    ProjectContributor,
    ProjectReader,
    ProjectStakeholder,
}

/// A graph user attached to an entitlement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GraphUser {
    #[serde(default)]
    pub descriptor: Option<String>,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub principal_name: Option<String>,
    #[serde(default)]
    pub mail_address: Option<String>,
    #[serde(default)]
    pub origin: Option<String>,
    #[serde(default)]
    pub origin_id: Option<String>,
    #[serde(default)]
    pub subject_kind: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
}

/// License assignment details.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessLevel {
    #[serde(default)]
    pub account_license_type: Option<AccountLicenseType>,
    #[serde(default)]
    pub licensing_source: Option<LicensingSource>,
    #[serde(default)]
    pub license_display_name: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub status_message: Option<String>,
    #[serde(default)]
    pub assignment_source: Option<String>,
}

/// A user's entitlement record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntitlement {
    pub id: String,
    #[serde(default)]
    pub user: Option<GraphUser>,
    #[serde(default)]
    pub access_level: Option<AccessLevel>,
    #[serde(default)]
    pub date_created: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_accessed_date: Option<DateTime<Utc>>,
}

/// The user entitlement listing (paged with a continuation token).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntitlements {
    #[serde(default)]
    pub members: Vec<UserEntitlement>,
    #[serde(default)]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub continuation_token: Option<String>,
}

/// A group entitlement record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupEntitlement {
    pub id: String,
    #[serde(default)]
    pub group: Option<GraphUser>,
    #[serde(default)]
    pub license_rule: Option<AccessLevel>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub last_executed: Option<DateTime<Utc>>,
}

pub type GroupEntitlements = ResourceList<GroupEntitlement>;

/// License totals per tier in the entitlement summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LicenseSummary {
    #[serde(default)]
    pub account_license_type: Option<AccountLicenseType>,
    #[serde(default)]
    pub assigned: Option<u32>,
    #[serde(default)]
    pub available: Option<u32>,
    #[serde(default)]
    pub included_quantity: Option<u32>,
    #[serde(default)]
    pub total: Option<u32>,
}

/// Organization-wide entitlement summary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UsersSummary {
    #[serde(default)]
    pub licenses: Vec<LicenseSummary>,
    #[serde(default)]
    pub available_access_levels: Vec<AccessLevel>,
}

/// Result of adding or updating a user entitlement.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntitlementsPatchResponse {
    #[serde(default)]
    pub is_success: bool,
    #[serde(default)]
    pub user_entitlement: Option<UserEntitlement>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_license_enums_use_camel_case_wire_values() {
        assert_eq!(
            serde_json::to_string(&AccountLicenseType::EarlyAdopter).unwrap(),
            "\"earlyAdopter\""
        );
        assert_eq!(
            serde_json::to_string(&GroupType::ProjectContributor).unwrap(),
            "\"projectContributor\""
        );
        let source: LicensingSource = serde_json::from_str("\"account\"").unwrap();
        assert_eq!(source, LicensingSource::Account);
    }
}
