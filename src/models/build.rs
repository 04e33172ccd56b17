//! Build area models: builds, changes, logs, controllers and definitions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{IdentityRef, ResourceList, ResourceRef, TeamProjectReference};
use crate::request::{join_ids, QueryParams};

/// A queued, running or completed build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: u32,
    #[serde(default)]
    pub build_number: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub queue_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finish_time: Option<DateTime<Utc>>,
    #[serde(default)]
    pub source_branch: Option<String>,
    #[serde(default)]
    pub source_version: Option<String>,
    #[serde(default)]
    pub priority: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub requested_for: Option<IdentityRef>,
    #[serde(default)]
    pub requested_by: Option<IdentityRef>,
    #[serde(default)]
    pub definition: Option<DefinitionReference>,
    #[serde(default)]
    pub project: Option<TeamProjectReference>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A source change that went into a build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildChange {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "type", default)]
    pub change_type: Option<String>,
    #[serde(default)]
    pub author: Option<IdentityRef>,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub display_uri: Option<String>,
}

/// Metadata for one build log file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildLog {
    pub id: u32,
    #[serde(rename = "type", default)]
    pub log_type: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub line_count: Option<u64>,
    #[serde(default)]
    pub created_on: Option<DateTime<Utc>>,
    #[serde(default)]
    pub last_changed_on: Option<DateTime<Utc>>,
}

/// A build controller (organization-scoped).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildController {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub uri: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_date: Option<DateTime<Utc>>,
}

/// Shallow reference to a build definition, embedded in builds.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DefinitionReference {
    #[serde(default)]
    pub id: Option<u32>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub revision: Option<u32>,
    #[serde(rename = "type", default)]
    pub definition_type: Option<String>,
    #[serde(default)]
    pub queue_status: Option<String>,
    #[serde(default)]
    pub project: Option<TeamProjectReference>,
}

/// A build definition (pipeline).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDefinition {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub revision: Option<u32>,
    #[serde(rename = "type", default)]
    pub definition_type: Option<String>,
    #[serde(default)]
    pub queue_status: Option<String>,
    #[serde(default)]
    pub quality: Option<String>,
    #[serde(default)]
    pub created_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub authored_by: Option<IdentityRef>,
    #[serde(default)]
    pub project: Option<TeamProjectReference>,
}

/// One entry in a definition's revision history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildDefinitionRevision {
    pub revision: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub changed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub changed_by: Option<IdentityRef>,
    #[serde(default)]
    pub change_type: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub definition_url: Option<String>,
}

pub type Builds = ResourceList<Build>;
pub type BuildChanges = ResourceList<BuildChange>;
pub type BuildLogs = ResourceList<BuildLog>;
pub type BuildControllers = ResourceList<BuildController>;
pub type BuildDefinitions = ResourceList<BuildDefinition>;
pub type BuildDefinitionRevisions = ResourceList<BuildDefinitionRevision>;
pub type BuildWorkItems = ResourceList<ResourceRef>;

/// Filters for listing builds. All fields optional; absent filters are
/// dropped from the query string.
#[derive(Debug, Clone, Default)]
pub struct BuildListQuery {
    pub top: Option<u32>,
    pub build_ids: Vec<u32>,
    pub branch_name: Option<String>,
    pub build_number: Option<String>,
    pub continuation_token: Option<String>,
    pub definitions: Vec<u32>,
    pub deleted_filter: Option<String>,
    pub max_builds_per_definition: Option<u32>,
    pub max_time: Option<String>,
    pub min_time: Option<String>,
    pub properties: Vec<String>,
    pub query_order: Option<String>,
    pub queues: Vec<u32>,
    pub reason_filter: Option<String>,
    pub repository_id: Option<String>,
    pub repository_type: Option<String>,
    pub requested_for: Option<String>,
    pub result_filter: Option<String>,
    pub status_filter: Option<String>,
    pub tag_filters: Option<String>,
}

impl BuildListQuery {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert("$top", self.top);
        q.insert("buildIds", join_ids(&self.build_ids));
        q.insert("branchName", self.branch_name.as_deref());
        q.insert("buildNumber", self.build_number.as_deref());
        q.insert("continuationToken", self.continuation_token.as_deref());
        q.insert("definitions", join_ids(&self.definitions));
        q.insert("deletedFilter", self.deleted_filter.as_deref());
        q.insert("maxBuildsPerDefinition", self.max_builds_per_definition);
        q.insert("maxTime", self.max_time.as_deref());
        q.insert("minTime", self.min_time.as_deref());
        q.insert("properties", join_ids(&self.properties));
        q.insert("queryOrder", self.query_order.as_deref());
        q.insert("queues", join_ids(&self.queues));
        q.insert("reasonFilter", self.reason_filter.as_deref());
        q.insert("repositoryId", self.repository_id.as_deref());
        q.insert("repositoryType", self.repository_type.as_deref());
        q.insert("requestedFor", self.requested_for.as_deref());
        q.insert("resultFilter", self.result_filter.as_deref());
        q.insert("statusFilter", self.status_filter.as_deref());
        q.insert("tagFilters", self.tag_filters.as_deref());
        q
    }
}

/// Filters for the changes associated with a build.
#[derive(Debug, Clone, Default)]
pub struct BuildChangesQuery {
    pub top: Option<u32>,
    pub continuation_token: Option<String>,
    pub include_source_change: Option<bool>,
}

impl BuildChangesQuery {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert("$top", self.top);
        q.insert("continuationToken", self.continuation_token.as_deref());
        q.insert("includeSourceChange", self.include_source_change);
        q
    }
}

/// Options for fetching a single definition at a specific revision.
#[derive(Debug, Clone, Default)]
pub struct BuildDefinitionQuery {
    pub include_latest_builds: Option<bool>,
    pub min_metrics_time: Option<String>,
    pub revision: Option<u32>,
}

impl BuildDefinitionQuery {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert("includeLatestBuilds", self.include_latest_builds);
        q.insert("minMetricsTime", self.min_metrics_time.as_deref());
        q.insert("revision", self.revision);
        q
    }
}

/// Filters for listing definitions.
#[derive(Debug, Clone, Default)]
pub struct BuildDefinitionsQuery {
    pub top: Option<u32>,
    pub definition_ids: Vec<u32>,
    pub name: Option<String>,
    pub built_after: Option<String>,
    pub not_built_after: Option<String>,
    pub continuation_token: Option<String>,
    pub include_all_properties: Option<bool>,
    pub include_latest_builds: Option<bool>,
    pub min_metrics_time: Option<String>,
    pub path: Option<String>,
    pub process_type: Option<u32>,
    pub query_order: Option<String>,
    pub repository_id: Option<String>,
    pub repository_type: Option<String>,
    pub task_id_filter: Option<String>,
    pub yaml_filename: Option<String>,
}

impl BuildDefinitionsQuery {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert("$top", self.top);
        q.insert("definitionIds", join_ids(&self.definition_ids));
        q.insert("name", self.name.as_deref());
        q.insert("builtAfter", self.built_after.as_deref());
        q.insert("notBuiltAfter", self.not_built_after.as_deref());
        q.insert("continuationToken", self.continuation_token.as_deref());
        q.insert("includeAllProperties", self.include_all_properties);
        q.insert("includeLatestBuilds", self.include_latest_builds);
        q.insert("minMetricsTime", self.min_metrics_time.as_deref());
        q.insert("path", self.path.as_deref());
        q.insert("processType", self.process_type);
        q.insert("queryOrder", self.query_order.as_deref());
        q.insert("repositoryId", self.repository_id.as_deref());
        q.insert("repositoryType", self.repository_type.as_deref());
        q.insert("taskIdFilter", self.task_id_filter.as_deref());
        q.insert("yamlFilename", self.yaml_filename.as_deref());
        q
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_deserializes_service_shape() {
        let json = r#"{
            "id": 42,
            "buildNumber": "20260805.1",
            "status": "completed",
            "result": "succeeded",
            "sourceBranch": "refs/heads/main",
            "definition": {"id": 7, "name": "Demo-CI"},
            "requestedFor": {"displayName": "Jamie"},
            "futureField": {"nested": true}
        }"#;
        let build: Build = serde_json::from_str(json).unwrap();
        assert_eq!(build.id, 42);
        assert_eq!(build.build_number.as_deref(), Some("20260805.1"));
        assert_eq!(build.definition.unwrap().id, Some(7));
        assert!(build.tags.is_empty());
    }

    #[test]
    fn test_build_list_query_joins_ids_and_drops_absent() {
        let query = BuildListQuery {
            top: Some(10),
            build_ids: vec![1, 2, 3],
            ..Default::default()
        };
        let q = query.to_query();
        let entries: Vec<_> = q.iter().cloned().collect();
        assert_eq!(
            entries,
            vec![
                ("$top".to_string(), "10".to_string()),
                ("buildIds".to_string(), "1,2,3".to_string()),
            ]
        );
    }
}
