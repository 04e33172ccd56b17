//! Git area models: repositories, pull requests, refs, labels, reviewers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{IdentityRef, ResourceList, ResourceRef, TeamProjectReference};
use crate::request::QueryParams;

/// A git repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRepository {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub project: Option<TeamProjectReference>,
    #[serde(default)]
    pub default_branch: Option<String>,
    #[serde(default)]
    pub size: Option<u64>,
    #[serde(default)]
    pub remote_url: Option<String>,
    #[serde(default)]
    pub ssh_url: Option<String>,
    #[serde(default)]
    pub web_url: Option<String>,
    #[serde(default)]
    pub is_disabled: Option<bool>,
    #[serde(default)]
    pub is_fork: Option<bool>,
}

/// A repository sitting in the recycle bin (or permanently deleted).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitDeletedRepository {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub project: Option<TeamProjectReference>,
    #[serde(default)]
    pub created_by: Option<IdentityRef>,
    #[serde(default)]
    pub deleted_by: Option<IdentityRef>,
    #[serde(default)]
    pub deleted_date: Option<DateTime<Utc>>,
}

/// Pull request states accepted by the service's search criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PullRequestStatus {
    NotSet,
    Active,
    Abandoned,
    Completed,
    All,
}

impl std::fmt::Display for PullRequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PullRequestStatus::NotSet => "notSet",
            PullRequestStatus::Active => "active",
            PullRequestStatus::Abandoned => "abandoned",
            PullRequestStatus::Completed => "completed",
            PullRequestStatus::All => "all",
        };
        f.write_str(s)
    }
}

/// A reviewer on a pull request, with their vote.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityRefWithVote {
    #[serde(flatten)]
    pub identity: IdentityRef,
    #[serde(default)]
    pub vote: Option<i32>,
    #[serde(default)]
    pub is_required: Option<bool>,
    #[serde(default)]
    pub is_flagged: Option<bool>,
    #[serde(default)]
    pub has_declined: Option<bool>,
}

/// A pull request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequest {
    pub pull_request_id: u32,
    #[serde(default)]
    pub code_review_id: Option<u32>,
    #[serde(default)]
    pub repository: Option<GitRepository>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_by: Option<IdentityRef>,
    #[serde(default)]
    pub creation_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub closed_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub source_ref_name: Option<String>,
    #[serde(default)]
    pub target_ref_name: Option<String>,
    #[serde(default)]
    pub merge_status: Option<String>,
    #[serde(default)]
    pub merge_id: Option<String>,
    #[serde(default)]
    pub is_draft: Option<bool>,
    #[serde(default)]
    pub reviewers: Vec<IdentityRefWithVote>,
    #[serde(default)]
    pub labels: Vec<WebApiTagDefinition>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A branch or tag ref.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitRef {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub object_id: Option<String>,
    #[serde(default)]
    pub is_locked: Option<bool>,
    #[serde(default)]
    pub is_locked_by: Option<IdentityRef>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A label attached to a pull request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebApiTagDefinition {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub active: Option<bool>,
    #[serde(default)]
    pub url: Option<String>,
}

pub type GitRepositories = ResourceList<GitRepository>;
pub type GitDeletedRepositories = ResourceList<GitDeletedRepository>;
pub type PullRequests = ResourceList<PullRequest>;
pub type PullRequestReviewers = ResourceList<IdentityRefWithVote>;
pub type WebApiTagDefinitions = ResourceList<WebApiTagDefinition>;
pub type ResourceRefs = ResourceList<ResourceRef>;

/// Body for creating a pull request.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PullRequestCreateParams {
    pub source_ref_name: String,
    pub target_ref_name: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_draft: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub reviewers: Vec<IdentityRef>,
}

/// Search criteria for listing pull requests across a project.
#[derive(Debug, Clone, Default)]
pub struct PullRequestQuery {
    pub skip: Option<u32>,
    pub top: Option<u32>,
    pub creator_id: Option<String>,
    pub include_links: Option<bool>,
    pub repository_id: Option<String>,
    pub reviewer_id: Option<String>,
    pub source_ref_name: Option<String>,
    pub source_repository_id: Option<String>,
    pub status: Option<PullRequestStatus>,
    pub target_ref_name: Option<String>,
}

impl PullRequestQuery {
    pub(crate) fn to_query(&self) -> QueryParams {
        let mut q = QueryParams::new();
        q.insert("$skip", self.skip);
        q.insert("$top", self.top);
        q.insert("searchCriteria.creatorId", self.creator_id.as_deref());
        q.insert("searchCriteria.includeLinks", self.include_links);
        q.insert("searchCriteria.repositoryId", self.repository_id.as_deref());
        q.insert("searchCriteria.reviewerId", self.reviewer_id.as_deref());
        q.insert("searchCriteria.sourceRefName", self.source_ref_name.as_deref());
        q.insert(
            "searchCriteria.sourceRepositoryId",
            self.source_repository_id.as_deref(),
        );
        q.insert("searchCriteria.status", self.status);
        q.insert("searchCriteria.targetRefName", self.target_ref_name.as_deref());
        q
    }
}
