//! Git API facade: repositories, pull requests, labels and reviewers.

use reqwest::Method;
use serde_json::json;

use crate::api_version;
use crate::apis::require_arg;
use crate::client::AzDevClient;
use crate::error::Result;
use crate::models::{
    GitDeletedRepositories, GitRef, GitRepositories, GitRepository, IdentityRefWithVote,
    PullRequest, PullRequestCreateParams, PullRequestQuery, PullRequestReviewers,
    PullRequests, ResourceRefs, WebApiTagDefinition, WebApiTagDefinitions,
};
use crate::request::{QueryParams, ResourceAddress};
use crate::resources::Resource;

/// Facade over the git area. All calls are project-scoped.
pub struct GitApi<'a> {
    client: &'a AzDevClient,
}

impl<'a> GitApi<'a> {
    pub(crate) fn new(client: &'a AzDevClient) -> Self {
        Self { client }
    }

    fn repositories(&self, version: &'static str) -> Result<ResourceAddress> {
        let project = self.client.require_project()?;
        Ok(ResourceAddress::new(Resource::Git, version)
            .area("git/repositories")
            .project(project))
    }

    /// Create a repository in the given project.
    pub async fn create_repository(
        &self,
        repository_name: &str,
        project_id: &str,
    ) -> Result<GitRepository> {
        require_arg("repository_name", repository_name)?;
        require_arg("project_id", project_id)?;
        let address = self.repositories(api_version::GIT)?;
        let body = json!({
            "name": repository_name,
            "project": { "id": project_id },
        });
        self.client
            .send_json(Method::POST, &address, &QueryParams::new(), Some(body))
            .await
    }

    /// Delete a repository (moves it to the recycle bin).
    pub async fn delete_repository(&self, repository_id: &str) -> Result<()> {
        require_arg("repository_id", repository_id)?;
        let address = self.repositories(api_version::GIT)?.id(repository_id);
        self.client
            .send_no_content(Method::DELETE, &address, &QueryParams::new())
            .await
    }

    /// Permanently delete a repository from the recycle bin.
    pub async fn delete_repository_from_recycle_bin(&self, repository_id: &str) -> Result<()> {
        require_arg("repository_id", repository_id)?;
        let project = self.client.require_project()?;
        let address = ResourceAddress::new(Resource::Git, api_version::GIT)
            .area("git/recycleBin/repositories")
            .project(project)
            .id(repository_id);
        self.client
            .send_no_content(Method::DELETE, &address, &QueryParams::new())
            .await
    }

    /// List soft-deleted repositories.
    pub async fn get_deleted_repositories(&self) -> Result<GitDeletedRepositories> {
        let project = self.client.require_project()?;
        let address = ResourceAddress::new(Resource::Git, api_version::GIT)
            .area("git/deletedrepositories")
            .project(project);
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// List repositories currently in the recycle bin.
    pub async fn get_recycle_bin_repositories(&self) -> Result<GitDeletedRepositories> {
        let project = self.client.require_project()?;
        let address = ResourceAddress::new(Resource::Git, api_version::GIT)
            .area("git/recycleBin/repositories")
            .project(project);
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Restore a repository from the recycle bin.
    pub async fn restore_repository_from_recycle_bin(
        &self,
        repository_id: &str,
        deleted: bool,
    ) -> Result<GitRepository> {
        require_arg("repository_id", repository_id)?;
        let project = self.client.require_project()?;
        let address = ResourceAddress::new(Resource::Git, api_version::GIT)
            .area("git/recycleBin/repositories")
            .project(project)
            .id(repository_id);
        let body = json!({ "deleted": deleted });
        self.client
            .send_json(Method::PATCH, &address, &QueryParams::new(), Some(body))
            .await
    }

    /// Get a repository by name or id.
    pub async fn get_repository(&self, repository_name: &str) -> Result<GitRepository> {
        require_arg("repository_name", repository_name)?;
        let address = self.repositories(api_version::GIT)?.id(repository_name);
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// List the project's repositories.
    pub async fn get_repositories(&self) -> Result<GitRepositories> {
        let address = self.repositories(api_version::GIT)?;
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Rename a repository and/or change its default branch.
    pub async fn update_repository(
        &self,
        repository_id: &str,
        repository_name: &str,
        default_branch_name: &str,
    ) -> Result<GitRepository> {
        require_arg("repository_id", repository_id)?;
        let address = self.repositories(api_version::GIT)?.id(repository_id);
        let body = json!({
            "name": repository_name,
            "defaultBranch": default_branch_name,
        });
        self.client
            .send_json(Method::PATCH, &address, &QueryParams::new(), Some(body))
            .await
    }

    /// Create a pull request.
    pub async fn create_pull_request(
        &self,
        repository_id: &str,
        params: &PullRequestCreateParams,
    ) -> Result<PullRequest> {
        require_arg("repository_id", repository_id)?;
        require_arg("source_ref_name", &params.source_ref_name)?;
        require_arg("target_ref_name", &params.target_ref_name)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_id)
            .sub("pullrequests");
        let body = serde_json::to_value(params)?;
        self.client
            .send_json(Method::POST, &address, &QueryParams::new(), Some(body))
            .await
    }

    /// Get a pull request within a repository.
    pub async fn get_pull_request(
        &self,
        repository_name: &str,
        pull_request_id: u32,
    ) -> Result<PullRequest> {
        require_arg("repository_name", repository_name)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_name)
            .sub(format!("pullrequests/{pull_request_id}"));
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Get a pull request by id alone, without naming its repository.
    pub async fn get_pull_request_by_id(&self, pull_request_id: u32) -> Result<PullRequest> {
        let project = self.client.require_project()?;
        let address = ResourceAddress::new(Resource::Git, api_version::GIT)
            .area("git/pullrequests")
            .project(project)
            .id(pull_request_id.to_string());
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// List a repository's active pull requests.
    pub async fn get_pull_requests(&self, repository_name: &str) -> Result<PullRequests> {
        require_arg("repository_name", repository_name)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_name)
            .sub("pullrequests");
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// List pull requests across the whole project.
    pub async fn get_pull_requests_by_project(
        &self,
        query: &PullRequestQuery,
    ) -> Result<PullRequests> {
        let project = self.client.require_project()?;
        let address = ResourceAddress::new(Resource::Git, api_version::GIT)
            .area("git/pullrequests")
            .project(project);
        self.client
            .send_json(Method::GET, &address, &query.to_query(), None)
            .await
    }

    /// Lock or unlock a branch.
    pub async fn update_branch_lock(
        &self,
        repository_name: &str,
        branch_name: &str,
        is_locked: bool,
    ) -> Result<GitRef> {
        require_arg("repository_name", repository_name)?;
        require_arg("branch_name", branch_name)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_name)
            .sub("refs");
        let mut query = QueryParams::new();
        query.insert("filter", Some(format!("heads/{branch_name}")));
        let body = json!({ "isLocked": is_locked });
        self.client
            .send_json(Method::PATCH, &address, &query, Some(body))
            .await
    }

    /// Get the work items linked to a pull request.
    pub async fn get_pull_request_work_items(
        &self,
        pull_request_id: u32,
        repository_name: &str,
    ) -> Result<ResourceRefs> {
        require_arg("repository_name", repository_name)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_name)
            .sub(format!("pullRequests/{pull_request_id}/workitems"));
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Attach a label to a pull request.
    pub async fn create_pull_request_label(
        &self,
        repository_name: &str,
        pull_request_id: u32,
        label_name: &str,
    ) -> Result<WebApiTagDefinition> {
        require_arg("repository_name", repository_name)?;
        require_arg("label_name", label_name)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_name)
            .sub(format!("pullRequests/{pull_request_id}/labels"));
        let body = json!({ "name": label_name });
        self.client
            .send_json(Method::POST, &address, &QueryParams::new(), Some(body))
            .await
    }

    /// Remove a label from a pull request.
    pub async fn delete_pull_request_label(
        &self,
        repository_name: &str,
        pull_request_id: u32,
        label_name: &str,
    ) -> Result<()> {
        require_arg("repository_name", repository_name)?;
        require_arg("label_name", label_name)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_name)
            .sub(format!("pullRequests/{pull_request_id}/labels/{label_name}"));
        self.client
            .send_no_content(Method::DELETE, &address, &QueryParams::new())
            .await
    }

    /// Get a single label on a pull request.
    pub async fn get_pull_request_label(
        &self,
        repository_name: &str,
        pull_request_id: u32,
        label_name: &str,
    ) -> Result<WebApiTagDefinition> {
        require_arg("repository_name", repository_name)?;
        require_arg("label_name", label_name)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_name)
            .sub(format!("pullRequests/{pull_request_id}/labels/{label_name}"));
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// List the labels on a pull request.
    pub async fn get_pull_request_labels(
        &self,
        repository_name: &str,
        pull_request_id: u32,
    ) -> Result<WebApiTagDefinitions> {
        require_arg("repository_name", repository_name)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_name)
            .sub(format!("pullRequests/{pull_request_id}/labels"));
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Add a reviewer to a pull request with an initial vote.
    pub async fn create_pull_request_reviewer(
        &self,
        pull_request_id: u32,
        repository_id: &str,
        reviewer_id: &str,
        vote: i32,
        is_required: bool,
    ) -> Result<IdentityRefWithVote> {
        require_arg("repository_id", repository_id)?;
        require_arg("reviewer_id", reviewer_id)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_id)
            .sub(format!("pullRequests/{pull_request_id}/reviewers/{reviewer_id}"));
        let body = json!({ "vote": vote, "isRequired": is_required });
        self.client
            .send_json(Method::PUT, &address, &QueryParams::new(), Some(body))
            .await
    }

    /// Remove a reviewer from a pull request.
    pub async fn delete_pull_request_reviewer(
        &self,
        pull_request_id: u32,
        repository_id: &str,
        reviewer_id: &str,
    ) -> Result<()> {
        require_arg("repository_id", repository_id)?;
        require_arg("reviewer_id", reviewer_id)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_id)
            .sub(format!("pullRequests/{pull_request_id}/reviewers/{reviewer_id}"));
        self.client
            .send_no_content(Method::DELETE, &address, &QueryParams::new())
            .await
    }

    /// Get a reviewer on a pull request.
    pub async fn get_pull_request_reviewer(
        &self,
        pull_request_id: u32,
        repository_id: &str,
        reviewer_id: &str,
    ) -> Result<IdentityRefWithVote> {
        require_arg("repository_id", repository_id)?;
        require_arg("reviewer_id", reviewer_id)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_id)
            .sub(format!("pullRequests/{pull_request_id}/reviewers/{reviewer_id}"));
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// List the reviewers on a pull request.
    pub async fn get_pull_request_reviewers(
        &self,
        pull_request_id: u32,
        repository_id: &str,
    ) -> Result<PullRequestReviewers> {
        require_arg("repository_id", repository_id)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_id)
            .sub(format!("pullRequests/{pull_request_id}/reviewers"));
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Flag or un-flag a reviewer, or record a declined review.
    pub async fn update_pull_request_reviewer(
        &self,
        pull_request_id: u32,
        repository_id: &str,
        reviewer_id: &str,
        is_flagged: bool,
        has_declined: bool,
    ) -> Result<IdentityRefWithVote> {
        require_arg("repository_id", repository_id)?;
        require_arg("reviewer_id", reviewer_id)?;
        let address = self
            .repositories(api_version::GIT)?
            .id(repository_id)
            .sub(format!("pullRequests/{pull_request_id}/reviewers/{reviewer_id}"));
        let body = json!({ "isFlagged": is_flagged, "hasDeclined": has_declined });
        self.client
            .send_json(Method::PATCH, &address, &QueryParams::new(), Some(body))
            .await
    }
}
