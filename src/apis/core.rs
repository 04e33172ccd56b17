//! Core API facade: projects and teams.
//!
//! Project endpoints sit at the organization level; the connection's
//! default project plays no role here.

use reqwest::Method;

use crate::api_version;
use crate::apis::require_arg;
use crate::client::AzDevClient;
use crate::error::Result;
use crate::models::{TeamProject, TeamProjects, WebApiTeams};
use crate::request::{QueryParams, ResourceAddress};
use crate::resources::Resource;

/// Facade over the core area.
pub struct CoreApi<'a> {
    client: &'a AzDevClient,
}

impl<'a> CoreApi<'a> {
    pub(crate) fn new(client: &'a AzDevClient) -> Self {
        Self { client }
    }

    /// Get a project by name or id.
    pub async fn get_project(&self, project_name: &str) -> Result<TeamProject> {
        require_arg("project_name", project_name)?;
        let address = ResourceAddress::new(Resource::Core, api_version::CORE)
            .area("projects")
            .id(project_name);
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// List the organization's projects.
    pub async fn get_projects(&self) -> Result<TeamProjects> {
        let address =
            ResourceAddress::new(Resource::Core, api_version::CORE).area("projects");
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// List the teams of a project.
    pub async fn get_teams(&self, project_id: &str) -> Result<WebApiTeams> {
        require_arg("project_id", project_id)?;
        let address = ResourceAddress::new(Resource::Core, api_version::CORE)
            .area("projects")
            .id(project_id)
            .sub("teams");
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }
}
