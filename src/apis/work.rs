//! Work API facade: team settings iterations.

use reqwest::Method;

use crate::api_version;
use crate::apis::require_arg;
use crate::client::AzDevClient;
use crate::error::Result;
use crate::models::{
    IterationWorkItems, TeamSettingsIteration, TeamSettingsIterations, TimeFrame,
};
use crate::request::{QueryParams, ResourceAddress};
use crate::resources::Resource;

/// Facade over the work area.
///
/// Iteration endpoints are scoped to a project *and* a team; the team name
/// becomes a path segment, so spaces in it are percent-encoded on the way
/// out.
pub struct WorkApi<'a> {
    client: &'a AzDevClient,
}

impl<'a> WorkApi<'a> {
    pub(crate) fn new(client: &'a AzDevClient) -> Self {
        Self { client }
    }

    fn team_scope(&self, team: &str) -> Result<String> {
        require_arg("team", team)?;
        let project = self.client.require_project()?;
        Ok(format!("{project}/{team}"))
    }

    /// Get a team's iterations.
    pub async fn get_team_iterations(&self, team: &str) -> Result<TeamSettingsIterations> {
        let address = ResourceAddress::new(Resource::Work, api_version::WORK)
            .project(self.team_scope(team)?)
            .sub("teamsettings/iterations");
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Get a team's iterations filtered by relative time frame.
    pub async fn get_team_iterations_in(
        &self,
        team: &str,
        time_frame: TimeFrame,
    ) -> Result<TeamSettingsIterations> {
        let address = ResourceAddress::new(Resource::Work, api_version::WORK)
            .project(self.team_scope(team)?)
            .sub("teamsettings/iterations");
        let mut query = QueryParams::new();
        query.insert("$timeframe", Some(time_frame));
        self.client
            .send_json(Method::GET, &address, &query, None)
            .await
    }

    /// Get one of a team's iterations by id.
    pub async fn get_team_iteration(
        &self,
        team: &str,
        iteration_id: &str,
    ) -> Result<TeamSettingsIteration> {
        require_arg("iteration_id", iteration_id)?;
        let address = ResourceAddress::new(Resource::Work, api_version::WORK)
            .area("work/teamsettings/iterations")
            .project(self.team_scope(team)?)
            .id(iteration_id);
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Get the work items assigned to an iteration.
    pub async fn get_iteration_work_items(
        &self,
        team: &str,
        iteration_id: &str,
    ) -> Result<IterationWorkItems> {
        require_arg("iteration_id", iteration_id)?;
        let address = ResourceAddress::new(Resource::Work, api_version::WORK)
            .area("work/teamsettings/iterations")
            .project(self.team_scope(team)?)
            .id(iteration_id)
            .sub("workitems");
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Remove an iteration from a team's settings.
    ///
    /// The service answers with an empty body on success.
    pub async fn delete_team_iteration(&self, team: &str, iteration_id: &str) -> Result<()> {
        require_arg("iteration_id", iteration_id)?;
        let address = ResourceAddress::new(Resource::Work, api_version::WORK)
            .area("work/teamsettings/iterations")
            .project(self.team_scope(team)?)
            .id(iteration_id);
        self.client
            .send_no_content(Method::DELETE, &address, &QueryParams::new())
            .await
    }
}
