//! Build API facade: builds, logs, controllers and definitions.

use reqwest::Method;
use serde_json::Value;

use crate::api_version;
use crate::client::AzDevClient;
use crate::error::Result;
use crate::models::{
    Build, BuildChanges, BuildChangesQuery, BuildController, BuildControllers,
    BuildDefinition, BuildDefinitionQuery, BuildDefinitionRevisions, BuildDefinitions,
    BuildDefinitionsQuery, BuildListQuery, BuildLogs, BuildWorkItems, Builds,
};
use crate::request::{QueryParams, ResourceAddress};
use crate::resources::Resource;

/// Facade over the build area.
///
/// All calls are project-scoped except the controller endpoints, which the
/// service exposes at the organization level.
pub struct BuildApi<'a> {
    client: &'a AzDevClient,
}

impl<'a> BuildApi<'a> {
    pub(crate) fn new(client: &'a AzDevClient) -> Self {
        Self { client }
    }

    fn builds(&self, version: &'static str) -> Result<ResourceAddress> {
        let project = self.client.require_project()?;
        Ok(ResourceAddress::new(Resource::Build, version)
            .area("build/builds")
            .project(project))
    }

    fn definitions(&self, version: &'static str) -> Result<ResourceAddress> {
        let project = self.client.require_project()?;
        Ok(ResourceAddress::new(Resource::Build, version)
            .area("build/definitions")
            .project(project))
    }

    /// Get a single build.
    pub async fn get_build(&self, build_id: u32) -> Result<Build> {
        let address = self.builds(api_version::BUILD)?.id(build_id.to_string());
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// List builds matching the query filters.
    pub async fn get_builds(&self, query: &BuildListQuery) -> Result<Builds> {
        let address = self.builds(api_version::BUILD)?;
        self.client
            .send_json(Method::GET, &address, &query.to_query(), None)
            .await
    }

    /// Delete a build.
    pub async fn delete_build(&self, build_id: u32) -> Result<()> {
        let address = self.builds(api_version::BUILD)?.id(build_id.to_string());
        self.client
            .send_no_content(Method::DELETE, &address, &QueryParams::new())
            .await
    }

    /// Queue a build of the given definition.
    pub async fn queue_build(&self, definition_id: u32) -> Result<Build> {
        let address = self.builds(api_version::BUILD)?;
        let mut query = QueryParams::new();
        query.insert("definitionId", Some(definition_id));
        self.client
            .send_json(Method::POST, &address, &query, None)
            .await
    }

    /// Queue a build from a full request document (definition, branch,
    /// parameter overrides, …).
    pub async fn queue_build_with_parameters(&self, parameters: Value) -> Result<Build> {
        let address = self.builds(api_version::BUILD)?;
        self.client
            .send_json(Method::POST, &address, &QueryParams::new(), Some(parameters))
            .await
    }

    /// Get the changes associated with a build.
    pub async fn get_build_changes(
        &self,
        build_id: u32,
        query: &BuildChangesQuery,
    ) -> Result<BuildChanges> {
        let address = self
            .builds(api_version::BUILD_CHANGES)?
            .id(build_id.to_string())
            .sub("changes");
        self.client
            .send_json(Method::GET, &address, &query.to_query(), None)
            .await
    }

    /// Get the changes made to the repository between two builds.
    pub async fn get_changes_between_builds(
        &self,
        from_build_id: u32,
        to_build_id: u32,
        top: Option<u32>,
    ) -> Result<BuildChanges> {
        let project = self.client.require_project()?;
        let address = ResourceAddress::new(Resource::Build, api_version::BUILD_CHANGES)
            .project(project)
            .sub("changes");
        let mut query = QueryParams::new();
        query.insert("$top", top);
        query.insert("fromBuildId", Some(from_build_id));
        query.insert("toBuildId", Some(to_build_id));
        self.client
            .send_json(Method::GET, &address, &query, None)
            .await
    }

    /// Get the work items associated with a build.
    pub async fn get_build_work_items(
        &self,
        build_id: u32,
        top: Option<u32>,
    ) -> Result<BuildWorkItems> {
        let address = self
            .builds(api_version::BUILD_WORK_ITEMS)?
            .id(build_id.to_string())
            .sub("workitems");
        let mut query = QueryParams::new();
        query.insert("$top", top);
        self.client
            .send_json(Method::GET, &address, &query, None)
            .await
    }

    /// Get the work items between two builds.
    pub async fn get_work_items_between_builds(
        &self,
        from_build_id: u32,
        to_build_id: u32,
        top: Option<u32>,
    ) -> Result<BuildWorkItems> {
        let project = self.client.require_project()?;
        let address = ResourceAddress::new(Resource::Build, api_version::BUILD_WORK_ITEMS)
            .project(project)
            .sub("workitems");
        let mut query = QueryParams::new();
        query.insert("$top", top);
        query.insert("fromBuildId", Some(from_build_id));
        query.insert("toBuildId", Some(to_build_id));
        self.client
            .send_json(Method::GET, &address, &query, None)
            .await
    }

    /// List the log files of a build.
    pub async fn get_build_logs(&self, build_id: u32) -> Result<BuildLogs> {
        let address = self
            .builds(api_version::BUILD_LOGS)?
            .id(build_id.to_string())
            .sub("logs");
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Fetch an individual log file as plain text.
    pub async fn get_build_log(&self, build_id: u32, log_id: u32) -> Result<String> {
        let address = self
            .builds(api_version::BUILD_LOGS)?
            .id(build_id.to_string())
            .sub(format!("logs/{log_id}"));
        self.client
            .send_text(Method::GET, &address, &QueryParams::new())
            .await
    }

    /// Fetch a line range of an individual log file as plain text.
    pub async fn get_build_log_range(
        &self,
        build_id: u32,
        log_id: u32,
        start_line: u64,
        end_line: u64,
    ) -> Result<String> {
        let address = self
            .builds(api_version::BUILD_LOGS)?
            .id(build_id.to_string())
            .sub(format!("logs/{log_id}"));
        let mut query = QueryParams::new();
        query.insert("startLine", Some(start_line));
        query.insert("endLine", Some(end_line));
        self.client.send_text(Method::GET, &address, &query).await
    }

    /// List build controllers, optionally filtered by name.
    ///
    /// Controllers are organization-scoped; no project is required.
    pub async fn get_build_controllers(&self, name: Option<&str>) -> Result<BuildControllers> {
        let address = ResourceAddress::new(Resource::Build, api_version::BUILD_CONTROLLERS)
            .sub("controllers");
        let mut query = QueryParams::new();
        query.insert("name", name);
        self.client
            .send_json(Method::GET, &address, &query, None)
            .await
    }

    /// Get a single build controller.
    pub async fn get_build_controller(&self, controller_id: u32) -> Result<BuildController> {
        let address = ResourceAddress::new(Resource::Build, api_version::BUILD_CONTROLLERS)
            .area("build/controllers")
            .id(controller_id.to_string());
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Create a build definition from a full definition document.
    pub async fn create_build_definition(&self, definition: Value) -> Result<BuildDefinition> {
        let address = self.definitions(api_version::BUILD_DEFINITIONS)?;
        self.client
            .send_json(Method::POST, &address, &QueryParams::new(), Some(definition))
            .await
    }

    /// Delete a definition and all associated builds.
    pub async fn delete_build_definition(&self, definition_id: u32) -> Result<()> {
        let address = self
            .definitions(api_version::BUILD_DEFINITIONS)?
            .id(definition_id.to_string());
        self.client
            .send_no_content(Method::DELETE, &address, &QueryParams::new())
            .await
    }

    /// Get a definition.
    pub async fn get_build_definition(&self, definition_id: u32) -> Result<BuildDefinition> {
        let address = self
            .definitions(api_version::BUILD_DEFINITIONS)?
            .id(definition_id.to_string());
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// Get a definition, optionally at a specific revision.
    pub async fn get_build_definition_with(
        &self,
        definition_id: u32,
        query: &BuildDefinitionQuery,
    ) -> Result<BuildDefinition> {
        let address = self
            .definitions(api_version::BUILD_DEFINITIONS)?
            .id(definition_id.to_string());
        self.client
            .send_json(Method::GET, &address, &query.to_query(), None)
            .await
    }

    /// Get all revisions of a definition.
    pub async fn get_build_definition_revisions(
        &self,
        definition_id: u32,
    ) -> Result<BuildDefinitionRevisions> {
        let address = self
            .definitions(api_version::BUILD_DEFINITION_REVISIONS)?
            .id(definition_id.to_string())
            .sub("revisions");
        self.client
            .send_json(Method::GET, &address, &QueryParams::new(), None)
            .await
    }

    /// List definitions matching the query filters.
    pub async fn get_build_definitions(
        &self,
        query: &BuildDefinitionsQuery,
    ) -> Result<BuildDefinitions> {
        let address = self.definitions(api_version::BUILD_DEFINITIONS)?;
        self.client
            .send_json(Method::GET, &address, &query.to_query(), None)
            .await
    }

    /// Restore (or re-delete) a soft-deleted definition.
    pub async fn restore_build_definition(
        &self,
        definition_id: u32,
        deleted: bool,
    ) -> Result<BuildDefinition> {
        let address = self
            .definitions(api_version::BUILD_DEFINITIONS)?
            .id(definition_id.to_string());
        let mut query = QueryParams::new();
        query.insert("deleted", Some(deleted));
        self.client
            .send_json(Method::PATCH, &address, &query, None)
            .await
    }
}
