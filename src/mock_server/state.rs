//! Mock server state management.
//!
//! Provides the in-memory data store for the mock Azure DevOps server.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::{Build, GitRepository, Subscription, TeamProject};

/// Shared state for the mock server.
///
/// Holds all the mock data the server will serve, wrapped in
/// `Arc<RwLock<_>>` for concurrent access.
#[derive(Debug, Default)]
pub struct MockState {
    /// Projects indexed by name.
    pub projects: HashMap<String, TeamProject>,

    /// Repositories indexed by id; handlers also match on name.
    pub repositories: HashMap<String, GitRepository>,

    /// Builds indexed by id.
    pub builds: HashMap<u32, Build>,

    /// Log text indexed by (build id, log id).
    pub build_logs: HashMap<(u32, u32), String>,

    /// Service hook subscriptions indexed by id.
    pub subscriptions: HashMap<String, Subscription>,

    /// Next id handed out when a build is queued.
    pub next_build_id: u32,
}

impl MockState {
    /// Create a new empty state.
    pub fn new() -> Self {
        Self {
            next_build_id: 1,
            ..Self::default()
        }
    }

    /// Create state wrapped in `Arc<RwLock>` for sharing.
    pub fn shared(self) -> Arc<RwLock<Self>> {
        Arc::new(RwLock::new(self))
    }

    /// Add a project to the state.
    pub fn with_project(mut self, project: TeamProject) -> Self {
        let name = project.name.clone().unwrap_or_else(|| project.id.clone());
        self.projects.insert(name, project);
        self
    }

    /// Add a repository to the state.
    pub fn with_repository(mut self, repository: GitRepository) -> Self {
        self.repositories.insert(repository.id.clone(), repository);
        self
    }

    /// Add a build to the state.
    pub fn with_build(mut self, build: Build) -> Self {
        self.next_build_id = self.next_build_id.max(build.id + 1);
        self.builds.insert(build.id, build);
        self
    }

    /// Add log text for a build.
    pub fn with_build_log(mut self, build_id: u32, log_id: u32, text: &str) -> Self {
        self.build_logs.insert((build_id, log_id), text.to_string());
        self
    }

    /// Add a subscription to the state.
    pub fn with_subscription(mut self, subscription: Subscription) -> Self {
        self.subscriptions
            .insert(subscription.id.clone(), subscription);
        self
    }

    /// Look up a repository by id or name.
    pub fn find_repository(&self, id_or_name: &str) -> Option<&GitRepository> {
        self.repositories.get(id_or_name).or_else(|| {
            self.repositories
                .values()
                .find(|r| r.name.as_deref() == Some(id_or_name))
        })
    }

    /// Queue a new build for a definition, allocating the next id.
    pub fn queue_build(&mut self, definition_id: Option<u32>) -> &Build {
        let id = self.next_build_id;
        self.next_build_id += 1;

        let build = Build {
            id,
            build_number: Some(format!("{id}")),
            status: Some("notStarted".to_string()),
            result: None,
            queue_time: None,
            start_time: None,
            finish_time: None,
            source_branch: Some("refs/heads/main".to_string()),
            source_version: None,
            priority: Some("normal".to_string()),
            reason: Some("manual".to_string()),
            requested_for: None,
            requested_by: None,
            definition: definition_id.map(|id| crate::DefinitionReference {
                id: Some(id),
                ..Default::default()
            }),
            project: None,
            url: None,
            tags: Vec::new(),
        };
        self.builds.entry(id).or_insert(build)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_server::Fixtures;

    #[test]
    fn test_state_add_and_find_repository() {
        let state = MockState::new()
            .with_repository(Fixtures::repository("repo-1", "frontend"));

        assert!(state.find_repository("repo-1").is_some());
        assert!(state.find_repository("frontend").is_some());
        assert!(state.find_repository("missing").is_none());
    }

    #[test]
    fn test_queue_build_allocates_fresh_ids() {
        let mut state = MockState::new().with_build(Fixtures::build(7, "succeeded"));

        let id = state.queue_build(Some(3)).id;
        assert_eq!(id, 8);
        let next = state.queue_build(None).id;
        assert_eq!(next, 9);
    }
}
