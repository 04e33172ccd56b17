//! Canned fixtures for the mock Azure DevOps server.

use std::collections::HashMap;

use crate::{
    Build, DefinitionReference, GitRepository, Subscription, TeamProject,
    TeamProjectReference,
};

/// The data a default server starts with.
pub struct DefaultScenario {
    pub projects: Vec<TeamProject>,
    pub repositories: Vec<GitRepository>,
    pub builds: Vec<Build>,
    pub build_logs: Vec<(u32, u32, String)>,
    pub subscriptions: Vec<Subscription>,
}

/// Factory for fixture values.
pub struct Fixtures;

impl Fixtures {
    /// A project named `demo` plus two repositories, two builds with logs
    /// and one service hook subscription.
    pub fn default_scenario() -> DefaultScenario {
        DefaultScenario {
            projects: vec![Self::project("proj-1", "demo")],
            repositories: vec![
                Self::repository("repo-1", "frontend"),
                Self::repository("repo-2", "backend"),
            ],
            builds: vec![Self::build(1, "succeeded"), Self::build(2, "failed")],
            build_logs: vec![
                (1, 1, "##[section]Starting: Build\nDone.\n".to_string()),
                (2, 1, "##[error]Task failed.\n".to_string()),
            ],
            subscriptions: vec![Self::subscription("sub-1", "build.complete")],
        }
    }

    /// A minimal project.
    pub fn project(id: &str, name: &str) -> TeamProject {
        TeamProject {
            id: id.to_string(),
            name: Some(name.to_string()),
            description: None,
            url: None,
            state: Some("wellFormed".to_string()),
            revision: Some(1),
            visibility: Some("private".to_string()),
            last_update_time: None,
        }
    }

    /// A minimal repository.
    pub fn repository(id: &str, name: &str) -> GitRepository {
        GitRepository {
            id: id.to_string(),
            name: Some(name.to_string()),
            url: None,
            project: Some(TeamProjectReference {
                id: Some("proj-1".to_string()),
                name: Some("demo".to_string()),
                ..Default::default()
            }),
            default_branch: Some("refs/heads/main".to_string()),
            size: Some(1024),
            remote_url: None,
            ssh_url: None,
            web_url: None,
            is_disabled: Some(false),
            is_fork: Some(false),
        }
    }

    /// A completed build with the given result.
    pub fn build(id: u32, result: &str) -> Build {
        Build {
            id,
            build_number: Some(format!("20260805.{id}")),
            status: Some("completed".to_string()),
            result: Some(result.to_string()),
            queue_time: None,
            start_time: None,
            finish_time: None,
            source_branch: Some("refs/heads/main".to_string()),
            source_version: None,
            priority: Some("normal".to_string()),
            reason: Some("individualCI".to_string()),
            requested_for: None,
            requested_by: None,
            definition: Some(DefinitionReference {
                id: Some(7),
                name: Some("Demo-CI".to_string()),
                ..Default::default()
            }),
            project: None,
            url: None,
            tags: Vec::new(),
        }
    }

    /// A web hook subscription for the given event type.
    pub fn subscription(id: &str, event_type: &str) -> Subscription {
        Subscription {
            id: id.to_string(),
            url: None,
            status: Some("enabled".to_string()),
            publisher_id: Some("tfs".to_string()),
            event_type: Some(event_type.to_string()),
            event_description: None,
            resource_version: Some("1.0-preview.1".to_string()),
            consumer_id: Some("webHooks".to_string()),
            consumer_action_id: Some("httpRequest".to_string()),
            action_description: None,
            publisher_inputs: HashMap::new(),
            consumer_inputs: HashMap::from([(
                "url".to_string(),
                "https://example.test/hook".to_string(),
            )]),
            created_by: None,
            created_date: None,
            modified_by: None,
            modified_date: None,
        }
    }
}
