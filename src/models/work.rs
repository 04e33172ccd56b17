//! Work area models: team iterations and their work items.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::common::{ResourceList, ResourceRef};

/// Relative time filter for iteration queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeFrame {
    Past,
    Current,
    Future,
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimeFrame::Past => "past",
            TimeFrame::Current => "current",
            TimeFrame::Future => "future",
        };
        f.write_str(s)
    }
}

/// Date range and time-frame classification of an iteration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationAttributes {
    #[serde(default)]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finish_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_frame: Option<String>,
}

/// An iteration (sprint) assigned to a team.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamSettingsIteration {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub attributes: Option<IterationAttributes>,
    #[serde(default)]
    pub url: Option<String>,
}

/// A link between two work items (or a root link with no source).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkItemLink {
    #[serde(default)]
    pub rel: Option<String>,
    #[serde(default)]
    pub source: Option<ResourceRef>,
    #[serde(default)]
    pub target: Option<ResourceRef>,
}

/// Work items assigned to an iteration, as a flat relation list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IterationWorkItems {
    #[serde(default)]
    pub work_item_relations: Vec<WorkItemLink>,
    #[serde(default)]
    pub url: Option<String>,
}

pub type TeamSettingsIterations = ResourceList<TeamSettingsIteration>;
