use serde::{Deserialize, Serialize};

use crate::{Agent, Event};

/// Whether the session was a single agent or a named team
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    Solo,
    Team,
}

impl std::fmt::Display for SessionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SessionType::Solo => write!(f, "solo"),
            SessionType::Team => write!(f, "team"),
        }
    }
}

/// Summary statistics derived from the assembled timeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStats {
    pub total_events: usize,
    pub duration_seconds: i64,
    pub agent_count: usize,
}

/// The assembled session, handed to the renderer as JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDocument {
    pub session_id: String,
    pub session_type: SessionType,
    pub team_name: Option<String>,

    /// Name of the project log directory holding the lead log
    #[serde(rename = "project")]
    pub project_name: String,

    /// Path of the lead log as it was read
    #[serde(rename = "leadJsonlPath")]
    pub lead_log_path: String,

    /// Lead first, then teammates in discovery order
    pub agents: Vec<Agent>,

    /// Sorted by timestamp; ties keep file-read order
    pub events: Vec<Event>,

    pub stats: SessionStats,
}
