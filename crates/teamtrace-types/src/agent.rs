use serde::{Deserialize, Serialize};

/// Display palette cycled over agents in discovery order
pub const AGENT_COLORS: [&str; 8] = [
    "#58a6ff", "#3fb950", "#bc8cff", "#f0883e", "#f778ba", "#ff7b72", "#79c0ff", "#56d364",
];

/// Agent id reserved for the session that started the team
pub const LEAD_AGENT_ID: &str = "lead";

/// Display name of the lead agent
pub const LEAD_AGENT_NAME: &str = "team-lead";

/// A participant in a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// "lead" for the initiating agent, otherwise the teammate's session id
    pub id: String,

    /// Display name (agentName from the log, or the file stem)
    pub name: String,

    /// Position in the palette, assigned by discovery order
    pub color_index: usize,

    /// Palette color for `color_index`
    pub color: String,
}

impl Agent {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color_index: usize) -> Self {
        let color_index = color_index % AGENT_COLORS.len();
        Self {
            id: id.into(),
            name: name.into(),
            color_index,
            color: AGENT_COLORS[color_index].to_string(),
        }
    }

    pub fn lead() -> Self {
        Self::new(LEAD_AGENT_ID, LEAD_AGENT_NAME, 0)
    }
}
