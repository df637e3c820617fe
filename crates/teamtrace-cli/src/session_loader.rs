use anyhow::{Context, Result};
use std::path::PathBuf;
use teamtrace_engine::{SessionInput, assemble, merge_timelines};
use teamtrace_providers::{TeamDiscovery, discover_team, locate_session, parse_log_file};
use teamtrace_types::{LEAD_AGENT_ID, LEAD_AGENT_NAME, SessionDocument};
use tracing::{debug, warn};

/// Builds session documents from a Claude Code log root
pub struct SessionLoader {
    log_root: PathBuf,
}

impl SessionLoader {
    pub fn new(log_root: PathBuf) -> Self {
        Self { log_root }
    }

    /// Locate, discover, parse, merge and assemble one session
    ///
    /// Fails when no log matches the session id or the lead log can't be read.
    pub fn load(&self, session_id: &str) -> Result<SessionDocument> {
        let lead_path = locate_session(&self.log_root, session_id)?;
        let discovery = discover_team(&lead_path)
            .with_context(|| format!("Failed to read {}", lead_path.display()))?;
        self.load_discovered(session_id, discovery)
    }

    /// Parse and assemble the logs of an already discovered session
    ///
    /// An unreadable teammate log is skipped with a warning; the teammate
    /// stays in the agent list with no events.
    pub fn load_discovered(
        &self,
        session_id: &str,
        discovery: TeamDiscovery,
    ) -> Result<SessionDocument> {
        let agents = discovery.agents();
        let lead_path = discovery.lead_path;

        let mut timelines = Vec::with_capacity(agents.len());
        timelines.push(
            parse_log_file(&lead_path, LEAD_AGENT_ID, LEAD_AGENT_NAME)
                .with_context(|| format!("Failed to read {}", lead_path.display()))?,
        );

        for teammate in &discovery.teammates {
            match parse_log_file(&teammate.path, &teammate.session_id, &teammate.agent_name) {
                Ok(events) => timelines.push(events),
                Err(e) => warn!(
                    path = %teammate.path.display(),
                    error = %e,
                    "skipping unreadable teammate log"
                ),
            }
        }

        let events = merge_timelines(timelines);
        debug!(
            session_id,
            agents = agents.len(),
            events = events.len(),
            "assembled session"
        );

        Ok(assemble(SessionInput {
            session_id: session_id.to_string(),
            lead_path,
            team_name: discovery.team_name,
            project_name: discovery.project_name,
            agents,
            events,
        }))
    }
}
