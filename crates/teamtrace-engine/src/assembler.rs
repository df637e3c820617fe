use std::path::PathBuf;

use chrono::{DateTime, NaiveDateTime, Utc};
use teamtrace_types::{Agent, Event, SessionDocument, SessionStats, SessionType};

/// Everything discovered and parsed for one session
#[derive(Debug, Clone)]
pub struct SessionInput {
    pub session_id: String,
    pub lead_path: PathBuf,
    pub team_name: Option<String>,
    pub project_name: String,
    pub agents: Vec<Agent>,
    /// Already merged and consolidated
    pub events: Vec<Event>,
}

/// Package a merged timeline into the exported document
///
/// Stats are computed from the vectors being stored, never passed in.
pub fn assemble(input: SessionInput) -> SessionDocument {
    let stats = SessionStats {
        total_events: input.events.len(),
        duration_seconds: duration_seconds(&input.events),
        agent_count: input.agents.len(),
    };

    let session_type = if input.team_name.is_some() {
        SessionType::Team
    } else {
        SessionType::Solo
    };

    SessionDocument {
        session_id: input.session_id,
        session_type,
        team_name: input.team_name,
        project_name: input.project_name,
        lead_log_path: input.lead_path.display().to_string(),
        agents: input.agents,
        events: input.events,
        stats,
    }
}

/// Seconds between the first and last timestamped events
///
/// Zero when fewer than two events carry a timestamp or when either end does
/// not parse.
pub fn duration_seconds(events: &[Event]) -> i64 {
    let mut stamped = events
        .iter()
        .map(|event| event.timestamp.as_str())
        .filter(|ts| !ts.is_empty());

    let Some(first) = stamped.next() else {
        return 0;
    };
    let Some(last) = stamped.last() else {
        return 0;
    };

    match (parse_timestamp(first), parse_timestamp(last)) {
        (Some(start), Some(end)) => (end - start).num_seconds(),
        _ => 0,
    }
}

/// RFC 3339, or a naive ISO-8601 date-time read as UTC
fn parse_timestamp(ts: &str) -> Option<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(ts, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
