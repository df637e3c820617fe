use std::path::{Path, PathBuf};

use teamtrace_core::paths_equal;
use teamtrace_types::Agent;
use tracing::debug;
use walkdir::WalkDir;

use super::io::{find_team_name, first_metadata_record};
use crate::{Error, Result};

/// A teammate log found next to the lead log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Teammate {
    pub path: PathBuf,
    pub session_id: String,
    pub agent_name: String,
}

/// Result of probing the lead log's project directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamDiscovery {
    pub lead_path: PathBuf,
    /// None for solo sessions
    pub team_name: Option<String>,
    /// Name of the project log directory
    pub project_name: String,
    /// In file-name order
    pub teammates: Vec<Teammate>,
}

impl TeamDiscovery {
    /// Lead first, then teammates; colors cycle in that order
    pub fn agents(&self) -> Vec<Agent> {
        std::iter::once(Agent::lead())
            .chain(self.teammates.iter().enumerate().map(|(idx, teammate)| {
                Agent::new(&teammate.session_id, &teammate.agent_name, idx + 1)
            }))
            .collect()
    }
}

fn is_jsonl(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == "jsonl")
}

fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default()
}

/// Find `<log_root>/<project>/<session_id>.jsonl` across all project directories
///
/// Results are in lexicographic order of project directory name.
pub fn find_session_files(log_root: &Path, session_id: &str) -> Result<Vec<PathBuf>> {
    let file_name = format!("{}.jsonl", session_id);

    let matches: Vec<PathBuf> = WalkDir::new(log_root)
        .min_depth(2)
        .max_depth(2)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file() && entry.file_name() == file_name.as_str())
        .map(|entry| entry.into_path())
        .collect();

    debug!(
        session_id,
        log_root = %log_root.display(),
        matches = matches.len(),
        "searched for session logs"
    );

    Ok(matches)
}

/// Resolve the lead log for a session (the first match)
pub fn locate_session(log_root: &Path, session_id: &str) -> Result<PathBuf> {
    find_session_files(log_root, session_id)?
        .into_iter()
        .next()
        .ok_or_else(|| Error::SessionNotFound {
            session_id: session_id.to_string(),
            search_root: log_root.to_path_buf(),
        })
}

/// Find the team the lead log belongs to and the teammate logs sharing it
///
/// Fails only when the lead log can't be opened. Unreadable sibling logs
/// are not teammates.
pub fn discover_team(lead_path: &Path) -> Result<TeamDiscovery> {
    let project_dir = lead_path.parent().unwrap_or_else(|| Path::new("."));
    let project_name = project_dir
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let Some(team_name) = find_team_name(lead_path)? else {
        debug!(lead = %lead_path.display(), "no team name, treating as solo session");
        return Ok(TeamDiscovery {
            lead_path: lead_path.to_path_buf(),
            team_name: None,
            project_name,
            teammates: Vec::new(),
        });
    };

    let mut teammates = Vec::new();

    for entry in WalkDir::new(project_dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !entry.file_type().is_file() || !is_jsonl(path) || paths_equal(path, lead_path) {
            continue;
        }

        let Some(header) = first_metadata_record(path) else {
            continue;
        };

        if header.team() != Some(team_name.as_str()) {
            continue;
        }

        let stem = file_stem(path);
        let teammate = Teammate {
            path: path.to_path_buf(),
            session_id: header
                .session_id
                .filter(|id| !id.is_empty())
                .unwrap_or_else(|| stem.clone()),
            agent_name: header
                .agent_name
                .filter(|name| !name.is_empty())
                .unwrap_or(stem),
        };

        debug!(
            team = %team_name,
            agent = %teammate.agent_name,
            path = %teammate.path.display(),
            "found teammate log"
        );
        teammates.push(teammate);
    }

    Ok(TeamDiscovery {
        lead_path: lead_path.to_path_buf(),
        team_name: Some(team_name),
        project_name,
        teammates,
    })
}
