// Error types
pub mod error;

// Claude Code log format: discovery, schema, parsing
pub mod claude;

// Event builder
pub mod builder;

pub use claude::{
    TOOL_RESULT_MAX_CHARS, TRUNCATION_MARKER, TeamDiscovery, Teammate, discover_team,
    find_session_files, find_team_name, first_metadata_record, locate_session, parse_log_file,
    parse_log_text,
};

pub use error::{Error, Result};
