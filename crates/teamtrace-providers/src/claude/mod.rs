pub mod discovery;
pub mod io;
pub mod parser;
pub mod schema;

pub use self::discovery::{
    TeamDiscovery, Teammate, discover_team, find_session_files, locate_session,
};
pub use self::io::{find_team_name, first_metadata_record};
pub use self::parser::{TOOL_RESULT_MAX_CHARS, TRUNCATION_MARKER, parse_log_file, parse_log_text};
pub use self::schema::RecordHeader;
