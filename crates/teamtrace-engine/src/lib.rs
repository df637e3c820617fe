// Engine module - merges per-agent event streams and assembles the session document
// This layer sits between parsed events (providers) and the CLI

pub mod assembler;
pub mod render;
pub mod timeline;

pub use assembler::{SessionInput, assemble, duration_seconds};
pub use render::{RenderError, SESSION_DATA_PLACEHOLDER, render_html};
pub use timeline::{compare_timestamps, consolidate_agent_text, merge_timelines};
