use std::path::Path;

use serde_json::Value;
use teamtrace_types::*;
use tracing::trace;

use crate::Result;
use crate::builder::EventBuilder;
use crate::claude::schema::*;

/// Tool results longer than this (in characters) are cut
pub const TOOL_RESULT_MAX_CHARS: usize = 10_000;

/// Appended to a cut tool result
pub const TRUNCATION_MARKER: &str = "\n... [truncated]";

/// Tool used by team agents to message each other
const SEND_MESSAGE_TOOL: &str = "SendMessage";

/// Delivery receipts of SendMessage carry this tag; the send itself is already an event
const TEAMMATE_MESSAGE_MARKER: &str = "<teammate-message";

/// Lifecycle notices that add nothing to the timeline
const IGNORED_SYSTEM_NOTICES: [&str; 4] = [
    "idle_notification",
    "shutdown_approved",
    "teammate_terminated",
    "shutdown_request",
];

/// Parse one agent's JSONL log into events
///
/// Only reading the file can fail. Blank and undecodable lines are skipped.
pub fn parse_log_file(path: &Path, agent_id: &str, agent_name: &str) -> Result<Vec<Event>> {
    let bytes = std::fs::read(path)?;
    Ok(parse_log_bytes(&bytes, agent_id, agent_name))
}

/// Parse JSONL text into events (see [`parse_log_file`])
pub fn parse_log_text(text: &str, agent_id: &str, agent_name: &str) -> Vec<Event> {
    parse_log_bytes(text.as_bytes(), agent_id, agent_name)
}

/// Lines are decoded one at a time, so a line that is not UTF-8 only loses itself
fn parse_log_bytes(bytes: &[u8], agent_id: &str, agent_name: &str) -> Vec<Event> {
    let builder = EventBuilder::new(agent_id, agent_name);
    let mut events = Vec::new();

    for (idx, line) in bytes.split(|b| *b == b'\n').enumerate() {
        let line = line.trim_ascii();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_slice::<ClaudeRecord>(line) {
            Ok(record) => normalize_record(record, &builder, &mut events),
            Err(err) => trace!(agent_id, line = idx + 1, error = %err, "skipping record"),
        }
    }

    events
}

/// Convert one record into zero or more events
fn normalize_record(record: ClaudeRecord, builder: &EventBuilder, events: &mut Vec<Event>) {
    match record {
        ClaudeRecord::FileHistorySnapshot | ClaudeRecord::Progress | ClaudeRecord::Unknown => {}

        ClaudeRecord::System(system) => {
            if is_ignored_notice(system.data.as_ref()) {
                return;
            }
            let content = system_content(system.data.as_ref());
            if !content.is_empty() {
                let timestamp = system.timestamp.unwrap_or_default();
                builder.build_and_push(events, &timestamp, EventPayload::SystemEvent, content);
            }
        }

        ClaudeRecord::Assistant(record) => {
            let timestamp = record.timestamp.unwrap_or_default();
            let Some(message) = record.message else {
                return;
            };
            if message.role.as_deref() != Some("assistant") {
                return;
            }
            if let MessageContent::Blocks(blocks) = message.content {
                for block in blocks {
                    normalize_assistant_block(block, &timestamp, builder, events);
                }
            }
        }

        ClaudeRecord::User(record) => {
            let timestamp = record.timestamp.unwrap_or_default();
            let Some(message) = record.message else {
                return;
            };
            if message.role.as_deref() != Some("user") {
                return;
            }
            match message.content {
                MessageContent::Text(text) => {
                    if let Some(text) = human_text(&text) {
                        builder.build_and_push(
                            events,
                            &timestamp,
                            EventPayload::HumanInput,
                            text.to_string(),
                        );
                    }
                }
                MessageContent::Blocks(blocks) => {
                    for block in blocks {
                        normalize_user_block(block, &timestamp, builder, events);
                    }
                }
                MessageContent::Other => {}
            }
        }
    }
}

fn normalize_assistant_block(
    block: ContentBlock,
    timestamp: &str,
    builder: &EventBuilder,
    events: &mut Vec<Event>,
) {
    match block {
        ContentBlock::Thinking { thinking } => {
            if !thinking.is_empty() {
                builder.build_and_push(events, timestamp, EventPayload::AgentThinking, thinking);
            }
        }

        ContentBlock::Text { text } => {
            let text = text.trim();
            if !text.is_empty() {
                builder.build_and_push(events, timestamp, EventPayload::AgentText, text.to_string());
            }
        }

        ContentBlock::ToolUse { id, name, input } => {
            if name == SEND_MESSAGE_TOOL {
                let (metadata, content) = send_message(&input, id);
                builder.build_and_push(
                    events,
                    timestamp,
                    EventPayload::SendMessage(metadata),
                    content,
                );
            } else {
                let content =
                    serde_json::to_string_pretty(&input).unwrap_or_else(|_| input.to_string());
                builder.build_and_push(
                    events,
                    timestamp,
                    EventPayload::ToolCall(ToolCallMetadata {
                        tool_name: name,
                        tool_id: id,
                    }),
                    content,
                );
            }
        }

        // tool_result only counts on the user side
        ContentBlock::ToolResult { .. } | ContentBlock::Unknown => {}
    }
}

fn normalize_user_block(
    block: ContentBlock,
    timestamp: &str,
    builder: &EventBuilder,
    events: &mut Vec<Event>,
) {
    match block {
        ContentBlock::ToolResult {
            tool_use_id,
            content,
        } => {
            let content = truncate_tool_result(tool_result_text(&content));
            builder.build_and_push(
                events,
                timestamp,
                EventPayload::ToolResult(ToolResultMetadata {
                    tool_id: tool_use_id,
                }),
                content,
            );
        }

        ContentBlock::Text { text } => {
            if let Some(text) = human_text(&text) {
                builder.build_and_push(events, timestamp, EventPayload::HumanInput, text.to_string());
            }
        }

        ContentBlock::Thinking { .. } | ContentBlock::ToolUse { .. } | ContentBlock::Unknown => {}
    }
}

/// Build SendMessage metadata, filling in shutdown_response defaults
fn send_message(input: &Value, tool_id: String) -> (SendMessageMetadata, String) {
    let field = |key: &str| {
        input
            .get(key)
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let message_type = input
        .get("type")
        .and_then(Value::as_str)
        .unwrap_or("message")
        .to_string();
    let mut recipient = field("recipient");
    let mut content = field("content");
    let mut summary = field("summary");

    // The response goes back to whoever asked for the shutdown: the lead
    if message_type == "shutdown_response" {
        if recipient.is_empty() {
            recipient = LEAD_AGENT_NAME.to_string();
        }
        // A missing flag approves; any falsy value declines
        let approve = input.get("approve").is_none_or(is_truthy);
        if content.is_empty() {
            content = if approve {
                "Shutdown approved"
            } else {
                "Shutdown declined"
            }
            .to_string();
        }
        if summary.is_empty() {
            summary = if approve {
                "Approved shutdown"
            } else {
                "Declined shutdown"
            }
            .to_string();
        }
    }

    (
        SendMessageMetadata {
            message_type,
            recipient,
            summary,
            tool_id,
        },
        content,
    )
}

/// User-typed text, or None for receipts, markup, and blank text
fn human_text(raw: &str) -> Option<&str> {
    if raw.contains(TEAMMATE_MESSAGE_MARKER) {
        return None;
    }
    let text = raw.trim();
    (!text.is_empty() && !text.starts_with('<')).then_some(text)
}

fn is_ignored_notice(data: Option<&Value>) -> bool {
    data.and_then(|data| data.get("type"))
        .and_then(Value::as_str)
        .is_some_and(|kind| IGNORED_SYSTEM_NOTICES.contains(&kind))
}

/// Text form of a system record's data; empty for null/false/zero/empty values
fn system_content(data: Option<&Value>) -> String {
    match data {
        Some(value) if is_truthy(value) => match value {
            Value::String(text) => text.clone(),
            other => other.to_string(),
        },
        _ => String::new(),
    }
}

/// False for null, false, zero, and empty strings, arrays, and objects
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Flatten a tool_result payload into one string
fn tool_result_text(content: &Value) -> String {
    match content {
        Value::Array(parts) => parts
            .iter()
            .map(|part| match part.get("text") {
                Some(text) => value_text(text),
                None if part.is_object() => part.to_string(),
                None => value_text(part),
            })
            .collect::<Vec<_>>()
            .join("\n"),
        other => value_text(other),
    }
}

/// Cut a tool result to TOOL_RESULT_MAX_CHARS characters plus the marker
pub(crate) fn truncate_tool_result(text: String) -> String {
    match text.char_indices().nth(TOOL_RESULT_MAX_CHARS) {
        Some((cut, _)) => {
            let mut truncated = String::with_capacity(cut + TRUNCATION_MARKER.len());
            truncated.push_str(&text[..cut]);
            truncated.push_str(TRUNCATION_MARKER);
            truncated
        }
        None => text,
    }
}
