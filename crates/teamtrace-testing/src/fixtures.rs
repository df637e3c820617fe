//! Builders for Claude Code JSONL records.
//!
//! Each builder returns a `serde_json::Value` for one log line. Team fields
//! are added with [`in_team`].

use serde_json::{Value, json};

/// Timestamp `seconds` after 2025-01-01T00:00:00Z, in Claude Code's format
pub fn ts(seconds: u32) -> String {
    format!(
        "2025-01-01T{:02}:{:02}:{:02}.000Z",
        seconds / 3600,
        (seconds / 60) % 60,
        seconds % 60
    )
}

pub fn snapshot() -> Value {
    json!({
        "type": "file-history-snapshot",
        "messageId": "msg-snapshot",
        "snapshot": {"trackedFileBackups": {}, "timestamp": ts(0)},
        "isSnapshotUpdate": false
    })
}

pub fn user_text(timestamp: &str, text: &str) -> Value {
    json!({
        "type": "user",
        "timestamp": timestamp,
        "message": {"role": "user", "content": text}
    })
}

pub fn user_blocks(timestamp: &str, blocks: Value) -> Value {
    json!({
        "type": "user",
        "timestamp": timestamp,
        "message": {"role": "user", "content": blocks}
    })
}

pub fn assistant_blocks(timestamp: &str, blocks: Value) -> Value {
    json!({
        "type": "assistant",
        "timestamp": timestamp,
        "message": {
            "id": "msg_01",
            "type": "message",
            "role": "assistant",
            "model": "claude-sonnet-4-5",
            "content": blocks
        }
    })
}

pub fn assistant_text(timestamp: &str, text: &str) -> Value {
    assistant_blocks(timestamp, json!([{"type": "text", "text": text}]))
}

pub fn tool_use(timestamp: &str, id: &str, name: &str, input: Value) -> Value {
    assistant_blocks(
        timestamp,
        json!([{"type": "tool_use", "id": id, "name": name, "input": input}]),
    )
}

pub fn tool_result(timestamp: &str, tool_use_id: &str, content: Value) -> Value {
    user_blocks(
        timestamp,
        json!([{"type": "tool_result", "tool_use_id": tool_use_id, "content": content}]),
    )
}

pub fn system(timestamp: &str, data: Value) -> Value {
    json!({"type": "system", "timestamp": timestamp, "data": data})
}

pub fn progress(timestamp: &str) -> Value {
    json!({"type": "progress", "timestamp": timestamp, "data": {"type": "hook_progress"}})
}

/// Add team membership fields to a record
pub fn in_team(mut record: Value, team_name: &str, agent_name: &str, session_id: &str) -> Value {
    if let Some(map) = record.as_object_mut() {
        map.insert("teamName".to_string(), json!(team_name));
        map.insert("agentName".to_string(), json!(agent_name));
        map.insert("sessionId".to_string(), json!(session_id));
    }
    record
}

/// Render records as JSONL text
pub fn to_jsonl(records: &[Value]) -> String {
    let mut text = String::new();
    for record in records {
        text.push_str(&record.to_string());
        text.push('\n');
    }
    text
}
