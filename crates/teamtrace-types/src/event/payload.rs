use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Event classification, serialized as the `type` field of an event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    AgentThinking,
    AgentText,
    ToolCall,
    SendMessage,
    ToolResult,
    HumanInput,
    SystemEvent,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::AgentThinking => "agent_thinking",
            EventKind::AgentText => "agent_text",
            EventKind::ToolCall => "tool_call",
            EventKind::SendMessage => "send_message",
            EventKind::ToolResult => "tool_result",
            EventKind::HumanInput => "human_input",
            EventKind::SystemEvent => "system_event",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// NOTE: Kind and metadata live in one enum
//
// The renderer reads `event.type` and `event.metadata.*` as two sibling
// fields, but each kind owns a fixed set of metadata keys. Keeping them in a
// single enum makes it impossible to attach `recipient` to a tool_call or
// `toolName` to a send_message. The wire shape is restored in event.rs.

/// Event kind together with its kind-specific metadata
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventPayload {
    AgentThinking,
    AgentText,
    ToolCall(ToolCallMetadata),
    SendMessage(SendMessageMetadata),
    ToolResult(ToolResultMetadata),
    HumanInput,
    SystemEvent,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolCallMetadata {
    #[serde(default)]
    pub tool_name: String,
    #[serde(default)]
    pub tool_id: String,
}

/// Inter-agent message sent through the SendMessage tool
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageMetadata {
    /// "message", "broadcast", "shutdown_request", "shutdown_response", ...
    #[serde(default)]
    pub message_type: String,
    #[serde(default)]
    pub recipient: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tool_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolResultMetadata {
    /// Id of the tool_use block this result answers
    #[serde(default)]
    pub tool_id: String,
}

impl EventPayload {
    pub fn kind(&self) -> EventKind {
        match self {
            EventPayload::AgentThinking => EventKind::AgentThinking,
            EventPayload::AgentText => EventKind::AgentText,
            EventPayload::ToolCall(_) => EventKind::ToolCall,
            EventPayload::SendMessage(_) => EventKind::SendMessage,
            EventPayload::ToolResult(_) => EventKind::ToolResult,
            EventPayload::HumanInput => EventKind::HumanInput,
            EventPayload::SystemEvent => EventKind::SystemEvent,
        }
    }

    /// Metadata object as written to JSON (`{}` for kinds without metadata)
    pub fn metadata_value(&self) -> Value {
        let value = match self {
            EventPayload::ToolCall(meta) => serde_json::to_value(meta),
            EventPayload::SendMessage(meta) => serde_json::to_value(meta),
            EventPayload::ToolResult(meta) => serde_json::to_value(meta),
            _ => return Value::Object(Default::default()),
        };
        // Structs of plain strings always serialize
        value.unwrap_or_else(|_| Value::Object(Default::default()))
    }

    /// Rebuild a payload from its wire form
    pub fn from_parts(kind: EventKind, metadata: Value) -> serde_json::Result<Self> {
        let metadata = match metadata {
            Value::Null => Value::Object(Default::default()),
            other => other,
        };

        Ok(match kind {
            EventKind::AgentThinking => EventPayload::AgentThinking,
            EventKind::AgentText => EventPayload::AgentText,
            EventKind::ToolCall => EventPayload::ToolCall(serde_json::from_value(metadata)?),
            EventKind::SendMessage => EventPayload::SendMessage(serde_json::from_value(metadata)?),
            EventKind::ToolResult => EventPayload::ToolResult(serde_json::from_value(metadata)?),
            EventKind::HumanInput => EventPayload::HumanInput,
            EventKind::SystemEvent => EventPayload::SystemEvent,
        })
    }
}
