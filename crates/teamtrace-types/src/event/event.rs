use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::payload::{EventKind, EventPayload};

/// One normalized unit of the merged timeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "WireEvent", try_from = "WireEvent")]
pub struct Event {
    /// ISO-8601 timestamp copied from the log record (may be empty)
    pub timestamp: String,

    pub agent_id: String,

    pub agent_name: String,

    /// Kind and kind-specific metadata
    pub payload: EventPayload,

    /// Text body; tool results are already truncated
    pub content: String,
}

impl Event {
    pub fn new(
        timestamp: impl Into<String>,
        agent_id: impl Into<String>,
        agent_name: impl Into<String>,
        payload: EventPayload,
        content: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            agent_id: agent_id.into(),
            agent_name: agent_name.into(),
            payload,
            content: content.into(),
        }
    }

    pub fn kind(&self) -> EventKind {
        self.payload.kind()
    }
}

/// Wire shape consumed by the viewer template
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireEvent {
    #[serde(default)]
    timestamp: String,
    #[serde(default)]
    agent_id: String,
    #[serde(default)]
    agent_name: String,
    #[serde(rename = "type")]
    kind: EventKind,
    #[serde(default)]
    content: String,
    #[serde(default)]
    metadata: Value,
}

impl From<Event> for WireEvent {
    fn from(event: Event) -> Self {
        WireEvent {
            kind: event.payload.kind(),
            metadata: event.payload.metadata_value(),
            timestamp: event.timestamp,
            agent_id: event.agent_id,
            agent_name: event.agent_name,
            content: event.content,
        }
    }
}

impl TryFrom<WireEvent> for Event {
    type Error = serde_json::Error;

    fn try_from(wire: WireEvent) -> Result<Self, Self::Error> {
        Ok(Event {
            payload: EventPayload::from_parts(wire.kind, wire.metadata)?,
            timestamp: wire.timestamp,
            agent_id: wire.agent_id,
            agent_name: wire.agent_name,
            content: wire.content,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SendMessageMetadata;

    #[test]
    fn test_wire_shape() {
        let event = Event::new(
            "2025-01-01T00:00:00Z",
            "lead",
            "team-lead",
            EventPayload::SendMessage(SendMessageMetadata {
                message_type: "message".to_string(),
                recipient: "researcher".to_string(),
                summary: "Kickoff".to_string(),
                tool_id: "toolu_9".to_string(),
            }),
            "Start on the parser",
        );

        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "send_message");
        assert_eq!(json["agentId"], "lead");
        assert_eq!(json["agentName"], "team-lead");
        assert_eq!(json["metadata"]["recipient"], "researcher");
        assert_eq!(json["metadata"]["messageType"], "message");
        assert!(json.get("payload").is_none());
    }

    #[test]
    fn test_serialization_round_trip() {
        let event = Event::new(
            "2025-01-01T00:00:00Z",
            "s-2",
            "tester",
            EventPayload::AgentText,
            "Done",
        );

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"metadata\":{}"));
        let deserialized: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, event);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let result = serde_json::from_str::<Event>(r#"{"type":"mystery","content":"x"}"#);
        assert!(result.is_err());
    }
}
