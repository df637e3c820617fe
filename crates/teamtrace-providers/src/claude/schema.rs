use serde::{Deserialize, Deserializer};
use serde_json::Value;

// NOTE: Only the fields the timeline needs are modeled
//
// Claude Code adds record fields between releases. Everything not listed here
// is ignored, and unknown `type` tags fall into `Unknown` instead of failing the
// line. A record that still fails to decode (e.g. `message` is not a mapping)
// is skipped by the caller, which yields the same result as "no event".

#[derive(Debug, Deserialize, Clone)]
#[serde(tag = "type")]
#[serde(rename_all = "kebab-case")]
pub(crate) enum ClaudeRecord {
    FileHistorySnapshot,
    Progress,
    System(SystemRecord),
    User(MessageRecord),
    Assistant(MessageRecord),
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct SystemRecord {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct MessageRecord {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub message: Option<ChatMessage>,
}

#[derive(Debug, Deserialize, Clone)]
pub(crate) struct ChatMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: MessageContent,
}

/// `message.content` is either a plain string or a list of typed blocks
#[derive(Debug, Clone)]
pub(crate) enum MessageContent {
    Text(String),
    Blocks(Vec<ContentBlock>),
    Other,
}

impl Default for MessageContent {
    fn default() -> Self {
        MessageContent::Text(String::new())
    }
}

impl<'de> Deserialize<'de> for MessageContent {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Value::deserialize(deserializer)? {
            Value::String(text) => MessageContent::Text(text),
            Value::Array(items) => {
                MessageContent::Blocks(items.into_iter().map(ContentBlock::from_value).collect())
            }
            _ => MessageContent::Other,
        })
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type")]
#[serde(rename_all = "snake_case")]
pub(crate) enum ContentBlock {
    Thinking {
        #[serde(default)]
        thinking: String,
    },
    Text {
        #[serde(default)]
        text: String,
    },
    ToolUse {
        #[serde(default)]
        id: String,
        #[serde(default)]
        name: String,
        #[serde(default = "empty_object")]
        input: Value,
    },
    ToolResult {
        #[serde(default)]
        tool_use_id: String,
        #[serde(default)]
        content: Value,
    },
    #[serde(other)]
    Unknown,
}

impl ContentBlock {
    /// Decode one block; a block of the wrong shape is ignored, not fatal
    fn from_value(value: Value) -> Self {
        serde_json::from_value(value).unwrap_or(ContentBlock::Unknown)
    }
}

fn empty_object() -> Value {
    Value::Object(Default::default())
}

/// Team membership fields present on most records
#[derive(Debug, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RecordHeader {
    #[serde(rename = "type", default)]
    pub record_type: Option<String>,
    #[serde(default)]
    pub team_name: Option<String>,
    #[serde(default)]
    pub agent_name: Option<String>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl RecordHeader {
    pub fn is_snapshot(&self) -> bool {
        self.record_type.as_deref() == Some("file-history-snapshot")
    }

    /// Team name, treating an empty string as absent
    pub fn team(&self) -> Option<&str> {
        self.team_name.as_deref().filter(|name| !name.is_empty())
    }
}
