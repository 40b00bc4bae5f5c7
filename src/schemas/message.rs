use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One requested tool invocation inside an assistant message.
///
/// Invocations without an `id` were never acknowledged by the transport and
/// are skipped by the UI.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolInvocation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub arguments: Value,
}

/// Outcome reported by the tool runner. Exactly two states; the UI maps
/// them 1:1 to a status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultStatus {
    Success,
    Error,
}

/// Returned payload of a tool execution. Transports send either a raw
/// string (which may or may not hold JSON) or pre-parsed structured data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResultContent {
    Text(String),
    Value(Value),
}

/// One tool-result message, as produced upstream when a tool finishes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResultMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub status: ResultStatus,
    pub content: ResultContent,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tool_call_id: Option<String>,
}

/// Transcript envelope: one JSON object per transcript line, tagged by role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "lowercase")]
pub enum ChatMessage {
    User {
        content: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<String>,
    },
    Assistant {
        #[serde(default)]
        content: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        tool_calls: Vec<ToolInvocation>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<String>,
    },
    Tool {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        name: Option<String>,
        status: ResultStatus,
        content: ResultContent,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        tool_call_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        timestamp: Option<String>,
    },
}

impl ChatMessage {
    pub fn role(&self) -> &'static str {
        match self {
            ChatMessage::User { .. } => "user",
            ChatMessage::Assistant { .. } => "assistant",
            ChatMessage::Tool { .. } => "tool",
        }
    }

    pub fn timestamp(&self) -> Option<&str> {
        match self {
            ChatMessage::User { timestamp, .. }
            | ChatMessage::Assistant { timestamp, .. }
            | ChatMessage::Tool { timestamp, .. } => timestamp.as_deref(),
        }
    }

    /// Extract the tool-result payload of a `tool` message.
    pub fn tool_result(&self) -> Option<ToolResultMessage> {
        match self {
            ChatMessage::Tool {
                name,
                status,
                content,
                tool_call_id,
                ..
            } => Some(ToolResultMessage {
                name: name.clone(),
                status: *status,
                content: content.clone(),
                tool_call_id: tool_call_id.clone(),
            }),
            _ => None,
        }
    }
}
