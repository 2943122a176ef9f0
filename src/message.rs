use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Kind of chat entry; serialized as the record's `type` key.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MessageType {
    Error,
    Thought,
}

/// Who the entry is attributed to in the chat view.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum_macros::Display,
    strum_macros::EnumString,
    strum_macros::AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Sender {
    User,
    Assistant,
}

/// Canonical entry appended to the conversation log when the server reports an error.
///
/// `content` mirrors `message` so the chat view can render it like any other entry.
/// `id` is omitted from the serialized form when the server sent no `msg_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    pub message: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type")]
    pub kind: MessageType,
    pub sender: Sender,
    /// ISO-8601, UTC, millisecond precision.
    pub timestamp: String,
}

impl ErrorMessage {
    /// Error record from server text; `content` is a verbatim copy of `message`.
    pub fn new(message: &str, id: Option<&str>, timestamp: String) -> Self {
        Self {
            message: message.to_string(),
            content: message.to_string(),
            id: id.map(str::to_string),
            kind: MessageType::Error,
            sender: Sender::Assistant,
            timestamp,
        }
    }

    /// Serialized form handed to the front-end.
    pub fn to_json(&self) -> Result<serde_json::Value, Error> {
        Ok(serde_json::to_value(self)?)
    }
}
