use serde_json::Value;

use crate::error::Error;

/// A payload pushed by the server over the live connection.
///
/// Every field is optional: absent keys and JSON `null` both deserialize to `None`.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ErrorPayload {
    /// Human-readable error text. Empty or missing means there is nothing to report.
    #[serde(default)]
    pub message: Option<String>,
    /// Extra metadata attached to the error.
    #[serde(default)]
    pub data: Option<ErrorData>,
}

/// Nested metadata of an [`ErrorPayload`].
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
pub struct ErrorData {
    /// Translation / message id used by the front-end to localize the error.
    #[serde(default)]
    pub msg_id: Option<String>,
}

impl ErrorPayload {
    /// Payload carrying only message text.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            data: None,
        }
    }

    /// Attaches a translation id under `data.msg_id`.
    pub fn with_msg_id(mut self, msg_id: impl Into<String>) -> Self {
        self.data = Some(ErrorData {
            msg_id: Some(msg_id.into()),
        });
        self
    }

    /// Lenient read of an arbitrary JSON value.
    ///
    /// Returns `None` for anything that is not an object. Fields of the wrong type
    /// are dropped instead of failing the whole payload.
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let message = obj.get("message").and_then(Value::as_str).map(String::from);
        let data = obj
            .get("data")
            .and_then(Value::as_object)
            .map(|data| ErrorData {
                msg_id: data.get("msg_id").and_then(Value::as_str).map(String::from),
            });
        Some(Self { message, data })
    }

    /// Parse raw payload text. Only invalid JSON is an error; odd shapes read as `None`.
    pub fn from_json(json: &str) -> Result<Option<Self>, Error> {
        let value: Value = serde_json::from_str(json)?;
        Ok(Self::from_value(&value))
    }

    /// The message text, if present and non-empty.
    pub fn reportable_message(&self) -> Option<&str> {
        self.message.as_deref().filter(|m| !m.is_empty())
    }

    /// The nested `data.msg_id`, if any.
    pub fn msg_id(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.msg_id.as_deref())
    }
}
