pub mod clock;
pub mod sink;

use serde_json::Value;

use crate::message::ErrorMessage;
use crate::normalizer::clock::{Clock, SystemClock};
use crate::normalizer::sink::MessageSink;
use crate::types::ErrorPayload;

/// Turns server-pushed payloads into user-visible error entries.
///
/// Holds nothing but its clock; the log it writes to is passed in per call.
#[derive(Debug, Clone, Default)]
pub struct ErrorNormalizer<C = SystemClock> {
    clock: C,
}

impl ErrorNormalizer<SystemClock> {
    pub fn system() -> Self {
        Self { clock: SystemClock }
    }
}

impl<C: Clock> ErrorNormalizer<C> {
    pub fn new(clock: C) -> Self {
        Self { clock }
    }

    /// Pure classification: `Some` only when the payload carries non-empty message text.
    pub fn classify(&self, payload: Option<&ErrorPayload>) -> Option<ErrorMessage> {
        let payload = payload?;
        let message = payload.reportable_message()?;
        Some(ErrorMessage::new(
            message,
            payload.msg_id(),
            self.clock.timestamp(),
        ))
    }

    /// Classifies raw payload text. Unparseable JSON is nothing to report.
    pub fn classify_json(&self, json: &str) -> Option<ErrorMessage> {
        let payload = match ErrorPayload::from_json(json) {
            Ok(payload) => payload,
            Err(e) => {
                tracing::debug!(error = %e, "ignoring unparseable payload");
                return None;
            }
        };
        self.classify(payload.as_ref())
    }

    /// Appends at most one record to `sink`. Never fails: sink errors are logged and dropped.
    pub fn update_status_when_error_message_present<S>(
        &self,
        payload: Option<&ErrorPayload>,
        sink: &S,
    ) where
        S: MessageSink + ?Sized,
    {
        let Some(record) = self.classify(payload) else {
            tracing::trace!(
                has_payload = payload.is_some(),
                "no error message present in payload"
            );
            return;
        };

        tracing::debug!(
            msg_id = record.id.as_deref(),
            timestamp = %record.timestamp,
            "appending error message to conversation log"
        );
        if let Err(e) = sink.append(record) {
            tracing::warn!(error = %e, "failed to append error message");
        }
    }

    /// Same as [`Self::update_status_when_error_message_present`] for untyped JSON.
    pub fn update_status_from_value<S>(&self, payload: &Value, sink: &S)
    where
        S: MessageSink + ?Sized,
    {
        let payload = ErrorPayload::from_value(payload);
        self.update_status_when_error_message_present(payload.as_ref(), sink);
    }
}

/// Normalizes with the system clock.
pub fn update_status_when_error_message_present<S>(payload: Option<&ErrorPayload>, sink: &S)
where
    S: MessageSink + ?Sized,
{
    ErrorNormalizer::system().update_status_when_error_message_present(payload, sink);
}
