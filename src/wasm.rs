use wasm_bindgen::prelude::*;

use crate::message::ErrorMessage;
use crate::normalizer::ErrorNormalizer;
use crate::types::ErrorPayload;

fn to_js(record: Option<&ErrorMessage>) -> JsValue {
    record
        .and_then(|r| serde_wasm_bindgen::to_value(r).ok())
        .unwrap_or(JsValue::NULL)
}

/// Normalize a raw connection payload. Returns the error record, or `null` when there is
/// nothing to show (including unparseable JSON).
#[wasm_bindgen]
pub fn update_status_from_json(json: &str) -> JsValue {
    let record = ErrorNormalizer::system().classify_json(json);
    to_js(record.as_ref())
}

/// Build an error record directly from its parts, or `null` for empty text.
#[wasm_bindgen]
pub fn format_error_message(message: &str, msg_id: Option<String>) -> JsValue {
    let mut payload = ErrorPayload::new(message);
    if let Some(msg_id) = msg_id {
        payload = payload.with_msg_id(msg_id);
    }
    let record = ErrorNormalizer::system().classify(Some(&payload));
    to_js(record.as_ref())
}
