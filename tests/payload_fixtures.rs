#![expect(
    clippy::unwrap_used,
    clippy::panic,
    reason = "test code uses unwrap/panic for concise assertions"
)]

use chrono::{TimeZone, Utc};
use serde::Deserialize;
use ws_error_normalizer::{
    ConversationLog, ErrorMessage, ErrorNormalizer, ErrorPayload, FixedClock, MessageSink,
    MessageType, Sender,
};

#[derive(Deserialize)]
struct Expected {
    message: String,
    id: Option<String>,
}

#[derive(Deserialize)]
struct Case {
    name: String,
    payload: serde_json::Value,
    expected: Option<Expected>,
}

fn load_cases(filename: &str) -> Vec<Case> {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let path = format!("{manifest_dir}/tests/fixtures/{filename}");
    let data =
        std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("failed to read {path}: {e}"));
    serde_json::from_str(&data).unwrap_or_else(|e| panic!("failed to parse {path}: {e}"))
}

fn fixed_normalizer() -> ErrorNormalizer<FixedClock> {
    ErrorNormalizer::new(FixedClock(
        Utc.with_ymd_and_hms(2024, 11, 5, 9, 15, 0).unwrap(),
    ))
}

const STAMP: &str = "2024-11-05T09:15:00.000Z";

#[test]
fn fixture_payloads_match_expected_records() {
    let normalizer = fixed_normalizer();

    for case in load_cases("ws_payloads.json") {
        let log = ConversationLog::new();
        normalizer.update_status_from_value(&case.payload, &log);

        match case.expected {
            None => assert!(log.is_empty(), "{}: expected no append", case.name),
            Some(expected) => {
                assert_eq!(log.len(), 1, "{}: expected exactly one append", case.name);
                let record = log.last().unwrap();
                assert_eq!(
                    record,
                    ErrorMessage {
                        message: expected.message.clone(),
                        content: expected.message,
                        id: expected.id,
                        kind: MessageType::Error,
                        sender: Sender::Assistant,
                        timestamp: STAMP.to_string(),
                    },
                    "{}: wrong record",
                    case.name
                );
            }
        }
    }
}

#[test]
fn fixture_payloads_serialize_with_front_end_shape() {
    let normalizer = fixed_normalizer();
    let cases = load_cases("ws_payloads.json");
    let case = cases
        .iter()
        .find(|c| c.name == "error_with_translation_id")
        .unwrap();

    let payload = ErrorPayload::from_value(&case.payload);
    let record = normalizer.classify(payload.as_ref()).unwrap();

    assert_eq!(
        record.to_json().unwrap(),
        serde_json::json!({
            "message": "We have a problem!",
            "content": "We have a problem!",
            "id": "..id..",
            "type": "error",
            "sender": "assistant",
            "timestamp": STAMP,
        })
    );

    let plain = cases.iter().find(|c| c.name == "plain_error").unwrap();
    let record = normalizer
        .classify(ErrorPayload::from_value(&plain.payload).as_ref())
        .unwrap();
    let json = record.to_json().unwrap();
    assert!(!json.as_object().unwrap().contains_key("id"));
}

#[test]
fn typed_and_untyped_paths_agree() {
    let normalizer = fixed_normalizer();

    for case in load_cases("ws_payloads.json") {
        let Ok(typed) = serde_json::from_value::<Option<ErrorPayload>>(case.payload.clone())
        else {
            continue;
        };
        let lenient = ErrorPayload::from_value(&case.payload);
        assert_eq!(
            normalizer.classify(typed.as_ref()),
            normalizer.classify(lenient.as_ref()),
            "{}: typed and lenient classification differ",
            case.name
        );
    }
}

#[test]
fn callback_sink_receives_each_error_once() {
    let normalizer = fixed_normalizer();
    let received = std::cell::RefCell::new(Vec::new());
    let on_error = |m: ErrorMessage| received.borrow_mut().push(m);

    normalizer.update_status_when_error_message_present(None, &on_error);
    normalizer.update_status_when_error_message_present(
        Some(&ErrorPayload::new("We have a problem!")),
        &on_error,
    );
    normalizer.update_status_when_error_message_present(
        Some(&ErrorPayload::new("We have a problem!").with_msg_id("..id..")),
        &on_error,
    );

    let received = received.into_inner();
    assert_eq!(received.len(), 2);
    assert_eq!(received[0].id, None);
    assert_eq!(received[1].id.as_deref(), Some("..id.."));
}

#[test]
fn dyn_sink_is_accepted() {
    let log = ConversationLog::new();
    let sink: &dyn MessageSink = &log;
    fixed_normalizer()
        .update_status_when_error_message_present(Some(&ErrorPayload::new("boom")), sink);
    assert_eq!(log.len(), 1);
}
