#![cfg_attr(
    not(test),
    deny(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::dbg_macro,
        clippy::print_stdout,
        clippy::print_stderr,
        clippy::panic,
    )
)]

pub mod error;
pub mod message;
pub mod normalizer;
pub mod types;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use error::Error;
pub use message::{ErrorMessage, MessageType, Sender};
pub use normalizer::clock::{Clock, FixedClock, SystemClock, format_timestamp};
pub use normalizer::sink::{ConversationLog, MessageSink, NoopSink};
pub use normalizer::{ErrorNormalizer, update_status_when_error_message_present};
pub use types::{ErrorData, ErrorPayload};
