#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("sink error: {reason}")]
    Sink { reason: String },

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
