use crate::models::ElementKind;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown element kind: {name}")]
    UnknownElementKind { name: String },
    #[error("Invalid argument `{name}`: {reason}")]
    InvalidArgument { name: String, reason: String },
    #[error("Malformed {kind} element at index {index}: expected {expected}, found {actual}")]
    MalformedElement {
        index: usize,
        kind: ElementKind,
        expected: String,
        actual: String,
    },
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
