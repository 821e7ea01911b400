use thiserror::Error;

use crate::favicon::IconError;

/// Why a status response could not be decoded.
///
/// Any of these aborts the whole decode.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("status response is not valid JSON: {0}")]
    MalformedJson(#[source] serde_json::Error),
    /// A required field is absent. Contains the path of the field, e.g.
    /// `players.sample[2].name`.
    #[error("missing field `{0}`")]
    MissingField(String),
    /// A field is present but holds the wrong kind of JSON value, or a number
    /// out of range. Contains the path of the field.
    #[error("field `{0}` has an unexpected type or value")]
    TypeMismatch(String),
    #[error("invalid favicon: {0}")]
    InvalidIcon(#[from] IconError),
    #[error("entry {index} of `modinfo.modList` is malformed: {reason}")]
    MalformedModEntry { index: usize, reason: ModEntryFault },
}

/// What is wrong with an entry of a mod list.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Error)]
pub enum ModEntryFault {
    #[error("entry is not an object")]
    NotAnObject,
    #[error("`{0}` is missing")]
    Missing(&'static str),
    #[error("`{0}` is not a string")]
    NotAString(&'static str),
    #[error("`{0}` is empty")]
    Empty(&'static str),
}
