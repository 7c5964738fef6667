use serde_json::Value;

use crate::raw::RawEntry;

/// Title string the API puts on its "nothing here" error object.
pub const NOT_FOUND_TITLE: &str = "No Definitions Found";

/// What a successfully fetched (2xx) response body turned out to be.
#[derive(Debug)]
pub enum Payload {
    /// A non-empty list of entries, ready for merging.
    Entries(Vec<RawEntry>),
    /// The API's own error object saying the word has no definitions.
    ExplicitNotFound,
    /// A list with nothing in it.
    Empty,
    /// Anything else.
    Malformed,
}

/// Classifies a deserialized response body. Pure, no side effects.
pub fn classify(body: Value) -> Payload {
    match body {
        Value::Array(items) => {
            if items.is_empty() {
                return Payload::Empty;
            }
            match serde_json::from_value::<Vec<RawEntry>>(Value::Array(items)) {
                Ok(entries) => Payload::Entries(entries),
                Err(error) => {
                    tracing::warn!(%error, "entry list did not match the expected shape");
                    Payload::Malformed
                }
            }
        }
        other => match other.get("title").and_then(Value::as_str) {
            Some(NOT_FOUND_TITLE) => Payload::ExplicitNotFound,
            _ => Payload::Malformed,
        },
    }
}
