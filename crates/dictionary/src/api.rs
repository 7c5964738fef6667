use serde_json::Value;

use crate::classify::{classify, Payload};
use crate::entry::Entry;
use crate::error::DictionaryError;
use crate::merge::merge_entries;

const DICTIONARY_API_URL: &str = "https://api.dictionaryapi.dev/api/v2/entries/en";

/// One fetch per lookup, no retries. The status line is classified
/// first; only a 2xx body is parsed and handed to the merge pipeline.
pub(crate) async fn get_definition(
    client: &reqwest::Client,
    word: &str,
) -> Result<Entry, DictionaryError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(DictionaryError::BlankQuery);
    }
    tracing::debug!(word, "looking up definition");
    let response = client
        .get(format!("{DICTIONARY_API_URL}/{word}"))
        .send()
        .await
        .map_err(DictionaryError::Network)?;
    let status = response.status();
    if let Some(error) = classify_status(status) {
        tracing::warn!(word, status = status.as_u16(), "dictionary API failed");
        return Err(error);
    }
    let body: Value = response.json().await.map_err(DictionaryError::Parse)?;
    match classify(body) {
        Payload::Entries(entries) => Ok(merge_entries(entries)),
        Payload::ExplicitNotFound => Err(DictionaryError::WordNotFound),
        Payload::Empty | Payload::Malformed => Err(DictionaryError::NoDefinitionFound),
    }
}

/// 404 means the word does not exist; any other non-2xx status is a
/// generic API failure carrying the numeric status.
fn classify_status(status: reqwest::StatusCode) -> Option<DictionaryError> {
    if status == reqwest::StatusCode::NOT_FOUND {
        Some(DictionaryError::WordNotFound)
    } else if !status.is_success() {
        Some(DictionaryError::Api(status.as_u16()))
    } else {
        None
    }
}
