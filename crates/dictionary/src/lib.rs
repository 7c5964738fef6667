mod api;
mod classify;
mod entry;
mod error;
mod merge;
mod random_word;
mod raw;

pub use classify::{classify, Payload, NOT_FOUND_TITLE};
pub use entry::{Definition, Entry, License, Meaning, Phonetic};
pub use error::{DictionaryError, Report, Severity};
pub use merge::{merge_entries, MAX_DEFINITIONS, MAX_SYNONYMS_ANTONYMS};
pub use raw::{RawDefinition, RawEntry, RawLicense, RawMeaning, RawPhonetic};

pub struct Dictionary {
    client: reqwest::Client,
}

impl Dictionary {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }

    /// Fetches every entry for `word` and merges them into one.
    pub async fn get_definition(&self, word: &str) -> Result<Entry, DictionaryError> {
        api::get_definition(&self.client, word).await
    }

    pub async fn get_random_words(
        &self,
        count: usize,
        length: Option<usize>,
    ) -> Result<Vec<String>, DictionaryError> {
        random_word::random_words(&self.client, count, length).await
    }
}
