use thiserror::Error;

#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("no word was given to look up")]
    BlankQuery,
    #[error("the dictionary has no entry for this word")]
    WordNotFound,
    #[error("the dictionary returned no usable definitions")]
    NoDefinitionFound,
    #[error("the dictionary API responded with status {0}")]
    Api(u16),
    #[error("could not reach the dictionary API")]
    Network(#[source] reqwest::Error),
    #[error("could not read the dictionary API response")]
    Parse(#[source] reqwest::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

/// What the presentation layer gets when a lookup fails.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub title: String,
    pub message: String,
    pub severity: Severity,
}

impl DictionaryError {
    /// Turns the failure into a display-ready record for the word that
    /// was searched. Only a blank query is a warning; everything else
    /// is a real error.
    pub fn report(&self, word: &str) -> Report {
        match self {
            DictionaryError::BlankQuery => Report {
                title: "Enter a word".to_owned(),
                message: "Type a word to look up its definition.".to_owned(),
                severity: Severity::Warning,
            },
            DictionaryError::WordNotFound => Report {
                title: "Word not found".to_owned(),
                message: format!("No definition was found for \"{word}\"."),
                severity: Severity::Error,
            },
            DictionaryError::NoDefinitionFound => Report {
                title: "No definitions".to_owned(),
                message: format!("The dictionary had nothing usable for \"{word}\"."),
                severity: Severity::Error,
            },
            DictionaryError::Api(status) => Report {
                title: format!("API error ({status})"),
                message: format!(
                    "The dictionary service failed with status {status}. Try again in a moment."
                ),
                severity: Severity::Error,
            },
            DictionaryError::Network(_) => Report {
                title: "Network error".to_owned(),
                message: "Could not reach the dictionary service. Check your connection."
                    .to_owned(),
                severity: Severity::Error,
            },
            DictionaryError::Parse(_) => Report {
                title: "Unexpected response".to_owned(),
                message: "The dictionary service sent something unreadable.".to_owned(),
                severity: Severity::Error,
            },
        }
    }
}
