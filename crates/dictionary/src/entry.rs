/// The single merged result for one lookup. Built once by the merge
/// pipeline and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub word: String,
    pub phonetic: Option<String>,
    pub phonetics: Vec<Phonetic>,
    pub origin: Option<String>,
    pub meanings: Vec<Meaning>,
    pub license: License,
    pub source_urls: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Phonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

/// All definitions for one part of speech, folded together across
/// every entry the API returned for the word. The API emits open-ended
/// categories ("proper noun", "particle"), so this stays a string.
#[derive(Debug, Clone, PartialEq)]
pub struct Meaning {
    pub part_of_speech: String,
    pub definitions: Vec<Definition>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Definition {
    pub definition: String,
    pub example: Option<String>,
    pub synonyms: Vec<String>,
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct License {
    pub name: String,
    pub url: String,
}
