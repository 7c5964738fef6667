use serde::Deserialize;

/// One source's view of a word, as returned by the dictionary API.
/// Several of these may describe the same word, one per etymology.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawEntry {
    pub word: String,
    pub phonetic: Option<String>,
    #[serde(default)]
    pub phonetics: Vec<RawPhonetic>,
    pub origin: Option<String>,
    #[serde(default)]
    pub meanings: Vec<RawMeaning>,
    pub license: Option<RawLicense>,
    #[serde(default)]
    pub source_urls: Vec<String>,
}

// An absent field and an empty string are not the same thing here, so
// both stay Option all the way through.
#[derive(Debug, Clone, Deserialize)]
pub struct RawPhonetic {
    pub text: Option<String>,
    pub audio: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawMeaning {
    pub part_of_speech: String,
    #[serde(default)]
    pub definitions: Vec<RawDefinition>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawDefinition {
    pub definition: String,
    pub example: Option<String>,
    #[serde(default)]
    pub synonyms: Vec<String>,
    #[serde(default)]
    pub antonyms: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawLicense {
    pub name: String,
    pub url: String,
}
