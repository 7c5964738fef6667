// https://github.com/dulldesk/words-api/tree/master - amount, first letter, kind (noun or adj) // bad because it sends duplicates
// https://random-word-api.vercel.app/ - amount, length, first letter
// https://random-word.ryanrk.com/ - amount, length(minmax) // bad because the words are weird

use crate::DictionaryError;

const RANDOM_WORD_API_URL: &str = "https://random-word-api.vercel.app/api";

pub(crate) async fn random_words(
    client: &reqwest::Client,
    count: usize,
    length: Option<usize>,
) -> Result<Vec<String>, DictionaryError> {
    let mut request = client.get(RANDOM_WORD_API_URL).query(&[("words", count)]);
    if let Some(length) = length {
        request = request.query(&[("length", length)]);
    }
    let response = request.send().await.map_err(DictionaryError::Network)?;
    response
        .json::<Vec<String>>()
        .await
        .map_err(DictionaryError::Parse)
}
