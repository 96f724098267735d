//! HTTP implementations of the two lookups
//!
//! Blocking GETs against the fixed public endpoints. Both services answer
//! with JSON arrays; only the first element matters.

use reqwest::StatusCode;
use reqwest::Url;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::core::Meaning;
use crate::lookup::{LookupError, WordLookup};

const RANDOM_WORD_API: &str = "https://random-word-api.herokuapp.com/word";
const DICTIONARY_API: &str = "https://api.dictionaryapi.dev/api/v2/entries/en/";

/// Client identifier sent with every request.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Top-level dictionary entry; everything but `meanings` is ignored.
#[derive(Debug, Deserialize)]
struct DictionaryEntry {
    meanings: Vec<Meaning>,
}

/// The production `WordLookup` over the public HTTP services.
pub struct HttpWordLookup {
    client: Client,
    random_word_url: Url,
    dictionary_url: Url,
}

impl HttpWordLookup {
    /// Build the client with its fixed identifier header.
    ///
    /// # Errors
    ///
    /// Fails if the underlying HTTP client cannot be constructed.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            // Static endpoints; parsing them cannot fail.
            random_word_url: Url::parse(RANDOM_WORD_API).expect("valid endpoint URL"),
            dictionary_url: Url::parse(DICTIONARY_API).expect("valid endpoint URL"),
        })
    }

    /// Dictionary URL for a candidate, percent-encoded as a path segment.
    fn definition_url(&self, word: &str) -> Url {
        let mut url = self.dictionary_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(word);
        }
        url
    }
}

impl WordLookup for HttpWordLookup {
    fn random_word(&self) -> Result<String, LookupError> {
        let response = self
            .client
            .get(self.random_word_url.clone())
            .send()
            .map_err(LookupError::transport)?;

        let status = response.status();
        if !status.is_success() {
            log::debug!("random-word service answered {status}");
            return Err(LookupError::Status(status.as_u16()));
        }

        let words: Vec<String> = response.json().map_err(LookupError::transport)?;
        words
            .into_iter()
            .next()
            .ok_or_else(|| LookupError::transport("empty word list in response"))
    }

    fn definitions(&self, word: &str) -> Result<Option<Vec<Meaning>>, LookupError> {
        let response = self
            .client
            .get(self.definition_url(word))
            .send()
            .map_err(LookupError::transport)?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            // The dictionary simply has no entry for this candidate.
            return Ok(None);
        }
        if !status.is_success() {
            log::debug!("dictionary service answered {status}");
            return Err(LookupError::Status(status.as_u16()));
        }

        let entries: Vec<DictionaryEntry> = response.json().map_err(LookupError::transport)?;
        Ok(entries.into_iter().next().map(|entry| entry.meanings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn definition_url_appends_the_word() {
        let lookup = HttpWordLookup::new().unwrap();
        assert_eq!(
            lookup.definition_url("apple").as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/apple"
        );
    }

    #[test]
    fn definition_url_percent_encodes() {
        let lookup = HttpWordLookup::new().unwrap();
        assert_eq!(
            lookup.definition_url("ice cream").as_str(),
            "https://api.dictionaryapi.dev/api/v2/entries/en/ice%20cream"
        );
    }

    #[test]
    fn dictionary_payload_parses_first_entry() {
        let payload = r#"[
            {
                "word": "apple",
                "phonetic": "/ˈæp.əl/",
                "meanings": [
                    {
                        "partOfSpeech": "noun",
                        "definitions": [
                            {
                                "definition": "A common, round fruit.",
                                "example": "An apple a day."
                            },
                            { "definition": "A tree of the genus Malus." }
                        ]
                    }
                ]
            }
        ]"#;

        let entries: Vec<DictionaryEntry> = serde_json::from_str(payload).unwrap();
        let meanings = &entries[0].meanings;
        assert_eq!(meanings.len(), 1);
        assert_eq!(meanings[0].part_of_speech, "noun");
        assert_eq!(meanings[0].definitions.len(), 2);
        assert_eq!(
            meanings[0].definitions[0].example.as_deref(),
            Some("An apple a day.")
        );
        assert_eq!(meanings[0].definitions[1].example, None);
    }

    #[test]
    fn random_word_payload_is_an_array() {
        let words: Vec<String> = serde_json::from_str(r#"["banana"]"#).unwrap();
        assert_eq!(words.first().map(String::as_str), Some("banana"));
    }
}
