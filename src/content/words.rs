//! Wordnik word-of-the-day API client
//!
//! Fetches the word of the day from the Wordnik API and parses it into our
//! [`WordOfTheDay`] data structure.

use reqwest::Client;
use serde::Deserialize;

use super::{ContentError, Definition, WordOfTheDay};

/// Base URL for the Wordnik API
const WORDNIK_BASE_URL: &str = "https://api.wordnik.com/v4";

/// Environment variable holding the optional Wordnik API key
const API_KEY_ENV: &str = "WORDNIK_API_KEY";

/// Word-of-the-day response from the Wordnik API
#[derive(Debug, Deserialize)]
struct WordOfTheDayResponse {
    word: String,
    #[serde(default)]
    definitions: Vec<DefinitionRecord>,
    #[serde(default)]
    note: Option<String>,
}

/// A single definition record within the word-of-the-day response
#[derive(Debug, Deserialize)]
struct DefinitionRecord {
    #[serde(default)]
    text: Option<String>,
    #[serde(rename = "partOfSpeech", default)]
    part_of_speech: Option<String>,
}

/// Client for fetching the word of the day from the Wordnik API
#[derive(Debug, Clone)]
pub struct WordClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL for the API (overridable for testing)
    base_url: String,
    /// API key sent as a query parameter when present
    api_key: Option<String>,
}

impl WordClient {
    /// Creates a new WordClient with the given HTTP client.
    ///
    /// The API key is taken from the `WORDNIK_API_KEY` environment variable;
    /// when absent, requests carry no key.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: WORDNIK_BASE_URL.to_string(),
            api_key: std::env::var(API_KEY_ENV).ok(),
        }
    }

    /// Creates a new WordClient with a custom base URL (for testing)
    #[allow(dead_code)]
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: None,
        }
    }

    /// Fetches the word of the day
    ///
    /// # Returns
    /// * `Ok(WordOfTheDay)` - The parsed word record
    /// * `Err(ContentError)` - If the request, status, or parsing fails
    pub async fn fetch_word_of_the_day(&self) -> Result<WordOfTheDay, ContentError> {
        let mut url = format!("{}/words.json/wordOfTheDay", self.base_url);
        if let Some(key) = &self.api_key {
            url.push_str("?api_key=");
            url.push_str(key);
        }

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let text = response.text().await?;
        let record: WordOfTheDayResponse = serde_json::from_str(&text)?;

        parse_response(record)
    }
}

/// Parses the Wordnik response into a WordOfTheDay record
fn parse_response(response: WordOfTheDayResponse) -> Result<WordOfTheDay, ContentError> {
    if response.word.is_empty() {
        return Err(ContentError::EmptyPayload("word of the day"));
    }

    let definitions = response
        .definitions
        .into_iter()
        .filter_map(|record| {
            record.text.map(|text| Definition {
                text,
                part_of_speech: record.part_of_speech,
            })
        })
        .collect();

    Ok(WordOfTheDay {
        word: response.word,
        definitions,
        note: response.note,
    })
}
