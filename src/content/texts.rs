//! Bacon Ipsum practice-text API client
//!
//! Fetches short filler paragraphs used as pronunciation practice texts.
//! The API returns a plain JSON array of strings.

use reqwest::Client;

use super::ContentError;

/// Base URL for the Bacon Ipsum API
const BACON_IPSUM_BASE_URL: &str = "https://baconipsum.com/api/";

/// Number of sentences requested per paragraph
const SENTENCES_PER_TEXT: u8 = 3;

/// Client for fetching practice texts
#[derive(Debug, Clone)]
pub struct TextClient {
    /// HTTP client for making requests
    client: Client,
    /// Base URL for the API (overridable for testing)
    base_url: String,
}

impl TextClient {
    /// Creates a new TextClient with the given HTTP client
    pub fn new(client: Client) -> Self {
        Self {
            client,
            base_url: BACON_IPSUM_BASE_URL.to_string(),
        }
    }

    /// Creates a new TextClient with a custom base URL (for testing)
    #[allow(dead_code)]
    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    /// Fetches the practice texts
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - One or more practice paragraphs
    /// * `Err(ContentError)` - If the request, status, or parsing fails
    pub async fn fetch_texts(&self) -> Result<Vec<String>, ContentError> {
        let url = format!(
            "{}?type=all-meat&sentences={}",
            self.base_url, SENTENCES_PER_TEXT
        );

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let texts: Vec<String> = serde_json::from_str(&body)?;

        if texts.is_empty() {
            return Err(ContentError::EmptyPayload("practice texts"));
        }

        Ok(texts)
    }
}
