//! Combined daily-content fetcher
//!
//! Assembles a [`ContentBundle`] from the two content providers. The two
//! calls run concurrently and are joined before a bundle is produced: if
//! either fails, the whole fetch fails as a unit and nothing is returned.

use std::time::Duration;

use reqwest::Client;

use super::{ContentBundle, ContentError, ContentSource, TextClient, WordClient};

/// Per-request timeout applied to both provider calls
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Fetches the combined word-of-the-day and practice-text bundle
#[derive(Debug, Clone)]
pub struct ContentFetcher {
    words: WordClient,
    texts: TextClient,
}

impl ContentFetcher {
    /// Creates a new ContentFetcher with a shared HTTP client.
    ///
    /// The client carries a request timeout so no provider call can suspend
    /// unboundedly; a timed-out call surfaces as
    /// [`ContentError::RequestFailed`].
    pub fn new() -> Result<Self, ContentError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            words: WordClient::new(client.clone()),
            texts: TextClient::new(client),
        })
    }

    /// Creates a new ContentFetcher from pre-built provider clients (for testing)
    #[allow(dead_code)]
    pub fn with_clients(words: WordClient, texts: TextClient) -> Self {
        Self { words, texts }
    }
}

impl ContentSource for ContentFetcher {
    /// Fetches both provider payloads concurrently and joins them.
    ///
    /// No partial bundle: an error from either call aborts the whole fetch.
    async fn fetch(&self) -> Result<ContentBundle, ContentError> {
        let (word, texts) = tokio::try_join!(
            self.words.fetch_word_of_the_day(),
            self.texts.fetch_texts()
        )?;

        Ok(ContentBundle {
            words: vec![word],
            texts,
        })
    }
}
