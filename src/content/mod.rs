//! Core data models for daily content
//!
//! This module contains the types shared across the application for
//! representing the combined word-of-the-day and practice-text payload,
//! the provider clients that produce it, and the errors they can raise.

pub mod fetcher;
pub mod texts;
pub mod words;

pub use fetcher::ContentFetcher;
pub use texts::TextClient;
pub use words::WordClient;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The combined daily payload: word-of-the-day records plus text samples.
///
/// Immutable once constructed. Produced only by [`ContentFetcher`] (or by
/// decoding a previously persisted copy); the rest of the application is a
/// pure consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentBundle {
    /// Word-of-the-day records, in provider order. The word provider returns
    /// a single record per day; it is carried as a one-element sequence.
    pub words: Vec<WordOfTheDay>,
    /// Short practice paragraphs, in provider order.
    pub texts: Vec<String>,
}

/// A single word-of-the-day record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordOfTheDay {
    /// The word itself
    pub word: String,
    /// Dictionary definitions for the word
    pub definitions: Vec<Definition>,
    /// Optional usage or etymology note from the provider
    pub note: Option<String>,
}

/// One dictionary definition of a word
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Definition {
    /// Definition text
    pub text: String,
    /// Part of speech, when the provider supplies one
    pub part_of_speech: Option<String>,
}

/// Errors that can occur while fetching daily content
///
/// Any variant means the fetch failed as a unit: no partial bundle is ever
/// produced when one provider call fails.
#[derive(Debug, Error)]
pub enum ContentError {
    /// HTTP request failed (transport error, timeout, or non-2xx status)
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// Failed to parse a provider response body
    #[error("Failed to parse provider response: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Provider returned a well-formed but empty payload
    #[error("Provider returned an empty payload: {0}")]
    EmptyPayload(&'static str),
}

/// Source of daily content bundles.
///
/// The cache gate depends on this seam rather than on the concrete fetcher,
/// so tests can drive it with a canned or failing source.
pub trait ContentSource {
    /// Fetches a complete bundle from the providers.
    fn fetch(&self) -> impl std::future::Future<Output = Result<ContentBundle, ContentError>>;
}
