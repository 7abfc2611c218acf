//! Daily cache gate
//!
//! Owns the decision of whether persisted content is still valid for the
//! current calendar day. On a hit the persisted bundle is returned without
//! touching the network; on a miss the content source is invoked and the
//! result is persisted before it is returned.

use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};

use super::store::CacheStore;
use crate::content::{ContentBundle, ContentError, ContentSource};

/// Store key holding the serialized entry.
///
/// The stamp date and the content live in one document under this key, so a
/// single write makes the pair visible both-or-neither to a subsequent read.
pub const DAILY_CONTENT_KEY: &str = "daily_content";

/// Whether a persisted entry may be served for the current day
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Freshness {
    /// Entry exists and was fetched today
    Fresh,
    /// Entry is absent or was fetched on an earlier day
    Stale,
}

/// Evaluates a stamp date against today.
///
/// Fresh iff a stamp exists and equals today exactly. There is no tolerance
/// window: validity resets at the local-midnight day boundary, not on a
/// rolling 24-hour window. Pure; no store or network involvement.
pub fn freshness(stamp: Option<NaiveDate>, today: NaiveDate) -> Freshness {
    match stamp {
        Some(date) if date == today => Freshness::Fresh,
        _ => Freshness::Stale,
    }
}

/// Persisted pairing of a content bundle and the day it was fetched
#[derive(Debug, Serialize, Deserialize)]
struct CacheEntry {
    /// Day the content was fetched, never the day it was last read
    stamp_date: NaiveDate,
    /// The cached bundle
    content: ContentBundle,
}

/// A bundle together with the day it was fetched
#[derive(Debug, Clone, PartialEq)]
pub struct DailyContent {
    /// The daily content bundle
    pub bundle: ContentBundle,
    /// Day the bundle was fetched; shown as "Updated on" in the UI
    pub updated_on: NaiveDate,
}

/// Returns the current local calendar day
fn today_local() -> NaiveDate {
    Local::now().date_naive()
}

/// Gate deciding between persisted and freshly fetched daily content
///
/// The persistence store and the content source are passed in at
/// construction. The day source is a plain function so tests can pin the
/// clock; it is only ever read, never mutated.
pub struct DailyCacheGate<S, C> {
    /// Persistence store holding the single cached entry
    store: S,
    /// Fallback content source invoked on a cache miss
    source: C,
    /// Current-day source
    today: fn() -> NaiveDate,
}

impl<S: CacheStore, C: ContentSource> DailyCacheGate<S, C> {
    /// Creates a gate using the local calendar day as its clock
    pub fn new(store: S, source: C) -> Self {
        Self {
            store,
            source,
            today: today_local,
        }
    }

    /// Creates a gate with a custom day source (for testing)
    #[allow(dead_code)]
    pub fn with_clock(store: S, source: C, today: fn() -> NaiveDate) -> Self {
        Self {
            store,
            source,
            today,
        }
    }

    /// Returns today's content, from cache when fresh, otherwise fetched.
    ///
    /// # Behavior
    /// - Reads the persisted entry and compares its stamp date against today;
    ///   on exact equality the cached bundle is returned with no network call.
    /// - An undecodable persisted entry is treated as a miss, never surfaced.
    /// - On a miss the source is fetched; the result is persisted with
    ///   today's stamp before it is returned. A persistence write failure is
    ///   logged and swallowed; the fetched bundle is still returned and the
    ///   cache simply stays stale for the next read.
    /// - A fetch failure is propagated. Nothing is written, and any existing
    ///   stale entry is left in place.
    pub async fn todays_content(&self) -> Result<DailyContent, ContentError> {
        let today = (self.today)();

        if let Some(raw) = self.store.get(DAILY_CONTENT_KEY) {
            match serde_json::from_str::<CacheEntry>(&raw) {
                Ok(entry) if freshness(Some(entry.stamp_date), today) == Freshness::Fresh => {
                    tracing::debug!(stamp = %entry.stamp_date, "serving cached daily content");
                    return Ok(DailyContent {
                        bundle: entry.content,
                        updated_on: entry.stamp_date,
                    });
                }
                Ok(entry) => {
                    tracing::debug!(stamp = %entry.stamp_date, "cached content is stale");
                }
                Err(err) => {
                    tracing::debug!(%err, "cached entry undecodable, treating as miss");
                }
            }
        }

        let bundle = self.source.fetch().await?;

        let entry = CacheEntry {
            stamp_date: today,
            content: bundle,
        };
        match serde_json::to_string(&entry) {
            Ok(json) => {
                if let Err(err) = self.store.set(DAILY_CONTENT_KEY, &json) {
                    tracing::warn!(%err, "failed to persist daily content");
                }
            }
            Err(err) => {
                tracing::warn!(%err, "failed to serialize daily content for the cache");
            }
        }

        Ok(DailyContent {
            bundle: entry.content,
            updated_on: entry.stamp_date,
        })
    }
}
