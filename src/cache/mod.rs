//! Day-scoped content cache
//!
//! This module provides the daily cache gate and its persistence store. An
//! entry is valid only on the calendar day it was fetched; on any other day
//! (or when absent or undecodable) the gate falls back to the content source
//! and overwrites the entry wholesale.

mod gate;
mod store;

pub use gate::{freshness, DailyCacheGate, DailyContent, Freshness, DAILY_CONTENT_KEY};
pub use store::{CacheStore, FileStore};
