//! dailyword library
//!
//! This module exposes the cache, cli, and content modules for use in
//! integration tests.

pub mod cache;
pub mod cli;
pub mod content;
