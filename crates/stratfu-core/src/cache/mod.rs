//! Persistent caching of the dungeon document.
//!
//! This module provides the `CacheStore` for keeping a local copy of
//! `dungeons.json` between runs. The document is stored as one JSON entry
//! under a fixed key and considered expired after 24 hours; it is replaced
//! wholesale on refresh, never patched.

pub mod manager;

pub use manager::{CacheStore, CachedDocument};
