use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::models::DungeonDocument;

/// Consider the cached document expired after 24 hours.
/// Content updates are infrequent; a day bounds staleness without
/// refetching on every page visit.
const CACHE_VALIDITY_HOURS: i64 = 24;

/// Storage key for the document entry. There is exactly one entry; a new
/// document overwrites it.
const DOCUMENT_KEY: &str = "dungeons";

/// The stored shape: the document plus its write time as epoch milliseconds,
/// matching the `{ data, timestamp }` entry consumers expect on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CachedDocument {
    pub data: DungeonDocument,
    #[serde(rename = "timestamp", with = "chrono::serde::ts_milliseconds")]
    pub cached_at: DateTime<Utc>,
}

impl CachedDocument {
    pub fn new(data: DungeonDocument) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    /// An entry is valid while strictly younger than the validity window.
    pub fn is_expired(&self) -> bool {
        Utc::now() - self.cached_at >= Duration::hours(CACHE_VALIDITY_HOURS)
    }

    pub fn age_minutes(&self) -> i64 {
        (Utc::now() - self.cached_at).num_minutes()
    }
}

pub struct CacheStore {
    cache_dir: PathBuf,
}

impl CacheStore {
    pub fn new(cache_dir: PathBuf) -> Result<Self> {
        std::fs::create_dir_all(&cache_dir)?;
        Ok(Self { cache_dir })
    }

    fn entry_path(&self) -> PathBuf {
        self.cache_dir.join(format!("{}.json", DOCUMENT_KEY))
    }

    /// Read the stored entry, if any. Expiry is the caller's decision so a
    /// stale entry can still be inspected; it is only overwritten by the
    /// next save.
    pub fn load(&self) -> Result<Option<CachedDocument>> {
        let path = self.entry_path();
        if !path.exists() {
            return Ok(None);
        }

        let contents = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read cache file: {}", path.display()))?;

        let cached: CachedDocument = serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse cache file: {}", path.display()))?;

        Ok(Some(cached))
    }

    pub fn save(&self, entry: &CachedDocument) -> Result<()> {
        let path = self.entry_path();
        let contents = serde_json::to_string_pretty(entry)?;
        std::fs::write(&path, contents)?;
        Ok(())
    }

    /// Discard the stored entry. Missing entries are not an error.
    pub fn clear(&self) -> Result<()> {
        let path = self.entry_path();
        if path.exists() {
            std::fs::remove_file(&path)
                .with_context(|| format!("Failed to remove cache file: {}", path.display()))?;
        }
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================
