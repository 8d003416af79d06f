//! Dungeon document store.
//!
//! `DungeonStore` supplies consumers with the dungeon document, abstracting
//! over the document source, a 24-hour persistent cache, and derived lookup
//! views. It exposes the `{ data, is_loading, error }` tri-state: `data`
//! keeps the last successfully loaded document even when a later load
//! fails, `error` records that failure, and `is_loading` is true only while
//! a load or refresh is in flight.
//!
//! The loaded document is a shared immutable snapshot, swapped wholesale on
//! refresh and never mutated in place.

use std::cmp::Ordering;
use std::sync::Arc;

use tracing::{debug, error, info, warn};

use crate::api::{DocumentClient, DocumentError};
use crate::cache::{CacheStore, CachedDocument};
use crate::models::{Dungeon, DungeonDocument, LevelRangeGroup, LevelRangeSummary};
use crate::utils::{contains_ignore_case, numeric_prefix};

/// Shared immutable snapshot of a loaded document.
pub type DocumentSnapshot = Arc<DungeonDocument>;

pub struct DungeonStore {
    client: DocumentClient,
    cache: CacheStore,
    data: Option<DocumentSnapshot>,
    is_loading: bool,
    error: Option<DocumentError>,
}

impl DungeonStore {
    pub fn new(client: DocumentClient, cache: CacheStore) -> Self {
        Self {
            client,
            cache,
            data: None,
            is_loading: false,
            error: None,
        }
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The current document snapshot, if any load has ever succeeded.
    pub fn data(&self) -> Option<DocumentSnapshot> {
        self.data.clone()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn error(&self) -> Option<&DocumentError> {
        self.error.as_ref()
    }

    // =========================================================================
    // Loading
    // =========================================================================

    /// Return the current document, preferring a valid cached entry and
    /// fetching fresh otherwise. On fetch failure the previous snapshot (if
    /// any) is returned and the failure is recorded in `error`.
    ///
    /// Overlapping calls are tolerated: a duplicate fetch writes the same
    /// document and the last cache write wins.
    pub async fn load(&mut self) -> Option<DocumentSnapshot> {
        self.is_loading = true;
        self.error = None;

        let snapshot = match self.cache.load() {
            Ok(Some(entry)) if !entry.is_expired() => {
                debug!(age_minutes = entry.age_minutes(), "Serving dungeon document from cache");
                let snapshot: DocumentSnapshot = Arc::new(entry.data);
                self.data = Some(Arc::clone(&snapshot));
                Some(snapshot)
            }
            Ok(_) => {
                debug!("Cache missing or expired, loading fresh document");
                self.fetch_fresh().await
            }
            Err(e) => {
                warn!(error = %e, "Failed to read document cache");
                self.fetch_fresh().await
            }
        };

        self.is_loading = false;
        snapshot.or_else(|| self.data.clone())
    }

    /// Discard the cached entry, load fresh, and overwrite the cache.
    /// Returns the fresh document, or `None` when the load failed (the
    /// previous snapshot stays in place either way).
    pub async fn refresh(&mut self) -> Option<DocumentSnapshot> {
        self.is_loading = true;
        self.error = None;

        if let Err(e) = self.cache.clear() {
            warn!(error = %e, "Failed to discard cached document");
        }

        let snapshot = self.fetch_fresh().await;
        self.is_loading = false;
        snapshot
    }

    async fn fetch_fresh(&mut self) -> Option<DocumentSnapshot> {
        match self.client.fetch_document().await {
            Ok(fresh) => {
                let entry = CachedDocument::new(fresh);
                if let Err(e) = self.cache.save(&entry) {
                    warn!(error = %e, "Failed to write document cache");
                }
                let snapshot: DocumentSnapshot = Arc::new(entry.data);
                self.data = Some(Arc::clone(&snapshot));
                info!(groups = snapshot.len(), "Dungeon document loaded");
                Some(snapshot)
            }
            Err(e) => {
                error!(error = %e, "Failed to load dungeon document");
                self.error = Some(e);
                None
            }
        }
    }

    // =========================================================================
    // Lookups
    // =========================================================================

    /// Level ranges for navigation, sorted ascending by numeric prefix.
    pub fn get_level_ranges(&self) -> Vec<LevelRangeSummary> {
        self.data
            .as_deref()
            .map(|doc| level_ranges(doc))
            .unwrap_or_default()
    }

    /// Dungeons for one level range, or every dungeon flattened when no
    /// range is given.
    pub fn get_dungeons_by_level_range(&self, level_range: Option<&str>) -> Vec<Dungeon> {
        self.data
            .as_deref()
            .map(|doc| dungeons_by_level_range(doc, level_range))
            .unwrap_or_default()
    }

    /// Dungeons matching a search query.
    pub fn search(&self, query: &str) -> Vec<Dungeon> {
        self.data
            .as_deref()
            .map(|doc| search_dungeons(doc, query))
            .unwrap_or_default()
    }
}

/// `{ display, slug }` per group, sorted ascending by the numeric value
/// preceding the first hyphen in the label. Labels without a numeric prefix
/// compare as NaN; their relative order is left unspecified rather than
/// patched up.
pub fn level_ranges(document: &[LevelRangeGroup]) -> Vec<LevelRangeSummary> {
    let mut ranges: Vec<LevelRangeSummary> = document
        .iter()
        .map(|group| LevelRangeSummary {
            display: group.label.clone(),
            slug: group.id.clone(),
        })
        .collect();

    ranges.sort_by(|a, b| {
        numeric_prefix(&a.display)
            .partial_cmp(&numeric_prefix(&b.display))
            .unwrap_or(Ordering::Equal)
    });
    ranges
}

/// The dungeons of the group whose `id` matches exactly, or every dungeon in
/// document order when no range is given. A miss warns and yields an empty
/// list.
pub fn dungeons_by_level_range(
    document: &[LevelRangeGroup],
    level_range: Option<&str>,
) -> Vec<Dungeon> {
    match level_range {
        None => document
            .iter()
            .flat_map(|group| group.dungeons.iter().cloned())
            .collect(),
        Some(id) => match document.iter().find(|group| group.id == id) {
            Some(group) => group.dungeons.clone(),
            None => {
                warn!(level_range = %id, "No dungeons found for level range");
                Vec::new()
            }
        },
    }
}

/// Substring search across the flattened document: case-insensitive on
/// dungeon name and boss, case-sensitive on the range id. A blank query
/// matches nothing.
pub fn search_dungeons(document: &[LevelRangeGroup], query: &str) -> Vec<Dungeon> {
    let term = query.trim().to_lowercase();
    if term.is_empty() {
        return Vec::new();
    }

    document
        .iter()
        .flat_map(|group| group.dungeons.iter())
        .filter(|d| {
            contains_ignore_case(&d.name, &term)
                || contains_ignore_case(&d.boss, &term)
                || d.level_range.contains(&term)
        })
        .cloned()
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
