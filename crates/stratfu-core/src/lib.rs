//! # stratfu-core
//!
//! Core library for the stratfu dungeon strategy guides:
//!
//! - [`extract`] - offline conversion of the authored `.xlsx` workbook into
//!   the `dungeons.json` document
//! - [`models`] - the document data model ([`Dungeon`], [`LevelRangeGroup`])
//! - [`api`] - obtaining the document over HTTP or from a bundled file
//! - [`cache`] - the 24-hour persistent document cache
//! - [`store`] - the [`DungeonStore`] accessor consumers query
//!
//! ## Example
//!
//! ```no_run
//! use stratfu_core::{CacheStore, DocumentClient, DocumentSource, DungeonStore};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let client = DocumentClient::new(DocumentSource::Remote(
//!     "https://stratfu.example".to_string(),
//! ))?;
//! let cache = CacheStore::new(std::env::temp_dir().join("stratfu"))?;
//! let mut store = DungeonStore::new(client, cache);
//!
//! store.load().await;
//! for range in store.get_level_ranges() {
//!     println!("{} -> /level/{}", range.display, range.slug);
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod extract;
pub mod models;
pub mod store;
pub mod utils;

// Re-exports for convenience
pub use api::{DocumentClient, DocumentError, DocumentSource};
pub use cache::{CacheStore, CachedDocument};
pub use config::Config;
pub use extract::extract_document;
pub use models::{Dungeon, DungeonDocument, LevelRangeGroup, LevelRangeSummary};
pub use store::{DocumentSnapshot, DungeonStore};
