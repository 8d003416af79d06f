//! Data models for the dungeon strategy document.
//!
//! This module contains the structures serialized to and from
//! `dungeons.json`:
//!
//! - `Dungeon`: a named location with boss, strategy notes, and tips
//! - `LevelRangeGroup`: one group of dungeons per qualifying sheet
//! - `LevelRangeSummary`: the `{ display, slug }` pair handed to navigation

pub mod dungeon;
pub mod level_range;

pub use dungeon::Dungeon;
pub use level_range::{DungeonDocument, LevelRangeGroup, LevelRangeSummary};
