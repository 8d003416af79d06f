use serde::{Deserialize, Serialize};

use crate::utils::slugify;

/// A single dungeon entry within a level-range group.
///
/// `slug` is always derived from `name`; two dungeons with the same
/// normalized name share a slug and are both kept in sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
#[serde(rename_all = "camelCase")]
pub struct Dungeon {
    pub name: String,
    pub level: String,
    pub boss: String,
    pub slug: String,
    /// Equals the `id` of the owning [`super::LevelRangeGroup`].
    pub level_range: String,
    pub strategies: Vec<String>,
    pub tips: Vec<String>,
}

impl Dungeon {
    /// Start a dungeon record from the three leading cells of a dungeon row.
    pub fn new(name: &str, level: &str, boss: &str, level_range: &str) -> Self {
        Self {
            name: name.to_string(),
            level: level.to_string(),
            boss: boss.to_string(),
            slug: slugify(name),
            level_range: level_range.to_string(),
            strategies: Vec::new(),
            tips: Vec::new(),
        }
    }

    pub fn boss_display(&self) -> &str {
        if self.boss.is_empty() {
            "N/A"
        } else {
            &self.boss
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_derived_from_name() {
        let dungeon = Dungeon::new("Donjon des Forgerons", "105", "Forgefroid", "91-105");
        assert_eq!(dungeon.slug, "donjondesforgerons");
        assert_eq!(dungeon.level_range, "91-105");
        assert!(dungeon.strategies.is_empty());
        assert!(dungeon.tips.is_empty());
    }

    #[test]
    fn test_same_name_same_slug() {
        let a = Dungeon::new("Grotte Hesque", "40", "", "31-50");
        let b = Dungeon::new("grotte  hesque", "45", "", "31-50");
        assert_eq!(a.slug, b.slug);
    }

    #[test]
    fn test_boss_display_falls_back() {
        let mut dungeon = Dungeon::new("Tour du Minotot", "110", "Minotot", "106-120");
        assert_eq!(dungeon.boss_display(), "Minotot");
        dungeon.boss.clear();
        assert_eq!(dungeon.boss_display(), "N/A");
    }

    #[test]
    fn test_serializes_camel_case() {
        let dungeon = Dungeon::new("Donjon Smis", "30", "Moon", "16-30");
        let value = serde_json::to_value(&dungeon).unwrap();
        assert_eq!(value["levelRange"], "16-30");
        assert!(value.get("level_range").is_none());
    }
}
