use serde::{Deserialize, Serialize};

use super::Dungeon;

/// The full document: an ordered list of groups, one per qualifying sheet,
/// in workbook order. Consumers sort for display; the stored document never
/// does.
pub type DungeonDocument = Vec<LevelRangeGroup>;

/// One level-range bucket of dungeons, corresponding 1:1 to a workbook sheet
/// whose name contains a hyphen.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct LevelRangeGroup {
    /// The trimmed sheet name with all whitespace removed, e.g. "51-65".
    pub id: String,
    /// The trimmed sheet name as authored, e.g. "51 - 65".
    pub label: String,
    pub dungeons: Vec<Dungeon>,
}

impl LevelRangeGroup {
    /// Build an empty group from a sheet name, deriving `id` and `label`.
    pub fn from_sheet_name(sheet_name: &str) -> Self {
        let label = sheet_name.trim().to_string();
        let id = label.chars().filter(|c| !c.is_whitespace()).collect();
        Self {
            id,
            label,
            dungeons: Vec::new(),
        }
    }
}

/// A level range as presented in navigation: display label plus URL slug.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct LevelRangeSummary {
    pub display: String,
    pub slug: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_sheet_name_strips_whitespace_for_id() {
        let group = LevelRangeGroup::from_sheet_name("  51 - 65 ");
        assert_eq!(group.id, "51-65");
        assert_eq!(group.label, "51 - 65");
        assert!(group.dungeons.is_empty());
    }

    #[test]
    fn test_from_sheet_name_strips_inner_whitespace() {
        let group = LevelRangeGroup::from_sheet_name("1 -  7");
        assert_eq!(group.id, "1-7");
        assert_eq!(group.label, "1 -  7");
    }
}
