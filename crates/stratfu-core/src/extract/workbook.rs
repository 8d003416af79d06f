//! Workbook reading: sheet selection and cell normalization.

use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook, Data, Reader, Xlsx};
use tracing::debug;

use super::parser::parse_sheet;
use crate::models::{DungeonDocument, LevelRangeGroup};

/// A hyphen in the sheet name is the sole signal that the sheet holds a
/// level range; everything else (legends, changelogs) is skipped.
pub fn sheet_qualifies(sheet_name: &str) -> bool {
    sheet_name.contains('-')
}

/// Convert the workbook at `path` into the dungeon document.
///
/// Groups appear in workbook sheet order. Any failure to open or read the
/// workbook aborts the whole run.
pub fn extract_document(path: &Path) -> Result<DungeonDocument> {
    let mut workbook: Xlsx<_> = open_workbook(path)
        .with_context(|| format!("Failed to open workbook: {}", path.display()))?;

    let sheet_names = workbook.sheet_names().to_vec();
    let mut document = Vec::new();

    for sheet_name in sheet_names {
        if !sheet_qualifies(&sheet_name) {
            debug!(sheet = %sheet_name, "Skipping sheet without a level range");
            continue;
        }

        let range = workbook
            .worksheet_range(&sheet_name)
            .with_context(|| format!("Failed to read sheet: {}", sheet_name))?;

        let rows: Vec<Vec<String>> = range
            .rows()
            .map(|cells| cells.iter().map(cell_to_string).collect())
            .collect();

        let mut group = LevelRangeGroup::from_sheet_name(&sheet_name);
        group.dungeons = parse_sheet(&rows, &group.id);
        debug!(sheet = %group.label, dungeons = group.dungeons.len(), "Parsed sheet");
        document.push(group);
    }

    Ok(document)
}

/// Render a cell as a trimmed string. Numeric cells holding whole values
/// print without a trailing `.0` so levels read as authored.
fn cell_to_string(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_to_string_normalizes() {
        assert_eq!(cell_to_string(&Data::Empty), "");
        assert_eq!(cell_to_string(&Data::String("  Bouftou  ".into())), "Bouftou");
        assert_eq!(cell_to_string(&Data::Float(13.0)), "13");
        assert_eq!(cell_to_string(&Data::Float(13.5)), "13.5");
        assert_eq!(cell_to_string(&Data::Int(42)), "42");
    }

    #[test]
    fn test_only_hyphenated_sheet_names_qualify() {
        assert!(sheet_qualifies("51 - 65"));
        assert!(sheet_qualifies("1-7"));
        assert!(!sheet_qualifies("Légende"));
        assert!(!sheet_qualifies("Changelog"));
    }

    #[test]
    fn test_missing_workbook_is_an_error() {
        let result = extract_document(Path::new("/nonexistent/stratfu-src.xlsx"));
        assert!(result.is_err());
    }
}
