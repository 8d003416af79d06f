//! Row classification and dungeon accumulation for one sheet.
//!
//! Rows arrive as trimmed string cells. Each row is classified once
//! (`RowKind`) and fed through `SheetParser`, a small accumulator carrying
//! the dungeon under construction plus its pending strategy and tip lists.

use crate::models::Dungeon;
use crate::utils::dedup_preserving_order;

/// First-cell labels marking section-header rows.
const IGNORED_LABELS: [&str; 4] = ["Principale", "Secondaire", "Inutile", "Utile"];

/// First-cell prefixes marking commentary rows.
const IGNORED_PREFIXES: [&str; 2] = ["Intéressant", "Résistances à favoriser"];

/// Column holding the dungeon name on a dungeon row.
const COL_NAME: usize = 0;
/// Column holding the level on a dungeon row.
const COL_LEVEL: usize = 1;
/// Column holding the boss on a dungeon row, or a strategy on a continuation row.
const COL_BOSS: usize = 2;
const COL_STRATEGY: usize = 2;
/// Columns holding tips on a continuation row.
const COL_TIPS: [usize; 2] = [3, 4];

/// What a row means to the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowKind {
    /// Every cell blank: hard separator, finalizes the current dungeon.
    Empty,
    /// Section header or commentary: skipped, does not finalize.
    Ignored,
    /// Starts a new dungeon record.
    DungeonStart,
    /// Strategy/tip material for the current dungeon, if any.
    Continuation,
}

fn cell(row: &[String], idx: usize) -> &str {
    row.get(idx).map(String::as_str).unwrap_or("")
}

fn is_ignored(row: &[String]) -> bool {
    let first = cell(row, COL_NAME);
    IGNORED_PREFIXES.iter().any(|p| first.starts_with(p)) || IGNORED_LABELS.contains(&first)
}

/// Classify one row from its leading cells.
pub fn classify(row: &[String]) -> RowKind {
    if row.iter().all(|c| c.trim().is_empty()) {
        return RowKind::Empty;
    }
    if is_ignored(row) {
        return RowKind::Ignored;
    }
    let level = cell(row, COL_LEVEL);
    if !cell(row, COL_NAME).is_empty() && !level.is_empty() && !level.contains(':') && level != "Boss"
    {
        return RowKind::DungeonStart;
    }
    RowKind::Continuation
}

/// Accumulates dungeons for one sheet.
pub struct SheetParser {
    range_id: String,
    current: Option<Dungeon>,
    pending_strategies: Vec<String>,
    pending_tips: Vec<String>,
    dungeons: Vec<Dungeon>,
}

impl SheetParser {
    pub fn new(range_id: impl Into<String>) -> Self {
        Self {
            range_id: range_id.into(),
            current: None,
            pending_strategies: Vec::new(),
            pending_tips: Vec::new(),
            dungeons: Vec::new(),
        }
    }

    pub fn push_row(&mut self, row: &[String]) {
        match classify(row) {
            RowKind::Empty => {
                self.finalize_current();
                self.pending_strategies.clear();
                self.pending_tips.clear();
            }
            RowKind::Ignored => {}
            RowKind::DungeonStart => {
                self.finalize_current();
                self.pending_strategies.clear();
                self.pending_tips.clear();
                self.current = Some(Dungeon::new(
                    cell(row, COL_NAME),
                    cell(row, COL_LEVEL),
                    cell(row, COL_BOSS),
                    &self.range_id,
                ));
            }
            RowKind::Continuation => {
                let Some(current) = self.current.as_mut() else {
                    return;
                };
                let strategy = cell(row, COL_STRATEGY);
                if !strategy.is_empty() {
                    self.pending_strategies.push(strategy.to_string());
                }
                for idx in COL_TIPS {
                    let tip = cell(row, idx);
                    if !tip.is_empty() {
                        self.pending_tips.push(tip.to_string());
                    }
                }
                current.strategies = dedup_preserving_order(&self.pending_strategies);
                current.tips = dedup_preserving_order(&self.pending_tips);
            }
        }
    }

    /// Finalize any dungeon still in progress and return the sheet's dungeons.
    pub fn finish(mut self) -> Vec<Dungeon> {
        self.finalize_current();
        self.dungeons
    }

    fn finalize_current(&mut self) {
        if let Some(dungeon) = self.current.take() {
            if !dungeon.name.is_empty() {
                self.dungeons.push(dungeon);
            }
        }
    }
}

/// Parse one sheet's rows (trimmed cells) into its dungeon list.
pub fn parse_sheet(rows: &[Vec<String>], range_id: &str) -> Vec<Dungeon> {
    let mut parser = SheetParser::new(range_id);
    for row in rows {
        parser.push_row(row);
    }
    parser.finish()
}
