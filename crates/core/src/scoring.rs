//! Scoring module - drop bonuses, line clears and level progression
//!
//! Classic rules:
//! - Soft and hard drops add a flat bonus per row descended.
//! - A landing that clears `n` rows scores `base(n) * (level + 1)`, where all
//!   rows cleared by one landing count as a single `n`-line clear.
//! - Every `lines_per_level` cleared lines raise the level by one; the
//!   surplus carries over and the gravity interval is looked up again.

use crate::rules::Rules;

/// Base points for `lines` cleared at once, scaled by level
pub fn line_clear_points(lines: usize, level: u32, table: &[u32; 5]) -> u32 {
    let base = table.get(lines).copied().unwrap_or(0);
    base.saturating_mul(level.saturating_add(1))
}

/// Gravity interval for a level, clamped to the last table entry
pub fn interval_for_level(level: u32, table: &[u32]) -> u32 {
    table
        .get(level as usize)
        .or_else(|| table.last())
        .copied()
        .unwrap_or(0)
}

/// Result of resolving one landing's line clears
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LineClear {
    pub lines: u32,
    pub points: u32,
    pub leveled_up: bool,
}

/// Points, lines and level of one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreKeeper {
    points: u32,
    /// Lines cleared since the last level-up
    lines: u32,
    total_lines: u32,
    level: u32,
    gravity_interval_ms: u32,
    line_scores: [u32; 5],
    drop_points_per_row: u32,
    lines_per_level: u32,
    level_intervals_ms: Vec<u32>,
}

impl ScoreKeeper {
    pub fn new(rules: &Rules) -> Self {
        Self {
            points: 0,
            lines: 0,
            total_lines: 0,
            level: 0,
            gravity_interval_ms: interval_for_level(0, &rules.level_intervals_ms),
            line_scores: rules.line_scores,
            drop_points_per_row: rules.drop_points_per_row,
            lines_per_level: rules.lines_per_level.max(1),
            level_intervals_ms: rules.level_intervals_ms.clone(),
        }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn total_lines(&self) -> u32 {
        self.total_lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn gravity_interval_ms(&self) -> u32 {
        self.gravity_interval_ms
    }

    /// Bonus for `rows` rows of soft or hard drop
    pub fn add_drop(&mut self, rows: u32) {
        let bonus = rows.saturating_mul(self.drop_points_per_row);
        self.points = self.points.saturating_add(bonus);
    }

    /// Score the rows cleared by one landing and advance the level.
    ///
    /// Points use the level in effect before this clear.
    pub fn record_clear(&mut self, lines: usize) -> LineClear {
        if lines == 0 {
            return LineClear::default();
        }

        let points = line_clear_points(lines, self.level, &self.line_scores);
        self.points = self.points.saturating_add(points);

        let lines = lines as u32;
        self.lines += lines;
        self.total_lines = self.total_lines.saturating_add(lines);

        let mut leveled_up = false;
        while self.lines >= self.lines_per_level {
            self.level += 1;
            self.lines -= self.lines_per_level;
            leveled_up = true;
        }
        if leveled_up {
            self.gravity_interval_ms = interval_for_level(self.level, &self.level_intervals_ms);
        }

        LineClear {
            lines,
            points,
            leveled_up,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{LEVEL_INTERVALS_MS, LINE_SCORES};

    #[test]
    fn test_classic_line_scores() {
        // Level 0
        assert_eq!(line_clear_points(1, 0, &LINE_SCORES), 100);
        assert_eq!(line_clear_points(2, 0, &LINE_SCORES), 300);
        assert_eq!(line_clear_points(3, 0, &LINE_SCORES), 500);
        assert_eq!(line_clear_points(4, 0, &LINE_SCORES), 800);

        // Level 5
        assert_eq!(line_clear_points(1, 5, &LINE_SCORES), 100 * 6);
        assert_eq!(line_clear_points(4, 5, &LINE_SCORES), 800 * 6);
    }

    #[test]
    fn test_out_of_table_counts_score_nothing() {
        assert_eq!(line_clear_points(0, 3, &LINE_SCORES), 0);
        assert_eq!(line_clear_points(5, 3, &LINE_SCORES), 0);
    }

    #[test]
    fn test_drop_intervals() {
        assert_eq!(interval_for_level(0, &LEVEL_INTERVALS_MS), 800);
        assert_eq!(interval_for_level(9, &LEVEL_INTERVALS_MS), 100);
        assert_eq!(interval_for_level(20, &LEVEL_INTERVALS_MS), 30);
        assert_eq!(interval_for_level(99, &LEVEL_INTERVALS_MS), 30);
    }

    #[test]
    fn test_drop_bonus() {
        let mut keeper = ScoreKeeper::new(&Rules::default());
        keeper.add_drop(1);
        keeper.add_drop(19);
        assert_eq!(keeper.points(), 20);
    }

    #[test]
    fn test_double_is_not_two_singles() {
        let mut keeper = ScoreKeeper::new(&Rules::default());
        let clear = keeper.record_clear(2);
        assert_eq!(clear.points, 300);
        assert_eq!(keeper.points(), 300);
        assert_eq!(keeper.lines(), 2);
    }

    #[test]
    fn test_level_up_carries_remainder() {
        let mut keeper = ScoreKeeper::new(&Rules::default());
        keeper.record_clear(4);
        keeper.record_clear(4);
        assert_eq!(keeper.lines(), 8);
        assert_eq!(keeper.level(), 0);

        let clear = keeper.record_clear(4);
        assert!(clear.leveled_up);
        assert_eq!(keeper.level(), 1);
        assert_eq!(keeper.lines(), 2);
        assert_eq!(keeper.total_lines(), 12);
        assert_eq!(keeper.gravity_interval_ms(), 720);
    }

    #[test]
    fn test_clear_scores_at_level_before_level_up() {
        let mut keeper = ScoreKeeper::new(&Rules::default());
        keeper.record_clear(4);
        keeper.record_clear(4);
        let before = keeper.points();

        // This tetris reaches level 1, but is still paid at level 0.
        let clear = keeper.record_clear(4);
        assert_eq!(clear.points, 800);
        assert_eq!(keeper.points(), before + 800);

        // The next one is paid at level 1.
        assert_eq!(keeper.record_clear(1).points, 200);
    }

    #[test]
    fn test_zero_lines_is_a_no_op() {
        let mut keeper = ScoreKeeper::new(&Rules::default());
        assert_eq!(keeper.record_clear(0), LineClear::default());
        assert_eq!(keeper.points(), 0);
        assert_eq!(keeper.gravity_interval_ms(), 800);
    }
}
