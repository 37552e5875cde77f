//! Difficulty table and controller knobs.
//!
//! - `DifficultySettings`: fixed per-level record for difficulties 1..=8.
//! - `CutCfg`: attempt budgets and distances used by the controller, validator,
//!   splitter and compensation layer.

/// Lowest supported difficulty.
pub const MIN_DIFFICULTY: u8 = 1;
/// Highest supported difficulty.
pub const MAX_DIFFICULTY: u8 = 8;

/// Per-difficulty tuning.
///
/// Invariant: `target_cut_count` strictly increases with difficulty.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DifficultySettings {
    pub target_cut_count: usize,
    /// Chance that the first cut is forced through the middle of the shape.
    pub center_probability: f64,
    /// Whether early cuts must pass near the middle of the shape.
    pub use_center_cut: bool,
}

const fn level(
    target_cut_count: usize,
    center_probability: f64,
    use_center_cut: bool,
) -> DifficultySettings {
    DifficultySettings {
        target_cut_count,
        center_probability,
        use_center_cut,
    }
}

static DIFFICULTY_TABLE: [DifficultySettings; 8] = [
    level(1, 1.0, true),
    level(2, 1.0, true),
    level(3, 1.0, true),
    level(4, 0.8, true),
    level(6, 0.7, true),
    level(8, 0.6, true),
    level(11, 0.0, false),
    level(14, 0.0, false),
];

/// Settings for `difficulty`, or `None` outside `1..=8`.
pub fn settings_for(difficulty: u8) -> Option<&'static DifficultySettings> {
    if difficulty < MIN_DIFFICULTY {
        return None;
    }
    DIFFICULTY_TABLE.get(usize::from(difficulty - MIN_DIFFICULTY))
}

/// Controller configuration (budgets and distances).
#[derive(Clone, Copy, Debug)]
pub struct CutCfg {
    /// Endpoint distance below which two cuts count as coincident.
    pub min_cut_distance: f64,
    /// Strategy proposals per cut slot before generation stops.
    pub attempts_per_cut: usize,
    /// Slack for the "passes near the middle" rule.
    pub center_threshold: f64,
    /// Re-examination depth for fragments produced by one cut.
    pub max_split_depth: usize,
    /// Extra lines synthesized per compensation round.
    pub compensation_lines_per_round: usize,
    /// Compensation rounds when the target cut count is high.
    pub compensation_rounds_high: usize,
    /// Compensation rounds otherwise.
    pub compensation_rounds_low: usize,
    /// Target cut count at which a difficulty counts as high.
    pub high_difficulty_cuts: usize,
}

impl Default for CutCfg {
    fn default() -> Self {
        Self {
            min_cut_distance: 15.0,
            attempts_per_cut: 10,
            center_threshold: 100.0,
            max_split_depth: 3,
            compensation_lines_per_round: 3,
            compensation_rounds_high: 5,
            compensation_rounds_low: 3,
            high_difficulty_cuts: 7,
        }
    }
}

impl CutCfg {
    /// Compensation round cap for a given target cut count.
    #[inline]
    pub fn compensation_rounds(&self, target_cut_count: usize) -> usize {
        if target_cut_count >= self.high_difficulty_cuts {
            self.compensation_rounds_high
        } else {
            self.compensation_rounds_low
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_is_exhaustive_and_strictly_increasing() {
        assert!(settings_for(0).is_none());
        assert!(settings_for(9).is_none());
        let counts: Vec<usize> = (MIN_DIFFICULTY..=MAX_DIFFICULTY)
            .map(|d| settings_for(d).unwrap().target_cut_count)
            .collect();
        assert_eq!(counts, vec![1, 2, 3, 4, 6, 8, 11, 14]);
        assert!(counts.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn compensation_rounds_split_at_high_threshold() {
        let cfg = CutCfg::default();
        assert_eq!(cfg.compensation_rounds(6), 3);
        assert_eq!(cfg.compensation_rounds(8), 5);
    }
}
