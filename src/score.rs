//! Scoring: per-sweep doubling multiplier and the cumulative total

/// What a single sweep call removed and earned.
///
/// The multiplier belongs to one sweep invocation: it starts at 1, each
/// cleared row earns `multiplier * 10`, then the multiplier doubles. Clearing
/// k rows in one call therefore earns 10 + 20 + 40 + ... = 10 * (2^k - 1),
/// so multi-row clears pay super-linearly without any combo state living
/// outside the call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepResult {
    /// Rows removed by this sweep
    pub rows: u32,
    /// Points earned by this sweep
    pub points: u32,
    multiplier: u32,
}

impl Default for SweepResult {
    fn default() -> Self {
        Self::new()
    }
}

impl SweepResult {
    pub fn new() -> Self {
        Self {
            rows: 0,
            points: 0,
            multiplier: 1,
        }
    }

    /// Record one cleared row
    pub fn add_row(&mut self) {
        self.rows += 1;
        self.points += self.multiplier * 10;
        self.multiplier *= 2;
    }
}

/// Cumulative score for the current game
///
/// Persists across spawns; zeroed when a failed spawn restarts the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    pub points: u64,
    pub lines: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold a sweep's earnings into the running total
    pub fn apply(&mut self, sweep: SweepResult) {
        self.points += u64::from(sweep.points);
        self.lines += sweep.rows;
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_row_is_ten_points() {
        let mut result = SweepResult::new();
        result.add_row();
        assert_eq!(result.points, 10);
        assert_eq!(result.rows, 1);
    }

    #[test]
    fn multiplier_doubles_within_one_sweep() {
        let mut result = SweepResult::new();
        for _ in 0..4 {
            result.add_row();
        }
        assert_eq!(result.points, 10 + 20 + 40 + 80);
    }

    #[test]
    fn multiplier_resets_between_sweeps() {
        let mut first = SweepResult::new();
        first.add_row();
        first.add_row();
        let mut second = SweepResult::new();
        second.add_row();
        assert_eq!(second.points, 10);
    }

    #[test]
    fn score_accumulates_and_resets() {
        let mut score = Score::new();
        let mut sweep = SweepResult::new();
        sweep.add_row();
        sweep.add_row();
        score.apply(sweep);
        score.apply(sweep);
        assert_eq!(score.points, 60);
        assert_eq!(score.lines, 4);

        score.reset();
        assert_eq!(score.points, 0);
        assert_eq!(score.lines, 0);
    }
}
