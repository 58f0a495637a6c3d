//! Statistics Calculator Module
//! Column summaries and z-score transforms.

use statrs::statistics::Statistics;

/// Summary of a single numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStats {
    /// Number of finite values the summary was computed from.
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (N - 1 denominator).
    pub std: f64,
}

impl ColumnStats {
    /// True when the column cannot be standardized (zero or undefined spread).
    pub fn is_degenerate(&self) -> bool {
        !(self.std.is_finite() && self.std > 0.0)
    }
}

pub struct StatsCalculator;

impl StatsCalculator {
    /// Mean and sample standard deviation of the finite entries of `values`.
    ///
    /// NaN and infinite entries (empty cells) are left out. No finite input
    /// yields a NaN mean; fewer than two finite values yield a NaN std.
    pub fn describe(values: &[f64]) -> ColumnStats {
        let finite: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        ColumnStats {
            count: finite.len(),
            mean: finite.iter().mean(),
            std: finite.iter().std_dev(),
        }
    }

    /// Standardize each value against `stats`.
    pub fn z_scores(values: &[f64], stats: &ColumnStats) -> Vec<f64> {
        values.iter().map(|v| (v - stats.mean) / stats.std).collect()
    }
}
