//! Feature Normalizer Module
//! Replaces feature columns by their z-scores in an independent copy of the table.

use crate::data::SampleTable;
use crate::stats::StatsCalculator;
use polars::prelude::*;
use rayon::prelude::*;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessorError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
}

/// Z-score normalization over whole columns.
pub struct FeatureNormalizer;

impl FeatureNormalizer {
    /// Normalize `features` as `(value - mean) / std`, using every row that
    /// holds a finite value. Gaps stay NaN.
    ///
    /// The standard deviation is the sample one (N - 1). Constant columns are
    /// not special-cased: their normalized values come out non-finite.
    /// Columns not listed are carried over unchanged.
    pub fn normalize(
        table: &SampleTable,
        features: &[&str],
    ) -> Result<SampleTable, ProcessorError> {
        let columns = features
            .par_iter()
            .map(|&name| -> Result<(String, Vec<f64>), ProcessorError> {
                let values = table.feature_values(name)?;
                let stats = StatsCalculator::describe(&values);
                if stats.is_degenerate() {
                    log::warn!(
                        "Column '{}' has no spread (std = {}), normalized values will be non-finite",
                        name,
                        stats.std
                    );
                }
                log::debug!("{}: mean = {}, std = {}", name, stats.mean, stats.std);
                Ok((name.to_string(), StatsCalculator::z_scores(&values, &stats)))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(table.with_replaced_columns(columns)?)
    }
}
