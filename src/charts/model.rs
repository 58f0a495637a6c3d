//! Chart Models
//! Renderer-independent description of the overlay and grid charts.

use crate::data::SampleTable;
use polars::prelude::PolarsError;
use thiserror::Error;

/// Samples per feature drawn on the overlay chart.
pub const OVERLAY_SAMPLE_LIMIT: usize = 2000;
/// Samples per feature drawn in each grid panel.
pub const GRID_SAMPLE_LIMIT: usize = 1000;
/// Panels per grid row.
pub const GRID_COLUMNS: usize = 3;

pub const OVERLAY_OPACITY: f32 = 0.8;
pub const OVERLAY_LEGEND_COLUMNS: usize = 3;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Polars error: {0}")]
    PolarsError(#[from] PolarsError),
    #[error("No features to plot")]
    NoFeatures,
}

/// One named line series.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureSeries {
    pub name: String,
    pub values: Vec<f64>,
}

impl FeatureSeries {
    /// `(index, value)` pairs, skipping samples that cannot be drawn.
    pub fn finite_points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.values
            .iter()
            .enumerate()
            .filter(|(_, v)| v.is_finite())
            .map(|(i, &v)| (i as f64, v))
    }
}

/// Rows and columns of a subplot grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridShape {
    pub rows: usize,
    pub columns: usize,
}

impl GridShape {
    /// Smallest grid with `columns` columns holding `panels` cells.
    pub fn for_panels(panels: usize, columns: usize) -> Self {
        let columns = columns.max(1);
        Self {
            rows: panels.div_ceil(columns),
            columns,
        }
    }

    pub fn cells(&self) -> usize {
        self.rows * self.columns
    }

    /// Row and column of the `index`-th panel, filled row by row.
    pub fn cell(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }
}

/// All normalized features drawn over each other.
#[derive(Debug, Clone)]
pub struct OverlayChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<FeatureSeries>,
    pub opacity: f32,
    pub legend_columns: usize,
}

impl OverlayChart {
    pub fn from_table(normalized: &SampleTable, features: &[&str]) -> Result<Self, ChartError> {
        if features.is_empty() {
            return Err(ChartError::NoFeatures);
        }
        let series = collect_series(normalized, features, OVERLAY_SAMPLE_LIMIT)?;

        Ok(Self {
            title: format!(
                "Znormalizowane cechy ruchowe (pierwsze {} próbek)",
                OVERLAY_SAMPLE_LIMIT
            ),
            x_label: "Numer próbki".to_string(),
            y_label: "Z-score".to_string(),
            series,
            opacity: OVERLAY_OPACITY,
            legend_columns: OVERLAY_LEGEND_COLUMNS,
        })
    }
}

/// One raw feature per panel.
#[derive(Debug, Clone)]
pub struct GridChart {
    pub title: String,
    pub subtitle: String,
    pub shape: GridShape,
    pub panels: Vec<FeatureSeries>,
    pub x_label: String,
    pub y_label: String,
}

impl GridChart {
    /// The grid shape is derived from `features.len()`, so every feature gets a cell.
    pub fn from_table(
        raw: &SampleTable,
        features: &[&str],
        source_name: &str,
    ) -> Result<Self, ChartError> {
        if features.is_empty() {
            return Err(ChartError::NoFeatures);
        }
        let panels = collect_series(raw, features, GRID_SAMPLE_LIMIT)?;

        Ok(Self {
            title: format!("Wykresy cech ruchu (pierwsze {} próbek)", GRID_SAMPLE_LIMIT),
            subtitle: source_name.to_string(),
            shape: GridShape::for_panels(panels.len(), GRID_COLUMNS),
            panels,
            x_label: "Próbka".to_string(),
            y_label: "Wartość".to_string(),
        })
    }

    /// Panels grouped by grid row.
    pub fn rows(&self) -> impl Iterator<Item = &[FeatureSeries]> {
        self.panels.chunks(self.shape.columns)
    }
}

fn collect_series(
    table: &SampleTable,
    features: &[&str],
    limit: usize,
) -> Result<Vec<FeatureSeries>, ChartError> {
    features
        .iter()
        .map(|&name| -> Result<FeatureSeries, ChartError> {
            Ok(FeatureSeries {
                name: name.to_string(),
                values: table.head_values(name, limit)?,
            })
        })
        .collect()
}

/// Min and max of the finite values, padded by 15% (or 0.5 for flat data).
///
/// Falls back to `-1.0..1.0` when there is nothing finite to draw.
pub fn value_range<'a>(series: impl IntoIterator<Item = &'a FeatureSeries>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for s in series {
        for (_, v) in s.finite_points() {
            min = min.min(v);
            max = max.max(v);
        }
    }
    if min > max {
        return (-1.0, 1.0);
    }
    let range = max - min;
    let padding = if range < 1e-6 { 0.5 } else { range * 0.15 };
    (min - padding, max + padding)
}
