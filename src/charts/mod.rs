//! Charts module - Chart models, interactive plotting and PNG rendering

mod model;
pub mod plotter;
mod renderer;

pub use model::{
    value_range, ChartError, FeatureSeries, GridChart, GridShape, OverlayChart,
    GRID_COLUMNS, GRID_SAMPLE_LIMIT, OVERLAY_SAMPLE_LIMIT,
};
pub use plotter::ChartPlotter;
pub use renderer::{ChartRenderer, RenderError};
