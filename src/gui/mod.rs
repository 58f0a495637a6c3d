//! GUI module - Interactive chart window

mod app;
mod chart_viewer;

pub use app::{ChartWindow, GuiError};
pub use chart_viewer::{ChartView, ChartViewer};
