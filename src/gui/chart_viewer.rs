//! Chart Viewer Widget
//! Lays out either the overlay chart with its legend or the feature grid,
//! sized to the available window area.

use crate::charts::{ChartPlotter, GridChart, OverlayChart};
use egui::RichText;

const CHART_SPACING: f32 = 12.0;
/// Height of a panel title plus its padding inside a grid cell.
const PANEL_HEADER_HEIGHT: f32 = 24.0;
const MIN_PANEL_HEIGHT: f32 = 80.0;

/// What a chart window displays.
#[derive(Debug, Clone)]
pub enum ChartView {
    Overlay(OverlayChart),
    Grid(GridChart),
}

impl ChartView {
    pub fn title(&self) -> &str {
        match self {
            ChartView::Overlay(chart) => &chart.title,
            ChartView::Grid(chart) => &chart.title,
        }
    }

    /// Initial window size: wide for the overlay, larger for the grid.
    pub fn window_size(&self) -> [f32; 2] {
        match self {
            ChartView::Overlay(_) => [1500.0, 800.0],
            ChartView::Grid(_) => [1800.0, 1000.0],
        }
    }
}

/// Draws a [`ChartView`] into the central panel.
pub struct ChartViewer {
    pub view: ChartView,
}

impl ChartViewer {
    pub fn new(view: ChartView) -> Self {
        Self { view }
    }

    pub fn show(&self, ui: &mut egui::Ui) {
        match &self.view {
            ChartView::Overlay(chart) => Self::show_overlay(ui, chart),
            ChartView::Grid(chart) => Self::show_grid(ui, chart),
        }
    }

    fn show_overlay(ui: &mut egui::Ui, chart: &OverlayChart) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&chart.title).size(20.0).strong());
        });
        ui.add_space(CHART_SPACING / 2.0);
        ChartPlotter::draw_legend(ui, chart);
        ui.add_space(CHART_SPACING / 2.0);

        let height = ui.available_height().max(MIN_PANEL_HEIGHT);
        ChartPlotter::draw_overlay_chart(ui, chart, height);
    }

    fn show_grid(ui: &mut egui::Ui, chart: &GridChart) {
        ui.vertical_centered(|ui| {
            ui.label(RichText::new(&chart.title).size(20.0).strong());
            ui.label(RichText::new(&chart.subtitle).size(16.0));
        });
        ui.add_space(CHART_SPACING);

        let (width, height) = Self::panel_size(
            ui.available_width(),
            ui.available_height(),
            chart.shape.rows,
            chart.shape.columns,
        );

        egui::Grid::new("feature_grid")
            .num_columns(chart.shape.columns)
            .spacing([CHART_SPACING, CHART_SPACING])
            .show(ui, |ui| {
                for row in chart.rows() {
                    for panel in row {
                        ChartPlotter::draw_panel(ui, chart, panel, width, height);
                    }
                    ui.end_row();
                }
            });
    }

    /// Plot width and height of one grid cell so that `rows` × `columns`
    /// cells, their titles and the spacing fill the given area.
    fn panel_size(
        avail_width: f32,
        avail_height: f32,
        rows: usize,
        columns: usize,
    ) -> (f32, f32) {
        let rows = rows.max(1) as f32;
        let columns = columns.max(1) as f32;
        let width = (avail_width - CHART_SPACING * (columns - 1.0)) / columns;
        let height =
            (avail_height - CHART_SPACING * (rows - 1.0)) / rows - PANEL_HEADER_HEIGHT;
        (width.max(MIN_PANEL_HEIGHT), height.max(MIN_PANEL_HEIGHT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_size_fills_area() {
        let (w, h) = ChartViewer::panel_size(1224.0, 1036.0, 4, 3);
        assert!((w - 400.0).abs() < 1e-3);
        assert!((h - (1000.0 / 4.0 - PANEL_HEADER_HEIGHT)).abs() < 1e-3);
    }

    #[test]
    fn test_panel_size_has_a_floor() {
        let (w, h) = ChartViewer::panel_size(100.0, 100.0, 4, 3);
        assert_eq!((w, h), (MIN_PANEL_HEIGHT, MIN_PANEL_HEIGHT));
    }
}
