//! Chart Plotter Module
//! Draws the overlay and grid charts interactively using egui_plot.

use crate::charts::{FeatureSeries, GridChart, OverlayChart};
use egui::{Color32, RichText};
use egui_plot::{Line, Plot, PlotPoints};

/// Series colors, cycled in feature order (matplotlib's tab10).
pub const PALETTE: [Color32; 10] = [
    Color32::from_rgb(31, 119, 180),  // Blue
    Color32::from_rgb(255, 127, 14),  // Orange
    Color32::from_rgb(44, 160, 44),   // Green
    Color32::from_rgb(214, 39, 40),   // Red
    Color32::from_rgb(148, 103, 189), // Purple
    Color32::from_rgb(140, 86, 75),   // Brown
    Color32::from_rgb(227, 119, 194), // Pink
    Color32::from_rgb(127, 127, 127), // Grey
    Color32::from_rgb(188, 189, 34),  // Olive
    Color32::from_rgb(23, 190, 207),  // Cyan
];

/// Single color used by every grid panel.
pub const PANEL_COLOR: Color32 = PALETTE[0];

const LINE_WIDTH: f32 = 1.2;

/// Creates interactive line charts using egui_plot.
pub struct ChartPlotter;

impl ChartPlotter {
    /// Get color for the `index`-th series.
    pub fn series_color(index: usize) -> Color32 {
        PALETTE[index % PALETTE.len()]
    }

    fn plot_points(series: &FeatureSeries) -> PlotPoints {
        series.finite_points().map(|(x, y)| [x, y]).collect()
    }

    /// Legend laid out as a grid with `chart.legend_columns` columns.
    pub fn draw_legend(ui: &mut egui::Ui, chart: &OverlayChart) {
        let columns = chart.legend_columns.max(1);

        egui::Grid::new("overlay_legend")
            .num_columns(columns)
            .spacing([24.0, 4.0])
            .show(ui, |ui| {
                for (i, series) in chart.series.iter().enumerate() {
                    let color = Self::series_color(i).gamma_multiply(chart.opacity);
                    ui.horizontal(|ui| {
                        let (rect, _) =
                            ui.allocate_exact_size(egui::vec2(22.0, 4.0), egui::Sense::hover());
                        ui.painter().rect_filled(rect, 1.0, color);
                        ui.label(RichText::new(&series.name).size(13.0));
                    });
                    if (i + 1) % columns == 0 {
                        ui.end_row();
                    }
                }
            });
    }

    /// Draw every normalized feature on one plot.
    pub fn draw_overlay_chart(ui: &mut egui::Ui, chart: &OverlayChart, height: f32) {
        Plot::new("overlay_chart")
            .height(height)
            .x_axis_label(chart.x_label.as_str())
            .y_axis_label(chart.y_label.as_str())
            .show_grid(true)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                for (i, series) in chart.series.iter().enumerate() {
                    let color = Self::series_color(i).gamma_multiply(chart.opacity);
                    plot_ui.line(
                        Line::new(Self::plot_points(series))
                            .color(color)
                            .width(LINE_WIDTH)
                            .name(&series.name),
                    );
                }
            });
    }

    /// Draw one titled grid panel.
    pub fn draw_panel(
        ui: &mut egui::Ui,
        chart: &GridChart,
        panel: &FeatureSeries,
        width: f32,
        height: f32,
    ) {
        ui.vertical(|ui| {
            ui.set_width(width);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new(&panel.name).size(14.0).strong());
            });

            Plot::new(format!("panel_{}", panel.name))
                .width(width)
                .height(height)
                .x_axis_label(chart.x_label.as_str())
                .y_axis_label(chart.y_label.as_str())
                .show_grid(true)
                .allow_scroll(false)
                .show(ui, |plot_ui| {
                    plot_ui.line(
                        Line::new(Self::plot_points(panel))
                            .color(PANEL_COLOR)
                            .width(LINE_WIDTH)
                            .name(&panel.name),
                    );
                });
        });
    }
}
