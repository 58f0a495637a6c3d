//! Static Chart Renderer
//! Writes the overlay and grid charts to PNG files with plotters.
//!
//! Layout mirrors the interactive window:
//! - Overlay: one chart, every feature as a translucent line, legend top right
//! - Grid: two-line title across the top, then one captioned panel per feature

use crate::charts::plotter::{ChartPlotter, PANEL_COLOR};
use crate::charts::{value_range, FeatureSeries, GridChart, GridShape, OverlayChart};
use egui::Color32;
use plotters::backend::BitMapBackend;
use plotters::chart::ChartBuilder;
use plotters::coord::Shift;
use plotters::drawing::{DrawingArea, DrawingAreaErrorKind, IntoDrawingArea};
use plotters::element::{PathElement, Rectangle, Text};
use plotters::series::LineSeries;
use plotters::style::colors::{BLACK, WHITE};
use plotters::style::text_anchor::{HPos, Pos, VPos};
use plotters::style::{Color, IntoFont, RGBColor};
use std::path::Path;
use thiserror::Error;

const OVERLAY_SIZE: (u32, u32) = (1500, 800);
const GRID_SIZE: (u32, u32) = (1800, 1000);

const FONT_SIZE_MAIN_TITLE: u32 = 28;
const FONT_SIZE_SUBTITLE: u32 = 20;
const FONT_SIZE_CHART_TITLE: u32 = 24;
const FONT_SIZE_PANEL_TITLE: u32 = 18;
const FONT_SIZE_AXIS_LABEL: u32 = 14;
const FONT_SIZE_LEGEND: u32 = 14;

/// Legend entry size in pixels (line sample plus name).
const LEGEND_CELL: (i32, i32) = (110, 22);
const LEGEND_PADDING: i32 = 8;
const LEGEND_TOP: i32 = 70;
const LEGEND_RIGHT_INSET: i32 = 30;

/// Vertical space reserved for the grid title and subtitle.
const GRID_TITLE_AREA: u32 = 80;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to draw chart: {0}")]
    Draw(String),
}

impl<E: std::error::Error + Send + Sync> From<DrawingAreaErrorKind<E>> for RenderError {
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        RenderError::Draw(err.to_string())
    }
}

/// Legend grid shape and its pixel corners on the overlay canvas.
fn legend_rect(count: usize, columns: usize) -> (GridShape, (i32, i32), (i32, i32)) {
    let shape = GridShape::for_panels(count, columns.min(count).max(1));
    let width = shape.columns as i32 * LEGEND_CELL.0 + 2 * LEGEND_PADDING;
    let height = shape.rows as i32 * LEGEND_CELL.1 + 2 * LEGEND_PADDING;
    let x0 = OVERLAY_SIZE.0 as i32 - LEGEND_RIGHT_INSET - width;
    (shape, (x0, LEGEND_TOP), (x0 + width, LEGEND_TOP + height))
}

fn to_rgb(color: Color32) -> RGBColor {
    RGBColor(color.r(), color.g(), color.b())
}

/// Last sample index across `series`, at least 1 so the x range is never empty.
fn x_extent<'a>(series: impl IntoIterator<Item = &'a FeatureSeries>) -> f64 {
    let longest = series.into_iter().map(|s| s.values.len()).max().unwrap_or(0);
    (longest.saturating_sub(1)).max(1) as f64
}

pub struct ChartRenderer;

impl ChartRenderer {
    /// Render the overlay chart to a PNG file.
    pub fn render_overlay_png(chart: &OverlayChart, path: &Path) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, OVERLAY_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let (y_min, y_max) = value_range(&chart.series);
        let mut ctx = ChartBuilder::on(&root)
            .caption(&chart.title, ("sans-serif", FONT_SIZE_CHART_TITLE))
            .margin(15)
            .x_label_area_size(50)
            .y_label_area_size(60)
            .build_cartesian_2d(0f64..x_extent(&chart.series), y_min..y_max)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
            .draw()?;

        for (i, series) in chart.series.iter().enumerate() {
            let color = to_rgb(ChartPlotter::series_color(i));
            let style = color.mix(f64::from(chart.opacity)).stroke_width(1);
            ctx.draw_series(LineSeries::new(series.finite_points(), style))?;
        }

        Self::draw_legend(&root, chart)?;
        root.present()?;
        log::info!("Overlay chart saved as '{}'", path.display());
        Ok(())
    }

    /// Render the feature grid to a PNG file.
    pub fn render_grid_png(chart: &GridChart, path: &Path) -> Result<(), RenderError> {
        let root = BitMapBackend::new(path, GRID_SIZE).into_drawing_area();
        root.fill(&WHITE)?;

        let center_x = (GRID_SIZE.0 / 2) as i32;
        root.draw(&Text::new(
            chart.title.clone(),
            (center_x, 10),
            ("sans-serif", FONT_SIZE_MAIN_TITLE)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Top)),
        ))?;
        root.draw(&Text::new(
            chart.subtitle.clone(),
            (center_x, 16 + FONT_SIZE_MAIN_TITLE as i32),
            ("sans-serif", FONT_SIZE_SUBTITLE)
                .into_font()
                .color(&BLACK)
                .pos(Pos::new(HPos::Center, VPos::Top)),
        ))?;

        let body = root.margin(GRID_TITLE_AREA, 5, 5, 5);
        let areas = body.split_evenly((chart.shape.rows, chart.shape.columns));
        for (panel, area) in chart.panels.iter().zip(areas.iter()) {
            Self::draw_panel(area, chart, panel)?;
        }

        root.present()?;
        log::info!("Feature grid saved as '{}'", path.display());
        Ok(())
    }

    /// Legend box in the upper right corner, entries filled row by row
    /// across `chart.legend_columns` columns.
    fn draw_legend(
        root: &DrawingArea<BitMapBackend<'_>, Shift>,
        chart: &OverlayChart,
    ) -> Result<(), RenderError> {
        let (shape, (x0, y0), (x1, y1)) = legend_rect(chart.series.len(), chart.legend_columns);
        root.draw(&Rectangle::new([(x0, y0), (x1, y1)], WHITE.mix(0.8).filled()))?;
        root.draw(&Rectangle::new([(x0, y0), (x1, y1)], BLACK.stroke_width(1)))?;

        for (i, series) in chart.series.iter().enumerate() {
            let (row, col) = shape.cell(i);
            let x = x0 + LEGEND_PADDING + col as i32 * LEGEND_CELL.0;
            let y = y0 + LEGEND_PADDING + row as i32 * LEGEND_CELL.1 + LEGEND_CELL.1 / 2;
            let color = to_rgb(ChartPlotter::series_color(i));

            root.draw(&PathElement::new(
                vec![(x, y), (x + 20, y)],
                color.mix(f64::from(chart.opacity)).stroke_width(2),
            ))?;
            root.draw(&Text::new(
                series.name.clone(),
                (x + 26, y),
                ("sans-serif", FONT_SIZE_LEGEND)
                    .into_font()
                    .color(&BLACK)
                    .pos(Pos::new(HPos::Left, VPos::Center)),
            ))?;
        }
        Ok(())
    }

    fn draw_panel(
        area: &DrawingArea<BitMapBackend<'_>, Shift>,
        chart: &GridChart,
        panel: &FeatureSeries,
    ) -> Result<(), RenderError> {
        let (y_min, y_max) = value_range([panel]);
        let mut ctx = ChartBuilder::on(area)
            .caption(&panel.name, ("sans-serif", FONT_SIZE_PANEL_TITLE))
            .margin(8)
            .x_label_area_size(35)
            .y_label_area_size(50)
            .build_cartesian_2d(0f64..x_extent([panel]), y_min..y_max)?;

        ctx.configure_mesh()
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .x_labels(5)
            .y_labels(5)
            .label_style(("sans-serif", FONT_SIZE_AXIS_LABEL))
            .draw()?;

        ctx.draw_series(LineSeries::new(
            panel.finite_points(),
            to_rgb(PANEL_COLOR).stroke_width(1),
        ))?;
        Ok(())
    }
}
