//! Chart Window
//! Native window that shows one chart and returns once the user closes it.

use crate::gui::{ChartView, ChartViewer};
use thiserror::Error;

const APP_NAME: &str = "Motion Plots";

#[derive(Error, Debug)]
pub enum GuiError {
    #[error("Chart window failed: {0}")]
    Window(String),
}

/// Main application window.
pub struct ChartWindow {
    viewer: ChartViewer,
}

impl ChartWindow {
    pub fn new(_cc: &eframe::CreationContext<'_>, view: ChartView) -> Self {
        Self {
            viewer: ChartViewer::new(view),
        }
    }

    /// Open the window and block until it is closed.
    pub fn show_blocking(view: ChartView) -> Result<(), GuiError> {
        let [width, height] = view.window_size();
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([width, height])
                .with_min_inner_size([width / 2.0, height / 2.0])
                .with_title(view.title()),
            ..Default::default()
        };

        log::debug!("Opening chart window '{}'", view.title());
        eframe::run_native(
            APP_NAME,
            options,
            Box::new(move |cc| Ok(Box::new(ChartWindow::new(cc, view)))),
        )
        .map_err(|e| GuiError::Window(e.to_string()))
    }
}

impl eframe::App for ChartWindow {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            self.viewer.show(ui);
        });
    }
}
