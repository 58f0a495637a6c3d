//! Command-line configuration and the run sequence shared by both tools.

use crate::charts::{ChartRenderer, GridChart, OverlayChart};
use crate::data::schema::FEATURE_COLUMNS;
use crate::data::{FeatureNormalizer, LoaderError, SampleTable};
use crate::gui::{ChartView, ChartWindow};
use anyhow::{Context, Result};
use clap::{Args, Parser};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Prompt printed when no path is given on the command line.
pub const PROMPT: &str = "Podaj ścieżkę do pliku CSV: ";
/// Message printed when the path does not name an existing file.
pub const MISSING_FILE_MESSAGE: &str = "Błąd: Plik nie istnieje.";

/// Options shared by both tools.
#[derive(Args, Debug, Clone, Default)]
pub struct CommonArgs {
    /// CSV file with recorded samples. Asked for interactively when omitted.
    pub csv_path: Option<PathBuf>,

    /// Choose the CSV file in a file dialog instead of typing the path.
    #[arg(long, default_value_t = false)]
    pub pick: bool,

    /// Also render the chart to this PNG file.
    #[arg(long)]
    pub save: Option<PathBuf>,

    /// Do not open the interactive chart window.
    #[arg(long, default_value_t = false)]
    pub no_window: bool,

    /// Log level: error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

/// Overlay of all z-score normalized motion features on one chart.
#[derive(Parser, Debug)]
#[command(name = "motion-overlay", version, about, long_about = None)]
pub struct OverlayCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

/// Grid of raw motion features, one subplot per feature.
#[derive(Parser, Debug)]
#[command(name = "motion-grid", version, about, long_about = None)]
pub struct GridCli {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Overlay,
    Grid,
}

/// How a run ended, when it did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Completed,
    MissingFile,
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Completed => ExitCode::SUCCESS,
            Outcome::MissingFile => ExitCode::from(1),
        }
    }
}

impl CommonArgs {
    pub fn init_logging(&self) {
        env_logger::Builder::new()
            .filter_level(self.log_level.parse().unwrap_or(log::LevelFilter::Warn))
            .init();
    }

    /// Path from the command line, the file dialog, or the stdin prompt, in that order.
    pub fn resolve_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.csv_path {
            return Ok(path.clone());
        }
        if self.pick {
            return rfd::FileDialog::new()
                .add_filter("CSV Files", &["csv"])
                .pick_file()
                .context("No CSV file selected");
        }
        read_path(io::stdin().lock(), io::stdout().lock()).context("Failed to read the CSV path")
    }
}

/// Print the prompt and read one trimmed line as a path.
pub fn read_path<R: BufRead, W: Write>(mut input: R, mut output: W) -> io::Result<PathBuf> {
    write!(output, "{PROMPT}")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PathBuf::from(line.trim()))
}

/// Build the chart a tool shows for a loaded table.
pub fn build_view(tool: Tool, raw: &SampleTable) -> Result<ChartView> {
    let view = match tool {
        Tool::Overlay => {
            let normalized = FeatureNormalizer::normalize(raw, &FEATURE_COLUMNS)
                .context("Failed to normalize features")?;
            ChartView::Overlay(OverlayChart::from_table(&normalized, &FEATURE_COLUMNS)?)
        }
        Tool::Grid => {
            ChartView::Grid(GridChart::from_table(raw, &FEATURE_COLUMNS, &raw.source_name())?)
        }
    };
    Ok(view)
}

fn save_png(view: &ChartView, path: &Path) -> Result<()> {
    match view {
        ChartView::Overlay(chart) => ChartRenderer::render_overlay_png(chart, path),
        ChartView::Grid(chart) => ChartRenderer::render_grid_png(chart, path),
    }
    .with_context(|| format!("Failed to save {}", path.display()))
}

/// Load, build the chart, optionally save it, then show it until closed.
pub fn run(tool: Tool, args: &CommonArgs) -> Result<Outcome> {
    let path = args.resolve_path()?;

    let raw = match SampleTable::load(&path) {
        Ok(table) => table,
        Err(LoaderError::NotFound(missing)) => {
            log::debug!("Not a file: {}", missing.display());
            println!("{MISSING_FILE_MESSAGE}");
            return Ok(Outcome::MissingFile);
        }
        Err(e) => return Err(e).with_context(|| format!("Failed to load {}", path.display())),
    };

    let view = build_view(tool, &raw)?;

    if let Some(png) = &args.save {
        save_png(&view, png)?;
    }
    if !args.no_window {
        ChartWindow::show_blocking(view)?;
    }
    Ok(Outcome::Completed)
}
