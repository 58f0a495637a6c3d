use motion_plots::charts::{GridChart, GridShape, OverlayChart};
use motion_plots::cli::{build_view, Tool};
use motion_plots::data::schema::{COLUMN_NAMES, FEATURE_COLUMNS};
use motion_plots::data::{FeatureNormalizer, LoaderError, SampleTable};
use motion_plots::gui::ChartView;
use std::fs;

const GRAB_CSV: &str = "\
1,\"grab\",0,0,0,0,0,0,0,0,0,0,0,0
2,\"grab\",1,1,1,1,1,1,1,1,1,1,1,1
3,\"grab\",2,2,2,2,2,2,2,2,2,2,2,2
";

#[test]
fn grab_session_normalizes_to_unit_steps() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("u1-grab-data.csv");
    fs::write(&path, GRAB_CSV).unwrap();

    let raw = SampleTable::load(&path).unwrap();
    assert_eq!(raw.height(), 3);
    assert_eq!(raw.column_names(), COLUMN_NAMES.to_vec());

    let normalized = FeatureNormalizer::normalize(&raw, &FEATURE_COLUMNS).unwrap();
    let overlay = OverlayChart::from_table(&normalized, &FEATURE_COLUMNS).unwrap();

    assert_eq!(overlay.series.len(), 12);
    for series in &overlay.series {
        assert_eq!(series.values.len(), 3);
        for (got, want) in series.values.iter().zip([-1.0, 0.0, 1.0]) {
            assert!((got - want).abs() < 1e-12, "{}: {got}", series.name);
        }
    }
    assert_eq!(normalized.text_values("label").unwrap(), vec!["grab"; 3]);
    assert_eq!(normalized.text_values("id").unwrap(), vec!["1", "2", "3"]);
}

#[test]
fn grid_keeps_raw_values_and_shape() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("u1-grab-data.csv");
    fs::write(&path, GRAB_CSV).unwrap();
    let raw = SampleTable::load(&path).unwrap();

    let grid = GridChart::from_table(&raw, &FEATURE_COLUMNS, &raw.source_name()).unwrap();

    assert_eq!(grid.shape, GridShape { rows: 4, columns: 3 });
    assert_eq!(grid.subtitle, "u1-grab-data.csv");
    for panel in &grid.panels {
        assert_eq!(panel.values, vec![0.0, 1.0, 2.0]);
    }
}

#[test]
fn long_recording_is_truncated_per_tool() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("long.csv");
    let rows: String = (0..2500)
        .map(|i| {
            let v = (i as f64 * 0.01).cos();
            format!("{i},walk{}\n", format!(",{v}").repeat(12))
        })
        .collect();
    fs::write(&path, rows).unwrap();
    let raw = SampleTable::load(&path).unwrap();

    match build_view(Tool::Overlay, &raw).unwrap() {
        ChartView::Overlay(chart) => assert!(chart.series.iter().all(|s| s.values.len() == 2000)),
        other => panic!("expected overlay, got {other:?}"),
    }
    match build_view(Tool::Grid, &raw).unwrap() {
        ChartView::Grid(chart) => assert!(chart.panels.iter().all(|s| s.values.len() == 1000)),
        other => panic!("expected grid, got {other:?}"),
    }
}

#[test]
fn missing_file_is_reported_before_parsing() {
    let dir = tempfile::tempdir().unwrap();
    let result = SampleTable::load(dir.path().join("missing.csv"));
    assert!(matches!(result, Err(LoaderError::NotFound(_))));
}
