use metromap_rs::api::{DiagramEngine, RawStationRow};
use metromap_rs::core::{
    AxisMode, DiagramConfig, FontEmphasis, LabelSide, LayoutTuning, LineStyle, Orientation,
    StationRow,
};
use metromap_rs::error::MetroError;
use metromap_rs::render::NullRenderer;

fn row(line: &str, milestone: &str, sequence: f64, lane: f64) -> StationRow {
    StationRow {
        line_id: line.to_owned(),
        color: "#2a9d8f".to_owned(),
        line_style: LineStyle::Solid,
        milestone_id: milestone.to_owned(),
        sequence,
        lane,
        label: format!("{milestone} label"),
        label_side: LabelSide::After,
        font_size: 9.0,
        font_emphasis: FontEmphasis::Normal,
        label_gap: 0.35,
    }
}

fn raw(line: &str, milestone: &str, position: &str, lane: f64) -> RawStationRow {
    RawStationRow {
        line: line.to_owned(),
        color: "#2a9d8f".to_owned(),
        milestone: milestone.to_owned(),
        position: position.to_owned(),
        lane,
        label: format!("{milestone} label"),
        line_style: "solid".to_owned(),
        label_side: "after".to_owned(),
        font_size: 9.0,
        font_emphasis: "normal".to_owned(),
        label_gap: 0.35,
    }
}

#[test]
fn engine_builds_and_renders_through_null_renderer() {
    let mut engine =
        DiagramEngine::new(NullRenderer::default(), DiagramConfig::default()).expect("engine");
    engine.set_rows(vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("alpha", "review", 6.0, 0.0),
        row("alpha", "handover", 12.0, 1.0),
    ]);

    engine.render().expect("render");

    let renderer = engine.into_renderer();
    assert_eq!(renderer.last_segment_count, 1);
    assert_eq!(renderer.last_curve_count, 1);
    assert_eq!(renderer.last_marker_count, 3);
    assert_eq!(renderer.last_label_count, 3);
    assert_eq!(renderer.last_tick_count, 0);
    assert_eq!(renderer.last_rejected_count, 0);
}

#[test]
fn build_returns_the_frame_without_rendering() {
    let mut engine =
        DiagramEngine::new(NullRenderer::default(), DiagramConfig::default()).expect("engine");
    engine.set_rows(vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("alpha", "review", 6.0, 0.0),
    ]);

    let frame = engine.build().expect("frame");
    assert!(!frame.is_empty());
    assert_eq!(frame.primitives.len(), 5);

    let mut blank = frame.clone();
    blank.primitives.clear();
    assert!(blank.is_empty());
}

#[test]
fn append_row_extends_the_table() {
    let mut engine =
        DiagramEngine::new(NullRenderer::default(), DiagramConfig::default()).expect("engine");
    engine.set_rows(vec![row("alpha", "kickoff", 0.0, 0.0)]);
    engine.append_row(row("alpha", "review", 6.0, 0.0));

    assert_eq!(engine.rows().len(), 2);
    assert_eq!(engine.rows()[1].milestone_id, "review");
}

#[test]
fn empty_table_fails_to_build() {
    let engine =
        DiagramEngine::new(NullRenderer::default(), DiagramConfig::default()).expect("engine");
    assert!(matches!(
        engine.build(),
        Err(MetroError::InvalidData(_))
    ));
}

#[test]
fn load_raw_rows_uses_the_configured_axis_mode() {
    let config = DiagramConfig::default().with_axis_mode(AxisMode::Numeric);
    let mut engine = DiagramEngine::new(NullRenderer::default(), config).expect("engine");

    let loaded = engine
        .load_raw_rows(&[
            raw("alpha", "kickoff", "0", 0.0),
            raw("alpha", "review", "6.5", 0.0),
        ])
        .expect("load");
    assert_eq!(loaded, 2);
    assert_eq!(engine.rows()[1].sequence, 6.5);
}

#[test]
fn load_raw_rows_propagates_malformed_positions() {
    let mut engine =
        DiagramEngine::new(NullRenderer::default(), DiagramConfig::default()).expect("engine");
    engine.set_rows(vec![row("alpha", "kickoff", 0.0, 0.0)]);

    let result = engine.load_raw_rows(&[
        raw("alpha", "kickoff", "2025-09-01", 0.0),
        raw("alpha", "review", "not-a-date", 0.0),
    ]);

    assert!(matches!(
        result,
        Err(MetroError::MalformedTimeValue { row_index: 1, .. })
    ));
    // A failed load leaves the previous table in place.
    assert_eq!(engine.rows().len(), 1);
}

#[test]
fn orientation_switch_affects_the_next_build() {
    let mut engine =
        DiagramEngine::new(NullRenderer::default(), DiagramConfig::default()).expect("engine");
    engine.set_rows(vec![
        row("alpha", "kickoff", 0.0, 1.0),
        row("alpha", "review", 6.0, 1.0),
    ]);

    let horizontal = engine.build().expect("horizontal");
    engine.set_orientation(Orientation::Vertical);
    let vertical = engine.build().expect("vertical");

    assert_eq!(horizontal.bounds.x_max, vertical.bounds.y_max);
    assert_eq!(horizontal.bounds.y_max, vertical.bounds.x_max);
}

#[test]
fn show_timeline_toggle_adds_ticks() {
    let mut engine =
        DiagramEngine::new(NullRenderer::default(), DiagramConfig::default()).expect("engine");
    engine.set_rows(vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("alpha", "review", 6.0, 0.0),
    ]);

    engine.render().expect("render without ticks");
    engine.set_show_timeline(true);
    engine.render().expect("render with ticks");

    let renderer = engine.into_renderer();
    assert!(renderer.last_tick_count > 0);
}

#[test]
fn invalid_tuning_is_rejected_at_construction() {
    let tuning = LayoutTuning {
        offset_step: -1.0,
        ..LayoutTuning::default()
    };
    let config = DiagramConfig::default().with_tuning(tuning);
    assert!(DiagramEngine::new(NullRenderer::default(), config).is_err());
}

#[test]
fn set_config_validates_before_applying() {
    let mut engine =
        DiagramEngine::new(NullRenderer::default(), DiagramConfig::default()).expect("engine");

    let bad_tuning = LayoutTuning {
        tick_interval: 0.0,
        ..LayoutTuning::default()
    };
    let result = engine.set_config(DiagramConfig::default().with_tuning(bad_tuning));
    assert!(result.is_err());

    // The previous configuration remains usable.
    assert!(engine.config().validate().is_ok());
}
