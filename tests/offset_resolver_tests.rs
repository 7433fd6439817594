use approx::assert_relative_eq;
use metromap_rs::MetroError;
use metromap_rs::core::{FontEmphasis, LabelSide, LineStyle, OffsetTable, StationRow};

fn row(line: &str, milestone: &str, sequence: f64, lane: f64) -> StationRow {
    StationRow {
        line_id: line.to_owned(),
        color: "#0057b8".to_owned(),
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

const STEP: f64 = 0.15;

#[test]
fn two_lines_fan_out_symmetrically() {
    let rows = vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("beta", "kickoff", 0.0, 1.0),
    ];
    let table = OffsetTable::resolve(&rows, STEP).expect("resolve");

    assert_relative_eq!(table.offset_for(&rows[0]), -0.075, epsilon = 1e-12);
    assert_relative_eq!(table.offset_for(&rows[1]), 0.075, epsilon = 1e-12);
}

#[test]
fn three_lines_keep_the_middle_slot_centered() {
    let rows = vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("beta", "kickoff", 0.0, 1.0),
        row("gamma", "kickoff", 0.0, 2.0),
    ];
    let table = OffsetTable::resolve(&rows, STEP).expect("resolve");

    assert_relative_eq!(table.offset_for(&rows[0]), -0.15, epsilon = 1e-12);
    assert_relative_eq!(table.offset_for(&rows[1]), 0.0, epsilon = 1e-12);
    assert_relative_eq!(table.offset_for(&rows[2]), 0.15, epsilon = 1e-12);
}

#[test]
fn offsets_sum_to_zero_per_shared_station() {
    let rows = vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("beta", "kickoff", 0.0, 1.0),
        row("gamma", "kickoff", 0.0, 2.0),
        row("delta", "kickoff", 0.0, 3.0),
    ];
    let table = OffsetTable::resolve(&rows, STEP).expect("resolve");

    let sum: f64 = rows.iter().map(|r| table.offset_for(r)).sum();
    assert!(sum.abs() <= 1e-9);
}

#[test]
fn unshared_stations_have_no_entry_and_zero_offset() {
    let rows = vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("alpha", "review", 5.0, 0.0),
    ];
    let table = OffsetTable::resolve(&rows, STEP).expect("resolve");

    assert!(table.is_empty());
    assert_eq!(table.offset_for(&rows[0]), 0.0);
    assert_eq!(table.offset_for(&rows[1]), 0.0);
    assert!(!table.is_shared(&rows[0]));
}

#[test]
fn same_milestone_id_at_different_times_is_not_shared() {
    let rows = vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("beta", "kickoff", 3.0, 1.0),
    ];
    let table = OffsetTable::resolve(&rows, STEP).expect("resolve");
    assert!(table.is_empty());
}

#[test]
fn slots_follow_first_appearance_not_name_order() {
    let rows = vec![
        row("zulu", "kickoff", 0.0, 0.0),
        row("alpha", "kickoff", 0.0, 1.0),
    ];
    let table = OffsetTable::resolve(&rows, STEP).expect("resolve");

    assert_relative_eq!(table.offset_for(&rows[0]), -0.075, epsilon = 1e-12);
    assert_relative_eq!(table.offset_for(&rows[1]), 0.075, epsilon = 1e-12);
}

#[test]
fn unrelated_rows_do_not_disturb_slots() {
    let base = vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("beta", "kickoff", 0.0, 1.0),
    ];
    let padded = vec![
        base[0].clone(),
        row("alpha", "review", 7.0, 0.0),
        base[1].clone(),
        row("beta", "handover", 9.0, 1.0),
    ];

    let lean = OffsetTable::resolve(&base, STEP).expect("lean resolve");
    let padded_table = OffsetTable::resolve(&padded, STEP).expect("padded resolve");

    assert_eq!(lean.offset_for(&base[0]), padded_table.offset_for(&base[0]));
    assert_eq!(lean.offset_for(&base[1]), padded_table.offset_for(&base[1]));
}

#[test]
fn duplicate_line_rows_keep_first_seen_slot() {
    let rows = vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("beta", "kickoff", 0.0, 1.0),
        row("alpha", "kickoff", 0.0, 0.0),
    ];
    let table = OffsetTable::resolve(&rows, STEP).expect("resolve");

    assert_eq!(table.shared_line_count(&rows[0]), Some(2));
    assert_relative_eq!(table.offset_for(&rows[0]), -0.075, epsilon = 1e-12);
    assert_relative_eq!(table.offset_for(&rows[2]), -0.075, epsilon = 1e-12);
}

#[test]
fn shared_line_count_reports_group_size() {
    let rows = vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("beta", "kickoff", 0.0, 1.0),
        row("gamma", "kickoff", 0.0, 2.0),
    ];
    let table = OffsetTable::resolve(&rows, STEP).expect("resolve");

    assert_eq!(table.shared_line_count(&rows[1]), Some(3));
    assert!(table.is_shared(&rows[2]));
    assert_eq!(table.len(), 3);
}

#[test]
fn non_finite_sequence_is_rejected() {
    let rows = vec![row("alpha", "kickoff", f64::NAN, 0.0)];
    let result = OffsetTable::resolve(&rows, STEP);
    assert!(matches!(result, Err(MetroError::InvalidCoordinate(_))));
}

#[test]
fn invalid_step_is_rejected() {
    let rows = vec![row("alpha", "kickoff", 0.0, 0.0)];
    assert!(OffsetTable::resolve(&rows, 0.0).is_err());
    assert!(OffsetTable::resolve(&rows, f64::NAN).is_err());
    assert!(OffsetTable::resolve(&rows, -0.1).is_err());
}

#[test]
fn iter_yields_entries_in_slot_order() {
    let rows = vec![
        row("alpha", "kickoff", 0.0, 0.0),
        row("beta", "kickoff", 0.0, 1.0),
    ];
    let table = OffsetTable::resolve(&rows, STEP).expect("resolve");

    let lines: Vec<&str> = table.iter().map(|(key, _)| key.line_id.as_str()).collect();
    assert_eq!(lines, vec!["alpha", "beta"]);
}
