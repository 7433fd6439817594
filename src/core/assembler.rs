use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::core::config::DiagramConfig;
use crate::core::labels::PlacedLabels;
use crate::core::offsets::OffsetTable;
use crate::core::path::project_link;
use crate::core::primitives::format_tick_label;
use crate::core::transform::AxisTransform;
use crate::core::types::{StationAnchor, StationRow};
use crate::error::{MetroError, MetroResult};
use crate::render::{
    AxisTickPrimitive, DiagramFrame, DrawPrimitive, FrameBounds, LabelPrimitive, MarkerPrimitive,
    RejectedElement, RejectedKind,
};

/// Assembles the full ordered primitive list for one diagram build.
///
/// Traversal is canonical: lines by first appearance in the input, stations
/// sorted by sequence within each line. Primitives come out in three passes
/// (links, then markers, then labels) followed by optional axis ticks, so
/// list order doubles as z-order. An element whose coordinates come out
/// non-finite is skipped and reported in the frame's rejected list instead
/// of aborting the build.
pub fn assemble_diagram(rows: &[StationRow], config: &DiagramConfig) -> MetroResult<DiagramFrame> {
    let config = config.validate()?;
    if rows.is_empty() {
        return Err(MetroError::InvalidData(
            "diagram cannot be built from an empty row set".to_owned(),
        ));
    }

    let offsets = OffsetTable::resolve(rows, config.tuning.offset_step)?;
    let transform = AxisTransform::new(config.orientation);

    let mut lines: IndexMap<&str, Vec<&StationRow>> = IndexMap::new();
    for row in rows {
        lines.entry(row.line_id.as_str()).or_default().push(row);
    }
    for stations in lines.values_mut() {
        stations.sort_by(|a, b| a.sequence.total_cmp(&b.sequence));
    }

    let mut primitives = Vec::new();
    let mut rejected = Vec::new();

    for (&line_id, stations) in &lines {
        for pair in stations.windows(2) {
            let from_row = pair[0];
            let to_row = pair[1];
            let from = offset_anchor(from_row, &offsets);
            let to = offset_anchor(to_row, &offsets);
            match project_link(from, to, &from_row.color, from_row.line_style, transform) {
                Ok(link) => primitives.push(link),
                Err(err) => reject(
                    &mut rejected,
                    RejectedKind::Link,
                    Some(line_id),
                    Some(&from_row.milestone_id),
                    &err,
                ),
            }
        }
    }

    for stations in lines.values() {
        for &row in stations {
            let anchor = offset_anchor(row, &offsets);
            match transform.to_screen(anchor.sequence, anchor.lane) {
                Ok(point) => primitives.push(DrawPrimitive::Marker(MarkerPrimitive {
                    point,
                    merged: offsets.is_shared(row),
                })),
                Err(err) => reject(
                    &mut rejected,
                    RejectedKind::Marker,
                    Some(&row.line_id),
                    Some(&row.milestone_id),
                    &err,
                ),
            }
        }
    }

    let mut placed = PlacedLabels::new(
        config.tuning.label_time_separation,
        config.tuning.label_lane_separation,
        config.tuning.label_nudge_step,
    )?;
    for stations in lines.values() {
        for &row in stations {
            // Empty label text draws nothing and holds no collision slot.
            if row.label.is_empty() {
                continue;
            }
            let anchor = offset_anchor(row, &offsets);
            match place_row_label(row, anchor, &mut placed, transform) {
                Ok(label) => primitives.push(label),
                Err(err) => reject(
                    &mut rejected,
                    RejectedKind::Label,
                    Some(&row.line_id),
                    Some(&row.milestone_id),
                    &err,
                ),
            }
        }
    }

    if config.show_timeline {
        append_ticks(&mut primitives, &mut rejected, rows, &config, transform);
    }

    let bounds = frame_bounds(rows, &config, transform)?;

    debug!(
        rows = rows.len(),
        primitives = primitives.len(),
        rejected = rejected.len(),
        "assembled diagram frame"
    );

    Ok(DiagramFrame {
        bounds,
        primitives,
        rejected,
    })
}

fn offset_anchor(row: &StationRow, offsets: &OffsetTable) -> StationAnchor {
    let base = row.anchor();
    StationAnchor::new(base.sequence, base.lane + offsets.offset_for(row))
}

fn place_row_label(
    row: &StationRow,
    anchor: StationAnchor,
    placed: &mut PlacedLabels,
    transform: AxisTransform,
) -> MetroResult<DrawPrimitive> {
    let position = placed.place(anchor, row.label_side, row.label_gap)?;
    let point = transform.to_screen(position.sequence, position.lane)?;
    let (h_align, v_align) = transform.label_alignment(row.label_side);
    Ok(DrawPrimitive::Label(LabelPrimitive {
        point,
        text: row.label.clone(),
        font_size: row.font_size,
        emphasis: row.font_emphasis,
        h_align,
        v_align,
    }))
}

fn reject(
    rejected: &mut Vec<RejectedElement>,
    kind: RejectedKind,
    line_id: Option<&str>,
    milestone_id: Option<&str>,
    err: &MetroError,
) {
    warn!(
        kind = ?kind,
        line = line_id.unwrap_or("-"),
        milestone = milestone_id.unwrap_or("-"),
        error = %err,
        "skipping element with invalid coordinates"
    );
    rejected.push(RejectedElement {
        kind,
        line_id: line_id.map(str::to_owned),
        milestone_id: milestone_id.map(str::to_owned),
        reason: err.to_string(),
    });
}

fn sequence_range(rows: &[StationRow]) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for row in rows {
        min = min.min(row.sequence);
        max = max.max(row.sequence);
    }
    (min, max)
}

fn lane_ceiling(rows: &[StationRow]) -> f64 {
    let max = rows
        .iter()
        .map(|row| row.lane)
        .filter(|lane| lane.is_finite())
        .fold(f64::NEG_INFINITY, f64::max);
    if max.is_finite() { max } else { 0.0 }
}

fn frame_bounds(
    rows: &[StationRow],
    config: &DiagramConfig,
    transform: AxisTransform,
) -> MetroResult<FrameBounds> {
    let (seq_min, seq_max) = sequence_range(rows);
    let low = transform.to_screen(seq_min - config.tuning.time_padding, config.tuning.lane_floor)?;
    let high = transform.to_screen(
        seq_max + config.tuning.time_padding,
        lane_ceiling(rows) + config.tuning.lane_headroom,
    )?;
    Ok(FrameBounds {
        x_min: low.x.min(high.x),
        x_max: low.x.max(high.x),
        y_min: low.y.min(high.y),
        y_max: low.y.max(high.y),
    })
}

fn append_ticks(
    primitives: &mut Vec<DrawPrimitive>,
    rejected: &mut Vec<RejectedElement>,
    rows: &[StationRow],
    config: &DiagramConfig,
    transform: AxisTransform,
) {
    let (seq_min, seq_max) = sequence_range(rows);
    let start = seq_min - config.tuning.time_padding;
    let end = seq_max + config.tuning.time_padding;
    let interval = config.tuning.tick_interval;

    let mut index = 0usize;
    loop {
        let sequence = start + index as f64 * interval;
        if sequence > end + 1e-9 {
            break;
        }
        match transform.to_screen(sequence, config.tuning.tick_label_lane) {
            Ok(point) => primitives.push(DrawPrimitive::AxisTick(AxisTickPrimitive {
                point,
                text: format_tick_label(sequence, config.axis_mode),
            })),
            Err(err) => reject(rejected, RejectedKind::AxisTick, None, None, &err),
        }
        index += 1;
    }
}
