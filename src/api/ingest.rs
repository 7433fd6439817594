use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::primitives::date_to_sequence_days;
use crate::core::types::{AxisMode, FontEmphasis, LabelSide, LineStyle, StationRow};
use crate::error::{MetroError, MetroResult};

/// One row as a data-entry table supplies it, before parsing.
///
/// Styling columns are free-form text so a host can hand over grid content
/// untouched; they resolve to the closed enums during [`station_rows`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawStationRow {
    pub line: String,
    pub color: String,
    pub milestone: String,
    /// `YYYY-MM-DD` in date mode, a plain number in numeric mode.
    pub position: String,
    pub lane: f64,
    pub label: String,
    #[serde(default = "default_line_style")]
    pub line_style: String,
    #[serde(default = "default_label_side")]
    pub label_side: String,
    #[serde(default = "default_font_size")]
    pub font_size: f64,
    #[serde(default = "default_font_emphasis")]
    pub font_emphasis: String,
    #[serde(default = "default_label_gap")]
    pub label_gap: f64,
}

fn default_line_style() -> String {
    "solid".to_owned()
}

fn default_label_side() -> String {
    "after".to_owned()
}

fn default_font_size() -> f64 {
    9.0
}

fn default_font_emphasis() -> String {
    "normal".to_owned()
}

fn default_label_gap() -> f64 {
    0.35
}

/// Parses and validates a raw table into typed station rows.
///
/// Time parsing is fail-fast: the first unparsable position aborts the whole
/// build before any layout work, carrying the offending row index. Styling
/// columns resolve leniently with a warning so a typo degrades one cell, not
/// the diagram.
pub fn station_rows(raw: &[RawStationRow], mode: AxisMode) -> MetroResult<Vec<StationRow>> {
    let mut rows = Vec::with_capacity(raw.len());
    for (row_index, input) in raw.iter().enumerate() {
        let sequence = parse_position(&input.position, mode, row_index)?;
        let row = StationRow {
            line_id: input.line.clone(),
            color: input.color.clone(),
            line_style: resolve_line_style(&input.line_style, row_index),
            milestone_id: input.milestone.clone(),
            sequence,
            lane: input.lane,
            label: input.label.clone(),
            label_side: resolve_label_side(&input.label_side, row_index),
            font_size: input.font_size,
            font_emphasis: FontEmphasis::from_lenient(&input.font_emphasis),
            label_gap: input.label_gap,
        };
        row.validate()?;
        rows.push(row);
    }
    debug!(rows = rows.len(), mode = ?mode, "parsed station rows");
    Ok(rows)
}

/// Parses a JSON array of raw rows and runs them through [`station_rows`].
pub fn station_rows_from_json(json: &str, mode: AxisMode) -> MetroResult<Vec<StationRow>> {
    let raw: Vec<RawStationRow> = serde_json::from_str(json).map_err(|err| {
        MetroError::InvalidData(format!("failed to parse station row json: {err}"))
    })?;
    station_rows(&raw, mode)
}

fn parse_position(value: &str, mode: AxisMode, row_index: usize) -> MetroResult<f64> {
    let trimmed = value.trim();
    let parsed = match mode {
        AxisMode::Date => NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
            .ok()
            .map(date_to_sequence_days),
        AxisMode::Numeric => trimmed.parse::<f64>().ok().filter(|v| v.is_finite()),
    };
    parsed.ok_or_else(|| MetroError::MalformedTimeValue {
        row_index,
        value: value.to_owned(),
    })
}

fn resolve_line_style(value: &str, row_index: usize) -> LineStyle {
    LineStyle::from_str(value.trim()).unwrap_or_else(|_| {
        warn!(row_index, value, "unknown line style, falling back to solid");
        LineStyle::Solid
    })
}

fn resolve_label_side(value: &str, row_index: usize) -> LabelSide {
    match value.trim().to_ascii_lowercase().as_str() {
        "after" | "above" | "right" => LabelSide::After,
        "before" | "below" | "left" => LabelSide::Before,
        other => {
            warn!(
                row_index,
                value = other,
                "unknown label side, falling back to after"
            );
            LabelSide::After
        }
    }
}
