use std::fmt;
use std::str::FromStr;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{MetroError, MetroResult};

/// Screen-space point produced by the axis transform.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// Pre-projection station position: sequence along the time axis, lane
/// across it. The lane carries any shared-station offset by the time path
/// building and label placement see it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StationAnchor {
    pub sequence: f64,
    pub lane: f64,
}

impl StationAnchor {
    #[must_use]
    pub const fn new(sequence: f64, lane: f64) -> Self {
        Self { sequence, lane }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.sequence.is_finite() && self.lane.is_finite()
    }
}

/// Which screen axis carries time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Horizontal,
    Vertical,
}

/// How row positions are interpreted during ingestion and tick formatting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisMode {
    #[default]
    Date,
    Numeric,
}

/// Stroke pattern for line segments and curves.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineStyle {
    #[default]
    Solid,
    Dashed,
    Dotted,
}

impl FromStr for LineStyle {
    type Err = MetroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "solid" => Ok(Self::Solid),
            "dashed" => Ok(Self::Dashed),
            "dotted" => Ok(Self::Dotted),
            other => Err(MetroError::InvalidData(format!(
                "unknown line style `{other}`"
            ))),
        }
    }
}

impl fmt::Display for LineStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Solid => "solid",
            Self::Dashed => "dashed",
            Self::Dotted => "dotted",
        };
        f.write_str(name)
    }
}

/// Closed set of font style combinations, resolved once at ingestion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontEmphasis {
    #[default]
    Normal,
    Italic,
    Bold,
    ItalicBold,
}

impl FontEmphasis {
    /// Resolves free-form emphasis text: any value containing `italic`
    /// and/or `bold` maps to the matching combination, everything else is
    /// normal.
    #[must_use]
    pub fn from_lenient(value: &str) -> Self {
        match (value.contains("italic"), value.contains("bold")) {
            (true, true) => Self::ItalicBold,
            (true, false) => Self::Italic,
            (false, true) => Self::Bold,
            (false, false) => Self::Normal,
        }
    }

    #[must_use]
    pub fn is_italic(self) -> bool {
        matches!(self, Self::Italic | Self::ItalicBold)
    }

    #[must_use]
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Bold | Self::ItalicBold)
    }
}

/// Side of the station a label prefers, expressed on the lane axis.
///
/// `After` displaces toward increasing lane values (above in horizontal
/// orientation, right of the line in vertical); `Before` toward decreasing
/// values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelSide {
    Before,
    #[default]
    After,
}

impl LabelSide {
    /// Unit direction along the lane axis.
    #[must_use]
    pub fn direction(self) -> f64 {
        match self {
            Self::After => 1.0,
            Self::Before => -1.0,
        }
    }
}

/// One validated input row: a station on a named line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationRow {
    pub line_id: String,
    pub color: String,
    pub line_style: LineStyle,
    pub milestone_id: String,
    /// Normalized position along the time axis: days since the Unix epoch in
    /// date mode, the raw value in numeric mode.
    pub sequence: f64,
    pub lane: f64,
    pub label: String,
    pub label_side: LabelSide,
    pub font_size: f64,
    pub font_emphasis: FontEmphasis,
    pub label_gap: f64,
}

impl StationRow {
    pub fn validate(&self) -> MetroResult<()> {
        if self.line_id.is_empty() {
            return Err(MetroError::InvalidData(
                "station row line id must not be empty".to_owned(),
            ));
        }
        if self.milestone_id.is_empty() {
            return Err(MetroError::InvalidData(
                "station row milestone id must not be empty".to_owned(),
            ));
        }
        if !self.sequence.is_finite() || !self.lane.is_finite() {
            return Err(MetroError::InvalidData(format!(
                "station `{}` coordinates must be finite",
                self.milestone_id
            )));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(MetroError::InvalidData(format!(
                "station `{}` font size must be finite and positive",
                self.milestone_id
            )));
        }
        if !self.label_gap.is_finite() || self.label_gap < 0.0 {
            return Err(MetroError::InvalidData(format!(
                "station `{}` label gap must be finite and non-negative",
                self.milestone_id
            )));
        }
        Ok(())
    }

    /// Nominal anchor before shared-station offsets are applied.
    #[must_use]
    pub fn anchor(&self) -> StationAnchor {
        StationAnchor::new(self.sequence, self.lane)
    }
}

/// Identity of a physically shared station: equal sequence and milestone id.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MergeKey {
    pub sequence: OrderedFloat<f64>,
    pub milestone_id: String,
}

impl MergeKey {
    #[must_use]
    pub fn for_row(row: &StationRow) -> Self {
        Self {
            sequence: OrderedFloat(row.sequence),
            milestone_id: row.milestone_id.clone(),
        }
    }
}

/// Key of one offset entry: a shared station plus the contributing line.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OffsetKey {
    pub sequence: OrderedFloat<f64>,
    pub milestone_id: String,
    pub line_id: String,
}

impl OffsetKey {
    #[must_use]
    pub fn new(sequence: f64, milestone_id: &str, line_id: &str) -> Self {
        Self {
            sequence: OrderedFloat(sequence),
            milestone_id: milestone_id.to_owned(),
            line_id: line_id.to_owned(),
        }
    }

    #[must_use]
    pub fn for_row(row: &StationRow) -> Self {
        Self::new(row.sequence, &row.milestone_id, &row.line_id)
    }
}
