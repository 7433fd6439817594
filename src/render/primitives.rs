use serde::{Deserialize, Serialize};

use crate::core::types::{FontEmphasis, LineStyle, Point};
use crate::error::{MetroError, MetroResult};

/// Horizontal text alignment relative to the label point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextHAlign {
    Left,
    Center,
    Right,
}

/// Vertical text alignment relative to the label point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextVAlign {
    Top,
    Middle,
    Bottom,
}

/// Draw command for one straight line section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SegmentPrimitive {
    pub from: Point,
    pub to: Point,
    pub color: String,
    pub style: LineStyle,
}

impl SegmentPrimitive {
    pub fn validate(&self) -> MetroResult<()> {
        if !self.from.is_finite() || !self.to.is_finite() {
            return Err(MetroError::InvalidCoordinate(
                "segment coordinates must be finite".to_owned(),
            ));
        }
        if self.color.is_empty() {
            return Err(MetroError::InvalidData(
                "segment color must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one cubic lane-change curve.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurvePrimitive {
    pub from: Point,
    pub control1: Point,
    pub control2: Point,
    pub to: Point,
    pub color: String,
    pub style: LineStyle,
}

impl CurvePrimitive {
    pub fn validate(&self) -> MetroResult<()> {
        let points = [self.from, self.control1, self.control2, self.to];
        if points.iter().any(|point| !point.is_finite()) {
            return Err(MetroError::InvalidCoordinate(
                "curve coordinates must be finite".to_owned(),
            ));
        }
        if self.color.is_empty() {
            return Err(MetroError::InvalidData(
                "curve color must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one station marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarkerPrimitive {
    pub point: Point,
    /// True when several lines meet at this station. Backends typically draw
    /// a larger or differently shaped marker for it.
    pub merged: bool,
}

impl MarkerPrimitive {
    pub fn validate(self) -> MetroResult<()> {
        if !self.point.is_finite() {
            return Err(MetroError::InvalidCoordinate(
                "marker coordinates must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one station label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPrimitive {
    pub point: Point,
    pub text: String,
    pub font_size: f64,
    pub emphasis: FontEmphasis,
    pub h_align: TextHAlign,
    pub v_align: TextVAlign,
}

impl LabelPrimitive {
    pub fn validate(&self) -> MetroResult<()> {
        if self.text.is_empty() {
            return Err(MetroError::InvalidData(
                "label text must not be empty".to_owned(),
            ));
        }
        if !self.point.is_finite() {
            return Err(MetroError::InvalidCoordinate(
                "label coordinates must be finite".to_owned(),
            ));
        }
        if !self.font_size.is_finite() || self.font_size <= 0.0 {
            return Err(MetroError::InvalidData(
                "label font size must be finite and > 0".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Draw command for one axis tick caption.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTickPrimitive {
    pub point: Point,
    pub text: String,
}

impl AxisTickPrimitive {
    pub fn validate(&self) -> MetroResult<()> {
        if !self.point.is_finite() {
            return Err(MetroError::InvalidCoordinate(
                "axis tick coordinates must be finite".to_owned(),
            ));
        }
        if self.text.is_empty() {
            return Err(MetroError::InvalidData(
                "axis tick text must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Ordered output unit consumed by render and export backends.
///
/// A frame lists primitives in z-order: links first, then markers, then
/// labels, then axis ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawPrimitive {
    Segment(SegmentPrimitive),
    Curve(CurvePrimitive),
    Marker(MarkerPrimitive),
    Label(LabelPrimitive),
    AxisTick(AxisTickPrimitive),
}

impl DrawPrimitive {
    pub fn validate(&self) -> MetroResult<()> {
        match self {
            Self::Segment(primitive) => primitive.validate(),
            Self::Curve(primitive) => primitive.validate(),
            Self::Marker(primitive) => primitive.validate(),
            Self::Label(primitive) => primitive.validate(),
            Self::AxisTick(primitive) => primitive.validate(),
        }
    }
}
