use serde::{Deserialize, Serialize};

use crate::core::types::{LabelSide, Orientation, Point};
use crate::error::{MetroError, MetroResult};
use crate::render::{TextHAlign, TextVAlign};

/// Projects (sequence, lane) pairs into screen space for one orientation.
///
/// Horizontal keeps time on the x axis; vertical swaps the axes. All layout
/// decisions happen in (sequence, lane) space, so the transform is the only
/// place orientation is consulted and flipping it never changes offsets,
/// label slots, or straight/curve decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisTransform {
    orientation: Orientation,
}

impl AxisTransform {
    #[must_use]
    pub const fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    #[must_use]
    pub const fn orientation(self) -> Orientation {
        self.orientation
    }

    /// Maps a sequence/lane pair to screen coordinates.
    pub fn to_screen(self, sequence: f64, lane: f64) -> MetroResult<Point> {
        if !sequence.is_finite() || !lane.is_finite() {
            return Err(MetroError::InvalidCoordinate(format!(
                "cannot project sequence={sequence}, lane={lane}"
            )));
        }
        Ok(match self.orientation {
            Orientation::Horizontal => Point::new(sequence, lane),
            Orientation::Vertical => Point::new(lane, sequence),
        })
    }

    /// Text alignment that anchors a label away from its station, on the
    /// side the label was displaced toward.
    #[must_use]
    pub fn label_alignment(self, side: LabelSide) -> (TextHAlign, TextVAlign) {
        match (self.orientation, side) {
            (Orientation::Horizontal, LabelSide::After) => (TextHAlign::Center, TextVAlign::Bottom),
            (Orientation::Horizontal, LabelSide::Before) => (TextHAlign::Center, TextVAlign::Top),
            (Orientation::Vertical, LabelSide::After) => (TextHAlign::Left, TextVAlign::Middle),
            (Orientation::Vertical, LabelSide::Before) => (TextHAlign::Right, TextVAlign::Middle),
        }
    }
}
