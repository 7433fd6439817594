use serde::{Deserialize, Serialize};

use crate::core::types::{LabelSide, StationAnchor};
use crate::error::{MetroError, MetroResult};

/// Collision record for one placed label, in (sequence, lane) space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LabelBox {
    /// Station the label belongs to.
    pub anchor: StationAnchor,
    /// Final label position after collision avoidance.
    pub position: StationAnchor,
    /// Footprint half-extent along the time axis.
    pub half_width: f64,
    /// Footprint half-extent along the lane axis.
    pub half_height: f64,
}

/// Append-only label history with greedy collision avoidance.
///
/// Placement runs in (sequence, lane) space so results are identical under
/// either orientation. A candidate starts at its anchor displaced by the gap
/// toward the preferred side and is nudged further in that same direction,
/// one fixed step at a time, until it clears every previously placed box.
/// Earlier labels are never revisited, so placement is deterministic in
/// traversal order.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLabels {
    boxes: Vec<LabelBox>,
    half_width: f64,
    half_height: f64,
    nudge_step: f64,
}

impl PlacedLabels {
    /// Creates an empty history with the given separation half-extents and
    /// nudge step.
    pub fn new(time_separation: f64, lane_separation: f64, nudge_step: f64) -> MetroResult<Self> {
        let required = [
            (time_separation, "time separation"),
            (lane_separation, "lane separation"),
            (nudge_step, "nudge step"),
        ];
        for (value, name) in required {
            if !value.is_finite() || value <= 0.0 {
                return Err(MetroError::InvalidData(format!(
                    "label {name} must be finite and positive, got {value}"
                )));
            }
        }
        Ok(Self {
            boxes: Vec::new(),
            half_width: time_separation,
            half_height: lane_separation,
            nudge_step,
        })
    }

    /// Places one label and records it for all subsequent placements.
    pub fn place(
        &mut self,
        anchor: StationAnchor,
        side: LabelSide,
        gap: f64,
    ) -> MetroResult<StationAnchor> {
        if !anchor.is_finite() || !gap.is_finite() {
            return Err(MetroError::InvalidCoordinate(format!(
                "label anchor and gap must be finite: sequence={}, lane={}, gap={gap}",
                anchor.sequence, anchor.lane
            )));
        }

        let direction = side.direction();
        let mut lane = anchor.lane + direction * gap;
        while self.collides(anchor.sequence, lane) {
            lane += direction * self.nudge_step;
        }
        if !lane.is_finite() {
            return Err(MetroError::InvalidCoordinate(
                "label nudging left the finite range".to_owned(),
            ));
        }

        let position = StationAnchor::new(anchor.sequence, lane);
        self.boxes.push(LabelBox {
            anchor,
            position,
            half_width: self.half_width,
            half_height: self.half_height,
        });
        Ok(position)
    }

    fn collides(&self, sequence: f64, lane: f64) -> bool {
        self.boxes.iter().any(|placed| {
            (sequence - placed.position.sequence).abs() < placed.half_width
                && (lane - placed.position.lane).abs() < placed.half_height
        })
    }

    #[must_use]
    pub fn boxes(&self) -> &[LabelBox] {
        &self.boxes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }
}
