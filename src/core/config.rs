use serde::{Deserialize, Serialize};

use crate::core::types::{AxisMode, Orientation};
use crate::error::{MetroError, MetroResult};

/// Tuning knobs for the layout passes.
///
/// Distances are expressed in diagram units: sequence units along the time
/// axis (days in date mode) and lanes across it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutTuning {
    /// Lane separation between adjacent parallel lines at a shared station.
    pub offset_step: f64,
    /// Label collision half-extent along the time axis.
    pub label_time_separation: f64,
    /// Label collision half-extent along the lane axis.
    pub label_lane_separation: f64,
    /// Distance a contested label is pushed per nudge.
    pub label_nudge_step: f64,
    /// Extra room before the first and after the last station on the time
    /// axis.
    pub time_padding: f64,
    /// Lower bound of the lane axis, leaving room for tick captions.
    pub lane_floor: f64,
    /// Headroom above the highest lane.
    pub lane_headroom: f64,
    /// Distance between consecutive axis ticks.
    pub tick_interval: f64,
    /// Lane at which tick captions are anchored.
    pub tick_label_lane: f64,
}

impl Default for LayoutTuning {
    fn default() -> Self {
        Self {
            offset_step: 0.15,
            label_time_separation: 0.4,
            label_lane_separation: 0.15,
            label_nudge_step: 0.15,
            time_padding: 2.0,
            lane_floor: -2.0,
            lane_headroom: 1.5,
            tick_interval: 3.0,
            tick_label_lane: -1.5,
        }
    }
}

impl LayoutTuning {
    pub fn validate(self) -> MetroResult<Self> {
        let positive = [
            (self.offset_step, "offset_step"),
            (self.label_time_separation, "label_time_separation"),
            (self.label_lane_separation, "label_lane_separation"),
            (self.label_nudge_step, "label_nudge_step"),
            (self.tick_interval, "tick_interval"),
        ];
        for (value, name) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(MetroError::InvalidData(format!(
                    "layout tuning `{name}` must be finite and positive, got {value}"
                )));
            }
        }
        let non_negative = [
            (self.time_padding, "time_padding"),
            (self.lane_headroom, "lane_headroom"),
        ];
        for (value, name) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(MetroError::InvalidData(format!(
                    "layout tuning `{name}` must be finite and non-negative, got {value}"
                )));
            }
        }
        let finite = [
            (self.lane_floor, "lane_floor"),
            (self.tick_label_lane, "tick_label_lane"),
        ];
        for (value, name) in finite {
            if !value.is_finite() {
                return Err(MetroError::InvalidData(format!(
                    "layout tuning `{name}` must be finite, got {value}"
                )));
            }
        }
        Ok(self)
    }
}

/// Build-wide configuration threaded through assembly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DiagramConfig {
    #[serde(default)]
    pub orientation: Orientation,
    #[serde(default)]
    pub axis_mode: AxisMode,
    /// Emits axis ticks when enabled. Off by default.
    #[serde(default)]
    pub show_timeline: bool,
    #[serde(default)]
    pub tuning: LayoutTuning,
}

impl Default for DiagramConfig {
    fn default() -> Self {
        Self::new(Orientation::Horizontal)
    }
}

impl DiagramConfig {
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self {
            orientation,
            axis_mode: AxisMode::default(),
            show_timeline: false,
            tuning: LayoutTuning::default(),
        }
    }

    #[must_use]
    pub fn with_axis_mode(mut self, axis_mode: AxisMode) -> Self {
        self.axis_mode = axis_mode;
        self
    }

    #[must_use]
    pub fn with_show_timeline(mut self, show_timeline: bool) -> Self {
        self.show_timeline = show_timeline;
        self
    }

    #[must_use]
    pub fn with_tuning(mut self, tuning: LayoutTuning) -> Self {
        self.tuning = tuning;
        self
    }

    pub fn validate(self) -> MetroResult<Self> {
        self.tuning.validate()?;
        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::{DiagramConfig, LayoutTuning};
    use crate::core::types::{AxisMode, Orientation};

    #[test]
    fn default_config_validates() {
        let config = DiagramConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.orientation, Orientation::Horizontal);
        assert_eq!(config.axis_mode, AxisMode::Date);
        assert!(!config.show_timeline);
    }

    #[test]
    fn builders_set_fields() {
        let config = DiagramConfig::new(Orientation::Vertical)
            .with_axis_mode(AxisMode::Numeric)
            .with_show_timeline(true);
        assert_eq!(config.orientation, Orientation::Vertical);
        assert_eq!(config.axis_mode, AxisMode::Numeric);
        assert!(config.show_timeline);
    }

    #[test]
    fn zero_offset_step_is_rejected() {
        let tuning = LayoutTuning {
            offset_step: 0.0,
            ..LayoutTuning::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn non_finite_lane_floor_is_rejected() {
        let tuning = LayoutTuning {
            lane_floor: f64::NAN,
            ..LayoutTuning::default()
        };
        assert!(tuning.validate().is_err());
    }

    #[test]
    fn negative_time_padding_is_rejected() {
        let tuning = LayoutTuning {
            time_padding: -1.0,
            ..LayoutTuning::default()
        };
        assert!(tuning.validate().is_err());
    }
}
