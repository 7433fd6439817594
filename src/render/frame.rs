use serde::{Deserialize, Serialize};

use crate::error::{MetroError, MetroResult};
use crate::render::DrawPrimitive;

/// Screen-space extent of one assembled diagram, padding included.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameBounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl FrameBounds {
    pub fn validate(self) -> MetroResult<()> {
        let edges = [self.x_min, self.x_max, self.y_min, self.y_max];
        if edges.iter().any(|edge| !edge.is_finite()) {
            return Err(MetroError::InvalidCoordinate(
                "frame bounds must be finite".to_owned(),
            ));
        }
        if self.x_min > self.x_max || self.y_min > self.y_max {
            return Err(MetroError::InvalidData(format!(
                "frame bounds must be ordered: x [{}, {}], y [{}, {}]",
                self.x_min, self.x_max, self.y_min, self.y_max
            )));
        }
        Ok(())
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.x_max - self.x_min
    }

    #[must_use]
    pub fn height(self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Kind of element dropped during assembly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectedKind {
    Link,
    Marker,
    Label,
    AxisTick,
}

/// Per-element diagnostic for a primitive that could not be computed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RejectedElement {
    pub kind: RejectedKind,
    pub line_id: Option<String>,
    pub milestone_id: Option<String>,
    pub reason: String,
}

/// Backend-agnostic scene for one diagram build.
///
/// Primitive order is part of the contract: backends paint in list order to
/// reproduce the intended stacking. `rejected` enumerates elements whose
/// coordinates were invalid; they are absent from `primitives`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramFrame {
    pub bounds: FrameBounds,
    pub primitives: Vec<DrawPrimitive>,
    pub rejected: Vec<RejectedElement>,
}

impl DiagramFrame {
    pub fn validate(&self) -> MetroResult<()> {
        self.bounds.validate()?;
        for primitive in &self.primitives {
            primitive.validate()?;
        }
        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.primitives.is_empty()
    }
}
