mod frame;
mod null_renderer;
mod primitives;

pub use frame::{DiagramFrame, FrameBounds, RejectedElement, RejectedKind};
pub use null_renderer::NullRenderer;
pub use primitives::{
    AxisTickPrimitive, CurvePrimitive, DrawPrimitive, LabelPrimitive, MarkerPrimitive,
    SegmentPrimitive, TextHAlign, TextVAlign,
};

use crate::error::MetroResult;

/// Contract implemented by any rendering backend.
///
/// Backends receive a fully materialized, deterministic `DiagramFrame` so
/// drawing code remains isolated from layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &DiagramFrame) -> MetroResult<()>;
}
