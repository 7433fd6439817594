use crate::error::MetroResult;
use crate::render::{DiagramFrame, DrawPrimitive, Renderer};

/// No-op renderer used by tests and headless engine usage.
///
/// It still validates frame content so callers can catch invalid geometry
/// before a real backend is introduced.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub last_segment_count: usize,
    pub last_curve_count: usize,
    pub last_marker_count: usize,
    pub last_label_count: usize,
    pub last_tick_count: usize,
    pub last_rejected_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &DiagramFrame) -> MetroResult<()> {
        frame.validate()?;

        let mut segments = 0;
        let mut curves = 0;
        let mut markers = 0;
        let mut labels = 0;
        let mut ticks = 0;
        for primitive in &frame.primitives {
            match primitive {
                DrawPrimitive::Segment(_) => segments += 1,
                DrawPrimitive::Curve(_) => curves += 1,
                DrawPrimitive::Marker(_) => markers += 1,
                DrawPrimitive::Label(_) => labels += 1,
                DrawPrimitive::AxisTick(_) => ticks += 1,
            }
        }

        self.last_segment_count = segments;
        self.last_curve_count = curves;
        self.last_marker_count = markers;
        self.last_label_count = labels;
        self.last_tick_count = ticks;
        self.last_rejected_count = frame.rejected.len();
        Ok(())
    }
}
