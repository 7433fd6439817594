use crate::core::transform::AxisTransform;
use crate::core::types::{LineStyle, StationAnchor};
use crate::error::{MetroError, MetroResult};
use crate::render::{CurvePrimitive, DrawPrimitive, SegmentPrimitive};

/// Connects two adjacent stations of one line with a drawable primitive.
///
/// Equal lanes produce a straight segment. A lane change produces a cubic
/// curve whose control points sit at the sequence midpoint while holding
/// each endpoint's lane, so the line leaves and arrives parallel to the time
/// axis. Styling belongs to the earlier station of the pair.
pub fn project_link(
    from: StationAnchor,
    to: StationAnchor,
    color: &str,
    style: LineStyle,
    transform: AxisTransform,
) -> MetroResult<DrawPrimitive> {
    if !from.is_finite() || !to.is_finite() {
        return Err(MetroError::InvalidCoordinate(format!(
            "link endpoints must be finite: ({}, {}) -> ({}, {})",
            from.sequence, from.lane, to.sequence, to.lane
        )));
    }

    let start = transform.to_screen(from.sequence, from.lane)?;
    let end = transform.to_screen(to.sequence, to.lane)?;

    if from.lane == to.lane {
        return Ok(DrawPrimitive::Segment(SegmentPrimitive {
            from: start,
            to: end,
            color: color.to_owned(),
            style,
        }));
    }

    let mid = (from.sequence + to.sequence) / 2.0;
    let control1 = transform.to_screen(mid, from.lane)?;
    let control2 = transform.to_screen(mid, to.lane)?;
    Ok(DrawPrimitive::Curve(CurvePrimitive {
        from: start,
        control1,
        control2,
        to: end,
        color: color.to_owned(),
        style,
    }))
}
