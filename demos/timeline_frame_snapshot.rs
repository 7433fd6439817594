use metromap_rs::DiagramEngine;
use metromap_rs::api::RawStationRow;
use metromap_rs::core::{DiagramConfig, Orientation};
use metromap_rs::render::{DrawPrimitive, NullRenderer};

fn station(line: &str, color: &str, milestone: &str, date: &str, lane: f64) -> RawStationRow {
    RawStationRow {
        line: line.to_owned(),
        color: color.to_owned(),
        milestone: milestone.to_owned(),
        position: date.to_owned(),
        lane,
        label: milestone.to_owned(),
        line_style: "solid".to_owned(),
        label_side: "after".to_owned(),
        font_size: 9.0,
        font_emphasis: "normal".to_owned(),
        label_gap: 0.35,
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let renderer = NullRenderer::default();
    let config = DiagramConfig::new(Orientation::Horizontal).with_show_timeline(true);
    let mut engine = DiagramEngine::new(renderer, config)?;

    let rows = [
        station("platform", "#0057b8", "kickoff", "2025-09-01", 0.0),
        station("platform", "#0057b8", "api freeze", "2025-09-08", 0.0),
        station("platform", "#0057b8", "handover", "2025-09-18", 0.0),
        station("rollout", "#d62828", "kickoff", "2025-09-01", 0.0),
        station("rollout", "#d62828", "pilot wave", "2025-09-10", 1.0),
        station("rollout", "#d62828", "go-live", "2025-09-18", 1.0),
    ];
    engine.load_raw_rows(&rows)?;

    let frame = engine.build()?;

    let mut links = 0;
    let mut markers = 0;
    let mut labels = 0;
    let mut ticks = 0;
    for primitive in &frame.primitives {
        match primitive {
            DrawPrimitive::Segment(_) | DrawPrimitive::Curve(_) => links += 1,
            DrawPrimitive::Marker(_) => markers += 1,
            DrawPrimitive::Label(_) => labels += 1,
            DrawPrimitive::AxisTick(_) => ticks += 1,
        }
    }

    println!("frame primitives: links={links} markers={markers} labels={labels} ticks={ticks}");
    println!("rejected elements: {}", frame.rejected.len());
    println!(
        "bounds: x [{:.1}, {:.1}], y [{:.1}, {:.1}]",
        frame.bounds.x_min, frame.bounds.x_max, frame.bounds.y_min, frame.bounds.y_max
    );

    Ok(())
}
