pub mod assembler;
pub mod config;
pub mod labels;
pub mod offsets;
pub mod path;
pub mod primitives;
pub mod transform;
pub mod types;

pub use assembler::assemble_diagram;
pub use config::{DiagramConfig, LayoutTuning};
pub use labels::{LabelBox, PlacedLabels};
pub use offsets::OffsetTable;
pub use path::project_link;
pub use primitives::{date_to_sequence_days, format_tick_label, sequence_to_date};
pub use transform::AxisTransform;
pub use types::{
    AxisMode, FontEmphasis, LabelSide, LineStyle, MergeKey, OffsetKey, Orientation, Point,
    StationAnchor, StationRow,
};
