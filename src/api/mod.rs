mod engine;
mod ingest;

#[cfg(feature = "parallel-build")]
mod batch;

pub use engine::DiagramEngine;
pub use ingest::{RawStationRow, station_rows, station_rows_from_json};

#[cfg(feature = "parallel-build")]
pub use batch::{BuildJob, build_batch};
