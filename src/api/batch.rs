use rayon::prelude::*;

use crate::core::assembler::assemble_diagram;
use crate::core::config::DiagramConfig;
use crate::core::types::StationRow;
use crate::error::MetroResult;
use crate::render::DiagramFrame;

/// One independent build request.
#[derive(Debug, Clone)]
pub struct BuildJob {
    pub rows: Vec<StationRow>,
    pub config: DiagramConfig,
}

/// Assembles independent diagrams in parallel, preserving job order.
///
/// Builds share no state, so hosts that re-render many row tables or
/// configuration variants at once can fan the work out safely.
pub fn build_batch(jobs: &[BuildJob]) -> Vec<MetroResult<DiagramFrame>> {
    jobs.par_iter()
        .map(|job| assemble_diagram(&job.rows, &job.config))
        .collect()
}
