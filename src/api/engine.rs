use tracing::{debug, trace};

use crate::core::assembler::assemble_diagram;
use crate::core::config::DiagramConfig;
use crate::core::types::{Orientation, StationRow};
use crate::error::MetroResult;
use crate::render::{DiagramFrame, Renderer};

use super::ingest::{RawStationRow, station_rows};

/// Orchestration facade consumed by host applications.
///
/// The engine owns the station table and configuration and pushes assembled
/// frames through the injected renderer. Assembly itself stays pure, so
/// `build` can be called repeatedly with identical results.
pub struct DiagramEngine<R: Renderer> {
    renderer: R,
    config: DiagramConfig,
    rows: Vec<StationRow>,
}

impl<R: Renderer> DiagramEngine<R> {
    pub fn new(renderer: R, config: DiagramConfig) -> MetroResult<Self> {
        let config = config.validate()?;
        Ok(Self {
            renderer,
            config,
            rows: Vec::new(),
        })
    }

    /// Replaces the station table.
    pub fn set_rows(&mut self, rows: Vec<StationRow>) {
        debug!(rows = rows.len(), "set station rows");
        self.rows = rows;
    }

    /// Appends a single station row.
    pub fn append_row(&mut self, row: StationRow) {
        self.rows.push(row);
        trace!(rows = self.rows.len(), "appended station row");
    }

    /// Parses a raw table with the configured axis mode and replaces the
    /// station table on success.
    pub fn load_raw_rows(&mut self, raw: &[RawStationRow]) -> MetroResult<usize> {
        let rows = station_rows(raw, self.config.axis_mode)?;
        self.rows = rows;
        Ok(self.rows.len())
    }

    #[must_use]
    pub fn rows(&self) -> &[StationRow] {
        &self.rows
    }

    #[must_use]
    pub fn config(&self) -> DiagramConfig {
        self.config
    }

    pub fn set_config(&mut self, config: DiagramConfig) -> MetroResult<()> {
        self.config = config.validate()?;
        Ok(())
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        debug!(orientation = ?orientation, "set orientation");
        self.config.orientation = orientation;
    }

    pub fn set_show_timeline(&mut self, show_timeline: bool) {
        debug!(show_timeline, "set show timeline");
        self.config.show_timeline = show_timeline;
    }

    /// Assembles a frame from the current rows and configuration.
    pub fn build(&self) -> MetroResult<DiagramFrame> {
        assemble_diagram(&self.rows, &self.config)
    }

    /// Assembles and pushes the frame through the renderer.
    pub fn render(&mut self) -> MetroResult<()> {
        let frame = self.build()?;
        self.renderer.render(&frame)
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
