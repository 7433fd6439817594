use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::warn;

use crate::core::types::{MergeKey, OffsetKey, StationRow};
use crate::error::{MetroError, MetroResult};

/// Lateral displacements for stations shared by several lines.
///
/// Entries exist only for shared stations; lookups for everything else fall
/// back to zero. The table is built once per diagram and read-only afterward.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OffsetTable {
    entries: IndexMap<OffsetKey, f64>,
    shared_lines: IndexMap<MergeKey, usize>,
}

impl OffsetTable {
    /// Builds the table in a single pass over the rows.
    ///
    /// Distinct lines at one shared station are ordered by first appearance
    /// in the input and fan out symmetrically around the nominal lane at
    /// `slot * step - (count - 1) * step / 2`. A repeated (station, line)
    /// pair keeps its first-seen slot and is logged for visibility.
    pub fn resolve(rows: &[StationRow], step: f64) -> MetroResult<Self> {
        if !step.is_finite() || step <= 0.0 {
            return Err(MetroError::InvalidData(format!(
                "offset step must be finite and positive, got {step}"
            )));
        }

        let mut groups: IndexMap<MergeKey, SmallVec<[&str; 4]>> = IndexMap::new();
        for row in rows {
            if !row.sequence.is_finite() {
                return Err(MetroError::InvalidCoordinate(format!(
                    "station `{}` on line `{}` has a non-finite sequence value",
                    row.milestone_id, row.line_id
                )));
            }
            let lines = groups.entry(MergeKey::for_row(row)).or_default();
            if lines.contains(&row.line_id.as_str()) {
                warn!(
                    line = %row.line_id,
                    milestone = %row.milestone_id,
                    sequence = row.sequence,
                    "duplicate station row for line, keeping first-seen slot"
                );
            } else {
                lines.push(row.line_id.as_str());
            }
        }

        let mut entries = IndexMap::new();
        let mut shared_lines = IndexMap::new();
        for (key, lines) in groups {
            let count = lines.len();
            if count < 2 {
                continue;
            }
            shared_lines.insert(key.clone(), count);
            for (slot, line_id) in lines.iter().enumerate() {
                let offset = slot as f64 * step - (count - 1) as f64 * step / 2.0;
                entries.insert(
                    OffsetKey::new(key.sequence.into_inner(), &key.milestone_id, line_id),
                    offset,
                );
            }
        }

        Ok(Self {
            entries,
            shared_lines,
        })
    }

    /// Offset for one row's line at its station; zero when not shared.
    #[must_use]
    pub fn offset_for(&self, row: &StationRow) -> f64 {
        self.entries
            .get(&OffsetKey::for_row(row))
            .copied()
            .unwrap_or(0.0)
    }

    /// Number of distinct lines at the row's station, when at least two
    /// share it.
    #[must_use]
    pub fn shared_line_count(&self, row: &StationRow) -> Option<usize> {
        self.shared_lines.get(&MergeKey::for_row(row)).copied()
    }

    /// True when the row's station is shared by more than one line.
    #[must_use]
    pub fn is_shared(&self, row: &StationRow) -> bool {
        self.shared_line_count(row).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order: station groups by first appearance, lines
    /// by slot within each group.
    pub fn iter(&self) -> impl Iterator<Item = (&OffsetKey, f64)> {
        self.entries.iter().map(|(key, offset)| (key, *offset))
    }
}
