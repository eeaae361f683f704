use serde::Serialize;

/// One non-blank building line: `id deg nb_1 .. nb_deg`.
///
/// `neighbors` holds only the neighbor tokens that were actually read, which may be fewer
/// than `declared_degree` on a short line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildingRecord {
    pub line: usize,
    pub id: i64,
    pub declared_degree: i64,
    pub neighbors: Vec<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineSkipReason {
    /// Empty or whitespace-only; does not use up a record slot.
    Blank,
    /// Fewer than two integer tokens; uses up a record slot but adds no edges.
    Malformed,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    pub line: usize,
    pub reason: LineSkipReason,
}

/// Everything the tolerant reader extracted from one input document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InspectionInput {
    pub declared_records: i64,
    pub inspection: Vec<i64>,
    pub records: Vec<BuildingRecord>,
    pub skipped_lines: Vec<SkippedLine>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InspectionSkipReason {
    OutOfRange,
    AlreadyVisited,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InspectionSkip {
    pub id: i64,
    pub reason: InspectionSkipReason,
}

/// A connected component reached from an inspection-list building.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sector {
    pub start: usize,
    pub size: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SectorScan {
    pub sectors: Vec<Sector>,
    pub skipped: Vec<InspectionSkip>,
}

impl SectorScan {
    pub fn sector_count(&self) -> usize {
        self.sectors.len()
    }

    pub fn drives(&self) -> usize {
        drives_for(self.sector_count())
    }
}

/// Drives needed to tour `sectors` sectors: one per transition between them.
pub fn drives_for(sectors: usize) -> usize {
    sectors.saturating_sub(1)
}
