use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    pub records_parsed: usize,
    /// Record count announced by the header, negative counts read as zero.
    pub records_declared: usize,
    /// Neighbor IDs a record announced but the line did not carry.
    pub neighbors_missing: usize,
    pub lines_skipped: usize,
    pub edges_added: usize,
    pub edges_dropped: usize,
    pub inspections_out_of_range: usize,
    pub inspections_already_visited: usize,
    pub sectors: usize,
    pub drives: usize,
}
