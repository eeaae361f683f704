use crate::domain::graph::BuildingGraph;
use crate::domain::model::SectorScan;

pub trait SectorCounter {
    /// Walks `inspection` in order and reports every sector it discovers.
    fn scan_sectors(&self, graph: &BuildingGraph, inspection: &[i64]) -> SectorScan;

    fn count_sectors(&self, graph: &BuildingGraph, inspection: &[i64]) -> usize {
        self.scan_sectors(graph, inspection).sector_count()
    }
}
