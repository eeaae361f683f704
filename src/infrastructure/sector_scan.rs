use crate::domain::graph::BuildingGraph;
use crate::domain::model::{InspectionSkip, InspectionSkipReason, Sector, SectorScan};
use crate::domain::traits::SectorCounter;
use crate::domain::visited::VisitedSet;
use std::collections::VecDeque;

/// Floods each sector with a FIFO queue.
pub struct BreadthFirstSectorCounter;

/// Floods each sector with a LIFO stack. Component membership does not depend on visit
/// order, so this yields the same counts as [`BreadthFirstSectorCounter`].
pub struct DepthFirstSectorCounter;

impl SectorCounter for BreadthFirstSectorCounter {
    fn scan_sectors(&self, graph: &BuildingGraph, inspection: &[i64]) -> SectorScan {
        scan::<VecDeque<usize>>(graph, inspection)
    }
}

impl SectorCounter for DepthFirstSectorCounter {
    fn scan_sectors(&self, graph: &BuildingGraph, inspection: &[i64]) -> SectorScan {
        scan::<Vec<usize>>(graph, inspection)
    }
}

/// Number of sectors touched by `inspection`, using breadth-first traversal.
pub fn count_sectors(graph: &BuildingGraph, inspection: &[i64]) -> usize {
    BreadthFirstSectorCounter.count_sectors(graph, inspection)
}

trait Frontier: Default {
    fn enqueue(&mut self, slot: usize);
    fn dequeue(&mut self) -> Option<usize>;
}

impl Frontier for VecDeque<usize> {
    fn enqueue(&mut self, slot: usize) {
        self.push_back(slot);
    }

    fn dequeue(&mut self) -> Option<usize> {
        self.pop_front()
    }
}

impl Frontier for Vec<usize> {
    fn enqueue(&mut self, slot: usize) {
        self.push(slot);
    }

    fn dequeue(&mut self) -> Option<usize> {
        self.pop()
    }
}

fn scan<F: Frontier>(graph: &BuildingGraph, inspection: &[i64]) -> SectorScan {
    let mut visited = VisitedSet::new(graph.node_count());
    let mut out = SectorScan::default();

    for &id in inspection {
        let Some(start) = graph.slot(id) else {
            out.skipped.push(InspectionSkip {
                id,
                reason: InspectionSkipReason::OutOfRange,
            });
            continue;
        };

        if !visited.mark(start) {
            out.skipped.push(InspectionSkip {
                id,
                reason: InspectionSkipReason::AlreadyVisited,
            });
            continue;
        }

        let size = flood::<F>(graph, start, &mut visited);
        out.sectors.push(Sector { start, size });
    }

    out
}

/// Visits everything reachable from `start`, which the caller has already marked.
/// Returns the number of slots newly covered, `start` included.
fn flood<F: Frontier>(graph: &BuildingGraph, start: usize, visited: &mut VisitedSet) -> usize {
    let mut frontier = F::default();
    frontier.enqueue(start);
    let mut size = 1;

    while let Some(u) = frontier.dequeue() {
        for &v in graph.neighbors(u) {
            // Enqueue on first mark only; later re-encounters are no-ops.
            if visited.mark(v) {
                size += 1;
                frontier.enqueue(v);
            }
        }
    }

    size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> BuildingGraph {
        // {1, 2} and {3, 4}
        let mut g = BuildingGraph::new(10);
        g.add_edge(1, 2);
        g.add_edge(2, 1);
        g.add_edge(3, 4);
        g
    }

    #[test]
    fn scan_records_sector_start_and_size() {
        let scan = BreadthFirstSectorCounter.scan_sectors(&sample_graph(), &[1, 4]);
        assert_eq!(
            scan.sectors,
            vec![Sector { start: 1, size: 2 }, Sector { start: 4, size: 2 }]
        );
        assert!(scan.skipped.is_empty());
        assert_eq!(scan.drives(), 1);
    }

    #[test]
    fn scan_records_skip_reasons_in_order() {
        let scan = BreadthFirstSectorCounter.scan_sectors(&sample_graph(), &[1, -1, 2, 11, 1]);
        assert_eq!(scan.sector_count(), 1);
        let reasons: Vec<_> = scan.skipped.iter().map(|s| (s.id, s.reason)).collect();
        assert_eq!(
            reasons,
            vec![
                (-1, InspectionSkipReason::OutOfRange),
                (2, InspectionSkipReason::AlreadyVisited),
                (11, InspectionSkipReason::OutOfRange),
                (1, InspectionSkipReason::AlreadyVisited),
            ]
        );
    }

    #[test]
    fn self_loop_does_not_inflate_sector_size() {
        let mut g = BuildingGraph::new(3);
        g.add_edge(2, 2);
        let scan = DepthFirstSectorCounter.scan_sectors(&g, &[2]);
        assert_eq!(scan.sectors, vec![Sector { start: 2, size: 1 }]);
    }

    #[test]
    fn count_sectors_uses_breadth_first_counter() {
        assert_eq!(count_sectors(&sample_graph(), &[1, 3, 5]), 3);
    }
}
